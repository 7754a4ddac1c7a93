//! Derived navigation state
//!
//! Pure functions from (active index, step count, validity) to the state of
//! the indicator row and the bottom controls.

/// Display status of one indicator in the top row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The active step
    Doing,
    /// Any other step
    Todo,
}

/// State of the previous/next controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BottomNavState {
    /// Previous is disabled on the first step
    pub prev_disabled: bool,
    /// Next is disabled while the active step is invalid
    pub next_disabled: bool,
    /// Next is hidden on the last step
    pub hide_last: bool,
}

/// Build the indicator statuses, one per step
pub fn top_nav_statuses(active: usize, len: usize) -> Vec<StepStatus> {
    (0..len)
        .map(|i| {
            if i == active {
                StepStatus::Doing
            } else {
                StepStatus::Todo
            }
        })
        .collect()
}

/// Compute the bottom control state
pub fn bottom_nav_state(active: usize, len: usize, step_is_valid: bool) -> BottomNavState {
    BottomNavState {
        prev_disabled: active == 0,
        next_disabled: !step_is_valid,
        hide_last: active + 1 == len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_doing() {
        for len in 1..6 {
            for active in 0..len {
                let statuses = top_nav_statuses(active, len);
                assert_eq!(statuses.len(), len);
                let doing: Vec<_> = statuses
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| **s == StepStatus::Doing)
                    .map(|(i, _)| i)
                    .collect();
                assert_eq!(doing, vec![active]);
            }
        }
    }

    #[test]
    fn test_first_step() {
        let state = bottom_nav_state(0, 3, false);
        assert!(state.prev_disabled);
        assert!(state.next_disabled);
        assert!(!state.hide_last);
    }

    #[test]
    fn test_last_step_hides_next_regardless_of_validity() {
        assert!(bottom_nav_state(2, 3, true).hide_last);
        assert!(bottom_nav_state(2, 3, false).hide_last);
    }

    #[test]
    fn test_single_step_is_first_and_last() {
        let state = bottom_nav_state(0, 1, true);
        assert!(state.prev_disabled);
        assert!(!state.next_disabled);
        assert!(state.hide_last);
    }
}
