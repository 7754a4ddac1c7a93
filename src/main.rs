use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use multistep::config::{paths::MultiStepPaths, settings::Settings};
use multistep::setup::format_summary;
use multistep::tui::keybindings::format_keybinding_table;
use multistep::tui::Outcome;
use multistep::wizard::LabelPosition;

#[derive(Parser)]
#[command(
    name = "multistep",
    author = "Kaylee Beyene",
    version,
    about = "Step-by-step wizard widget for terminal applications",
    long_about = "multistep renders a sequence of steps one at a time with step \
                  indicators and previous/next controls. Run without a subcommand \
                  to try the demo setup wizard."
)]
struct Cli {
    /// Log navigation details to the log file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo setup wizard
    #[command(alias = "tui")]
    Demo(DemoArgs),

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,

    /// List keyboard shortcuts
    Keys,
}

#[derive(Args, Default)]
struct DemoArgs {
    /// Settings file to use instead of the default one (JSON or YAML)
    #[arg(short, long, env = "MULTISTEP_CONFIG")]
    config: Option<PathBuf>,

    /// Hide the previous/next controls
    #[arg(long)]
    hide_navigation: bool,

    /// Where step labels sit relative to their number
    #[arg(short, long, value_enum)]
    label_position: Option<LabelPosition>,

    /// Disable jumping to a step through its indicator
    #[arg(long)]
    disable_navigation_click: bool,

    /// Use an empty style override (every slot unstyled)
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = MultiStepPaths::new()?;

    match cli.command {
        Some(Commands::Demo(args)) => run_demo(&paths, args, cli.verbose)?,
        None => run_demo(&paths, DemoArgs::default(), cli.verbose)?,
        Some(Commands::Init) => {
            let settings = Settings::load_or_create(&paths)?;
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            let settings = Settings::load_or_create(&paths)?;
            println!("multistep Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Show navigation:          {}", settings.wizard.show_navigation != Some(false));
            println!("  Label position:           {:?}", settings.wizard.label_position);
            println!("  Disable navigation click: {}", settings.wizard.disable_navigation_click);
            println!(
                "  Styles:                   {}",
                if settings.wizard.styles.is_some() { "custom" } else { "default theme" }
            );
            println!("  Tick rate:                {}ms", settings.tick_rate_ms);
        }
        Some(Commands::Keys) => {
            print!("{}", format_keybinding_table());
        }
    }

    Ok(())
}

fn run_demo(paths: &MultiStepPaths, args: DemoArgs, verbose: bool) -> Result<()> {
    multistep::logging::init_logging(paths, verbose)?;

    let settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load_or_create(paths)?,
    };

    // Command-line flags win over the settings file
    let mut options = settings.wizard.clone();
    if args.hide_navigation {
        options.show_navigation = Some(false);
    }
    if let Some(position) = args.label_position {
        options.label_position = position;
    }
    if args.disable_navigation_click {
        options.disable_navigation_click = true;
    }

    let (outcome, answers) = multistep::tui::run_tui(&settings, &options, args.plain)?;

    match outcome {
        Outcome::Completed => {
            println!("Setup complete!");
            println!();
            for line in format_summary(&answers) {
                println!("  {}", line);
            }
        }
        Outcome::Cancelled | Outcome::Running => {
            println!("Setup cancelled.");
        }
    }

    Ok(())
}
