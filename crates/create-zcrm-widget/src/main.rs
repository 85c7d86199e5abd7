//! create-zcrm-widget - Project scaffolding for Zoho CRM widgets

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use widget_scaffolder::project::{DEFAULT_APP_NAME, DEFAULT_IMPORT_ALIAS};
use widget_scaffolder::tui::CreateArgs;
use widget_scaffolder::{Framework, Versioning};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "create-zcrm-widget")]
#[command(about = "A CLI for creating Zoho CRM widgets using React or Vue and Vite")]
#[command(version)]
pub struct Args {
    /// The name of the application, as well as the name of the directory to create
    #[arg(default_value = DEFAULT_APP_NAME)]
    pub dir: String,

    /// Framework for the widget
    #[arg(long, value_enum, default_value_t = Framework::React)]
    pub framework: Framework,

    /// Install Tailwind CSS for styling
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub tailwind: bool,

    /// Versioning workflow to add (GitHub only)
    #[arg(long, value_enum, default_value_t = Versioning::Basic)]
    pub versioning: Versioning,

    /// Import alias to use instead of `~/`
    #[arg(short = 'i', long = "import-alias", default_value = DEFAULT_IMPORT_ALIAS)]
    pub import_alias: String,

    /// Local template store to use instead of the bundled one (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.dir,
            framework: args.framework,
            tailwind: args.tailwind,
            versioning: args.versioning,
            import_alias: args.import_alias,
            template_dir: args.template_dir,
        }
    }
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .init();

    let result = widget_scaffolder::run(args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
