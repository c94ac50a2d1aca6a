use clap::{Parser, Subcommand};
use packgate::cli::{CliError, Report, check_package, validate_directory};
use packgate::settings::{ReportFormat, load_config};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = packgate::APP_NAME)]
#[command(version = packgate::VERSION)]
#[command(about = "Validate a mod package before publication", long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum, global = true)]
    format: Option<ReportFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract a package archive and validate its contents
    Check {
        /// Path to the .zip (or .tar.gz) package
        archive: PathBuf,

        /// Directory to extract into (overrides the config file)
        #[arg(long)]
        work_dir: Option<PathBuf>,
    },
    /// Validate an already extracted package directory
    Validate {
        /// Package root containing icon.png, README.md and manifest.json
        dir: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(Report, ReportFormat), CliError> {
    let config = load_config(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.format);

    let report = match cli.command {
        Commands::Check { archive, work_dir } => {
            let work_dir = work_dir.unwrap_or_else(|| config.work_dir());
            check_package(&archive, &work_dir)?
        }
        Commands::Validate { dir } => validate_directory(&dir)?,
    };

    Ok((report, format))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!("{} v{} starting", packgate::APP_NAME, packgate::VERSION);

    let result = run(cli).and_then(|(report, format)| {
        let rendered = report.render(format)?;
        Ok((report, rendered))
    });

    match result {
        Ok((report, rendered)) => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
            ExitCode::from(report.exit_code())
        }
        Err(e) => {
            eprintln!("[{}] {}", packgate::APP_NAME, e);
            ExitCode::from(CliError::EXIT_CODE)
        }
    }
}
