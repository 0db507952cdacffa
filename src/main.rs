use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docx2json::{ConversionConfig, ConvertError};

/// Convert Word documents into JSON content for the website
#[derive(Parser, Debug)]
#[command(name = "docx2json", version, about, long_about = None)]
struct Cli {
    /// Configuration file listing the documents to convert
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Convert a single document instead of the configured list
    #[arg(short, long, value_name = "DOCX", requires = "output")]
    input: Option<PathBuf>,

    /// Output file for --input
    #[arg(short, long, value_name = "JSON", requires = "input")]
    output: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = try_main(cli) {
        // Errors are reported, not signalled through the exit status
        match err.downcast_ref::<ConvertError>() {
            Some(convert_err @ ConvertError::MissingInput { .. }) => {
                println!("❌ Error: {convert_err}");
                println!("{}", convert_err.hint());
            }
            Some(convert_err) => {
                println!("❌ Error during conversion: {convert_err}");
                println!("{}", convert_err.hint());
            }
            None => {
                println!("❌ Error: {err:#}");
            }
        }
    }
}

fn try_main(cli: Cli) -> Result<()> {
    if cli.init_config {
        let path = ConversionConfig::init_default()?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = match (cli.input, cli.output) {
        (Some(input), Some(output)) => ConversionConfig::single(input, output),
        _ => ConversionConfig::load(cli.config.as_deref())?,
    };

    docx2json::run(&config)?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();
}
