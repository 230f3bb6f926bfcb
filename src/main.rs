use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;
use wallet_factory::FactoryRegistry;
use wallet_factory::application::engine::WalletEngine;
use wallet_factory::interfaces::csv::request_reader::RequestReader;
use wallet_factory::interfaces::outcome_writer::{OutcomeWriter, OutputFormat};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input requests CSV file (`provider, action` columns)
    #[arg(required_unless_present_any = ["provider", "list"])]
    input: Option<PathBuf>,

    /// Run verify and refund through a single wallet provider (ignored when INPUT is given)
    #[arg(long, short, env = "WALLET_PROVIDER")]
    provider: Option<String>,

    /// List the registered wallet families and exit
    #[arg(long)]
    list: bool,

    /// Output format for outcomes
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log filter directive (e.g. `debug`, `wallet_factory=trace`)
    #[arg(long, env = "WALLET_LOG", default_value = "warn")]
    log_level: String,
}

fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).into_diagnostic()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let registry = FactoryRegistry::global();

    if cli.list {
        for family in registry.families() {
            println!("{family}");
        }
        return Ok(());
    }

    let engine = WalletEngine::new(registry);
    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock(), cli.format);

    if let Some(input) = cli.input {
        let file = File::open(input).into_diagnostic()?;
        let reader = RequestReader::new(file);
        for request in reader.requests() {
            match request {
                Ok(request) => match engine.process_request(request) {
                    Ok(outcome) => writer.write_outcome(&outcome).into_diagnostic()?,
                    Err(e) => error!("Error processing request: {}", e),
                },
                Err(e) => error!("Error reading request: {}", e),
            }
        }
    } else if let Some(provider) = cli.provider {
        let outcomes = engine.run(&provider).into_diagnostic()?;
        writer.write_outcomes(outcomes).into_diagnostic()?;
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
