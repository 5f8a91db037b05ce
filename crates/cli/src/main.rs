use arc_conformance_application::use_cases::SuiteRun;
use arc_conformance_domain::{CliOverrides, Operation, SuiteReport};
use arc_conformance_infrastructure::fixtures::YamlFixtureLoader;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod reporter;

use reporter::TextReporter;

#[derive(Parser)]
#[command(name = "arc-conformance")]
#[command(version)]
#[command(about = "ARC conformance harness - drives an ARC signer or verifier through its test suite")]
struct Cli {
    /// Operation to test (sign or verify)
    op: String,

    /// Candidate program implementing the operation
    script: PathBuf,

    /// Run only the test with this id
    #[arg(short = 't', long = "test", value_name = "TEST")]
    test: Option<String>,

    /// Port for the stub DNS server the candidate queries
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Print one line per test instead of progress dots
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Fixture file for the chosen operation
    #[arg(short = 'f', long, value_name = "FILE")]
    fixture: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            error!(error = %e, "Harness aborted");
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<SuiteReport> {
    let operation: Operation = cli.op.parse()?;

    let mut cli_overrides = CliOverrides {
        port: cli.port,
        log_level: cli.log_level.clone(),
        ..CliOverrides::default()
    };
    match operation {
        Operation::Sign => cli_overrides.sign_fixture = cli.fixture.clone(),
        Operation::Verify => cli_overrides.verify_fixture = cli.fixture.clone(),
    }

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!(
        operation = %operation,
        candidate = %cli.script.display(),
        port = config.harness.port,
        "Starting ARC conformance run v{}",
        env!("CARGO_PKG_VERSION")
    );

    let fixture = config.harness.fixture_for(operation);
    let cases = YamlFixtureLoader::load(Path::new(fixture), operation)?;

    let mut run = SuiteRun::new(&cli.script, config.harness.port);
    if let Some(test) = cli.test {
        run = run.with_test_filter(test);
    }

    let suite = di::suite_runner();
    let mut reporter = TextReporter::new(std::io::stdout(), cli.verbose);
    let started = Instant::now();

    let report = suite
        .execute(&cases, &run, |result| {
            if let Err(e) = reporter.case_finished(result) {
                warn!(error = %e, "Failed to write progress");
            }
        })
        .await?;

    reporter.summary(&report, started.elapsed())?;
    Ok(report)
}
