//! Eco-mix entry point: CLI wiring and config-driven service construction.

mod cli;

use std::io::{self, Write};
use std::path::Path;
use std::process;

use eco_mix::config::ServiceConfig;
use eco_mix::evaluation::{self, Evaluation};
use eco_mix::io::export::{export_csv, write_csv};
use eco_mix::{Error, MixCalculator, Result};

use cli::Mode;

fn load_config(path: Option<&Path>, bind_override: Option<String>) -> Result<ServiceConfig> {
    let mut config = match path {
        Some(path) => ServiceConfig::from_toml_file(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = bind_override {
        config.server.bind = bind;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(Error::InvalidConfig(errors));
    }
    Ok(config)
}

fn print_profile(path: &Path, calculator: &MixCalculator) -> Result<()> {
    let profile = evaluation::load_profile(path)?;
    let eval = evaluation::evaluate(&profile, calculator);
    tracing::info!("\n{}\n{}", eval.recommendation, eval.subsidy);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &eval)?;
    writeln!(out)?;
    Ok(())
}

fn run_batch(input: &Path, out: Option<&Path>, calculator: &MixCalculator) -> Result<()> {
    let profiles = evaluation::load_profiles(input)?;
    let evaluations: Vec<Evaluation> = profiles
        .iter()
        .map(|p| evaluation::evaluate(p, calculator))
        .collect();

    match out {
        Some(path) => {
            export_csv(&evaluations, path)?;
            tracing::info!(
                count = evaluations.len(),
                "batch results written to {}",
                path.display()
            );
        }
        None => write_csv(&evaluations, io::stdout().lock())?,
    }
    Ok(())
}

#[cfg(feature = "api")]
fn serve(config: &ServiceConfig, calculator: MixCalculator) -> Result<()> {
    use std::sync::Arc;

    let addr = config.bind_addr()?;
    let state = Arc::new(eco_mix::api::AppState::new(calculator));
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(eco_mix::api::serve(state, addr))?;
    Ok(())
}

#[cfg(not(feature = "api"))]
fn serve(_config: &ServiceConfig, _calculator: MixCalculator) -> Result<()> {
    cli::print_usage();
    Err(Error::Io(io::Error::other(
        "built without the `api` feature; use --profile or --batch",
    )))
}

fn run(opts: cli::CliOptions) -> Result<()> {
    let config = load_config(opts.config.as_deref(), opts.bind)?;
    eco_mix::logging::init_tracing(&config.logging.filter)?;

    let calculator = MixCalculator::new(config.rates);
    tracing::debug!(rates = ?calculator.rates(), "calculator configured");

    match opts.mode {
        Mode::Serve => serve(&config, calculator),
        Mode::Profile(path) => print_profile(&path, &calculator),
        Mode::Batch { input, out } => run_batch(&input, out.as_deref(), &calculator),
    }
}

fn main() {
    let opts = match cli::parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(opts) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
