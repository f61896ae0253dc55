use std::env;
use std::path::PathBuf;

/// What the process should do after parsing arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Run the HTTP API.
    Serve,
    /// Evaluate one JSON profile and print both results.
    Profile(PathBuf),
    /// Evaluate a JSON array of profiles, CSV to `out` or stdout.
    Batch { input: PathBuf, out: Option<PathBuf> },
}

#[derive(Debug)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub bind: Option<String>,
    pub mode: Mode,
}

pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(args)
}

fn parse_args_from(args: Vec<String>) -> Result<CliOptions, String> {
    if args.len() == 1 && (args[0] == "--help" || args[0] == "-h") {
        print_usage();
        std::process::exit(0);
    }
    parse_options(&args)
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut config = None;
    let mut bind = None;
    let mut profile = None;
    let mut batch = None;
    let mut out = None;

    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --config (expected a TOML file path)")?;
                if config.replace(PathBuf::from(path)).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--bind" => {
                i += 1;
                let addr = args.next_or_err(
                    i,
                    "missing value for --bind (expected an address such as 127.0.0.1:8000)",
                )?;
                if bind.replace(addr.to_string()).is_some() {
                    return Err("--bind provided more than once".to_string());
                }
            }
            "--profile" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --profile (expected a JSON file path)")?;
                if profile.replace(PathBuf::from(path)).is_some() {
                    return Err("--profile provided more than once".to_string());
                }
            }
            "--batch" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --batch (expected a JSON file path)")?;
                if batch.replace(PathBuf::from(path)).is_some() {
                    return Err("--batch provided more than once".to_string());
                }
            }
            "--out" => {
                i += 1;
                let path = args.next_or_err(i, "missing value for --out (expected a file path)")?;
                if out.replace(PathBuf::from(path)).is_some() {
                    return Err("--out provided more than once".to_string());
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    let mode = match (profile, batch) {
        (Some(_), Some(_)) => {
            return Err(
                "arguments `--profile` and `--batch` are mutually exclusive; choose one input"
                    .to_string(),
            );
        }
        (Some(path), None) => Mode::Profile(path),
        (None, Some(input)) => Mode::Batch {
            input,
            out: out.take(),
        },
        (None, None) => Mode::Serve,
    };

    if out.is_some() {
        return Err("`--out` requires `--batch`".to_string());
    }

    Ok(CliOptions { config, bind, mode })
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("eco-mix: renewable mix and subsidy eligibility calculator");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  eco-mix [--config <path>] [--bind <addr>]");
    eprintln!("  eco-mix [--config <path>] --profile <profile.json>");
    eprintln!("  eco-mix [--config <path>] --batch <profiles.json> [--out <file.csv>]");
    eprintln!();
    eprintln!("Without --profile or --batch the HTTP API is started.");
}
