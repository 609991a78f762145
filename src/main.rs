mod report;

use chrono::{Local, NaiveDate};
use std::io::{self, IsTerminal, Read};
use swedish_ssn::{Options, parse, scan_with};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let today = config.today.unwrap_or_else(|| Local::now().date_naive());
    let ok = match config.mode {
        Mode::Numbers(inputs) => {
            let mut all_valid = true;
            for input in &inputs {
                let result = parse(input);
                if let Err(err) = &result {
                    tracing::info!(input = input.as_str(), kind = err.kind_name(), "invalid identity number");
                    all_valid = false;
                }
                report::print_number(input, &result, today, config.color);
            }
            all_valid
        }
        Mode::Scan(text) => {
            let opts = Options { include_invalid: config.include_invalid };
            let res = scan_with(&text, &opts);
            report::print_scan(&res, today, config.color);
            res.results.iter().any(|ent| ent.is_valid())
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

enum Mode {
    Numbers(Vec<String>),
    Scan(String),
}

struct CliConfig {
    mode: Mode,
    today: Option<NaiveDate>,
    include_invalid: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut inputs: Vec<String> = Vec::new();
    let mut scan_text: Option<String> = None;
    let mut scan = false;
    let mut today: Option<NaiveDate> = None;
    let mut include_invalid = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("swedish-ssn {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--all" => include_invalid = true,
            "--scan" => {
                scan = true;
                if let Some(value) = args.next_if(|next| !next.starts_with("--")) {
                    scan_text = Some(value);
                }
            }
            "--today" => {
                let value = args.next().ok_or_else(|| "error: --today expects a value".to_string())?;
                today = Some(parse_today(&value)?);
            }
            "--" => {
                inputs.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--today=") => {
                let value = arg.trim_start_matches("--today=");
                today = Some(parse_today(value)?);
            }
            _ if arg.starts_with("--") => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => inputs.push(arg),
        }
    }

    let mode = if scan {
        if !inputs.is_empty() {
            return Err("error: --scan takes a single text argument; quote it".to_string());
        }
        let text = match scan_text {
            Some(text) => text,
            None => read_stdin_input()?,
        };
        if text.trim().is_empty() {
            return Err(format!("error: no input provided\n\n{}", help_text()));
        }
        Mode::Scan(text)
    } else {
        if inputs.is_empty() {
            inputs = read_stdin_input()?.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect();
        }
        if inputs.is_empty() {
            return Err(format!("error: no input provided\n\n{}", help_text()));
        }
        Mode::Numbers(inputs)
    };

    Ok(CliConfig { mode, today, include_invalid, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("error: invalid --today '{value}' (expected YYYY-MM-DD)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "swedish-ssn {version}

Decode Swedish personal identity numbers (YYMMDD-XXXX or YYMMDD+XXXX).

Usage:
  swedish-ssn [OPTIONS] [--] <number...>
  swedish-ssn [OPTIONS] --scan [<text>]

Numbers are read from the arguments, or one per line from stdin.

Options:
  --scan [<text>]            Find identity numbers in free text. Reads stdin
                             when no text is given.
  --all                      With --scan, also list spans that fail validation.
  --today <date>             Date used for age display, YYYY-MM-DD.
                             Default: the local date.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter for stderr diagnostics (default: warn).

Exit codes:
  0  Every number is valid (with --scan: at least one valid number found).
  1  Some number is invalid (with --scan: no valid number found).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
