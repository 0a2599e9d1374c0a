use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use confuscan_core::{has_confusables, has_confusables_detailed, scan_files, ScanOptions};
use tracing::{debug, info};

mod expand;
mod report;

use report::{calculate_stats, format_minimal, format_stdin_findings, format_success,
    format_verbose};

/// Scan source text for Trojan Source attacks and confusable Unicode
/// characters.
#[derive(Parser, Debug)]
#[command(name = "confuscan", version, about = "Detect Trojan Source and confusable Unicode characters in source code")]
struct Cli {
    /// Explicit file paths to check (the way lint-staged passes them)
    paths: Vec<PathBuf>,

    /// Glob pattern(s) of files to check, e.g. --files='**/*.js'
    #[arg(short, long)]
    files: Vec<String>,

    /// Show detailed information about detected characters
    #[arg(short, long)]
    verbose: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    json: bool,

    /// Worker threads ("auto" = one per CPU)
    #[arg(long, default_value = "auto")]
    threads: String,

    /// Skip files larger than this many bytes
    #[arg(long)]
    max_file_size: Option<u64>,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    if cli.paths.is_empty() && cli.files.is_empty() {
        return run_stdin(&cli);
    }
    run_files(&cli)
}

fn run_files(cli: &Cli) -> Result<ExitCode> {
    let file_paths = if !cli.paths.is_empty() {
        cli.paths.clone()
    } else {
        expand::expand_globs(&cli.files, Path::new("."))?
    };
    debug!(count = file_paths.len(), "resolved input files");

    let detailed = cli.verbose || cli.json;
    let opts = ScanOptions {
        detailed,
        threads: parse_threads(&cli.threads),
        max_file_size: cli.max_file_size,
    };
    let results = scan_files(&file_paths, &opts);
    info!(
        files_scanned = file_paths.len(),
        files_flagged = results.len(),
        "scan finished"
    );

    if results.is_empty() {
        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "success": true,
                    "message": "No case of trojan source detected"
                })
            );
        } else {
            let stats = calculate_stats(&results, file_paths.len());
            println!("{}", format_success(&stats, cli.verbose));
        }
        return Ok(ExitCode::SUCCESS);
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).context("serialize results")?
        );
    } else {
        let stats = calculate_stats(&results, file_paths.len());
        let rendered = if cli.verbose {
            format_verbose(&results, &stats)
        } else {
            format_minimal(&results, &stats)
        };
        eprintln!("{rendered}");
    }
    Ok(ExitCode::FAILURE)
}

fn run_stdin(cli: &Cli) -> Result<ExitCode> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("read stdin")?;
    if text.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    if cli.verbose || cli.json {
        let findings = has_confusables_detailed(&text);
        if findings.is_empty() {
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": "No case of trojan source detected"
                    })
                );
            } else {
                println!("{}", format_success(&Default::default(), cli.verbose));
            }
            return Ok(ExitCode::SUCCESS);
        }
        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "findings": findings }))
                    .context("serialize findings")?
            );
        } else {
            eprintln!("{}", format_stdin_findings(&findings));
        }
        return Ok(ExitCode::FAILURE);
    }

    if has_confusables(&text) {
        eprintln!("[\x1b[31mx\x1b[0m] Detected cases of trojan source for input passed to STDIN");
        return Ok(ExitCode::FAILURE);
    }
    println!("[\x1b[32m✓\x1b[0m] No case of trojan source detected");
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // RUST_LOG controls verbosity; reports go to stdout/stderr regardless.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// "auto" (or anything unparsable) means one thread per CPU.
fn parse_threads(s: &str) -> Option<usize> {
    if s.eq_ignore_ascii_case("auto") {
        return None;
    }
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}
