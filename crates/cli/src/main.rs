//! `rosterdiff` — reconcile an internal maintainer roster against an
//! external OWNERS/MAINTAINERS file.

mod exit_codes;
mod roster;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use rosterdiff_fetch::{HttpFetcher, MAX_BODY_BYTES};
use rosterdiff_recon::{
    diff, harvest, normalize_reference_url, resolve_document, FetchStatus, ReconciliationResult,
    RosterEntry,
};

use exit_codes::{
    EXIT_CHECK_MISSING, EXIT_ERROR, EXIT_FETCH_FAILED, EXIT_NO_REFERENCE, EXIT_SUCCESS, EXIT_USAGE,
};

#[derive(Parser)]
#[command(name = "rosterdiff")]
#[command(about = "Maintainer roster reconciliation against external OWNERS/MAINTAINERS files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile a roster CSV against a reference file URL
    #[command(after_help = "\
Examples:
  rosterdiff check --roster roster.csv --url https://github.com/acme/widget/blob/main/OWNERS.md
  rosterdiff check --roster roster.csv --url https://example.com/MAINTAINERS --json
  rosterdiff check --roster roster.csv --url https://example.com/MAINTAINERS --output result.json")]
    Check {
        /// Roster CSV with `id` and `handle` columns
        #[arg(long)]
        roster: PathBuf,

        /// Reference file URL (GitHub blob URLs are normalized; empty
        /// means no reference file is configured)
        #[arg(long, default_value = "")]
        url: String,

        /// Fetch timeout in seconds
        #[arg(long, default_value_t = 5)]
        timeout: u64,

        /// Output JSON to stdout instead of the human listing
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Harvest candidate handles from a reference file
    #[command(after_help = "\
Examples:
  rosterdiff harvest --url https://github.com/acme/widget/blob/main/OWNERS.md
  rosterdiff harvest --file OWNERS.md")]
    Harvest {
        /// Reference file URL
        #[arg(long, conflicts_with = "file")]
        url: Option<String>,

        /// Local file instead of a URL
        #[arg(long)]
        file: Option<PathBuf>,

        /// Fetch timeout in seconds
        #[arg(long, default_value_t = 5)]
        timeout: u64,
    },

    /// Print the normalized raw-content URL for a reference file
    Normalize {
        /// URL to normalize
        url: String,
    },
}

/// Command failure: exit code + message + optional hint.
#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Check {
            roster,
            url,
            timeout,
            json,
            output,
        } => cmd_check(roster, url, timeout, json, output),
        Commands::Harvest { url, file, timeout } => cmd_harvest(url, file, timeout),
        Commands::Normalize { url } => cmd_normalize(&url),
    };

    match outcome {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {}", e.message);
            if let Some(hint) = e.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(e.code)
        }
    }
}

fn build_fetcher(timeout_secs: u64) -> Result<HttpFetcher, CliError> {
    HttpFetcher::with_limits(Duration::from_secs(timeout_secs), MAX_BODY_BYTES).map_err(|e| {
        CliError {
            code: EXIT_ERROR,
            message: format!("cannot build HTTP client: {e}"),
            hint: None,
        }
    })
}

fn cmd_check(
    roster_path: PathBuf,
    url: String,
    timeout: u64,
    json: bool,
    output: Option<PathBuf>,
) -> Result<u8, CliError> {
    let roster = roster::load_roster_file(&roster_path)?;
    let fetcher = build_fetcher(timeout)?;

    let (doc, cause) = resolve_document(&url, &fetcher);
    if let Some(ref cause) = cause {
        // The cause is collapsed to a bare status in the result; log it
        // here so operators can see what actually went wrong.
        eprintln!("warning: {cause}");
    }
    let result = diff(&roster, &doc);

    if json || output.is_some() {
        let json_str = serde_json::to_string_pretty(&result).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("JSON serialization error: {e}"),
            hint: None,
        })?;
        if let Some(ref path) = output {
            std::fs::write(path, &json_str).map_err(|e| CliError {
                code: EXIT_ERROR,
                message: format!("cannot write {}: {e}", path.display()),
                hint: None,
            })?;
            eprintln!("wrote {}", path.display());
        }
        if json {
            println!("{json_str}");
        }
    } else {
        print_human(&roster, &result);
    }

    eprintln!(
        "reconciliation: {} — {} matched, {} missing, {} ref-only",
        result.status,
        result.matched_ids.len(),
        result.missing_ids.len(),
        result.ref_only_handles.len(),
    );

    Ok(check_exit_code(&result))
}

/// Shell contract for `check`: anything short of "fetched and fully
/// matched" gets a distinct non-zero code.
fn check_exit_code(result: &ReconciliationResult) -> u8 {
    match result.status {
        FetchStatus::Missing => EXIT_NO_REFERENCE,
        FetchStatus::Error => EXIT_FETCH_FAILED,
        FetchStatus::Fetched => {
            if result.missing_ids.is_empty() {
                EXIT_SUCCESS
            } else {
                EXIT_CHECK_MISSING
            }
        }
    }
}

fn print_human(roster: &[RosterEntry], result: &ReconciliationResult) {
    let handle_of = |id: &str| -> &str {
        roster
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.handle.as_str())
            .unwrap_or("")
    };

    for id in &result.matched_ids {
        println!("matched\t{id}\t{}", handle_of(id));
    }
    for id in &result.missing_ids {
        println!("missing\t{id}\t{}", handle_of(id));
    }
    for handle in &result.ref_only_handles {
        let context = result
            .context_lines
            .get(handle)
            .map(String::as_str)
            .unwrap_or("");
        println!("ref-only\t{handle}\t{context}");
    }
}

fn cmd_harvest(
    url: Option<String>,
    file: Option<PathBuf>,
    timeout: u64,
) -> Result<u8, CliError> {
    let text = match (url, file) {
        (Some(url), None) => {
            let fetcher = build_fetcher(timeout)?;
            let (doc, cause) = resolve_document(&url, &fetcher);
            match doc.status {
                rosterdiff_recon::DocumentStatus::Fetched { raw_text, .. } => raw_text,
                _ => {
                    return Err(CliError {
                        code: EXIT_FETCH_FAILED,
                        message: match cause {
                            Some(cause) => cause.to_string(),
                            None => "no reference URL given".into(),
                        },
                        hint: None,
                    });
                }
            }
        }
        (None, Some(path)) => std::fs::read_to_string(&path).map_err(|e| CliError {
            code: EXIT_USAGE,
            message: format!("cannot read {}: {e}", path.display()),
            hint: None,
        })?,
        _ => {
            return Err(CliError {
                code: EXIT_USAGE,
                message: "harvest needs exactly one of --url or --file".into(),
                hint: None,
            });
        }
    };

    let result = harvest(&text);
    for (handle, line) in &result {
        println!("{handle}\t{line}");
    }
    eprintln!("harvested {} handle(s)", result.len());
    Ok(EXIT_SUCCESS)
}

fn cmd_normalize(url: &str) -> Result<u8, CliError> {
    let normalized = normalize_reference_url(url).map_err(|e| CliError {
        code: EXIT_USAGE,
        message: e.to_string(),
        hint: None,
    })?;
    println!("{normalized}");
    Ok(EXIT_SUCCESS)
}
