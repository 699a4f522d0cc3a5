//! `luau-syntax-check <bundle.json> <report.json>` — validates every script
//! in a bundle and writes a diagnostics report.
//!
//! Exit codes: `0` whether or not diagnostics were found; `1` if the
//! arguments are wrong or the bundle/report paths can't be read or written.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use luau_bundle::EditableBundle;
use luau_core::validate_bundle;

/// Validates each script in a JSON bundle as Luau source.
#[derive(Parser, Debug)]
#[command(name = "luau-syntax-check")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the input script bundle (JSON).
    bundle: PathBuf,

    /// Path to write the diagnostics report (JSON, or a clean-scan sentinel line).
    report: PathBuf,

    /// Enable debug-level logging.
    #[arg(short, long, global = true, env = "LUAU_SYNTAX_CHECK_VERBOSE")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `print()` routes DisplayHelp/DisplayVersion to stdout and
            // genuine usage errors to stderr; only the latter are an
            // argument error for spec.md §6's exit-code contract.
            let _ = err.print();
            if matches!(err.kind(), clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion) {
                return ExitCode::SUCCESS;
            }
            return ExitCode::from(1);
        }
    };
    luau_cli::logging::init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let bundle_text = std::fs::read_to_string(&cli.bundle)
        .with_context(|| format!("reading bundle {}", cli.bundle.display()))?;
    let bundle = EditableBundle::parse(&bundle_text).with_context(|| "parsing bundle JSON".to_string())?;

    let report = validate_bundle(&bundle);
    tracing::info!(
        scripts = report.script_count,
        issues = report.diagnostics.len(),
        "scan complete"
    );

    if let Some(parent) = cli.report.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }

    let body = if report.diagnostics.is_empty() {
        "Scan complete. 0 issue(s) found.\n".to_string()
    } else {
        let mut json = serde_json::to_string_pretty(&report.diagnostics)?;
        json.push('\n');
        json
    };
    std::fs::write(&cli.report, body).with_context(|| format!("writing report {}", cli.report.display()))?;

    Ok(())
}
