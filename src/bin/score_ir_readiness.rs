//! `score-ir-readiness` binary.
//!
//! Reads questionnaire answers from CSV, prints the score summary and
//! optionally writes the Markdown report.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ir_toolkit::config::ReadinessOpt;
use ir_toolkit::initialization::init_logger_with;
use ir_toolkit::readiness::{read_responses, render_summary, score_responses, write_markdown_report};

fn main() -> Result<()> {
    let opt = ReadinessOpt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let responses = match read_responses(&opt.input) {
        Ok(responses) => responses,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let report = score_responses(&responses);
    print!("{}", render_summary(&report));

    if let Some(path) = &opt.output {
        if let Err(e) = write_markdown_report(&report, path) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
        println!();
        println!("Markdown report written to: {}", path.display());
    }

    Ok(())
}
