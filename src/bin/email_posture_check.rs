//! `email-posture-check` binary.
//!
//! Thin wrapper around the `ir_toolkit` posture module that handles:
//! - Command-line argument parsing
//! - Logger and resolver initialization
//! - Console report and optional CSV export

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ir_toolkit::config::PostureOpt;
use ir_toolkit::export::export_posture_csv;
use ir_toolkit::initialization::{init_logger_with, init_resolver};
use ir_toolkit::posture::{check_domain, load_domains, render_human_report};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = PostureOpt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let domains = match load_domains(&opt.domains, opt.input.as_deref()) {
        Ok(domains) => domains,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if domains.is_empty() {
        println!("No domains provided. Use --domain or --input.");
        return Ok(());
    }

    let resolver = init_resolver(opt.dns_timeout_secs);
    let selector = opt.dkim_selector.as_deref();

    // A failing domain is reported and skipped; the rest still run
    let mut results = Vec::with_capacity(domains.len());
    for domain in &domains {
        match check_domain(&resolver, domain, selector).await {
            Ok(posture) => results.push(posture),
            Err(e) => println!("Error checking domain {domain}: {e}"),
        }
    }

    print!("{}", render_human_report(&results));

    if let Some(path) = &opt.output {
        if !results.is_empty() {
            export_posture_csv(&results, path)
                .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
            println!("CSV report written to: {}", path.display());
        }
    }

    Ok(())
}
