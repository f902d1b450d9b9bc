//! `build-raci` binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ir_toolkit::config::RaciOpt;
use ir_toolkit::initialization::init_logger_with;
use ir_toolkit::raci::{load_definition, write_workbook, RaciMatrix};
use ir_toolkit::RaciError;

fn build(opt: &RaciOpt) -> Result<(), RaciError> {
    let definition = load_definition(&opt.input)?;
    let matrix = RaciMatrix::from_definition(&definition);
    write_workbook(&matrix, &opt.output)
}

fn main() -> Result<()> {
    let opt = RaciOpt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = build(&opt) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    println!("RACI matrix generated: {}", opt.output.display());
    Ok(())
}
