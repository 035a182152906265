//! Thin driver around the allocator: loads purchases and quotations, runs one
//! allocation and renders the records as JSON.

pub mod config;
pub mod dto;
pub mod sample;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use quotealloc_allocation::{AllocationRecord, Allocator};

use crate::config::CliConfig;
use crate::dto::AllocationInput;

/// Read an [`AllocationInput`] document from a JSON file.
pub fn load_input(path: &Path) -> Result<AllocationInput> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse input file {}", path.display()))
}

/// Allocate `input` and return the produced records.
pub fn allocate_input(input: AllocationInput, validate: bool) -> Result<Vec<AllocationRecord>> {
    let (mut purchases, mut quotations) = input.into_domain().context("invalid input data")?;

    let allocator = Allocator::new();
    let outcome = if validate {
        allocator.allocate_validated(&mut purchases, &mut quotations)
    } else {
        allocator.allocate(&mut purchases, &mut quotations)
    };
    let run = outcome.context("allocation failed")?;

    tracing::info!(
        run_id = %run.run_id(),
        records = run.records().len(),
        shortfall = run.shortfall_total(),
        "allocation complete"
    );
    Ok(run.into_records())
}

/// Load the configured input (or the sample data set) and allocate it.
pub fn run(config: &CliConfig) -> Result<Vec<AllocationRecord>> {
    let input = match &config.input {
        Some(path) => load_input(path)?,
        None => {
            tracing::info!("no input file configured, using sample data");
            sample::reference_input()
        }
    };
    allocate_input(input, config.validate)
}

/// Render records as a JSON array.
pub fn render(records: &[AllocationRecord], pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    };
    out.context("failed to serialize allocation records")
}
