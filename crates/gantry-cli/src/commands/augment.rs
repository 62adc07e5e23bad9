use std::path::Path;

use anyhow::Context;
use gantry_config::GantryConfig;
use gantry_core::Schema;
use gantry_schema::{augment_schema_with, ensure_scalars, load_document_str, stringify_with};

use crate::cli::{AugmentArgs, OutputFormat};

/// Handle `gantry augment`.
pub fn handle(args: &AugmentArgs, config: &GantryConfig) -> anyhow::Result<()> {
    let schema = load_and_augment(&args.file, config)?;
    print!("{}", render(&schema, args.format, config)?);
    Ok(())
}

/// Read a JSON document, bootstrap scalars, build the schema, and augment it.
pub fn load_and_augment(path: &Path, config: &GantryConfig) -> anyhow::Result<Schema> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema document '{}'", path.display()))?;

    let mut document = load_document_str(&json)
        .with_context(|| format!("invalid schema document '{}'", path.display()))?;
    if config.augment.bootstrap_scalars {
        ensure_scalars(&mut document);
    }

    let mut schema = Schema::from_document(document)?;
    let summary = augment_schema_with(&mut schema, &config.augment)
        .context("schema augmentation failed")?;
    tracing::info!(
        object_types = summary.object_types,
        derived_types = summary.derived_types,
        "augmented {}",
        path.display()
    );
    Ok(schema)
}

fn render(schema: &Schema, format: OutputFormat, config: &GantryConfig) -> anyhow::Result<String> {
    match format {
        OutputFormat::Sdl => Ok(stringify_with(schema, &config.output)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(schema)? + "\n"),
    }
}
