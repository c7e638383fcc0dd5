//! Catalog command handler.

use super::{emit, AppConfig};
use crate::pipeline::exit_codes;
use anyhow::Result;

/// Print the variable catalog.
pub fn run_catalog(config: &AppConfig) -> Result<i32> {
    emit(config, |reporter| reporter.generate_catalog_report())?;
    Ok(exit_codes::SUCCESS)
}
