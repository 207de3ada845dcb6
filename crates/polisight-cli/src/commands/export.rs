//! Export command: dump a product's extraction result as JSON.

use crate::cli::ExportArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use polisight_domain::traits::ResultStore;
use polisight_store::FileStore;
use std::fs;

/// Execute the export command.
pub fn execute_export(args: ExportArgs, config: &Config) -> Result<()> {
    let store = FileStore::new(&config.data_dir)?;
    let result = store
        .load(&args.product)?
        .ok_or_else(|| CliError::NoStoredResult(args.product.clone()))?;

    let json = serde_json::to_string_pretty(&result)
        .map_err(|e| CliError::Config(format!("Failed to serialize result: {}", e)))?;

    match args.output {
        Some(path) => {
            fs::write(&path, json)?;
            println!("Exported '{}' to {}", args.product, path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
