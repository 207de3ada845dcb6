//! Review command: re-check stored answers against the document text and
//! apply suggested corrections.

use crate::cli::ReviewArgs;
use crate::commands::build_extractor;
use crate::config::Config;
use crate::error::{CliError, Result};
use polisight_domain::traits::ResultStore;
use polisight_extractor::apply_corrections;
use polisight_store::FileStore;

/// Execute the review command.
pub fn execute_review(args: ReviewArgs, config: &Config) -> Result<()> {
    let store = FileStore::new(&config.data_dir)?;
    let mut result = store
        .load(&args.product)?
        .ok_or_else(|| CliError::NoStoredResult(args.product.clone()))?;

    let extractor = build_extractor(config)?;
    let corrections = extractor.review(&args.product, &result.answers, &config.model)?;

    if corrections.is_empty() {
        println!("Review suggested no corrections for '{}'.", args.product);
        return Ok(());
    }

    println!(
        "Review suggested {} corrections for '{}':",
        corrections.len(),
        args.product
    );
    for correction in &corrections {
        println!(
            "  {}: '{}' -> '{}' ({})",
            correction.question_id,
            correction.original_answer,
            correction.suggested_correction,
            correction.reason
        );
    }

    if args.dry_run {
        println!("Dry run: corrections not applied.");
        return Ok(());
    }

    result.answers = apply_corrections(&result.answers, &corrections, &args.product);
    store.save(&result)?;
    println!("Corrections applied and saved.");
    Ok(())
}
