//! Extract command: run the answer-extraction pipeline for one or all
//! products, optionally followed by the self-correction review.

use crate::cli::ExtractArgs;
use crate::commands::build_extractor;
use crate::config::Config;
use crate::error::{CliError, Result};
use polisight_domain::traits::ResultStore;
use polisight_domain::{ProductExtractionResult, QuestionsConfig};
use polisight_extractor::{apply_corrections, ExtractionMode, Extractor};
use polisight_llm::AzureOpenAiGateway;
use polisight_store::FileStore;
use tracing::warn;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config) -> Result<()> {
    let store = FileStore::new(&config.data_dir)?;

    let products = if args.all {
        store.list_products()?
    } else {
        match args.product {
            Some(ref product) => vec![product.clone()],
            None => {
                return Err(CliError::Config(
                    "Provide a product name or pass --all".into(),
                ))
            }
        }
    };
    if products.is_empty() {
        println!("No stored products found.");
        return Ok(());
    }

    let questions = store.load_questions_config()?;
    if questions.is_empty() {
        return Err(CliError::Config(
            "No categories or questions configured. Run 'suggest' first.".into(),
        ));
    }

    let extractor = build_extractor(config)?;

    for product in &products {
        println!("Extracting answers for '{}'...", product);
        match extract_one(&extractor, product, &questions, args.review, config) {
            Ok(result) => {
                store.save(&result)?;
                println!(
                    "  {} answers saved ({} errors).",
                    result.answers.len(),
                    result.error_count()
                );
            }
            // With --all a failed product must not stop the rest
            Err(e) if args.all => eprintln!("  Extraction failed for '{}': {}", product, e),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn extract_one(
    extractor: &Extractor<AzureOpenAiGateway, FileStore>,
    product: &str,
    questions: &QuestionsConfig,
    review: bool,
    config: &Config,
) -> Result<ProductExtractionResult> {
    let mut result =
        extractor.extract(product, questions, ExtractionMode::ByCategory, &config.model)?;

    if review {
        match extractor.review(product, &result.answers, &config.model) {
            Ok(corrections) if corrections.is_empty() => {
                println!("  Review suggested no corrections.");
            }
            Ok(corrections) => {
                println!("  Applying {} corrections.", corrections.len());
                result.answers = apply_corrections(&result.answers, &corrections, product);
            }
            // A failed review leaves the raw answers intact
            Err(e) => warn!("Review failed for '{}': {}", product, e),
        }
    }
    Ok(result)
}
