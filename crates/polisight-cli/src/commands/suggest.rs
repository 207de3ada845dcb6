//! Suggest command: draft a questions configuration from the stored
//! document corpus.

use crate::cli::SuggestArgs;
use crate::config::Config;
use crate::error::Result;
use polisight_domain::traits::DocumentSource;
use polisight_llm::AzureOpenAiGateway;
use polisight_questions::{QuestionSuggester, SuggesterConfig, SuggestionSamples};
use polisight_store::FileStore;
use tracing::warn;

/// Execute the suggest command.
pub fn execute_suggest(args: SuggestArgs, config: &Config) -> Result<()> {
    let store = FileStore::new(&config.data_dir)?;

    let mut corpus: Vec<(String, Vec<String>)> = Vec::new();
    for product in store.list_products()? {
        match store.document_text(&product)? {
            Some(text) => corpus.push((product, vec![text])),
            None => warn!("No document text for product '{}'; skipping.", product),
        }
    }
    if corpus.is_empty() {
        println!("No document content available. Add product documents first.");
        return Ok(());
    }

    let gateway = AzureOpenAiGateway::new(
        config.azure.endpoint.as_str(),
        config.azure.api_key.as_str(),
        config.azure.api_version.as_str(),
    );
    let suggester = QuestionSuggester::new(gateway, SuggesterConfig::default());
    let samples = SuggestionSamples {
        categories: args.sample_categories,
        questions: args.sample_questions,
    };

    let suggested = suggester.suggest(&corpus, &samples, &config.model)?;
    println!(
        "Suggested {} categories and {} questions.",
        suggested.categories.len(),
        suggested.questions.len()
    );
    for category in &suggested.categories {
        println!("  - {}", category);
    }

    if args.dry_run {
        println!("Dry run: configuration not saved.");
        return Ok(());
    }

    store.save_questions_config(&suggested)?;
    println!("Questions configuration saved.");
    Ok(())
}
