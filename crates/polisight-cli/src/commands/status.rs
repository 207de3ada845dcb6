//! Status command: document-size health per product.

use crate::cli::StatusArgs;
use crate::commands::build_extractor;
use crate::config::Config;
use crate::error::Result;
use polisight_store::FileStore;

/// Execute the status command.
pub fn execute_status(args: StatusArgs, config: &Config) -> Result<()> {
    let store = FileStore::new(&config.data_dir)?;
    let products = match args.product {
        Some(product) => vec![product],
        None => store.list_products()?,
    };
    if products.is_empty() {
        println!("No stored products found.");
        return Ok(());
    }

    let extractor = build_extractor(config)?;
    let limit = config.extractor.max_context_chars;

    for product in &products {
        let (exceeds, length) = extractor.check_document_size(product)?;
        if length == 0 {
            println!("{}: no document text", product);
        } else if exceeds {
            println!(
                "{}: {} chars - EXCEEDS the {} char context limit, text will be truncated",
                product, length, limit
            );
        } else {
            println!("{}: {} chars - within the context limit", product, length);
        }
    }
    Ok(())
}
