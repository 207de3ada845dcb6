//! List command: stored products and their extraction state.

use crate::config::Config;
use crate::error::Result;
use polisight_domain::traits::ResultStore;
use polisight_store::FileStore;

/// Execute the list command.
pub fn execute_list(config: &Config) -> Result<()> {
    let store = FileStore::new(&config.data_dir)?;
    let products = store.list_products()?;
    if products.is_empty() {
        println!("No stored products found.");
        return Ok(());
    }

    for product in &products {
        match store.load(product)? {
            Some(result) => println!(
                "{}: {} answers ({} errors)",
                product,
                result.answers.len(),
                result.error_count()
            ),
            None => println!("{}: not extracted", product),
        }
    }
    Ok(())
}
