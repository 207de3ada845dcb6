//! Command implementations.

mod export;
mod extract;
mod list;
mod review;
mod status;
mod suggest;

pub use export::execute_export;
pub use extract::execute_extract;
pub use list::execute_list;
pub use review::execute_review;
pub use status::execute_status;
pub use suggest::execute_suggest;

use crate::config::Config;
use crate::error::Result;
use polisight_extractor::Extractor;
use polisight_llm::AzureOpenAiGateway;
use polisight_store::FileStore;

/// Build the extraction pipeline from the active configuration.
///
/// The extractor owns its own store handle for document text; result
/// persistence goes through a separate handle held by the command.
pub(crate) fn build_extractor(
    config: &Config,
) -> Result<Extractor<AzureOpenAiGateway, FileStore>> {
    let gateway = AzureOpenAiGateway::new(
        config.azure.endpoint.as_str(),
        config.azure.api_key.as_str(),
        config.azure.api_version.as_str(),
    );
    let documents = FileStore::new(&config.data_dir)?;
    Ok(Extractor::new(gateway, documents, config.extractor.clone()))
}
