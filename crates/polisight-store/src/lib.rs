//! Polisight Store Layer
//!
//! File-backed persistence for the extraction pipeline:
//!
//! - per-product manifests plus page-level markdown content (the document
//!   text provider)
//! - the questions configuration
//! - per-product extraction results (last-write-wins)
//!
//! Layout under the data directory:
//!
//! ```text
//! <data_dir>/insurance_products/<product>/_config.json
//! <data_dir>/insurance_products/<product>/<doc>_page_<n>.md
//! <data_dir>/extracted_data/<product>_extracted.json
//! <data_dir>/questions_config.json
//! ```

#![warn(missing_docs)]

mod filename;

use polisight_domain::traits::{DocumentSource, ResultStore};
use polisight_domain::{ProductExtractionResult, QuestionsConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

pub use filename::clean_filename;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Referenced product has no stored manifest
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// One processed source document inside a product manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Human-readable document name
    pub doc_name: String,

    /// Page file names relative to the product directory, in page order
    #[serde(default)]
    pub page_files: Vec<String>,
}

/// Manifest describing a product's processed documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductManifest {
    /// Product name as entered by the analyst
    pub product_name: String,

    /// Processed documents, in a stable order
    #[serde(default)]
    pub documents: Vec<DocumentInfo>,
}

/// File-backed store rooted at a data directory.
pub struct FileStore {
    products_dir: PathBuf,
    extracted_dir: PathBuf,
    questions_path: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref();
        let products_dir = data_dir.join("insurance_products");
        let extracted_dir = data_dir.join("extracted_data");
        fs::create_dir_all(&products_dir)?;
        fs::create_dir_all(&extracted_dir)?;

        Ok(Self {
            products_dir,
            extracted_dir,
            questions_path: data_dir.join("questions_config.json"),
        })
    }

    fn product_dir(&self, product_name: &str) -> PathBuf {
        self.products_dir.join(clean_filename(product_name))
    }

    fn manifest_path(&self, product_name: &str) -> PathBuf {
        self.product_dir(product_name).join("_config.json")
    }

    fn extracted_path(&self, product_name: &str) -> PathBuf {
        self.extracted_dir
            .join(format!("{}_extracted.json", clean_filename(product_name)))
    }

    /// Save a product manifest, creating the product directory.
    pub fn save_manifest(&self, manifest: &ProductManifest) -> Result<(), StoreError> {
        let dir = self.product_dir(&manifest.product_name);
        fs::create_dir_all(&dir)?;

        let path = self.manifest_path(&manifest.product_name);
        fs::write(&path, serde_json::to_string_pretty(manifest)?)?;
        info!("Saved product manifest to {}", path.display());
        Ok(())
    }

    /// Load a product manifest, if one exists.
    pub fn load_manifest(&self, product_name: &str) -> Result<Option<ProductManifest>, StoreError> {
        let path = self.manifest_path(product_name);
        if !path.exists() {
            debug!("No manifest at {}", path.display());
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Save one page of a document's markdown, returning the page file name
    /// to record in the manifest.
    pub fn save_markdown_page(
        &self,
        product_name: &str,
        doc_name: &str,
        page_num: usize,
        content: &str,
    ) -> Result<String, StoreError> {
        let dir = self.product_dir(product_name);
        fs::create_dir_all(&dir)?;

        let file_name = format!("{}_page_{}.md", clean_filename(doc_name), page_num);
        fs::write(dir.join(&file_name), content)?;
        Ok(file_name)
    }

    /// Names of all products with a stored manifest, sorted.
    pub fn list_products(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.products_dir)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let manifest_path = entry.path().join("_config.json");
            if manifest_path.exists() {
                let contents = fs::read_to_string(&manifest_path)?;
                let manifest: ProductManifest = serde_json::from_str(&contents)?;
                names.push(manifest.product_name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Save the questions configuration (full rewrite).
    pub fn save_questions_config(&self, config: &QuestionsConfig) -> Result<(), StoreError> {
        fs::write(&self.questions_path, serde_json::to_string_pretty(config)?)?;
        info!("Saved questions config to {}", self.questions_path.display());
        Ok(())
    }

    /// Load the questions configuration; empty when none has been saved.
    pub fn load_questions_config(&self) -> Result<QuestionsConfig, StoreError> {
        if !self.questions_path.exists() {
            return Ok(QuestionsConfig::default());
        }
        let contents = fs::read_to_string(&self.questions_path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl DocumentSource for FileStore {
    type Error = StoreError;

    /// Concatenate all page markdown for a product, with a header line per
    /// document. Returns `None` when the product has no manifest or no
    /// loadable content.
    fn document_text(&self, product_name: &str) -> Result<Option<String>, Self::Error> {
        let manifest = match self.load_manifest(product_name)? {
            Some(manifest) => manifest,
            None => {
                warn!("No manifest found for product: {}", product_name);
                return Ok(None);
            }
        };

        let dir = self.product_dir(product_name);
        let mut parts: Vec<String> = Vec::new();

        for doc in &manifest.documents {
            parts.push(format!("\n\n--- Content from Document: {} ---\n", doc.doc_name));

            if doc.page_files.is_empty() {
                warn!(
                    "No page files for doc {} in product {}",
                    doc.doc_name, product_name
                );
                continue;
            }

            for page_file in &doc.page_files {
                match fs::read_to_string(dir.join(page_file)) {
                    Ok(content) => {
                        parts.push(content);
                        parts.push("\n".to_string());
                    }
                    Err(e) => warn!(
                        "Could not load markdown page {} for product {}: {}",
                        page_file, product_name, e
                    ),
                }
            }
        }

        let full_text = parts.concat();
        if full_text.trim().is_empty() {
            warn!("No markdown content aggregated for product {}.", product_name);
            return Ok(None);
        }
        Ok(Some(full_text))
    }
}

impl ResultStore for FileStore {
    type Error = StoreError;

    fn save(&self, result: &ProductExtractionResult) -> Result<(), Self::Error> {
        let path = self.extracted_path(&result.product_name);
        fs::write(&path, serde_json::to_string_pretty(result)?)?;
        info!(
            "Saved {} answers for {} to {}",
            result.answers.len(),
            result.product_name,
            path.display()
        );
        Ok(())
    }

    fn load(&self, product_name: &str) -> Result<Option<ProductExtractionResult>, Self::Error> {
        let path = self.extracted_path(product_name);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }
}
