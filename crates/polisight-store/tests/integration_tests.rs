//! Integration tests for the file store

use polisight_domain::traits::{DocumentSource, ResultStore};
use polisight_domain::{
    AnswerRecord, AnswerStatus, ProductExtractionResult, Question, QuestionsConfig,
};
use polisight_store::{DocumentInfo, FileStore, ProductManifest};
use tempfile::TempDir;

fn store() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path()).unwrap();
    (dir, store)
}

fn write_product(store: &FileStore, product: &str, docs: &[(&str, &[&str])]) {
    let mut documents = Vec::new();
    for (doc_name, pages) in docs {
        let mut page_files = Vec::new();
        for (i, content) in pages.iter().enumerate() {
            let file = store
                .save_markdown_page(product, doc_name, i + 1, content)
                .unwrap();
            page_files.push(file);
        }
        documents.push(DocumentInfo {
            doc_name: doc_name.to_string(),
            page_files,
        });
    }
    store
        .save_manifest(&ProductManifest {
            product_name: product.to_string(),
            documents,
        })
        .unwrap();
}

#[test]
fn test_document_text_concatenates_in_order() {
    let (_dir, store) = store();
    write_product(
        &store,
        "AlphaCare",
        &[
            ("Terms", &["page one", "page two"]),
            ("Addendum", &["page three"]),
        ],
    );

    let text = store.document_text("AlphaCare").unwrap().unwrap();
    assert!(text.contains("--- Content from Document: Terms ---"));
    assert!(text.contains("--- Content from Document: Addendum ---"));

    let one = text.find("page one").unwrap();
    let two = text.find("page two").unwrap();
    let three = text.find("page three").unwrap();
    assert!(one < two && two < three);
}

#[test]
fn test_document_text_absent_for_unknown_product() {
    let (_dir, store) = store();
    assert!(store.document_text("Nowhere").unwrap().is_none());
}

#[test]
fn test_document_text_absent_when_pages_empty() {
    let (_dir, store) = store();
    store
        .save_manifest(&ProductManifest {
            product_name: "Empty".to_string(),
            documents: vec![DocumentInfo {
                doc_name: "Terms".to_string(),
                page_files: vec![],
            }],
        })
        .unwrap();

    // Header lines alone do not count as content
    assert!(store.document_text("Empty").unwrap().is_none());
}

#[test]
fn test_result_round_trip_last_write_wins() {
    let (_dir, store) = store();

    let mut first = ProductExtractionResult::new("AlphaCare");
    first.upsert(AnswerRecord::new(
        "q1",
        "Is dental covered?",
        "Dental",
        "Yes",
        AnswerStatus::Raw,
    ));
    store.save(&first).unwrap();

    let mut second = first.clone();
    second.upsert(AnswerRecord::new(
        "q1",
        "Is dental covered?",
        "Dental",
        "No, only above 100 CHF",
        AnswerStatus::Corrected,
    ));
    store.save(&second).unwrap();

    let loaded = store.load("AlphaCare").unwrap().unwrap();
    assert_eq!(loaded, second);
    assert_eq!(loaded.get("q1").unwrap().status, AnswerStatus::Corrected);
}

#[test]
fn test_load_missing_result_is_none() {
    let (_dir, store) = store();
    assert!(store.load("AlphaCare").unwrap().is_none());
}

#[test]
fn test_questions_config_round_trip() {
    let (_dir, store) = store();

    assert!(store.load_questions_config().unwrap().is_empty());

    let config = QuestionsConfig {
        categories: vec!["Dental".to_string()],
        questions: vec![Question::new(
            "q001",
            "Is this category covered under the insurance?",
            vec!["Dental".to_string()],
        )],
    };
    store.save_questions_config(&config).unwrap();

    let loaded = store.load_questions_config().unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_list_products_sorted_original_names() {
    let (_dir, store) = store();
    write_product(&store, "Zeta Care", &[("Terms", &["z"])]);
    write_product(&store, "Alpha Care", &[("Terms", &["a"])]);

    let products = store.list_products().unwrap();
    assert_eq!(products, vec!["Alpha Care", "Zeta Care"]);
}
