//! Store operations across process restarts

use library_catalog::{
    models::{CatalogDocument, CreateBook, Listing, TransactionAction},
    AppError,
};
use pretty_assertions::assert_eq;

use crate::{open_library, repository};

fn dune(quantity: &str) -> CreateBook {
    CreateBook {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        subject: "Sci-Fi".to_string(),
        isbn: "111".to_string(),
        quantity: quantity.to_string(),
    }
}

#[test]
fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut library = open_library(dir.path());
        library.add_book(dune("2")).unwrap();
        library.register_user("u1", "Alice").unwrap();
        library.borrow_book("Dune", "u1").unwrap();
    }

    let mut library = open_library(dir.path());
    assert_eq!(library.find_book("dune").map(|b| b.quantity), Some(1));
    assert_eq!(library.loan_holder("Dune"), Some("u1"));

    library.return_book("Dune", "u1").unwrap();
    let library = open_library(dir.path());
    assert_eq!(library.find_book("Dune").map(|b| b.quantity), Some(2));
    assert!(library.active_loans().is_empty());

    let actions: Vec<TransactionAction> =
        library.list_transactions().rows().iter().map(|t| t.action).collect();
    assert_eq!(actions, vec![TransactionAction::Borrowed, TransactionAction::Returned]);
}

#[test]
fn test_reads_existing_data_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("library.json"),
        r#"{
    "books": [
        {"title": "Emma", "author": "Austen", "subject": "Novel", "isbn": "222", "quantity": 0}
    ],
    "users": {"u7": "Grace"},
    "borrowed_books": {"Emma": "u7"},
    "transactions": [
        {"user_id": "u7", "user_name": "Grace", "title": "Emma", "action": "borrowed", "time": "2023-11-02 18:04:59"}
    ]
}"#,
    )
    .unwrap();

    let mut library = open_library(dir.path());
    assert!(matches!(
        library.borrow_book("Emma", "u7"),
        Err(AppError::Unavailable(_))
    ));

    let receipt = library.return_book("Emma", "u7").unwrap();
    assert_eq!(receipt.user_name, "Grace");
    assert_eq!(receipt.remaining, Some(1));

    let entries = library.list_transactions();
    assert_eq!(entries.rows()[0].formatted_time(), "2023-11-02 18:04:59");
    assert_eq!(entries.rows().len(), 2);
}

#[test]
fn test_round_trip_matches_document() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = open_library(dir.path());
    library.register_user("b2", "Bob").unwrap();
    library.register_user("a1", "Alice").unwrap();
    library.add_book(dune("1")).unwrap();
    library.borrow_book("DUNE", "a1").unwrap();

    let saved: CatalogDocument = repository(dir.path()).load().unwrap();
    assert_eq!(&saved, library.document());
    let ids: Vec<&str> = saved.users.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["b2", "a1"]);
}

#[test]
fn test_refusals_do_not_touch_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = open_library(dir.path());
    library.add_book(dune("0")).unwrap();
    library.register_user("u1", "Alice").unwrap();
    let path = dir.path().join("library.json");
    let before = std::fs::read_to_string(&path).unwrap();

    assert!(library.register_user("u1", "Eve").is_err());
    assert!(library.borrow_book("Dune", "u1").is_err());
    assert!(library.borrow_book("Dune", "nobody").is_err());
    assert!(library.return_book("Dune", "u1").is_err());
    assert!(library.add_book(dune("x")).is_err());

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    assert!(matches!(library.list_transactions(), Listing::Empty));
}

#[test]
fn test_corrupt_file_refuses_to_open() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("library.json"), "not json at all").unwrap();

    let err = library_catalog::Library::open(repository(dir.path())).unwrap_err();
    assert!(err.is_fatal());
}
