use contract_registry::{AuthorId, Catalog, CatalogError, Field, ValidationError};
use serde_json::json;
use std::io::Write;

#[test]
fn two_authors_share_one_book() {
    let mut catalog = Catalog::new();
    let jo = catalog.create_author("Jo");
    let li = catalog.create_author("Li");
    let book_x = catalog.create_book("X");

    let first = catalog.sign_contract(jo, book_x, "2020-01-01", 100).unwrap();
    let second = catalog.sign_contract(li, book_x, "2020-01-01", 200).unwrap();

    let authors: Vec<AuthorId> = catalog.book_authors(book_x).iter().map(|a| a.id()).collect();
    assert_eq!(authors.len(), 2);
    assert!(authors.contains(&jo));
    assert!(authors.contains(&li));

    let on_date: Vec<_> = catalog
        .contracts_by_date("2020-01-01")
        .iter()
        .map(|c| c.id())
        .collect();
    assert_eq!(on_date, vec![first, second]);

    assert_eq!(catalog.total_royalties(jo), 100);
}

#[test]
fn contract_with_non_book_is_rejected_without_registering() {
    let mut catalog = Catalog::new();
    let jo = catalog.create_author("Jo");
    let before = catalog.contracts().count();

    let err = catalog
        .create_contract_from_values(
            &json!(jo.to_string()),
            &json!("not a book"),
            &json!("2020-01-01"),
            &json!(50),
        )
        .unwrap_err();

    assert!(matches!(err, ValidationError::NotABook { .. }));
    assert_eq!(catalog.contracts().count(), before);
}

#[test]
fn royalties_may_be_zero_or_negative() {
    let mut catalog = Catalog::new();
    let jo = catalog.create_author("Jo");
    let x = catalog.create_book("X");

    catalog.sign_contract(jo, x, "2020-01-01", 0).unwrap();
    catalog.sign_contract(jo, x, "2020-01-01", -40).unwrap();

    assert_eq!(catalog.total_royalties(jo), -40);
    assert_eq!(catalog.author_books(jo).len(), 1);
}

#[test]
fn total_royalties_past_i64_max() {
    let mut catalog = Catalog::new();
    let jo = catalog.create_author("Jo");
    let x = catalog.create_book("X");

    catalog.sign_contract(jo, x, "2020-01-01", i64::MAX).unwrap();
    catalog.sign_contract(jo, x, "2020-01-02", 1).unwrap();
    catalog.sign_contract(jo, x, "2020-01-03", i64::MAX).unwrap();

    assert_eq!(catalog.total_royalties(jo), 2 * i128::from(i64::MAX) + 1);

    let li = catalog.create_author("Li");
    catalog.sign_contract(li, x, "2020-01-04", i64::MIN).unwrap();
    catalog.sign_contract(li, x, "2020-01-05", -1).unwrap();
    assert_eq!(catalog.total_royalties(li), i128::from(i64::MIN) - 1);
}

#[test]
fn import_report_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let jo = AuthorId::new();
    let document = json!({
        "authors": [{"id": jo.to_string(), "name": "Jo"}],
        "books": [{"title": "X"}],
        "contracts": []
    });
    write!(file, "{}", document).unwrap();

    let mut catalog = Catalog::new();
    let summary = catalog.import_file(file.path()).unwrap();

    assert_eq!(summary.authors, 1);
    assert_eq!(summary.books, 1);
    assert_eq!(catalog.author(jo).unwrap().name(), "Jo");
    assert_eq!(catalog.books().all()[0].title(), "X");
}

#[test]
fn import_of_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = Catalog::new();

    let err = catalog.import_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn import_rejects_contract_pointing_at_unknown_author() {
    let mut catalog = Catalog::new();
    let err = catalog
        .import_value(&json!({
            "books": [{"title": "X"}],
            "contracts": [{"author": AuthorId::new().to_string(), "book": "whatever", "date": "d", "royalties": 1}]
        }))
        .unwrap_err();

    assert_eq!(err.as_validation().unwrap().field(), Field::ContractAuthor);
    assert_eq!(catalog.books().count(), 1);
    assert!(catalog.contracts().is_empty());
}
