use contract_registry::{BookId, Catalog, Field, ValidationError};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashSet;

/// Any JSON value that is not a string
fn non_string() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        prop::collection::vec(any::<i32>(), 0..3).prop_map(|v| json!(v)),
        Just(json!({"name": "Jo"})),
    ]
}

/// Any JSON value that is not an i64 integer
fn non_integer() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        "[0-9]{1,5}".prop_map(Value::String),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f + 0.5)),
    ]
}

proptest! {
    #[test]
    fn names_and_titles_round_trip(name in ".*", title in ".*") {
        let mut catalog = Catalog::new();
        let author = catalog.create_author(name.clone());
        let book = catalog.create_book(title.clone());

        prop_assert_eq!(catalog.author(author).unwrap().name(), name.as_str());
        prop_assert_eq!(catalog.book(book).unwrap().title(), title.as_str());
    }

    #[test]
    fn non_strings_are_rejected(value in non_string()) {
        let mut catalog = Catalog::new();

        prop_assert_eq!(
            catalog.create_author_from_value(&value),
            Err(ValidationError::NotAString { field: Field::AuthorName })
        );
        prop_assert_eq!(
            catalog.create_book_from_value(&value),
            Err(ValidationError::NotAString { field: Field::BookTitle })
        );
        prop_assert!(catalog.authors().is_empty());

        let author = catalog.create_author("Jo");
        prop_assert!(catalog.set_author_name_from_value(author, &value).is_err());
        prop_assert_eq!(catalog.author(author).unwrap().name(), "Jo");
    }

    #[test]
    fn non_integer_royalties_are_rejected(value in non_integer()) {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Jo");
        let book = catalog.create_book("X");

        let err = catalog
            .create_contract_from_values(
                &json!(author.to_string()),
                &json!(book.to_string()),
                &json!("2020-01-01"),
                &value,
            )
            .unwrap_err();
        prop_assert_eq!(err.field(), Field::ContractRoyalties);
        prop_assert!(catalog.contracts().is_empty());
    }

    #[test]
    fn signed_contract_is_visible_from_both_sides(date in ".*", royalties in any::<i64>()) {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Jo");
        let book = catalog.create_book("X");

        let id = catalog.sign_contract(author, book, date.clone(), royalties).unwrap();
        let contract = catalog.contract(id).unwrap();

        prop_assert_eq!(contract.author(), author);
        prop_assert_eq!(contract.book(), book);
        prop_assert_eq!(contract.date(), date.as_str());
        prop_assert_eq!(contract.royalties(), royalties);
        prop_assert!(catalog.author_contracts(author).iter().any(|c| c.id() == id));
        prop_assert!(catalog.book_contracts(book).iter().any(|c| c.id() == id));
    }

    #[test]
    fn derived_views_agree_with_contracts(
        signings in prop::collection::vec((0usize..3, 0usize..4, 0usize..3, -1_000i64..1_000), 0..30)
    ) {
        let dates = ["2020-01-01", "2021-06-30", "someday"];
        let mut catalog = Catalog::new();
        let authors: Vec<_> = (0..3).map(|i| catalog.create_author(format!("A{i}"))).collect();
        let books: Vec<_> = (0..4).map(|i| catalog.create_book(format!("B{i}"))).collect();

        for &(a, b, d, r) in &signings {
            catalog.sign_contract(authors[a], books[b], dates[d], r).unwrap();
        }

        for &author in &authors {
            let contracts = catalog.author_contracts(author);
            let expected: i128 = contracts.iter().map(|c| i128::from(c.royalties())).sum();
            prop_assert_eq!(catalog.total_royalties(author), expected);

            let distinct: HashSet<BookId> = contracts.iter().map(|c| c.book()).collect();
            let books_seen: Vec<BookId> = catalog.author_books(author).iter().map(|b| b.id()).collect();
            prop_assert_eq!(books_seen.len(), distinct.len());
            prop_assert_eq!(books_seen.iter().copied().collect::<HashSet<_>>(), distinct);
        }

        for date in dates {
            let expected: Vec<_> = catalog
                .contracts()
                .iter()
                .filter(|c| c.date() == date)
                .map(|c| c.id())
                .collect();
            let found: Vec<_> = catalog.contracts_by_date(date).iter().map(|c| c.id()).collect();
            prop_assert_eq!(found, expected);
        }
    }
}
