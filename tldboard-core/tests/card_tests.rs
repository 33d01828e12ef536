// Tests for card and column construction

use serde_json::json;
use tldboard_core::{CardError, CardModel, UserRecord, ValidUser, build_card, build_column};

fn record(value: serde_json::Value) -> UserRecord {
    UserRecord::new(value)
}

// ============================================================================
// Card Tests
// ============================================================================

#[test]
fn test_build_card_labels() {
    let card = build_card(&record(json!({
        "name": "Ervin Howell",
        "username": "Antonette",
        "website": "anastasia.net"
    })))
    .unwrap();

    assert_eq!(card.name, "Name: Ervin Howell");
    assert_eq!(card.username, "Username: Antonette");
    assert_eq!(card.website, "Website: anastasia.net");
}

#[test]
fn test_build_card_missing_username() {
    let result = build_card(&record(json!({ "name": "A", "website": "a.com" })));
    assert_eq!(result, Err(CardError::MissingField("username")));
}

#[test]
fn test_build_card_non_string_field() {
    let result = build_card(&record(json!({
        "name": "A",
        "username": ["a"],
        "website": "a.com"
    })));

    assert_eq!(
        result,
        Err(CardError::WrongType {
            field: "username",
            found: "array"
        })
    );
}

#[test]
fn test_build_card_null_field() {
    let result = build_card(&record(json!({
        "name": "A",
        "username": "a",
        "website": null
    })));

    assert!(matches!(
        result,
        Err(CardError::WrongType {
            field: "website",
            ..
        })
    ));
}

#[test]
fn test_valid_user_from_record() {
    let user = ValidUser::try_from(&record(json!({
        "name": "A",
        "username": "a",
        "website": "a.com",
        "phone": "1-770-736-8031"
    })))
    .unwrap();

    assert_eq!(user.name, "A");
    assert_eq!(user.username, "a");
    assert_eq!(user.website, "a.com");
    assert_eq!(CardModel::from_user(&user).website, "Website: a.com");
}

// ============================================================================
// Column Tests
// ============================================================================

#[test]
fn test_build_column_skips_invalid_members() {
    let users = vec![
        record(json!({ "name": "A", "username": "a", "website": "a.com" })),
        record(json!({ "name": "B", "website": "b.com" })),
        record(json!({ "name": "C", "username": "c", "website": "c.com" })),
    ];

    let column = build_column("com", &users);

    assert_eq!(column.title, "com");
    assert_eq!(column.cards.len(), 2);
    assert_eq!(column.skipped, 1);
    assert_eq!(column.cards[0].name, "Name: A");
    assert_eq!(column.cards[1].name, "Name: C");
}

#[test]
fn test_build_column_all_invalid_is_empty_column() {
    let users = vec![record(json!(null)), record(json!("text"))];

    let column = build_column("org", &users);

    assert!(column.cards.is_empty());
    assert_eq!(column.skipped, 2);
}

#[test]
fn test_build_column_whitespace_title() {
    let users = vec![record(json!({ "name": "A", "username": "a", "website": "example. " }))];

    let column = build_column(" ", &users);

    assert_eq!(column.title, " ");
    assert_eq!(column.cards.len(), 1);
    assert_eq!(column.cards[0].website, "Website: example. ");
}

#[test]
fn test_card_error_messages() {
    assert_eq!(
        CardError::MissingField("name").to_string(),
        "record has no 'name' field"
    );
    assert_eq!(
        CardError::WrongType {
            field: "website",
            found: "number"
        }
        .to_string(),
        "field 'website' is a number, not a string"
    );
}
