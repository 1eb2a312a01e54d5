//! Account and deck file tests.

use std::fs;
use std::path::PathBuf;

use bjterm::{Account, AccountError, AccountStore, Card, DeckError, STARTING_MONEY, load_canonical};

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("bjterm-{}-{name}", std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn missing_account_is_created_with_default() {
    let path = temp_path("new-account.json");
    let store = AccountStore::new(&path);

    let account = store.load_or_create(STARTING_MONEY).unwrap();
    assert_eq!(account, Account::new(1000));

    let saved = fs::read_to_string(&path).unwrap();
    assert_eq!(saved, "{\n  \"money\": 1000\n}");

    let _ = fs::remove_file(path);
}

#[test]
fn saved_account_is_loaded() {
    let path = temp_path("saved-account.json");
    fs::write(&path, r#"{ "money": 1234 }"#).unwrap();

    let account = AccountStore::new(&path).load_or_create(STARTING_MONEY).unwrap();
    assert_eq!(account.money, 1234);

    let _ = fs::remove_file(path);
}

#[test]
fn malformed_account_is_replaced() {
    let path = temp_path("bad-account.json");
    fs::write(&path, "not json").unwrap();

    let account = AccountStore::new(&path).load_or_create(500).unwrap();
    assert_eq!(account.money, 500);

    let saved: Account = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved, Account::new(500));

    let _ = fs::remove_file(path);
}

#[test]
fn save_overwrites_balance() {
    let path = temp_path("overwrite-account.json");
    let store = AccountStore::new(&path);
    store.load_or_create(STARTING_MONEY).unwrap();

    store.save(&Account::new(42)).unwrap();
    assert_eq!(store.load_or_create(STARTING_MONEY).unwrap().money, 42);

    let _ = fs::remove_file(path);
}

#[test]
fn write_failure_is_reported() {
    let path = std::env::temp_dir()
        .join(format!("bjterm-{}-missing-dir", std::process::id()))
        .join("user.json");
    let store = AccountStore::new(&path);

    let err = store.save(&Account::new(10)).unwrap_err();
    assert!(matches!(err, AccountError::Write { .. }));
    assert!(store.load_or_create(STARTING_MONEY).is_err());
}

#[test]
fn deck_file_is_loaded_in_order() {
    let path = temp_path("deck.json");
    fs::write(&path, r#"["A♠", "10♥", "K♦"]"#).unwrap();

    let cards = load_canonical(&path).unwrap();
    assert_eq!(
        cards,
        vec![Card::new(1, '♠'), Card::new(10, '♥'), Card::new(13, '♦')]
    );

    let _ = fs::remove_file(path);
}

#[test]
fn bundled_deck_has_fifty_two_cards() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("deck.json");
    let cards = load_canonical(&path).unwrap();
    assert_eq!(cards.len(), 52);
}

#[test]
fn missing_deck_is_an_error() {
    let path = temp_path("no-deck.json");
    assert!(matches!(load_canonical(&path), Err(DeckError::Read { .. })));
}

#[test]
fn malformed_deck_is_an_error() {
    let path = temp_path("bad-deck.json");
    fs::write(&path, r#"{ "cards": ["A♠"] }"#).unwrap();
    assert!(matches!(load_canonical(&path), Err(DeckError::Parse { .. })));
    let _ = fs::remove_file(path);
}

#[test]
fn empty_deck_is_an_error() {
    let path = temp_path("empty-deck.json");
    fs::write(&path, "[]").unwrap();
    assert!(matches!(load_canonical(&path), Err(DeckError::Empty)));
    let _ = fs::remove_file(path);
}

#[test]
fn invalid_card_token_is_an_error() {
    let path = temp_path("token-deck.json");
    fs::write(&path, r#"["A♠", "B♥"]"#).unwrap();
    assert!(matches!(
        load_canonical(&path),
        Err(DeckError::InvalidCard { index: 1, .. })
    ));
    let _ = fs::remove_file(path);
}
