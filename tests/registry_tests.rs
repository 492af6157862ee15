//! Checkout/return contract of the key registry.

mod fixtures;
use fixtures::*;

use keylibrary::models::KeyId;
use keylibrary::services::{KeyRegistry, KeySelector};

#[test]
fn test_single_mode_scenario() {
    let mut reg = registry(&["A", "B"], false);

    assert!(reg.checkout_key("save", &key("A")));
    assert!(!reg.checkout_key("load", &key("A")));
    assert!(reg.checkout_key("load", &key("B")));

    assert!(reg.return_key("save", &key("A")));
    assert!(!reg.is_occupied(&key("A")));
    assert!(!reg.return_label("save"));

    assert_eq!(reg.labels_for(&key("B")), &["load".to_string()]);
}

#[test]
fn test_invalid_key_is_never_stored() {
    let mut reg = registry(&["A"], true);

    assert!(!reg.checkout_key("x", &key("Z")));
    assert!(!reg.return_key("x", &key("Z")));
    assert!(reg.labels_for(&key("Z")).is_empty());
    assert!(!reg.is_occupied(&key("Z")));
    assert!(!reg.contains_key(&key("Z")));
    assert_eq!(reg.len(), 1);
}

#[test]
fn test_single_mode_never_exceeds_one_label() {
    let mut reg = registry(&["A", "B", "C"], false);

    for (i, label) in ["a", "b", "c", "d", "e", "f"].iter().enumerate() {
        let target = ["A", "B", "C"][i % 3];
        reg.checkout_key(*label, &key(target));
    }

    for k in reg.keys() {
        assert!(reg.labels_for(k).len() <= 1);
    }
    assert_eq!(reg.occupied_keys().count(), 3);
}

#[test]
fn test_multi_mode_appends_in_order() {
    let mut reg = registry(&["A"], true);

    assert!(reg.checkout_key("x", &key("A")));
    assert!(reg.checkout_key("y", &key("A")));
    assert!(reg.checkout_key("x", &key("A")));
    assert_eq!(
        reg.labels_for(&key("A")),
        &["x".to_string(), "y".to_string(), "x".to_string()]
    );

    // First occurrence only
    assert!(reg.return_key("x", &key("A")));
    assert_eq!(reg.labels_for(&key("A")), &["y".to_string(), "x".to_string()]);
}

#[test]
fn test_return_label_removes_from_every_key() {
    let mut reg = registry(&["A", "B", "C"], true);
    reg.checkout_key("jump", &key("A"));
    reg.checkout_key("jump", &key("C"));
    reg.checkout_key("duck", &key("C"));

    let mut holders = reg.keys_for_label("jump");
    holders.sort();
    assert_eq!(holders, vec![&key("A"), &key("C")]);

    assert!(reg.return_label("jump"));
    assert!(reg.keys_for_label("jump").is_empty());
    assert_eq!(reg.labels_for(&key("C")), &["duck".to_string()]);
    assert!(!reg.return_label("jump"));
}

#[test]
fn test_checkout_then_return_restores_state() {
    let mut reg = registry(&["A", "B"], true);
    reg.checkout_key("keep", &key("A"));
    let before: Vec<Vec<String>> = reg.keys().iter().map(|k| reg.labels_for(k).to_vec()).collect();

    assert!(reg.checkout_key("temp", &key("B")));
    assert!(reg.return_key("temp", &key("B")));

    let after: Vec<Vec<String>> = reg.keys().iter().map(|k| reg.labels_for(k).to_vec()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_valid_set_is_fixed_at_construction() {
    let mut reg = registry(&["A", "B", "A"], false);
    assert_eq!(reg.keys(), &[key("A"), key("B")]);

    reg.checkout_key("x", &key("A"));
    reg.return_label("x");
    assert_eq!(reg.len(), 2);
    assert!(reg.contains_key(&key("A")));
}

#[test]
fn test_permissive_same_label_on_two_keys() {
    let mut reg = registry(&["A", "B"], false);
    assert!(reg.checkout_key("fire", &key("A")));
    assert!(reg.checkout_key("fire", &key("B")));
}

/// Selector that always offers the first free key.
struct FirstFree;

impl KeySelector for FirstFree {
    fn select_key(&mut self, _label: &str, registry: &KeyRegistry) -> Option<KeyId> {
        registry
            .keys()
            .iter()
            .find(|k| !registry.is_occupied(k))
            .cloned()
    }
}

#[test]
fn test_interactive_checkout_with_selector() {
    let mut reg = registry(&["A", "B"], false);

    assert_eq!(reg.checkout_key_interactive("one", &mut FirstFree), Some(key("A")));
    assert_eq!(reg.checkout_key_interactive("two", &mut FirstFree), Some(key("B")));
    assert_eq!(reg.checkout_key_interactive("three", &mut FirstFree), None);
}

#[test]
fn test_interactive_checkout_returns_refused_pick() {
    let mut reg = registry(&["A"], false);
    reg.checkout_key("save", &key("A"));

    let mut pick_a = |_: &str, _: &KeyRegistry| Some(key("A"));
    assert_eq!(reg.checkout_key_interactive("load", &mut pick_a), Some(key("A")));
    assert_eq!(reg.labels_for(&key("A")), &["save".to_string()]);
}
