// tests/store_tests.rs - Collection properties of ProductStore
//
// These pin down the observable contract of the core operations:
// filtering, id assignment, in-place update, ordered delete, and the
// demo catalog scenario.

use stock_manager::web_app::model::{Product, ProductDraft};
use stock_manager::web_app::store::{ProductStore, StoreError};

fn product(id: &str, name: &str, description: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        quantity: "10".to_string(),
        price: "100".to_string(),
    }
}

fn draft(name: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        description: String::new(),
        quantity: "1".to_string(),
        price: "1".to_string(),
    }
}

#[test]
fn filtered_result_is_an_ordered_subsequence() {
    let store = ProductStore::with_products(vec![
        product("1", "Alpha câble", "premier"),
        product("2", "Bravo", "câble rouge"),
        product("3", "Charlie", "sans rapport"),
        product("4", "Delta CÂBLE", "dernier"),
    ]);

    let hits = store.filtered("câble");
    let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();

    // Exactly the matching records, in collection order
    assert_eq!(ids, vec!["1", "2", "4"]);

    // Subsequence check against the full collection
    let mut cursor = store.products().iter();
    for hit in &hits {
        assert!(
            cursor.any(|p| p == hit),
            "filtered output must preserve collection order"
        );
    }
}

#[test]
fn filter_matches_name_or_description_case_insensitively() {
    let store = ProductStore::with_products(vec![
        product("1", "Clavier", "layout AZERTY"),
        product("2", "azerty sticker", "pour clavier"),
    ]);

    assert_eq!(store.filtered("AZERTY").len(), 2);
    assert_eq!(store.filtered("sticker").len(), 1);
    assert_eq!(store.filtered("zzz").len(), 0);
}

#[test]
fn empty_term_returns_collection_unchanged() {
    let store = ProductStore::demo();
    assert_eq!(store.filtered(""), store.products().to_vec());
}

#[test]
fn id_assignment_is_max_plus_one() {
    let mut store = ProductStore::with_products(vec![
        product("1", "a", ""),
        product("2", "b", ""),
        product("3", "c", ""),
    ]);

    let created = store.insert(draft("d"));
    assert_eq!(created.id, "4");
    assert_eq!(store.len(), 4);
}

#[test]
fn id_assignment_ignores_non_numeric_ids() {
    let mut store = ProductStore::with_products(vec![
        product("7", "a", ""),
        product("legacy-sku", "b", ""),
    ]);

    assert_eq!(store.insert(draft("c")).id, "8");
}

#[test]
fn update_replaces_only_the_target_record() {
    let mut store = ProductStore::demo();
    let before: Vec<Product> = store.products().to_vec();

    store
        .update("2", draft("Souris filaire"))
        .expect("id 2 exists");

    assert_eq!(store.len(), before.len());
    for (old, new) in before.iter().zip(store.products()) {
        if old.id == "2" {
            assert_eq!(new.name, "Souris filaire");
            assert_eq!(new.id, "2");
        } else {
            // All other records are byte-identical before and after
            assert_eq!(old, new);
        }
    }
}

#[test]
fn delete_preserves_relative_order() {
    let mut store = ProductStore::with_products(vec![
        product("1", "a", ""),
        product("2", "b", ""),
        product("3", "c", ""),
    ]);

    store.remove("3").expect("id 3 exists");
    let ids: Vec<&str> = store.products().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn unknown_ids_are_explicit_errors() {
    let mut store = ProductStore::new();
    assert_eq!(
        store.update("9", draft("x")).unwrap_err(),
        StoreError::UnknownId("9".to_string())
    );
    assert_eq!(
        store.remove("9").unwrap_err(),
        StoreError::UnknownId("9".to_string())
    );
}

#[test]
fn demo_scenario_search_and_clear() {
    let store = ProductStore::demo();
    assert_eq!(store.len(), 5);

    let hits = store.filtered("ssd");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Disque SSD 1TB");

    assert_eq!(store.filtered("").len(), 5);
}

#[test]
fn submit_contract_create_then_edit() {
    let mut store = ProductStore::demo();

    // No marker: append with a fresh id
    let created = store.submit(None, draft("Station d'accueil")).unwrap();
    assert_eq!(created.id, "6");
    assert_eq!(store.len(), 6);

    // Marker set: replace in place, length unchanged
    let edited = store
        .submit(Some("6"), draft("Station d'accueil USB4"))
        .unwrap();
    assert_eq!(edited.id, "6");
    assert_eq!(edited.name, "Station d'accueil USB4");
    assert_eq!(store.len(), 6);
}

#[test]
fn empty_fields_are_accepted_silently() {
    // No validation anywhere: an entirely empty draft becomes a record.
    let mut store = ProductStore::new();
    let created = store.insert(ProductDraft::default());
    assert_eq!(created.id, "1");
    assert_eq!(created.name, "");
    assert_eq!(created.quantity, "");
}
