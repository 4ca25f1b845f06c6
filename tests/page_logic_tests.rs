// tests/page_logic_tests.rs - Pure logic behind the page components
//
// The pages are Leptos components; what can be unit-tested without a
// reactive runtime is the state they drive: the edit marker, the draft
// lifecycle and the collection shared across the tabs.

use stock_manager::web_app::model::{Product, ProductDraft};
use stock_manager::web_app::store::ProductStore;

fn sample_draft() -> ProductDraft {
    ProductDraft {
        name: "Casque audio".to_string(),
        description: "Réduction de bruit".to_string(),
        quantity: "25".to_string(),
        price: "199".to_string(),
    }
}

#[test]
fn submit_without_marker_creates() {
    let mut store = ProductStore::demo();
    let edit_id: Option<String> = None;

    let result = store.submit(edit_id.as_deref(), sample_draft()).unwrap();
    assert_eq!(result.id, "6");
    assert_eq!(store.len(), 6);
}

#[test]
fn submit_with_marker_updates_in_place() {
    let mut store = ProductStore::demo();
    let edit_id = Some("4".to_string());

    let result = store.submit(edit_id.as_deref(), sample_draft()).unwrap();
    assert_eq!(result.id, "4");
    assert_eq!(store.get("4").unwrap().name, "Casque audio");
    assert_eq!(store.len(), 5);
}

#[test]
fn editing_prefills_the_draft_from_the_record() {
    let store = ProductStore::demo();
    let target: &Product = store.get("4").unwrap();

    let draft = target.to_draft();
    assert_eq!(draft.name, "Disque SSD 1TB");
    assert_eq!(draft.quantity, target.quantity);
    // The id never enters the draft; it survives through the marker
    let marker = Some(target.id.clone());
    assert_eq!(marker.as_deref(), Some("4"));
}

#[test]
fn settings_edits_survive_a_tab_round_trip() {
    // Switching tabs never touches the collection; threshold edits made
    // on the settings tab are still there back on the products tab.
    let mut store = ProductStore::demo();

    store.thresholds.critical = 8;

    assert_eq!(store.len(), 5);
    assert_eq!(store.filtered("").len(), 5);
    assert_eq!(store.thresholds.critical, 8);
}

#[test]
fn delete_of_stale_id_is_a_noop_in_the_demo() {
    let mut store = ProductStore::demo();
    // The demo delete handler discards the UnknownId error
    let _ = store.remove("99");
    assert_eq!(store.len(), 5);
}

#[test]
fn search_term_drives_the_visible_list() {
    let store = ProductStore::demo();

    let mut term = String::new();
    assert_eq!(store.filtered(&term).len(), 5);

    term = "écran".to_string();
    let hits = store.filtered(&term);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Écran 27 pouces");

    term.clear();
    assert_eq!(store.filtered(&term).len(), 5);
}
