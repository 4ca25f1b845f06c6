// web_app/pages/demo.rs - Local-simulation demo page
//
// A self-contained variant of the inventory UI: the collection is a
// ProductStore owned by this page, every mutation applies synchronously,
// and nothing survives a reload. Adds a search box, tab navigation and a
// settings panel for the alert thresholds.

use crate::web_app::components::*;
use crate::web_app::model::{ActiveTab, AlertThresholds, Product};
use crate::web_app::store::ProductStore;
use leptos::prelude::*;

/// Local-simulation demo page
#[component]
pub fn DemoPage() -> impl IntoView {
    // The owned collection, seeded with the demo catalog
    let store = RwSignal::new(ProductStore::demo());

    // UI state
    let search = RwSignal::new(String::new());
    let tab = RwSignal::new(ActiveTab::Products);
    let show_form = RwSignal::new(false);

    // Form state
    let draft = DraftSignals::new();
    let edit_id = RwSignal::new(None::<String>);
    let editing = Signal::derive(move || edit_id.get().is_some());
    let store_error = RwSignal::new(None::<String>);

    // Recomputed whenever the collection or the term changes
    let filtered = Signal::derive(move || {
        let term = search.get();
        store.with(|s| s.filtered(&term))
    });

    let thresholds = Signal::derive(move || store.with(|s| s.thresholds));

    // Submit: mutate the local collection directly, then reset and hide
    // the form
    let on_submit = Callback::new(move |()| {
        let payload = draft.snapshot();
        let target = edit_id.get_untracked();
        let result = store.try_update(|s| s.submit(target.as_deref(), payload));
        match result {
            Some(Err(e)) => store_error.set(Some(e.to_string())),
            _ => {
                store_error.set(None);
                draft.clear();
                edit_id.set(None);
                show_form.set(false);
            }
        }
    });

    let on_edit = Callback::new(move |product: Product| {
        draft.load(&product.to_draft());
        edit_id.set(Some(product.id));
        show_form.set(true);
    });

    let on_cancel = Callback::new(move |()| {
        draft.clear();
        edit_id.set(None);
        show_form.set(false);
    });

    let on_delete = Callback::new(move |id: String| {
        store.update(|s| {
            // Removal is immediate; a stale id is a no-op
            let _ = s.remove(&id);
        });
    });

    let on_add = Callback::new(move |()| {
        draft.clear();
        edit_id.set(None);
        show_form.set(true);
    });

    view! {
        <div class="p-6 max-w-4xl mx-auto">
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">"Gestion du Stock — Démo"</h1>
                <a href="/" class="text-sm text-green-700 hover:underline">
                    "Mode connecté"
                </a>
            </div>

            <TabBar tab=tab />

            <Show
                when=move || tab.get() == ActiveTab::Products
                fallback=move || view! {
                    <SettingsPanel store=store />
                }
            >
                <div class="flex gap-4 mb-4">
                    <TextInput
                        value=search
                        placeholder="Rechercher un produit..."
                        input_type="search"
                        class="flex-1"
                    />
                    <Button on_click=on_add>"Ajouter un produit"</Button>
                </div>

                <Show when=move || show_form.get()>
                    <ProductForm
                        draft=draft
                        editing=editing
                        on_submit=on_submit
                        on_cancel=on_cancel
                    />
                </Show>

                {move || store_error.get().map(|error| view! {
                    <div class="mb-4">
                        <ErrorDisplay error=error />
                    </div>
                })}

                <ProductList
                    products=filtered
                    thresholds=thresholds
                    on_edit=on_edit
                    on_delete=on_delete
                />
            </Show>
        </div>
    }
}

/// Products / settings tab navigation
#[component]
fn TabBar(tab: RwSignal<ActiveTab>) -> impl IntoView {
    let tabs = [ActiveTab::Products, ActiveTab::Settings];

    view! {
        <div class="flex gap-2 border-b border-gray-200 mb-6">
            {tabs.into_iter().map(|value| {
                let is_active = move || tab.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || {
                            if is_active() {
                                "px-4 py-2 font-semibold text-green-700 border-b-2 border-green-600"
                            } else {
                                "px-4 py-2 font-medium text-gray-500 hover:text-gray-800"
                            }
                        }
                        on:click=move |_| tab.set(value)
                    >
                        {value.to_string()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Settings panel editing the alert thresholds
///
/// The cutoffs feed straight into the stock badges on the products tab.
/// Unparsable input leaves the current thresholds untouched.
#[component]
fn SettingsPanel(store: RwSignal<ProductStore>) -> impl IntoView {
    let current = store.with_untracked(|s| s.thresholds);
    let critical_input = RwSignal::new(current.critical.to_string());
    let warning_input = RwSignal::new(current.warning.to_string());
    let applied = RwSignal::new(false);

    let on_apply = Callback::new(move |()| {
        let parsed = parse_thresholds(&critical_input.get_untracked(), &warning_input.get_untracked());
        if let Some(thresholds) = parsed {
            store.update(|s| s.thresholds = thresholds);
            applied.set(true);
        }
    });

    view! {
        <div class="bg-white rounded-2xl border border-gray-200 p-6 max-w-md space-y-4">
            <h2 class="font-bold text-lg text-gray-900">"Seuils d'alerte"</h2>
            <p class="text-sm text-gray-500">
                "Quantité en dessous de laquelle un produit passe en stock critique ou faible."
            </p>
            <div class="space-y-2">
                <label class="block text-sm font-medium text-gray-700">"Seuil critique"</label>
                <TextInput value=critical_input input_type="number" />
            </div>
            <div class="space-y-2">
                <label class="block text-sm font-medium text-gray-700">"Seuil faible"</label>
                <TextInput value=warning_input input_type="number" />
            </div>
            <div class="flex items-center gap-3">
                <Button on_click=on_apply>"Appliquer"</Button>
                <Show when=move || applied.get()>
                    <span class="text-sm text-green-700">"Seuils enregistrés"</span>
                </Show>
            </div>
        </div>
    }
}

/// Parse the two threshold fields; either failing keeps the old values.
fn parse_thresholds(critical: &str, warning: &str) -> Option<AlertThresholds> {
    let critical = critical.trim().parse::<i64>().ok()?;
    let warning = warning.trim().parse::<i64>().ok()?;
    Some(AlertThresholds { critical, warning })
}
