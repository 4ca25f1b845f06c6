// web_app/pages/inventory.rs - Remote-backed inventory page
//
// Products live in a server-side collection reached through the four
// server functions. Read-after-write: every completed mutation triggers a
// full re-fetch of the list. The form is disabled while a mutation is in
// flight, so two mutations never interleave observably.

use crate::web_app::components::*;
use crate::web_app::model::{AlertThresholds, Product};
use crate::web_app::server_fns::{create_product, delete_product, list_products, update_product};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Remote-backed inventory page
#[component]
pub fn InventoryPage() -> impl IntoView {
    // Form state
    let draft = DraftSignals::new();
    let edit_id = RwSignal::new(None::<String>);
    let editing = Signal::derive(move || edit_id.get().is_some());

    // Mutation state
    let pending = RwSignal::new(false);
    let mutation_error = RwSignal::new(None::<String>);

    // The product list, re-fetched on every mutation
    let products = Resource::new(|| (), |_| async { list_products().await });

    let product_list = Signal::derive(move || {
        products
            .get()
            .and_then(|r: Result<Vec<Product>, ServerFnError>| r.ok())
            .unwrap_or_default()
    });

    let thresholds = Signal::stored(AlertThresholds::default());

    // Submit: update when the edit marker is set, create otherwise.
    // After either path the draft resets and the list is re-fetched.
    let on_submit = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        let payload = draft.snapshot();
        let target = edit_id.get_untracked();
        pending.set(true);

        spawn_local(async move {
            let result = match target {
                Some(id) => update_product(id, payload).await.map(|_| ()),
                None => create_product(payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    draft.clear();
                    edit_id.set(None);
                    mutation_error.set(None);
                    products.refetch();
                }
                Err(e) => mutation_error.set(Some(e.to_string())),
            }
            pending.set(false);
        });
    });

    let on_edit = Callback::new(move |product: Product| {
        draft.load(&product.to_draft());
        edit_id.set(Some(product.id));
    });

    let on_cancel = Callback::new(move |()| {
        draft.clear();
        edit_id.set(None);
    });

    // Immediate removal, no confirmation step
    let on_delete = Callback::new(move |id: String| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        spawn_local(async move {
            match delete_product(id).await {
                Ok(()) => {
                    mutation_error.set(None);
                    products.refetch();
                }
                Err(e) => mutation_error.set(Some(e.to_string())),
            }
            pending.set(false);
        });
    });

    let on_retry = Callback::new(move |()| {
        mutation_error.set(None);
        products.refetch();
    });

    view! {
        <div class="p-6 max-w-4xl mx-auto">
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">"Gestion du Stock"</h1>
                <a href="/demo" class="text-sm text-green-700 hover:underline">
                    "Mode démo"
                </a>
            </div>

            <ProductForm
                draft=draft
                editing=editing
                submitting=pending.into()
                on_submit=on_submit
                on_cancel=on_cancel
            />

            {move || mutation_error.get().map(|error| view! {
                <div class="mb-4">
                    <ErrorDisplay error=error on_retry=on_retry />
                </div>
            })}

            <Suspense fallback=move || view! { <Loading message="Chargement des produits..." /> }>
                {move || {
                    match products.get() {
                        None => view! { <Loading message="Initialisation..." /> }.into_any(),
                        Some(Err(e)) => view! {
                            <ErrorDisplay error=e.to_string() on_retry=on_retry />
                        }.into_any(),
                        Some(Ok(_)) => view! {
                            <ProductList
                                products=product_list
                                thresholds=thresholds
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }.into_any(),
                    }
                }}
            </Suspense>
        </div>
    }
}
