// web_app/components/product.rs - Product display components
//
// Components for displaying products:
// - StockBadge: Low-stock band indicator
// - ProductRow: One list entry with edit/delete actions
// - ProductList: The list with count header and empty state

use crate::web_app::model::{format_price, AlertThresholds, Product, StockBand};
use leptos::prelude::*;

/// CSS class for a band.
fn band_class(band: StockBand) -> &'static str {
    match band {
        StockBand::Critical => "text-xs px-2 py-1 bg-red-100 text-red-700 rounded-full font-medium",
        StockBand::Warning => {
            "text-xs px-2 py-1 bg-yellow-100 text-yellow-800 rounded-full font-medium"
        }
        StockBand::Normal => {
            "text-xs px-2 py-1 bg-green-100 text-green-700 rounded-full font-medium"
        }
    }
}

/// Low-stock band indicator
///
/// Color-codes the band derived from the quantity text, tracking the
/// thresholds signal so settings edits reband the visible list.
/// Unparsable quantities land in the Normal band without any visible
/// error.
#[component]
pub fn StockBadge(
    /// Raw quantity text
    quantity: String,
    /// Cutoffs to classify against
    thresholds: Signal<AlertThresholds>,
) -> impl IntoView {
    let band = Memo::new(move |_| StockBand::for_quantity(&quantity, &thresholds.get()));

    view! {
        <span class=move || band_class(band.get())>
            {move || band.get().to_string()}
        </span>
    }
}

/// One product entry in the list
#[component]
pub fn ProductRow(
    /// The record to display
    product: Product,
    /// Cutoffs for the stock badge
    thresholds: Signal<AlertThresholds>,
    /// Edit handler, receives the full record to prefill the form
    on_edit: Callback<Product>,
    /// Delete handler, receives the id; removal is immediate, no
    /// confirmation step
    on_delete: Callback<String>,
) -> impl IntoView {
    let edit_target = product.clone();
    let delete_id = product.id.clone();
    let price_display = format_price(&product.price);

    view! {
        <li class="border border-gray-200 bg-white p-4 rounded-xl shadow-sm flex justify-between items-center gap-4">
            <div class="min-w-0">
                <div class="flex items-center gap-3 mb-1">
                    <h2 class="font-bold text-lg text-gray-900 truncate">{product.name.clone()}</h2>
                    <StockBadge quantity=product.quantity.clone() thresholds=thresholds />
                </div>
                <p class="text-gray-600 text-sm mb-1">{product.description.clone()}</p>
                <p class="text-gray-500 text-sm">
                    "Quantité: " {product.quantity.clone()} " | Prix: " {price_display}
                </p>
            </div>
            <div class="flex gap-2 flex-shrink-0">
                <button
                    type="button"
                    class="bg-blue-500 text-white px-3 py-1 rounded hover:bg-blue-600 transition-colors"
                    on:click=move |_| on_edit.run(edit_target.clone())
                >
                    "Modifier"
                </button>
                <button
                    type="button"
                    class="bg-red-500 text-white px-3 py-1 rounded hover:bg-red-600 transition-colors"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Supprimer"
                </button>
            </div>
        </li>
    }
}

/// Product list with count header and empty state
#[component]
pub fn ProductList(
    /// Products to display (already filtered by the page)
    products: Signal<Vec<Product>>,
    /// Cutoffs for the stock badges
    thresholds: Signal<AlertThresholds>,
    /// Edit handler
    on_edit: Callback<Product>,
    /// Delete handler
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            <div class="flex justify-between items-center mb-4">
                <span class="text-gray-500 font-medium">
                    {move || {
                        let count = products.get().len();
                        if count == 1 {
                            "1 produit".to_string()
                        } else {
                            format!("{} produits", count)
                        }
                    }}
                </span>
            </div>

            <Show
                when=move || !products.get().is_empty()
                fallback=|| view! {
                    <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
                        <div class="text-gray-300 text-6xl mb-4">"📦"</div>
                        <h3 class="text-xl font-bold text-gray-900 mb-2">"Aucun produit"</h3>
                        <p class="text-gray-500 max-w-md mx-auto">
                            "Aucun produit ne correspond. Ajustez la recherche ou ajoutez un produit."
                        </p>
                    </div>
                }
            >
                <ul class="space-y-3">
                    // Keyed by the whole record so an in-place edit
                    // re-renders its row
                    <For
                        each=move || products.get()
                        key=|p| p.clone()
                        children=move |product| {
                            view! {
                                <ProductRow
                                    product=product
                                    thresholds=thresholds
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
