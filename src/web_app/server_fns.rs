// web_app/server_fns.rs - Leptos server function declarations
//
// These are the four remote-synchronization operations, accessible from
// both client (WASM) and server (native Rust). The #[server] macro
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// Read-after-write policy: mutating operations return the mutated record
// (or unit) and the inventory page re-fetches the full list afterwards.
// That costs one extra round trip per mutation and buys trivially
// guaranteed consistency, which is the right trade at this scale.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use crate::web_app::model::{Product, ProductDraft};
use leptos::prelude::*;

/// Fetch the full product collection.
#[server(ListProducts, "/api")]
pub async fn list_products() -> Result<Vec<Product>, ServerFnError> {
    use crate::web_app::api::store;

    let products = store::with_store(|s| s.products().to_vec());
    tracing::info!("List request: {} products", products.len());
    Ok(products)
}

/// Create a product from a draft; the server assigns the id.
#[server(CreateProduct, "/api")]
pub async fn create_product(draft: ProductDraft) -> Result<Product, ServerFnError> {
    use crate::web_app::api::store;

    let product = store::with_store(|s| s.insert(draft));
    tracing::info!("Created product {} ({})", product.id, product.name);
    Ok(product)
}

/// Replace the identified product with the draft (id preserved).
#[server(UpdateProduct, "/api")]
pub async fn update_product(id: String, draft: ProductDraft) -> Result<Product, ServerFnError> {
    use crate::web_app::api::store;

    let result = store::try_with_store(|s| s.update(&id, draft));
    match &result {
        Ok(product) => tracing::info!("Updated product {} ({})", product.id, product.name),
        Err(e) => tracing::error!("Update failed: {}", e),
    }
    result.map_err(|e| ServerFnError::new(e.to_string()))
}

/// Remove the identified product.
#[server(DeleteProduct, "/api")]
pub async fn delete_product(id: String) -> Result<(), ServerFnError> {
    use crate::web_app::api::store;

    let result = store::try_with_store(|s| s.remove(&id));
    match &result {
        Ok(product) => tracing::info!("Deleted product {} ({})", product.id, product.name),
        Err(e) => tracing::error!("Delete failed: {}", e),
    }
    result
        .map(|_| ())
        .map_err(|e| ServerFnError::new(e.to_string()))
}
