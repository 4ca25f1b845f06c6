// web_app/store.rs - The owned product collection
//
// All collection state lives in an explicit ProductStore that is passed by
// reference to the operations that mutate it. The demo page owns one
// directly; the server keeps one behind api::store for the remote variant.
//
// Philosophy: pure operations over owned state, no side effects, easy to
// test without a UI runtime.

use crate::web_app::model::{AlertThresholds, Product, ProductDraft};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by collection operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no product with id {0}")]
    UnknownId(String),
}

/// The product collection plus the alert thresholds that drive banding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStore {
    products: Vec<Product>,
    pub thresholds: AlertThresholds,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an existing collection.
    pub fn with_products(products: Vec<Product>) -> Self {
        ProductStore {
            products,
            thresholds: AlertThresholds::default(),
        }
    }

    /// The five-product demo catalog used by the local-simulation page
    /// and as the server seed.
    pub fn demo() -> Self {
        Self::with_products(demo_catalog())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a single record.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products whose name or description contains the term,
    /// case-insensitively. An empty term returns the full collection
    /// unchanged. The result preserves collection order.
    ///
    /// Recomputed on every call; with the list sizes involved there is
    /// nothing to memoize.
    pub fn filtered(&self, term: &str) -> Vec<Product> {
        if term.is_empty() {
            return self.products.clone();
        }
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Next free id: max over the numeric ids, plus one.
    ///
    /// Non-numeric ids are skipped by the scan; an empty collection
    /// starts at "1".
    pub fn next_id(&self) -> String {
        let max = self
            .products
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    /// Append the draft as a new record with a freshly assigned id.
    pub fn insert(&mut self, draft: ProductDraft) -> Product {
        let product = draft.into_product(self.next_id());
        self.products.push(product.clone());
        product
    }

    /// Replace the record with the given id in place, keeping its id and
    /// its position in the collection.
    pub fn update(&mut self, id: &str, draft: ProductDraft) -> Result<Product, StoreError> {
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::UnknownId(id.to_string()))?;
        *slot = draft.into_product(id.to_string());
        Ok(slot.clone())
    }

    /// Remove the record with the given id. The relative order of the
    /// remaining records is preserved.
    pub fn remove(&mut self, id: &str) -> Result<Product, StoreError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::UnknownId(id.to_string()))?;
        Ok(self.products.remove(index))
    }

    /// The form submit contract: update when an edit marker is set,
    /// insert otherwise.
    pub fn submit(
        &mut self,
        edit_id: Option<&str>,
        draft: ProductDraft,
    ) -> Result<Product, StoreError> {
        match edit_id {
            Some(id) => self.update(id, draft),
            None => Ok(self.insert(draft)),
        }
    }
}

/// Demo catalog shared by the demo page and the server seed.
pub fn demo_catalog() -> Vec<Product> {
    let items: [(&str, &str, &str, &str); 5] = [
        ("Clavier mécanique", "Clavier AZERTY rétroéclairé", "12", "149"),
        ("Souris sans fil", "Souris ergonomique 2.4 GHz", "30", "45"),
        ("Écran 27 pouces", "Dalle IPS QHD 144 Hz", "4", "899"),
        ("Disque SSD 1TB", "SSD NVMe, lecture 3500 Mo/s", "18", "239"),
        ("Câble HDMI 2m", "HDMI 2.1 tressé", "60", "19"),
    ];

    items
        .iter()
        .enumerate()
        .map(|(i, (name, description, quantity, price))| Product {
            id: (i + 1).to_string(),
            name: name.to_string(),
            description: description.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        })
        .collect()
}
