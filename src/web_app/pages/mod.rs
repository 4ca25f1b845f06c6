// web_app/pages/mod.rs - Page components module
//
// - InventoryPage: remote-backed inventory (server-function synchronization)
// - DemoPage: self-contained in-memory demo with search, tabs and settings

pub mod demo;
pub mod inventory;

// Re-export page components
pub use demo::DemoPage;
pub use inventory::InventoryPage;
