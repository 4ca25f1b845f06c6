// web_app/api/mod.rs - Server-side state for the web application
//
// This module holds the process-global product collection that the
// server functions operate on.

pub mod store;
