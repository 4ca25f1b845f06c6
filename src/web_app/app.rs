// web_app/app.rs - Root application component
//
// Entry point for the Leptos application: meta tags, routing, and the
// two page variants.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::{DemoPage, InventoryPage};

/// Root application component
///
/// Routes:
/// - "/"     -> remote-backed inventory
/// - "/demo" -> local in-memory demo
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text="Gestion du Stock" />
        <Meta name="description" content="Gestion de stock: liste, recherche, création, modification et suppression de produits" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/stock_manager.css" />

        <Router>
            <main class="min-h-screen bg-gray-50 font-sans text-gray-900">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=InventoryPage />
                    <Route path=path!("/demo") view=DemoPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page introuvable"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-green-600 text-white rounded-lg hover:bg-green-700 transition-colors"
                >
                    "Retour au stock"
                </a>
            </div>
        </div>
    }
}
