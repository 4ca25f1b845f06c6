// web_app/components/form.rs - Create/update product form
//
// Holds the draft in four text signals plus an edit marker owned by the
// page. Submit behavior: replace the marked record when editing,
// append a new one otherwise. No field-level validation: numeric fields
// accept arbitrary text and empty strings are submitted silently.

use crate::web_app::model::ProductDraft;
use leptos::prelude::*;

use super::common::{Button, SecondaryButton, TextInput};

/// The draft's four fields as signals, shared between page and form.
#[derive(Clone, Copy)]
pub struct DraftSignals {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub price: RwSignal<String>,
}

impl DraftSignals {
    pub fn new() -> Self {
        DraftSignals {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
        }
    }

    /// Current draft value.
    pub fn snapshot(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            quantity: self.quantity.get_untracked(),
            price: self.price.get_untracked(),
        }
    }

    /// Prefill from an existing record's draft.
    pub fn load(&self, draft: &ProductDraft) {
        self.name.set(draft.name.clone());
        self.description.set(draft.description.clone());
        self.quantity.set(draft.quantity.clone());
        self.price.set(draft.price.clone());
    }

    /// Reset to the empty draft.
    pub fn clear(&self) {
        self.load(&ProductDraft::default());
    }
}

impl Default for DraftSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// Submit button label, depending on whether an edit marker is set.
pub fn submit_label(editing: bool) -> &'static str {
    if editing {
        "Modifier le produit"
    } else {
        "Ajouter un produit"
    }
}

/// The create/update form
#[component]
pub fn ProductForm(
    /// Shared draft signals
    draft: DraftSignals,
    /// Whether an edit marker is currently set
    editing: Signal<bool>,
    /// Whether a submit is in flight (remote variant disables the form)
    #[prop(default = Signal::stored(false))]
    submitting: Signal<bool>,
    /// Called on submit; the page decides what to do with the draft
    on_submit: Callback<()>,
    /// Optional cancel handler (shown while editing)
    #[prop(optional, into)]
    on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form on:submit=handle_submit class="space-y-2 mb-6">
            <TextInput value=draft.name placeholder="Nom" />
            <TextInput value=draft.description placeholder="Description" />
            <TextInput value=draft.quantity placeholder="Quantité" input_type="number" />
            <TextInput value=draft.price placeholder="Prix" input_type="number" />
            <div class="flex gap-2">
                <Button button_type="submit" disabled=submitting>
                    {move || submit_label(editing.get())}
                </Button>
                {on_cancel.map(|handler| view! {
                    <Show when=move || editing.get()>
                        <SecondaryButton on_click=handler>
                            "Annuler"
                        </SecondaryButton>
                    </Show>
                })}
            </div>
        </form>
    }
}
