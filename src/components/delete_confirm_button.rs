//! Delete Confirm Button Component
//!
//! Inline delete confirmation: deleting an item is irreversible, so the
//! first click only asks.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a delete button initially. When clicked, shows `Delete "<name>"?`
/// with confirm/cancel buttons.
///
/// # Arguments
/// * `item_name` - Name shown in the question
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] item_name: String,
    on_confirm: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);
    let question = format!("Delete \"{}\"?", item_name);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="btn btnSmall btnDanger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "🗑 Delete"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{question.clone()}</span>
                <button
                    class="btn btnSmall btnDanger"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm();
                    }
                >
                    "Yes"
                </button>
                <button
                    class="btn btnSmall"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
