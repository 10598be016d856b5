//! Item Form Component
//!
//! Modal for adding or editing an item. The wishlist's edit session
//! decides whether it is open and what saving does.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use wishlist_core::{DomainError, EditSession, ItemId};

use crate::components::PrioritySelector;
use crate::context::{use_app_context, AppContext};
use crate::store::{store_draft, store_open_form, store_set_error, FormStateStoreFields, FormStore};
use crate::timer::TimerSlot;

/// Start a create (`None`) or edit session and fill the form for it.
/// Stale ids are ignored.
pub fn open_form(ctx: AppContext, form: FormStore, id: Option<ItemId>) {
    let intent = match id {
        Some(id) => match ctx.mutate(|w| w.begin_edit(id)) {
            Some(Ok(intent)) => intent,
            Some(Err(e)) => {
                log::debug!("[FORM] not opening editor: {}", e);
                return;
            }
            None => return,
        },
        None => match ctx.mutate(|w| w.begin_create()) {
            Some(intent) => intent,
            None => return,
        },
    };
    store_open_form(&form, &intent);
}

#[component]
pub fn ItemFormModal(form: FormStore) -> impl IntoView {
    let ctx = use_app_context();
    let name_ref = NodeRef::<leptos::html::Input>::new();

    let session = move || ctx.read(|w| w.session());
    let is_open = Memo::new(move |_| session().is_open());

    // Focus the name input shortly after the modal becomes visible.
    // Closing or reopening first cancels a focus still pending.
    let focus_delay = ctx.config().focus_delay_ms;
    let focus_timer: StoredValue<TimerSlot, LocalStorage> = StoredValue::new_local(TimerSlot::default());
    Effect::new(move |_| {
        if is_open.get() {
            focus_timer.update_value(|timer| {
                timer.schedule(focus_delay, move || {
                    if let Some(input) = name_ref.get_untracked() {
                        let _ = input.focus();
                    }
                })
            });
        } else {
            focus_timer.update_value(|timer| timer.cancel());
        }
    });

    let close = move || {
        ctx.mutate(|w| w.end_session());
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = store_draft(&form);
        match ctx.mutate(|w| w.submit(draft)) {
            Some(Err(DomainError::Validation(e))) => store_set_error(&form, &e),
            Some(result) => {
                ctx.report(result);
            }
            None => {}
        }
    };

    view! {
        <div
            class=move || if is_open.get() { "modalOverlay show" } else { "modalOverlay" }
            aria-hidden=move || if is_open.get() { "false" } else { "true" }
            on:click=move |_| close()
        >
            <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=on_save>
                <div class="modalHeader">
                    <h2>
                        {move || match session() {
                            EditSession::Editing(_) => "Edit item",
                            _ => "Add item",
                        }}
                    </h2>
                    <button type="button" class="btn btnSmall" aria-label="Close" on:click=move |_| close()>"✕"</button>
                </div>

                <label class="field">
                    <span>"Name"</span>
                    <input
                        node_ref=name_ref
                        type="text"
                        placeholder="e.g. Headphone"
                        prop:value=move || form.name().get()
                        on:input=move |ev| {
                            *form.name().write() = event_target_value(&ev);
                        }
                    />
                </label>
                <Show when=move || form.error().get().is_some()>
                    <p class="formError show">{move || form.error().get().unwrap_or_default()}</p>
                </Show>

                <div class="field">
                    <span>"Priority"</span>
                    <PrioritySelector
                        current=Signal::derive(move || form.priority().get())
                        on_change=move |priority| {
                            *form.priority().write() = priority;
                        }
                    />
                </div>

                <label class="field">
                    <span>"Price (Rp)"</span>
                    <input
                        type="number"
                        min="0"
                        step="1"
                        placeholder="0"
                        prop:value=move || form.price().get()
                        on:input=move |ev| {
                            *form.price().write() = event_target_value(&ev);
                        }
                    />
                </label>

                <label class="field">
                    <span>"Notes"</span>
                    <input
                        type="text"
                        placeholder="Color, size, where to buy..."
                        prop:value=move || form.notes().get()
                        on:input=move |ev| {
                            *form.notes().write() = event_target_value(&ev);
                        }
                    />
                </label>

                <label class="field">
                    <span>"Link"</span>
                    <input
                        type="url"
                        placeholder="https://..."
                        prop:value=move || form.url().get()
                        on:input=move |ev| {
                            *form.url().write() = event_target_value(&ev);
                        }
                    />
                </label>

                <Show when=move || form.show_bought().get()>
                    <label class="field checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.bought().get()
                            on:change=move |ev| {
                                *form.bought().write() = event_target_checked(&ev);
                            }
                        />
                        <span>"Already bought"</span>
                    </label>
                </Show>

                <div class="modalFooter">
                    <button type="button" class="btn" on:click=move |_| close()>"Cancel"</button>
                    <button type="submit" class="btn btnPrimary">"Save"</button>
                </div>
            </form>
        </div>
    }
}
