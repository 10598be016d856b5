//! Item Card Component
//!
//! One wishlist entry in the grid.

use leptos::prelude::*;
use wishlist_core::Item;

use crate::components::{open_form, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::format::price_label;
use crate::store::FormStore;

#[component]
pub fn ItemCard(item: Item, form: FormStore) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let bought = item.bought;
    let badge_class = format!("badge {}", item.priority.as_str());

    let on_toggle = move |_| {
        if let Some(result) = ctx.mutate(|w| w.toggle_bought(id)) {
            ctx.report(result);
        }
    };

    let on_edit = move |_| open_form(ctx, form, Some(id));

    let on_delete = move || {
        if let Some(result) = ctx.mutate(|w| w.delete(id)) {
            ctx.report(result);
        }
    };

    let notes = if item.has_notes() {
        view! { <div>{item.notes.clone()}</div> }.into_any()
    } else {
        view! { <div class="muted">"(No notes)"</div> }.into_any()
    };

    let link = item.has_url().then(|| view! {
        <div class="linkWrap">
            <a class="link" href=item.url.clone() target="_blank" rel="noreferrer">"Open link"</a>
        </div>
    });

    view! {
        <div class=if bought { "card bought" } else { "card" }>
            <div class="cardTop">
                <div class="left">
                    <button
                        type="button"
                        class=if bought { "check checked" } else { "check" }
                        title="Mark as bought"
                        aria-pressed=if bought { "true" } else { "false" }
                        on:click=on_toggle
                    >
                        "✓"
                    </button>
                    <div class="meta">
                        <p class="name">{item.name.clone()}</p>
                        <div class="subline">
                            <span class=badge_class>{item.priority.label()}</span>
                            <span>"•"</span>
                            <span>{price_label(item.price)}</span>
                            {bought.then(|| view! { <span class="bought-mark">"• Bought"</span> })}
                        </div>
                    </div>
                </div>
            </div>

            <div class="cardBody">
                {notes}
                {link}
            </div>

            <div class="cardBottom">
                <button type="button" class="btn btnSmall" on:click=on_edit>"✎ Edit"</button>
                <DeleteConfirmButton item_name=item.name.clone() on_confirm=on_delete />
            </div>
        </div>
    }
}
