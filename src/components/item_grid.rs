//! Item Grid Component
//!
//! Cards for the derived view, or an empty-state message explaining why
//! there are none.

use leptos::prelude::*;
use wishlist_core::EmptyState;

use crate::components::{open_form, ItemCard};
use crate::context::use_app_context;
use crate::store::FormStore;

#[component]
pub fn ItemGrid(form: FormStore) -> impl IntoView {
    let ctx = use_app_context();

    let visible = move || ctx.read(|w| w.derive_view());
    let empty = move || ctx.read(|w| w.empty_state());

    view! {
        {move || empty().map(|state| match state {
            EmptyState::NoItems => view! {
                <div class="emptyState">
                    <h3>"Your wishlist is empty"</h3>
                    <p>"Add the first thing you want so it's more than a daydream."</p>
                    <button type="button" class="btn btnPrimary" on:click=move |_| open_form(ctx, form, None)>
                        "+ Add item"
                    </button>
                </div>
            }.into_any(),
            EmptyState::NoMatches => view! {
                <div class="emptyState">
                    <h3>"No results"</h3>
                    <p>"Try another keyword or filter. Your wishlist is still here."</p>
                </div>
            }.into_any(),
        })}

        <div class="grid">
            // updated_at moves on every edit, so changed cards re-render
            <For
                each=visible
                key=|item| (item.id, item.updated_at, item.bought)
                children=move |item| view! { <ItemCard item=item form=form /> }
            />
        </div>
    }
}
