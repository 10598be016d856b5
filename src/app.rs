//! Wishlist App
//!
//! Main application component: header with stats, toolbar, card grid,
//! the add/edit modal and the toast.

use leptos::prelude::*;
use reactive_stores::Store;
use wishlist_core::WishlistConfig;

use crate::components::{open_form, ItemFormModal, ItemGrid, ToastView, Toolbar};
use crate::context::AppContext;
use crate::format::stats_line;
use crate::store::FormState;

#[component]
pub fn App(config: WishlistConfig) -> impl IntoView {
    // Owns the wishlist for the rest of the session
    let ctx = AppContext::new(config);
    provide_context(ctx);

    let form = Store::new(FormState::default());

    let stats = move || ctx.read(|w| stats_line(w.stats()));

    view! {
        <div class="app">
            <header class="header">
                <div>
                    <h1>"Wishlist"</h1>
                    <p class="stats">{stats}</p>
                </div>
                <button type="button" class="btn btnPrimary" on:click=move |_| open_form(ctx, form, None)>
                    "+ Add item"
                </button>
            </header>

            <Toolbar />

            <ItemGrid form=form />

            <ItemFormModal form=form />

            <ToastView />
        </div>
    }
}
