//! Toolbar Component
//!
//! Search box, sort select, reset button and the bought-state chips.

use leptos::prelude::*;
use wishlist_core::{Filter, SortMode};

use crate::context::{use_app_context, ToastKind};

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();

    // Raw text as typed; the wishlist keeps the normalized query
    let (search_text, set_search_text) = signal(String::new());
    let sort = move || ctx.read(|w| w.view_state().sort);

    let on_reset = move |_| {
        set_search_text.set(String::new());
        if let Some(notice) = ctx.mutate(|w| w.reset()) {
            ctx.notify(notice.message(), ToastKind::Info);
        }
    };

    view! {
        <div class="toolbar">
            <input
                type="search"
                class="search"
                placeholder="Search name or notes..."
                prop:value=move || search_text.get()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    ctx.mutate(|w| w.set_query(&raw));
                    set_search_text.set(raw);
                }
            />
            <select
                class="sort"
                prop:value=move || sort().as_str()
                on:change=move |ev| {
                    let sort = SortMode::from_str(&event_target_value(&ev));
                    ctx.mutate(|w| w.set_sort(sort));
                }
            >
                {SortMode::ALL.iter().map(|mode| view! {
                    <option value=mode.as_str()>{mode.label()}</option>
                }).collect_view()}
            </select>
            <button type="button" class="btn" on:click=on_reset>"Reset"</button>
        </div>
        <FilterChips />
    }
}

/// All / bought / not bought chips
#[component]
pub fn FilterChips() -> impl IntoView {
    let ctx = use_app_context();
    let active = move || ctx.read(|w| w.view_state().filter);

    view! {
        <div class="chips" role="tablist">
            {Filter::ALL.iter().map(|filter| {
                let filter = *filter;
                let is_active = move || active() == filter;
                view! {
                    <button
                        type="button"
                        role="tab"
                        class=move || if is_active() { "chip active" } else { "chip" }
                        aria-selected=move || if is_active() { "true" } else { "false" }
                        on:click=move |_| {
                            ctx.mutate(|w| w.set_filter(filter));
                        }
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
