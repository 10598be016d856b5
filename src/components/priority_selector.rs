//! Priority Selector Component
//!
//! Low / medium / high toggle buttons for the item form.

use leptos::prelude::*;
use wishlist_core::Priority;

/// Priority buttons, one active at a time
#[component]
pub fn PrioritySelector(
    #[prop(into)] current: Signal<Priority>,
    on_change: impl Fn(Priority) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="priority-selector" role="radiogroup">
            {Priority::ALL.iter().map(|priority| {
                let priority = *priority;
                let is_selected = move || current.get() == priority;
                view! {
                    <button
                        type="button"
                        class=move || {
                            if is_selected() {
                                format!("badge {} active", priority.as_str())
                            } else {
                                format!("badge {}", priority.as_str())
                            }
                        }
                        aria-checked=move || if is_selected() { "true" } else { "false" }
                        on:click=move |_| on_change(priority)
                    >
                        {priority.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
