//! Toast Component

use leptos::prelude::*;

use crate::context::{use_app_context, ToastKind};

/// Transient notification; the context handles dismissal
#[component]
pub fn ToastView() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Info => "toast show",
                ToastKind::Warning => "toast show warning",
            };
            view! { <div class=class role="status">{toast.message}</div> }
        })}
    }
}
