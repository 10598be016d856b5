//! Application Context
//!
//! Shared state provided via Leptos Context API. The wishlist handle is
//! the only place items and view state live; components read it after
//! tracking `render_trigger` and mutate it through `mutate`.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use wishlist_core::{Applied, DomainError, DomainResult, LoadStatus, SystemClock, Wishlist, WishlistConfig};

use crate::storage::LocalStorageSlot;
use crate::timer::TimerSlot;

pub type AppWishlist = Wishlist<LocalStorageSlot, SystemClock>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped by the wishlist after every state change - read
    pub render_trigger: ReadSignal<u32>,
    /// Currently visible toast - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Currently visible toast - write
    set_toast: WriteSignal<Option<Toast>>,
    /// Pending auto-dismiss; replacing it cancels the old one
    toast_timer: StoredValue<TimerSlot, LocalStorage>,
    wishlist: StoredValue<AppWishlist, LocalStorage>,
    config: StoredValue<WishlistConfig>,
}

impl AppContext {
    pub fn new(config: WishlistConfig) -> Self {
        let (render_trigger, set_render_trigger) = signal(0u32);
        let (toast, set_toast) = signal::<Option<Toast>>(None);

        let mut wishlist = Wishlist::open(LocalStorageSlot, SystemClock, &config);
        wishlist.subscribe(move || set_render_trigger.update(|v| *v = v.wrapping_add(1)));

        let ctx = Self {
            render_trigger,
            toast,
            set_toast,
            toast_timer: StoredValue::new_local(TimerSlot::default()),
            wishlist: StoredValue::new_local(wishlist),
            config: StoredValue::new(config),
        };
        ctx.report_load_status();
        ctx
    }

    pub fn config(&self) -> WishlistConfig {
        self.config.get_value()
    }

    /// Read the wishlist and subscribe the calling view to changes
    pub fn read<R>(&self, f: impl FnOnce(&AppWishlist) -> R) -> R {
        self.render_trigger.track();
        self.wishlist.with_value(f)
    }

    /// Run an intent against the wishlist. `None` only if the app is being torn down.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut AppWishlist) -> R) -> Option<R> {
        self.wishlist.try_update_value(f)
    }

    /// Toast the notice of a successful item intent, log the rest.
    /// Validation errors are left to the form.
    pub fn report(&self, result: DomainResult<Applied>) -> Option<Applied> {
        let applied = match result {
            Ok(applied) => {
                self.notify(applied.notice.message(), ToastKind::Info);
                Some(applied)
            }
            Err(e @ DomainError::NotFound(_)) => {
                log::debug!("[APP] ignoring stale reference: {}", e);
                None
            }
            Err(e) => {
                log::warn!("[APP] intent failed: {}", e);
                None
            }
        };
        self.report_storage_error();
        applied
    }

    /// A failed write wins over the success toast: the user should know
    /// the change only lives in this tab.
    pub fn report_storage_error(&self) {
        if let Some(Some(e)) = self.mutate(|w| w.take_storage_error()) {
            log::warn!("[APP] {}", e);
            self.notify("Couldn't save to this browser; changes last until the tab closes", ToastKind::Warning);
        }
    }

    fn report_load_status(&self) {
        let status = self.wishlist.with_value(|w| w.load_status().clone());
        if let LoadStatus::Recovered(e) = status {
            log::warn!("[APP] saved wishlist unusable: {}", e);
            self.notify("Saved wishlist couldn't be read, starting fresh", ToastKind::Warning);
        }
    }

    /// Show a toast, replacing any visible one and its dismiss timer
    pub fn notify(&self, message: &str, kind: ToastKind) {
        self.set_toast.set(Some(Toast {
            message: message.to_string(),
            kind,
        }));
        let set_toast = self.set_toast;
        let toast_ms = self.config.with_value(|c| c.toast_ms);
        self.toast_timer
            .update_value(|timer| timer.schedule(toast_ms, move || set_toast.set(None)));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
