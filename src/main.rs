//! Wishlist Frontend Entry Point

mod app;
mod components;
mod context;
mod format;
mod logger;
mod storage;
mod store;
mod timer;

use app::App;
use leptos::prelude::*;
use wishlist_core::WishlistConfig;

use storage::LocalStorageSlot;

fn main() {
    console_error_panic_hook::set_once();

    let config = WishlistConfig::load_from(&LocalStorageSlot);
    logger::init(config.level_filter());
    log::info!("[APP] starting with storage key `{}`", config.storage_key);

    mount_to_body(move || view! { <App config=config /> });
}
