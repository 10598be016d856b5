//! UI Components
//!
//! Leptos components for the wishlist page.

mod delete_confirm_button;
mod item_card;
mod item_form;
mod item_grid;
mod priority_selector;
mod toast;
mod toolbar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_card::ItemCard;
pub use item_form::{open_form, ItemFormModal};
pub use item_grid::ItemGrid;
pub use priority_selector::PrioritySelector;
pub use toast::ToastView;
pub use toolbar::{FilterChips, Toolbar};
