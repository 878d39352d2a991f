//! UI Components
//!
//! Leptos components making up the dashboard.

mod search_bar;
mod sweet_list;
mod sweet_card;
mod add_sweet_modal;
mod restock_modal;
mod purchase_modal;
mod cart_panel;
mod toast_stack;
mod diagnostics_panel;

pub use search_bar::SearchBar;
pub use sweet_list::SweetList;
pub use sweet_card::SweetCard;
pub use add_sweet_modal::AddSweetModal;
pub use restock_modal::RestockModal;
pub use purchase_modal::PurchaseModal;
pub use cart_panel::CartPanel;
pub use toast_stack::ToastStack;
pub use diagnostics_panel::DiagnosticsPanel;
