pub mod gallery;
pub mod mobile_menu;
pub mod order_modal;
pub mod scroll_progress;
pub mod scroll_top;
pub mod toast;
