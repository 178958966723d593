//! Browser-free model of the restaurant site's interactive behaviour.
//!
//! Every state transition the page performs (cart quantities, menu filtering,
//! language direction, navigation menu, scroll affordances, toasts) lives here
//! as plain data and functions so it can be tested without a document.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod gallery;
pub mod language;
pub mod navigation;
pub mod order;
pub mod scroll;
pub mod timing;
pub mod toast;

pub use cart::{Cart, ItemId, QuantityAction, QuantityUpdate};
pub use catalog::{filter_by_category, search, CategoryFilter, MenuItem};
pub use config::SiteConfig;
pub use error::{ConfigError, FormError, LanguageError, SiteError};
pub use form::FormPhase;
pub use gallery::{gallery_images, GalleryImage, FALLBACK_IMAGES};
pub use language::{Language, TextDirection};
pub use navigation::{LinkHighlight, MenuState, NavEntry, Section, TabWrap};
pub use order::OrderLinks;
pub use scroll::ScrollSnapshot;
pub use timing::{FrameGate, Throttle};
pub use toast::{Toast, ToastId, ToastQueue};
