pub mod interaction;
pub mod navigation;

pub use interaction::InteractionController;
pub use navigation::NavigationController;
