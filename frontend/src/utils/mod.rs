pub mod dom;
pub mod reveal;
pub mod timing;

pub use dom::listen;
