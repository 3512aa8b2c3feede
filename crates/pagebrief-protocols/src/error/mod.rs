//! Error types for the pagebrief protocol layer.

mod channel;
mod dom;
mod extraction;
mod store;
mod summary;

pub use channel::*;
pub use dom::*;
pub use extraction::*;
pub use store::*;
pub use summary::*;
