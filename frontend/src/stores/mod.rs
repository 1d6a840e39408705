pub mod map;
pub mod modal;
mod store;

pub use store::{Store, Subscription};
