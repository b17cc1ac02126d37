//! GST number lookups

pub mod mock;

pub use mock::*;
