//! Invoice drafting and the book of issued invoices

pub mod book;
pub mod draft;

pub use book::*;
pub use draft::*;
