//! Tax calculation and GST identifier handling

pub mod gst;
pub mod gstin;

pub use gst::*;
pub use gstin::*;
