//! gpx-fragments - GPX XML fragments for memory-constrained tracking devices

mod fragment;

pub use fragment::builder::{GpxFragments, RTEPT, TRKPT, WPT};
pub use fragment::cdata::wrap_cdata;
pub use fragment::options::DocumentOptions;
