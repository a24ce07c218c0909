//! Fragment building API

pub mod builder;
pub mod cdata;
pub mod options;
