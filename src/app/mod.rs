//! Binary-local application wiring.
//!
//! `entry` turns parsed arguments into a running session; `demo` builds the
//! menu tree the binary shows.

pub(crate) mod demo;
pub(crate) mod entry;
