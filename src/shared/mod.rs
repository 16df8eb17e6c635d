//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::TrackerOptions;
