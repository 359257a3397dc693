//! Domain availability probing.
//!
//! This module provides the `DomainProbe` seam used by the domain generator
//! and its DNS-backed implementation built on `hickory-resolver`.

mod probe;

// Re-export public API
pub use probe::{DnsProbe, DomainProbe};
