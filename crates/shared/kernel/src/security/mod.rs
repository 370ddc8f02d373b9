//! Response hardening and asset origin policy.

#[cfg(feature = "server")]
pub mod headers;
pub mod images;
