//! Extension traits for third-party types.
//!
//! Keep extensions namespaced by the crate they extend, e.g.
//! `crate::ext::serde_json` for `serde_json::Value` helpers.

pub mod serde_json;
