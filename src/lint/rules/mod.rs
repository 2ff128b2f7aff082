//! Builtin rule tables.
//!
//! One module per document kind, plus the procedural connection-string
//! checks and the cross-document rules. Tables are ordered; order only
//! affects output ordering, never outcomes.

pub mod connection;
pub mod cross;
pub mod dashboard;
pub mod gateway;
pub mod pump;
