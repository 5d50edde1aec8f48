//! Flutter-facing bindings for the reading list core.

pub mod api;
