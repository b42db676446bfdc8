//! Flutter-facing bindings over `keepnote_core`.

pub mod api;
