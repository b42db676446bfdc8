//! Core use-case services.
//!
//! # Responsibility
//! - Own note state and its mutation rules (`note_store`).
//! - Buffer user input before it reaches the store (`draft`).
//! - Keep UI/FFI layers decoupled from sequence storage details.

pub mod draft;
pub mod note_store;
