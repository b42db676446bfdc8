//! Domain model for notes and their categories.
//!
//! # Responsibility
//! - Define the canonical note record shared by every view.
//! - Define the three mutually exclusive categories a note can belong to.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Category membership is not stored on the note; it is implied by which
//!   sequence holds it.

pub mod category;
pub mod note;
