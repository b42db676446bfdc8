//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define the sequence-level storage contract used by the note store.
//! - Keep sequence layout details away from use-case orchestration.
//!
//! # Invariants
//! - Repositories perform no validation; callers own category rules.
//! - Nothing is persisted: dropping a repository drops its notes.

pub mod sequence_repo;
