//! Route and collection view projections.
//!
//! # Responsibility
//! - Resolve paths to the three collection screens.
//! - Turn store state into render models and route user actions back.

pub mod collection;
pub mod router;
