//! # anirec-store
//!
//! Holds the offline pipeline's artifacts (vectorizer, feature matrix, name
//! index, metadata) as immutable, process-wide state.
//!
//! The store is a two-state machine: `Unloaded` until a load succeeds, then
//! `Ready` for the rest of its life. A failed load leaves it `Unloaded` and
//! every read fails with `ServiceUnavailable`.

pub mod artifacts;
pub mod loader;
pub mod store;

pub use artifacts::Artifacts;
pub use store::ArtifactStore;
