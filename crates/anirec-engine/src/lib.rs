//! # anirec-engine
//!
//! Turns a query name and a requested count into a ranked recommendation list:
//! resolve name → sigmoid-kernel scores → rank and truncate → format.

pub mod engine;
pub mod format;
pub mod kernel;
pub mod ranking;
pub mod resolve;

pub use engine::RecommendationEngine;
pub use kernel::SigmoidKernel;
pub use ranking::{rank_and_truncate, ScoredRow};
pub use resolve::{NameResolver, ResolvedName};
