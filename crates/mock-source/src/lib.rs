//! Mock source implementations for testing.
//!
//! Two implementations of the [`Source`](source_core::Source) trait
//! that never touch the network:
//!
//! - [`CannedSource`] - serves fixed in-memory data
//! - [`FailingSource`] - fails every operation with a configured error

mod canned;
mod failing;

pub use canned::CannedSource;
pub use failing::{FailingSource, FailureKind};
