//! Domain models for CPU scheduling simulation.
//!
//! # Model Hierarchy
//!
//! ```text
//! ProcessSpec (immutable input: id, arrival, burst)
//!     ↓ policy run
//! ProcessResult (finish time + Timeline of Slices)
//!     ↓ collected
//! Schedule (one policy's complete outcome, input order)
//! ```

pub mod process;
pub mod schedule;
pub mod timeline;

pub use process::{ProcessSpec, Tick};
pub use schedule::{Policy, ProcessResult, Schedule};
pub use timeline::{Slice, Timeline};
