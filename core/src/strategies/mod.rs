#![deny(missing_docs)]

//! # Strategy Pattern Interfaces
//!
//! Decouples the synthesizer from the destination routing convention.

mod file_router;
mod traits;

pub use file_router::FileRouterStrategy;
pub use traits::TargetStrategy;
