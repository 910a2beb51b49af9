//! Dime Effects - Handler Implementations
//!
//! Concrete implementations of the effect interfaces declared in
//! `dime-core`. Production hosts wire `SystemClock` and
//! `FilesystemStorage`; tests and ephemeral hosts wire `FixedClock` and
//! `MemoryStorage`. Nothing here knows about the domain model.

#![forbid(unsafe_code)]

/// Clock handlers: system-backed and deterministic
pub mod clock;

/// Storage handlers: filesystem-backed and in-memory
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use storage::{FilesystemStorage, MemoryStorage};
