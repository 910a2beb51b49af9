//! Pure effect interfaces
//!
//! The application core never reaches for wall-clock time or durable storage
//! directly. It goes through these trait objects, so hosts decide the real
//! implementation and tests substitute deterministic ones.

pub mod clock;
pub mod storage;

pub use clock::{ClockEffects, ClockError};
pub use storage::{StorageEffects, StorageError};
