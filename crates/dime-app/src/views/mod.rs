//! View states
//!
//! One state struct per screen-facing store. Each is a plain value: pure
//! queries, synchronous mutations, no I/O. The application core holds them
//! in `StoreCell`s and the workflow layer drives persistence.

pub mod church;
pub mod members;
pub mod session;
pub mod tithes;

pub use church::ChurchState;
pub use members::{MembersState, TribeFilter, DEFAULT_PAGE_SIZE};
pub use session::{credentials_valid, SessionState, OPERATOR_PASSWORD, OPERATOR_USERNAME};
pub use tithes::TithesState;
