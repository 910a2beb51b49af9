//! # Workflows - Portable Business Logic
//!
//! Multi-step operations shared by every frontend. Each workflow mutates
//! the relevant store cell and then persists that store's snapshot, so a
//! host that only ever calls workflows keeps storage in step with state.
//!
//! Patterns:
//! - Workflows take `&AppCore` and return `Result<T, AppError>`
//! - State mutation is synchronous (one `modify` per workflow); only the
//!   effect calls await
//! - Display formatting stays in the frontend; workflows return domain
//!   types

pub mod church;
pub mod members;
pub mod session;
pub mod tithes;

pub use church::{set_tribe_manager, update_church_info};
pub use members::add_member;
pub use session::{login, logout};
pub use tithes::register_tithe;
