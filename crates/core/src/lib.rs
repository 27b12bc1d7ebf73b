//! # Carnet Core
//!
//! Domain types and the slot generator shared by the database and API crates.
//! Nothing in this crate performs I/O.

pub mod errors;
pub mod models;
pub mod slots;
pub mod time;
