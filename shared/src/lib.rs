//! Shared types and domain logic for the Masa Madre Weather Advisor
//!
//! This crate contains everything that is pure computation: the wire types
//! exchanged with the weather proxy, the fermentation rule table, and the
//! rendering pipeline. It is shared between the backend and the WASM
//! renderer and performs no I/O of its own.

pub mod advice;
pub mod models;
pub mod render;
pub mod types;

pub use advice::*;
pub use models::*;
pub use types::*;
