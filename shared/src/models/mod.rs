//! Wire models exchanged with the weather proxy

pub mod weather;

pub use weather::*;
