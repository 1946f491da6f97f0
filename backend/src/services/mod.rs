//! Business logic services

pub mod weather;
