//! External service clients

pub mod openweather;
