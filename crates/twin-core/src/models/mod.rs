//! Data models for the car twin service

pub mod car_state;

pub use car_state::{CarState, CarStateInput};
