//! Foundation utilities shared by the rest of the engine

pub mod logging;
pub mod math;
