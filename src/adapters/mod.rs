//! Adapter implementations for the port traits.

pub mod fixed;
pub mod live;
