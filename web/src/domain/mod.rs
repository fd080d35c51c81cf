//! Domain layer
//!
//! Contains the types exposed by the posts service and the port used to reach it.
//! - `entities`: Post and relay-style pagination types
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
