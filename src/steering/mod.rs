//! Local avoidance built on top of the separation queries.

pub use self::avoidance::{steering_force, Agent, AvoidanceParams};

mod avoidance;
