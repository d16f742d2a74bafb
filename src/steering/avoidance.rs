use crate::math::{Point, Real, Vector};
use crate::query::{predicted_separation, DistanceResult, PredictedSeparation};
use crate::shape::Shape;
use crate::utils;

/// Tuning constants of the seek-and-avoid steering rule.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AvoidanceParams {
    /// Time, in seconds, the agent takes to reach its desired velocity.
    pub reaction_time: Real,
    /// Distance to the target under which the agent starts slowing down.
    pub arrival_distance: Real,
    /// Separation under which the avoidance force kicks in.
    pub separation_radius: Real,
    /// Magnitude of the avoidance force at zero separation.
    pub avoidance_gain: Real,
}

impl Default for AvoidanceParams {
    fn default() -> Self {
        Self {
            reaction_time: 0.5,
            arrival_distance: 100.0,
            separation_radius: 20.0,
            avoidance_gain: 100.0,
        }
    }
}

/// Computes the steering force of an agent seeking `target` while keeping
/// away from an obstacle.
///
/// `separation` is the distance and normal from the obstacle toward the
/// agent, typically the `separation` part of a [`PredictedSeparation`].
pub fn steering_force(
    position: &Point<Real>,
    velocity: &Vector<Real>,
    max_speed: Real,
    target: &Point<Real>,
    separation: &DistanceResult,
    params: &AvoidanceParams,
) -> Vector<Real> {
    let to_target = target - position;
    let arrival = utils::clamp(to_target.norm() / params.arrival_distance, 0.0, 1.0);
    let speed_scale = arrival * arrival;
    let desired = utils::normalize_or_zero(&to_target) * (max_speed * speed_scale);
    let seek = (desired - velocity) / params.reaction_time;

    let avoid = 1.0 - (separation.distance / params.separation_radius).min(1.0);
    seek + separation.normal * (params.avoidance_gain * avoid)
}

/// A shape moving with a constant velocity between two steps.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Agent {
    /// The agent's shape, at its current position.
    pub shape: Shape,
    /// The agent's linear velocity.
    pub velocity: Vector<Real>,
}

impl Agent {
    /// Creates a new agent.
    pub fn new(shape: Shape, velocity: Vector<Real>) -> Self {
        Self { shape, velocity }
    }

    /// The separation this agent will have with `other` at their closest
    /// point of approach within `max_time`.
    pub fn predict(&self, other: &Agent, max_time: Real) -> PredictedSeparation {
        predicted_separation(
            &self.shape,
            &self.velocity,
            &other.shape,
            &other.velocity,
            max_time,
        )
    }

    /// Integrates the steering force over `dt` seconds, then moves the agent.
    ///
    /// Does nothing if `dt` is not positive.
    pub fn step(
        &mut self,
        max_speed: Real,
        target: &Point<Real>,
        separation: &DistanceResult,
        params: &AvoidanceParams,
        dt: Real,
    ) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }

        let force = steering_force(
            &self.shape.position(),
            &self.velocity,
            max_speed,
            target,
            separation,
            params,
        );
        self.velocity += force * dt;
        self.shape = self.shape.translated(&(self.velocity * dt));
    }
}
