use vb_utils::Vec3;

/// Continuous pose of the controlled agent. Mutated in place by the
/// integrator during a tick; read by external callers between ticks.
/// After a tick that set `on_ground`, `velocity.y` is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub on_ground: bool,
}

impl AgentState {
    /// Spawn at a position, at rest and airborne.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::new(0.0, 0.0, 0.0),
            on_ground: false,
        }
    }
}

impl Default for AgentState {
    fn default() -> Self {
        Self::at(Vec3::new(0.0, 0.0, 0.0))
    }
}

/// Axis on which a collision was resolved this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionAxis {
    X,
    Y,
    Z,
}

/// Notification pushed to the external event sink, at most once per
/// resolved collision category per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsEvent {
    Collision(CollisionAxis),
}
