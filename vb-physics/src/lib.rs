pub mod collision;
pub mod config;
pub mod impulse;
pub mod integrator;
pub mod types;

pub use collision::{Collisions, Detector};
pub use config::{ConfigError, PhysicsConfig};
pub use integrator::{Physics, PhysicsError};
pub use types::{AgentState, CollisionAxis, PhysicsEvent};
