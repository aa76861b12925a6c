use std::fmt;

use crossbeam::channel::Sender;
use tracing::debug;

use vb_utils::{BlockPos, BlockShapeLookup, LookupError, VoxelQuery};

use crate::collision::Detector;
use crate::config::{ConfigError, PhysicsConfig};
use crate::types::{AgentState, CollisionAxis, PhysicsEvent};

/// A tick failed mid-pipeline. The agent state is whatever the
/// pipeline reached; callers own any rollback policy.
#[derive(Debug)]
pub enum PhysicsError {
    Lookup(LookupError),
}

impl From<LookupError> for PhysicsError {
    fn from(err: LookupError) -> Self {
        PhysicsError::Lookup(err)
    }
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::Lookup(err) => write!(f, "tick aborted: {}", err),
        }
    }
}

impl std::error::Error for PhysicsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PhysicsError::Lookup(err) => Some(err),
        }
    }
}

/// Per-tick integration and collision pipeline for the agent.
///
/// One `advance` call per simulation tick: apply gravity/drag, sweep
/// the displacement in sub-steps against the voxel grid, resolve at
/// most one collision per category, commit, and emit collision events
/// through the channel handed in at construction.
#[derive(Debug)]
pub struct Physics {
    pub(crate) state: AgentState,
    pub(crate) config: PhysicsConfig,
    pub(crate) events: Sender<PhysicsEvent>,
}

impl Physics {
    pub fn new(config: PhysicsConfig, events: Sender<PhysicsEvent>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: AgentState::default(),
            config,
            events,
        })
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    /// For spawn placement and authoritative corrections between ticks.
    pub fn state_mut(&mut self) -> &mut AgentState {
        &mut self.state
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Advance the simulation by one tick.
    pub fn advance<W, S>(&mut self, world: &W, shapes: &S) -> Result<(), PhysicsError>
    where
        W: VoxelQuery,
        S: BlockShapeLookup,
    {
        let events = self.integrate(world, shapes)?;
        self.apply_horizontal_drag();
        self.apply_velocity();
        for event in events {
            let _ = self.events.send(event);
        }
        Ok(())
    }

    /// Ground check plus the sub-stepped collision sweep. Returns the
    /// events to emit once the tick commits.
    fn integrate<W, S>(&mut self, world: &W, shapes: &S) -> Result<Vec<PhysicsEvent>, PhysicsError>
    where
        W: VoxelQuery,
        S: BlockShapeLookup,
    {
        let mut events = Vec::new();
        let detector = Detector::new(world, shapes, self.config.envelope());
        let cell = BlockPos::from_position(self.state.position);

        let grounded_by_check = detector.test(cell)?.below.is_some();
        if grounded_by_check {
            self.state.on_ground = true;
            self.state.velocity.y = 0.0;
            self.state.position.y = f64::from(cell.y);
        } else {
            self.state.on_ground = false;
            self.state.velocity.y -= self.config.gravity;
            self.state.velocity.y -= self.state.velocity.y * self.config.vertical_drag;
        }

        let v = self.state.velocity;
        let steps = v.x.abs().max(v.y.abs()).max(v.z.abs()).ceil() as i64;
        if steps == 0 {
            return Ok(events);
        }

        let mut above_hit = false;
        // The ground check already owns the below category this tick.
        let mut below_hit = grounded_by_check;
        let mut x_hit = false;
        let mut z_hit = false;

        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            // Candidate cells track the live velocity: a component
            // zeroed by an earlier sub-step stops advancing its axis.
            let candidate = BlockPos::new(
                (t * self.state.velocity.x + f64::from(cell.x)).round() as i32,
                (t * self.state.velocity.y + f64::from(cell.y)).round() as i32,
                (t * self.state.velocity.z + f64::from(cell.z)).round() as i32,
            );
            let col = detector.test(candidate)?;

            if let Some(block) = col.above
                && !above_hit
            {
                above_hit = true;
                self.state.velocity.y = 0.0;
                self.state.position.y = f64::from(block.y) + self.config.vertical_offset;
                debug!("ceiling collision at {}", block);
                events.push(PhysicsEvent::Collision(CollisionAxis::Y));
            }
            if col.below.is_some() && !below_hit {
                below_hit = true;
                self.state.on_ground = true;
                self.state.velocity.y = 0.0;
                self.state.position.y = f64::from(candidate.y);
                debug!("landed at {}", candidate);
                events.push(PhysicsEvent::Collision(CollisionAxis::Y));
            }
            if let Some(block) = col.x
                && !x_hit
            {
                x_hit = true;
                self.state.velocity.x = 0.0;
                self.state.position.x =
                    clamp_against(self.state.position.x, block.x, self.config.horizontal_offset);
                debug!("x collision at {}", block);
                events.push(PhysicsEvent::Collision(CollisionAxis::X));
            }
            if let Some(block) = col.z
                && !z_hit
            {
                z_hit = true;
                self.state.velocity.z = 0.0;
                self.state.position.z =
                    clamp_against(self.state.position.z, block.z, self.config.horizontal_offset);
                debug!("z collision at {}", block);
                events.push(PhysicsEvent::Collision(CollisionAxis::Z));
            }
        }

        Ok(events)
    }

    // Horizontal drag applies every tick, airborne or grounded.
    fn apply_horizontal_drag(&mut self) {
        self.state.velocity.x -= self.state.velocity.x * self.config.ground_drag;
        self.state.velocity.z -= self.state.velocity.z * self.config.ground_drag;
    }

    // The full velocity vector is committed, independent of how many
    // sub-steps the sweep examined.
    fn apply_velocity(&mut self) {
        self.state.position += self.state.velocity;
    }
}

/// Clamp a horizontal coordinate against the obstructing cell, on the
/// face the agent approached from.
fn clamp_against(agent: f64, cell: i32, offset: f64) -> f64 {
    let near = f64::from(cell);
    if agent < near + 0.5 {
        near + offset
    } else {
        near + 1.0 - offset
    }
}
