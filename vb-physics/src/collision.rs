use vb_utils::{
    BlockPos, BlockShapeLookup, BoundingBox, LookupError, VoxelQuery, block_state_id,
    block_state_meta, vec3,
};

/// The envelope's feet are dropped slightly below the candidate cell so
/// resting contact still overlaps the floor.
const CONTACT_BIAS: f64 = 0.2;

/// Per-category hits around a candidate cell, each holding the first
/// offending cell found this query.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Collisions {
    /// Head clearance, two cells up.
    pub above: Option<BlockPos>,
    /// Ground, one cell down.
    pub below: Option<BlockPos>,
    pub x: Option<BlockPos>,
    pub z: Option<BlockPos>,
}

/// Tests the agent's collision envelope, anchored at a candidate cell,
/// against the fixed set of face-adjacent neighbor cells. Block shapes
/// are looked up fresh on every query; the grid may change between
/// ticks.
pub struct Detector<'a, W, S> {
    world: &'a W,
    shapes: &'a S,
    envelope: BoundingBox,
}

impl<'a, W: VoxelQuery, S: BlockShapeLookup> Detector<'a, W, S> {
    pub fn new(world: &'a W, shapes: &'a S, envelope: BoundingBox) -> Self {
        Self {
            world,
            shapes,
            envelope,
        }
    }

    pub fn test(&self, cb: BlockPos) -> Result<Collisions, LookupError> {
        let mut out = Collisions::default();

        if self.cell_collides(cb, 0, 2, 0)? {
            out.above = Some(cb.offset(0, 2, 0));
        }
        if self.cell_collides(cb, 0, -1, 0)? {
            out.below = Some(cb.offset(0, -1, 0));
        }
        // Feet or head against a neighbor column; first hit wins.
        for dx in [-1, 1] {
            for dy in [0, 1] {
                if out.x.is_none() && self.cell_collides(cb, dx, dy, 0)? {
                    out.x = Some(cb.offset(dx, dy, 0));
                }
            }
        }
        for dz in [-1, 1] {
            for dy in [0, 1] {
                if out.z.is_none() && self.cell_collides(cb, 0, dy, dz)? {
                    out.z = Some(cb.offset(0, dy, dz));
                }
            }
        }

        Ok(out)
    }

    fn cell_collides(&self, cb: BlockPos, dx: i32, dy: i32, dz: i32) -> Result<bool, LookupError> {
        let state = self.world.block_at(cb.x + dx, cb.y + dy, cb.z + dz)?;
        let shape = self
            .shapes
            .shape_of(block_state_id(state), block_state_meta(state))?;
        let Some(shape) = shape else {
            return Ok(false);
        };

        let agent_min = vec3(
            f64::from(cb.x) - self.envelope.w / 2.0,
            f64::from(cb.y) - CONTACT_BIAS,
            f64::from(cb.z) - self.envelope.d / 2.0,
        );
        let block_min = vec3(
            f64::from(cb.x + dx),
            f64::from(cb.y + dy),
            f64::from(cb.z + dz),
        ) + shape.offset;

        Ok(self.envelope.overlaps(agent_min, &shape, block_min))
    }
}
