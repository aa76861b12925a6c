use std::fmt;

pub use cgmath::vec3;

/// Continuous world-space coordinates and velocities.
pub type Vec3 = cgmath::Vector3<f64>;

/// Packed block state for the "nothing here" cell. Out-of-bounds and
/// unloaded reads resolve to this instead of failing.
pub const AIR: u16 = 0;

pub fn block_state_id(state: u16) -> u16 {
    state >> 4
}

pub fn block_state_meta(state: u16) -> u8 {
    (state & 0x0F) as u8
}

pub fn pack_block_state(id: u16, meta: u8) -> u16 {
    (id << 4) | u16::from(meta & 0x0F)
}

/// Integer-addressed cell of the voxel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell occupied by a continuous position: floor on x and z, ceil on y.
    pub fn from_position(pos: Vec3) -> Self {
        Self {
            x: pos.x.floor() as i32,
            y: pos.y.ceil() as i32,
            z: pos.z.floor() as i32,
        }
    }

    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Axis-aligned box described by its extents and the offset of its
/// reference corner from the cell origin it is anchored to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// x extent
    pub w: f64,
    /// y extent
    pub h: f64,
    /// z extent
    pub d: f64,
    pub offset: Vec3,
}

impl BoundingBox {
    pub fn new(w: f64, h: f64, d: f64) -> Self {
        Self {
            w,
            h,
            d,
            offset: Vec3::new(0.0, 0.0, 0.0),
        }
    }

    /// Square footprint, the common case for entities.
    pub fn square(w: f64, h: f64) -> Self {
        Self::new(w, h, w)
    }

    /// Full unit cube.
    pub fn block() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Overlap test against another box, both placed by the world-space
    /// minimum corners. Touching faces count as overlap.
    pub fn overlaps(&self, min: Vec3, other: &BoundingBox, other_min: Vec3) -> bool {
        min.x + self.w >= other_min.x
            && min.x <= other_min.x + other.w
            && min.y + self.h >= other_min.y
            && min.y <= other_min.y + other.h
            && min.z + self.d >= other_min.z
            && min.z <= other_min.z + other.d
    }
}

/// A collaborator could not resolve a cell or a block definition.
/// Unknown cells are neither solid nor passable; the tick that hit one
/// fails instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    UnknownBlock { id: u16, meta: u8 },
    UnresolvedCell { x: i32, y: i32, z: i32 },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::UnknownBlock { id, meta } => {
                write!(f, "no block definition for id {} meta {}", id, meta)
            }
            LookupError::UnresolvedCell { x, y, z } => {
                write!(f, "could not resolve cell ({}, {}, {})", x, y, z)
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Read access to the voxel grid. Implementations must map
/// out-of-bounds and unloaded cells to `AIR` rather than failing; the
/// error channel exists for stores that can genuinely lose a cell.
pub trait VoxelQuery {
    fn block_at(&self, x: i32, y: i32, z: i32) -> Result<u16, LookupError>;
}

/// Collision volume registry. `Ok(None)` means the block never
/// collides; an id with no definition at all is an error.
pub trait BlockShapeLookup {
    fn shape_of(&self, id: u16, meta: u8) -> Result<Option<BoundingBox>, LookupError>;
}
