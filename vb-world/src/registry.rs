use std::collections::HashMap;

use lazy_static::lazy_static;
use vb_utils::{BlockShapeLookup, BoundingBox, LookupError, Vec3};

/// Collision volume family of a block type. Metadata is consulted only
/// where the family demands it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockShape {
    /// Never collides (air, liquids, plants, torches).
    Empty,
    /// Full unit cube.
    Cube,
    /// Half cube; meta bit 0x8 selects the upper half.
    Slab,
    /// Thin stack of layers, meta 0x7 is the layer count minus one.
    SnowLayer,
    /// Full footprint with a reduced height (farmland, soul sand).
    LoweredCube { h: f64 },
}

impl BlockShape {
    pub fn resolve(self, meta: u8) -> Option<BoundingBox> {
        match self {
            BlockShape::Empty => None,
            BlockShape::Cube => Some(BoundingBox::block()),
            BlockShape::Slab => {
                let mut bb = BoundingBox::new(1.0, 0.5, 1.0);
                if meta & 0x8 != 0 {
                    bb.offset = Vec3::new(0.0, 0.5, 0.0);
                }
                Some(bb)
            }
            BlockShape::SnowLayer => {
                let layers = f64::from((meta & 0x7) + 1);
                Some(BoundingBox::new(1.0, (layers / 8.0).clamp(0.125, 1.0), 1.0))
            }
            BlockShape::LoweredCube { h } => Some(BoundingBox::new(1.0, h, 1.0)),
        }
    }
}

/// Immutable description of one block type, fixed at startup.
#[derive(Debug, Clone, Copy)]
pub struct BlockDef {
    pub id: u16,
    pub name: &'static str,
    pub shape: BlockShape,
}

static BLOCK_TABLE: &[BlockDef] = &[
    BlockDef { id: 0, name: "air", shape: BlockShape::Empty },
    BlockDef { id: 1, name: "stone", shape: BlockShape::Cube },
    BlockDef { id: 2, name: "grass", shape: BlockShape::Cube },
    BlockDef { id: 3, name: "dirt", shape: BlockShape::Cube },
    BlockDef { id: 4, name: "cobblestone", shape: BlockShape::Cube },
    BlockDef { id: 5, name: "planks", shape: BlockShape::Cube },
    BlockDef { id: 7, name: "bedrock", shape: BlockShape::Cube },
    BlockDef { id: 8, name: "flowing_water", shape: BlockShape::Empty },
    BlockDef { id: 9, name: "water", shape: BlockShape::Empty },
    BlockDef { id: 10, name: "flowing_lava", shape: BlockShape::Empty },
    BlockDef { id: 11, name: "lava", shape: BlockShape::Empty },
    BlockDef { id: 12, name: "sand", shape: BlockShape::Cube },
    BlockDef { id: 13, name: "gravel", shape: BlockShape::Cube },
    BlockDef { id: 17, name: "log", shape: BlockShape::Cube },
    BlockDef { id: 18, name: "leaves", shape: BlockShape::Cube },
    BlockDef { id: 20, name: "glass", shape: BlockShape::Cube },
    BlockDef { id: 24, name: "sandstone", shape: BlockShape::Cube },
    BlockDef { id: 31, name: "tallgrass", shape: BlockShape::Empty },
    BlockDef { id: 37, name: "yellow_flower", shape: BlockShape::Empty },
    BlockDef { id: 38, name: "red_flower", shape: BlockShape::Empty },
    BlockDef { id: 44, name: "stone_slab", shape: BlockShape::Slab },
    BlockDef { id: 50, name: "torch", shape: BlockShape::Empty },
    BlockDef { id: 60, name: "farmland", shape: BlockShape::LoweredCube { h: 0.9375 } },
    BlockDef { id: 65, name: "ladder", shape: BlockShape::Empty },
    BlockDef { id: 78, name: "snow_layer", shape: BlockShape::SnowLayer },
    BlockDef { id: 88, name: "soul_sand", shape: BlockShape::LoweredCube { h: 0.875 } },
    BlockDef { id: 126, name: "wooden_slab", shape: BlockShape::Slab },
];

lazy_static! {
    static ref REGISTRY: BlockRegistry = BlockRegistry::with_defaults();
}

/// Block definitions indexed by id, built once at startup.
pub struct BlockRegistry {
    by_id: HashMap<u16, BlockDef>,
}

impl BlockRegistry {
    pub fn global() -> &'static BlockRegistry {
        &REGISTRY
    }

    pub fn with_defaults() -> Self {
        let mut by_id = HashMap::with_capacity(BLOCK_TABLE.len());
        for def in BLOCK_TABLE {
            by_id.insert(def.id, *def);
        }
        Self { by_id }
    }

    pub fn get(&self, id: u16) -> Option<&BlockDef> {
        self.by_id.get(&id)
    }

    pub fn name(&self, id: u16) -> Option<&'static str> {
        self.by_id.get(&id).map(|def| def.name)
    }
}

impl BlockShapeLookup for BlockRegistry {
    fn shape_of(&self, id: u16, meta: u8) -> Result<Option<BoundingBox>, LookupError> {
        let def = self
            .get(id)
            .ok_or(LookupError::UnknownBlock { id, meta })?;
        Ok(def.shape.resolve(meta))
    }
}
