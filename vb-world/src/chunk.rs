use std::collections::HashMap;

use vb_utils::{AIR, LookupError, VoxelQuery};

const CHUNK_SIZE: i32 = 16;
const SECTION_HEIGHT: i32 = 16;
const WORLD_HEIGHT: i32 = 256;

/// One 16x16x16 slice of a chunk column, blocks in packed-state form.
#[derive(Clone)]
pub struct ChunkSection {
    pub y: u8,
    pub blocks: Vec<u16>,
}

/// Bulk chunk payload as delivered by the world data source.
#[derive(Clone)]
pub struct ChunkData {
    pub x: i32,
    pub z: i32,
    pub full: bool,
    pub sections: Vec<ChunkSection>,
}

/// Single-cell mutation (block break/place between ticks).
#[derive(Debug, Clone, Copy)]
pub struct BlockUpdate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub state: u16,
}

#[derive(Clone, Default)]
struct ChunkColumn {
    sections: Vec<Option<Vec<u16>>>,
    full: bool,
}

impl ChunkColumn {
    fn new(full: bool) -> Self {
        Self {
            sections: vec![None; (WORLD_HEIGHT / SECTION_HEIGHT) as usize],
            full,
        }
    }

    fn set_section(&mut self, y: u8, blocks: Vec<u16>) {
        let idx = y as usize;
        if idx >= self.sections.len() {
            return;
        }
        self.sections[idx] = Some(blocks);
    }
}

/// Chunk-column voxel store. Cells outside the loaded columns, below
/// the world floor, or above the build height all read as `AIR`.
#[derive(Default)]
pub struct WorldMap {
    chunks: HashMap<(i32, i32), ChunkColumn>,
}

impl WorldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_chunk(&mut self, chunk: ChunkData) {
        let key = (chunk.x, chunk.z);
        let entry = self
            .chunks
            .entry(key)
            .or_insert_with(|| ChunkColumn::new(chunk.full));
        if chunk.full {
            *entry = ChunkColumn::new(true);
        }
        for section in chunk.sections {
            entry.set_section(section.y, section.blocks);
        }
    }

    /// Write one cell, materializing the column and section if the
    /// world data source has not delivered them yet. Writes outside the
    /// vertical range are dropped.
    pub fn set_block(&mut self, update: BlockUpdate) {
        if update.y < 0 || update.y >= WORLD_HEIGHT {
            return;
        }

        let chunk_x = update.x.div_euclid(CHUNK_SIZE);
        let chunk_z = update.z.div_euclid(CHUNK_SIZE);
        let local_x = update.x.rem_euclid(CHUNK_SIZE) as usize;
        let local_z = update.z.rem_euclid(CHUNK_SIZE) as usize;
        let section_index = (update.y / SECTION_HEIGHT) as usize;
        let local_y = (update.y % SECTION_HEIGHT) as usize;

        let column = self
            .chunks
            .entry((chunk_x, chunk_z))
            .or_insert_with(|| ChunkColumn::new(false));
        let section = column.sections[section_index]
            .get_or_insert_with(|| vec![AIR; (SECTION_HEIGHT * CHUNK_SIZE * CHUNK_SIZE) as usize]);

        section[local_y * 16 * 16 + local_z * 16 + local_x] = update.state;
    }

    pub fn has_chunk(&self, chunk_x: i32, chunk_z: i32) -> bool {
        self.chunks.contains_key(&(chunk_x, chunk_z))
    }

    pub fn get(&self, x: i32, y: i32, z: i32) -> u16 {
        if y < 0 || y >= WORLD_HEIGHT {
            return AIR;
        }

        let chunk_x = x.div_euclid(CHUNK_SIZE);
        let chunk_z = z.div_euclid(CHUNK_SIZE);
        let local_x = x.rem_euclid(CHUNK_SIZE);
        let local_z = z.rem_euclid(CHUNK_SIZE);

        let Some(column) = self.chunks.get(&(chunk_x, chunk_z)) else {
            return AIR;
        };

        let section_index = (y / SECTION_HEIGHT) as usize;
        let local_y = (y % SECTION_HEIGHT) as usize;
        let Some(section) = column.sections.get(section_index).and_then(|v| v.as_ref()) else {
            return AIR;
        };

        let idx = local_y * 16 * 16 + local_z as usize * 16 + local_x as usize;
        *section.get(idx).unwrap_or(&AIR)
    }
}

impl VoxelQuery for WorldMap {
    fn block_at(&self, x: i32, y: i32, z: i32) -> Result<u16, LookupError> {
        Ok(self.get(x, y, z))
    }
}
