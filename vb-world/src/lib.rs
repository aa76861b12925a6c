pub mod chunk;
pub mod registry;

pub use chunk::{BlockUpdate, ChunkData, ChunkSection, WorldMap};
pub use registry::{BlockDef, BlockRegistry, BlockShape};

#[cfg(test)]
mod tests;
