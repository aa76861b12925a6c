use vb_utils::{AIR, BlockShapeLookup, LookupError, VoxelQuery, pack_block_state, vec3};

use super::chunk::{BlockUpdate, ChunkData, ChunkSection, WorldMap};
use super::registry::BlockRegistry;

const STONE: u16 = 1;

fn stone(x: i32, y: i32, z: i32) -> BlockUpdate {
    BlockUpdate {
        x,
        y,
        z,
        state: pack_block_state(STONE, 0),
    }
}

#[test]
fn set_block_round_trip() {
    let mut world = WorldMap::new();
    world.set_block(stone(3, 64, -7));
    assert_eq!(world.get(3, 64, -7), pack_block_state(STONE, 0));
    assert_eq!(world.get(3, 65, -7), AIR);
}

#[test]
fn negative_coordinates_address_the_right_chunk() {
    let mut world = WorldMap::new();
    world.set_block(stone(-1, 10, -1));
    world.set_block(stone(-16, 10, -17));
    assert_eq!(world.get(-1, 10, -1), pack_block_state(STONE, 0));
    assert_eq!(world.get(-16, 10, -17), pack_block_state(STONE, 0));
    assert_eq!(world.get(-2, 10, -1), AIR);
    assert!(world.has_chunk(-1, -1));
    assert!(world.has_chunk(-1, -2));
}

#[test]
fn out_of_range_reads_are_air() {
    let mut world = WorldMap::new();
    world.set_block(stone(0, 0, 0));
    assert_eq!(world.get(0, -1, 0), AIR);
    assert_eq!(world.get(0, 256, 0), AIR);
    // Unloaded chunk far away.
    assert_eq!(world.get(1000, 10, 1000), AIR);
}

#[test]
fn update_chunk_installs_sections() {
    let blocks = vec![pack_block_state(STONE, 0); 16 * 16 * 16];
    let chunk = ChunkData {
        x: 0,
        z: 0,
        full: true,
        sections: vec![ChunkSection { y: 4, blocks }],
    };
    let mut world = WorldMap::new();
    world.update_chunk(chunk);

    assert!(world.has_chunk(0, 0));
    assert_eq!(world.get(0, 64, 0), pack_block_state(STONE, 0));
    assert_eq!(world.get(15, 79, 15), pack_block_state(STONE, 0));
    // Section above was never delivered.
    assert_eq!(world.get(0, 80, 0), AIR);
}

#[test]
fn voxel_query_never_fails_on_sentinel_reads() {
    let world = WorldMap::new();
    assert_eq!(world.block_at(12, 300, -40), Ok(AIR));
}

#[test]
fn registry_full_cube_shapes() {
    let registry = BlockRegistry::global();
    let shape = registry.shape_of(1, 0).unwrap().unwrap();
    assert_eq!((shape.w, shape.h, shape.d), (1.0, 1.0, 1.0));
    assert_eq!(shape.offset, vec3(0.0, 0.0, 0.0));
}

#[test]
fn registry_non_solid_shapes() {
    let registry = BlockRegistry::global();
    assert_eq!(registry.shape_of(0, 0), Ok(None));
    assert_eq!(registry.shape_of(9, 0), Ok(None));
    assert_eq!(registry.shape_of(50, 3), Ok(None));
}

#[test]
fn registry_slab_uses_meta_for_upper_half() {
    let registry = BlockRegistry::global();

    let lower = registry.shape_of(44, 0).unwrap().unwrap();
    assert_eq!(lower.h, 0.5);
    assert_eq!(lower.offset.y, 0.0);

    let upper = registry.shape_of(44, 0x8).unwrap().unwrap();
    assert_eq!(upper.h, 0.5);
    assert_eq!(upper.offset.y, 0.5);
}

#[test]
fn registry_snow_layers_scale_with_meta() {
    let registry = BlockRegistry::global();
    let one = registry.shape_of(78, 0).unwrap().unwrap();
    assert_eq!(one.h, 0.125);
    let three = registry.shape_of(78, 2).unwrap().unwrap();
    assert_eq!(three.h, 0.375);
}

#[test]
fn registry_unknown_id_is_an_error() {
    let registry = BlockRegistry::global();
    assert_eq!(
        registry.shape_of(999, 2),
        Err(LookupError::UnknownBlock { id: 999, meta: 2 })
    );
}
