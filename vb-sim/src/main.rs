use std::env;
use std::thread;
use std::time::Duration;

use crossbeam::channel::unbounded;
use tracing::{info, warn};

use vb_physics::{AgentState, Physics, PhysicsConfig};
use vb_utils::{BlockPos, block_state_id, pack_block_state, vec3};
use vb_world::{BlockRegistry, BlockUpdate, WorldMap};

const STONE: u16 = 1;
const GRASS: u16 = 2;
const TICK: Duration = Duration::from_millis(50);

fn main() {
    tracing_subscriber::fmt().without_time().compact().init();

    // Simple CLI: first arg is the tick count (default 200), second an
    // optional JSON file overriding the physics config.
    let args: Vec<String> = env::args().collect();
    let ticks: u32 = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(200);
    let config = match args.get(2) {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("failed to load config {}: {}", path, err);
                PhysicsConfig::default()
            }
        },
        None => PhysicsConfig::default(),
    };

    let world = flat_world();
    let registry = BlockRegistry::global();

    let (events_tx, events_rx) = unbounded();
    let mut physics = Physics::new(config, events_tx).expect("physics config");
    *physics.state_mut() = AgentState::at(vec3(0.5, 12.0, 0.5));

    info!("voxbot sandbox: {} ticks over a flat slab", ticks);
    for tick in 0..ticks {
        // The agent paces +x once it has ground under its feet.
        if physics.state().on_ground && tick % 3 == 0 {
            physics.walk(90.0, false);
        }

        if let Err(err) = physics.advance(&world, registry) {
            warn!("tick {} failed: {}", tick, err);
            break;
        }
        for event in events_rx.try_iter() {
            info!("tick {}: {:?}", tick, event);
        }

        thread::sleep(TICK);
    }

    let state = physics.state();
    info!(
        "final position ({:.3}, {:.3}, {:.3}) velocity ({:.3}, {:.3}, {:.3}) on_ground={}",
        state.position.x,
        state.position.y,
        state.position.z,
        state.velocity.x,
        state.velocity.y,
        state.velocity.z,
        state.on_ground
    );
    let cell = BlockPos::from_position(state.position);
    let support = block_state_id(world.get(cell.x, cell.y - 1, cell.z));
    info!(
        "standing over {}",
        registry.name(support).unwrap_or("unknown")
    );
}

fn flat_world() -> WorldMap {
    let mut world = WorldMap::new();
    for x in -64..64 {
        for z in -64..64 {
            for y in 0..4 {
                world.set_block(BlockUpdate {
                    x,
                    y,
                    z,
                    state: pack_block_state(STONE, 0),
                });
            }
            world.set_block(BlockUpdate {
                x,
                y: 4,
                z,
                state: pack_block_state(GRASS, 0),
            });
        }
    }
    world
}

fn load_config(path: &str) -> Result<PhysicsConfig, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
