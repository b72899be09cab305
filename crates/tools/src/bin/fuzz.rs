use std::collections::BTreeSet;

use anyhow::{Result, ensure};
use clap::Parser;
use dungeon_core::{DungeonConfig, Entity, EntityKind, MapGenerator, Pos};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u32,
}

fn pick(rng: &mut ChaCha8Rng, min: u32, max: u32) -> u32 {
    min + (rng.next_u64() % u64::from(max - min + 1)) as u32
}

fn random_config(rng: &mut ChaCha8Rng) -> DungeonConfig {
    let room_min_size = pick(rng, 2, 8);
    let room_max_size = room_min_size + pick(rng, 0, 6);
    let map_width = (room_max_size + 1 + pick(rng, 0, 80)) as usize;
    let map_height = (room_max_size + 1 + pick(rng, 0, 40)) as usize;
    DungeonConfig {
        max_rooms: pick(rng, 0, 40),
        room_min_size,
        room_max_size,
        map_width,
        map_height,
        max_monsters_per_room: pick(rng, 0, 5),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for run in 0..args.runs {
        let level_seed = rng.next_u64();
        let config = random_config(&mut rng);
        let generated =
            MapGenerator::new(level_seed, config.clone())?.generate(Entity::player(Pos::default()));
        let context = format!("run={run} seed={level_seed} config={config:?}");

        // Assert invariants
        for (i, a) in generated.rooms.iter().enumerate() {
            for b in &generated.rooms[i + 1..] {
                ensure!(!a.intersects(b), "Invariant failed: rooms overlap ({context})");
            }
        }

        let mut occupied = BTreeSet::new();
        for (_, entity) in generated.map.entities() {
            if entity.kind == EntityKind::Player && !generated.player_placed() {
                continue;
            }
            ensure!(
                generated.map.tile_at(entity.pos).walkable,
                "Invariant failed: {:?} inside wall at {:?} ({context})",
                entity.kind,
                entity.pos
            );
            ensure!(
                occupied.insert(entity.pos),
                "Invariant failed: entities stacked at {:?} ({context})",
                entity.pos
            );
        }

        if let Some(first) = generated.rooms.first() {
            ensure!(
                generated.player_pos() == Some(first.center()),
                "Invariant failed: player not at first room center ({context})"
            );
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
