use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dungeon_core::{DungeonConfig, Entity, GeneratedDungeon, MapGenerator, Pos, RectangularRoom};
use log::{info, warn};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about = "Generate a room-and-corridor dungeon level", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// TOML file with any subset of the generation parameters
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    #[arg(long)]
    max_rooms: Option<u32>,
    #[arg(long)]
    max_monsters: Option<u32>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
    Fingerprint,
}

#[derive(Serialize)]
struct Report<'a> {
    seed: u64,
    config: &'a DungeonConfig,
    fingerprint: u64,
    player: Option<Pos>,
    rooms: &'a [RectangularRoom],
    entities: Vec<EntityReport>,
    rows: Vec<String>,
}

#[derive(Serialize)]
struct EntityReport {
    name: &'static str,
    pos: Pos,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = resolve_config(&args)?;
    let generator = MapGenerator::new(args.seed, config)
        .with_context(|| "Invalid dungeon configuration")?;
    let generated = generator.generate(Entity::player(Pos::default()));
    info!(
        "seed {} produced {} rooms and {} entities",
        args.seed,
        generated.rooms.len(),
        generated.map.entities().count()
    );
    if !generated.player_placed() {
        warn!("no room was accepted; the player was left unplaced");
    }

    match args.format {
        OutputFormat::Ascii => {
            for row in ascii_rows(&generated) {
                println!("{row}");
            }
        }
        OutputFormat::Json => {
            let report = Report {
                seed: args.seed,
                config: generator.config(),
                fingerprint: generated.map.fingerprint(),
                player: generated.player_pos().filter(|_| generated.player_placed()),
                rooms: &generated.rooms,
                entities: generated
                    .map
                    .entities()
                    .map(|(_, entity)| EntityReport { name: entity.prefab().name, pos: entity.pos })
                    .collect(),
                rows: ascii_rows(&generated),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Fingerprint => println!("{:016x}", generated.map.fingerprint()),
    }

    Ok(())
}

fn resolve_config(args: &Args) -> Result<DungeonConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => DungeonConfig::default(),
    };
    if let Some(width) = args.width {
        config.map_width = width;
    }
    if let Some(height) = args.height {
        config.map_height = height;
    }
    if let Some(max_rooms) = args.max_rooms {
        config.max_rooms = max_rooms;
    }
    if let Some(max_monsters) = args.max_monsters {
        config.max_monsters_per_room = max_monsters;
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<DungeonConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Failed to parse config TOML: {}", path.display()))
}

/// `#` wall, `.` floor, entity glyphs on top with the player drawn last.
fn ascii_rows(generated: &GeneratedDungeon) -> Vec<String> {
    let map = &generated.map;
    let mut cells: Vec<char> =
        map.tiles().iter().map(|tile| if tile.walkable { '.' } else { '#' }).collect();

    let mut draw = |pos: Pos, glyph: char| {
        if map.in_bounds(pos) {
            cells[(pos.y as usize) * map.width + (pos.x as usize)] = glyph;
        }
    };
    for (id, entity) in map.entities() {
        if id != generated.player {
            draw(entity.pos, entity.prefab().glyph);
        }
    }
    if let Some(entity) = map.entity(generated.player).filter(|_| generated.player_placed()) {
        draw(entity.pos, entity.prefab().glyph);
    }

    cells.chunks(map.width.max(1)).map(|row| row.iter().collect()).collect()
}
