//! Command-line interface for running headless arena simulations

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{info, warn};
use rand::seq::IteratorRandom;
use rand::{SeedableRng, rngs::StdRng};

use crate::io::configuration::{
    DEFAULT_EXPLOSION_TIME, DEFAULT_FLAME_RANGE, DEFAULT_MAX_TICKS, DEFAULT_SEED,
    DEFAULT_TICK_SECONDS, OUTPUT_SUFFIX, PNG_CELL_SCALE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{arena_markers, export_grid_as_png};
use crate::io::map_file::{load_map, save_map};
use crate::io::progress::TickProgress;
use crate::simulation::{Arena, ArenaConfig, ArenaEvent};
use crate::spatial::{GridPos, TileGrid};

#[derive(Parser, Debug)]
#[command(name = "bomb-arena")]
#[command(
    author,
    version,
    about = "Run a headless bomb arena simulation on a map file"
)]
/// Command-line arguments for the arena simulator
// CLI tools commonly need multiple boolean flags for output selection
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Map text file to simulate
    #[arg(value_name = "MAP")]
    pub map: PathBuf,

    /// Arm a bomb on cell X,Y at start (repeatable)
    #[arg(short, long = "bomb", value_name = "X,Y", value_parser = parse_grid_pos)]
    pub bombs: Vec<GridPos>,

    /// Arm bombs on this many random walkable cells
    #[arg(short, long, default_value_t = 0)]
    pub random_bombs: usize,

    /// Random seed for reproducible bomb placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Blast arm reach in cells
    #[arg(short, long, default_value_t = DEFAULT_FLAME_RANGE)]
    pub flame_range: u32,

    /// Fuse length in seconds
    #[arg(long, default_value_t = DEFAULT_EXPLOSION_TIME)]
    pub fuse: f64,

    /// Simulated seconds per tick
    #[arg(long, default_value_t = DEFAULT_TICK_SECONDS)]
    pub dt: f64,

    /// Stop after this many ticks even if bombs remain
    #[arg(short = 't', long, default_value_t = DEFAULT_MAX_TICKS)]
    pub max_ticks: usize,

    /// Disable chain reactions between bombs
    #[arg(long)]
    pub no_chain: bool,

    /// Export the final arena as <MAP>_result.png
    #[arg(short, long)]
    pub png: bool,

    /// Write the final map text to <MAP>_result.txt
    #[arg(long)]
    pub save_map: bool,

    /// Suppress progress output and the final map
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a `X,Y` cell argument
///
/// # Errors
///
/// Returns a message when the text is not two comma-separated integers
pub fn parse_grid_pos(text: &str) -> std::result::Result<GridPos, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{text}'"))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid X in '{text}': {e}"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid Y in '{text}': {e}"))?;
    Ok(GridPos::new(x, y))
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Rules derived from the arguments
    pub const fn arena_config(&self) -> ArenaConfig {
        ArenaConfig {
            explosion_time: self.fuse,
            chain_reactions: !self.no_chain,
        }
    }

    /// Reject parameter combinations the simulation cannot run with
    ///
    /// # Errors
    ///
    /// Returns an error if the tick length or fuse is not a positive finite
    /// number, or the tick limit is zero
    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(invalid_parameter("dt", &self.dt, &"must be positive"));
        }
        if !self.fuse.is_finite() || self.fuse <= 0.0 {
            return Err(invalid_parameter("fuse", &self.fuse, &"must be positive"));
        }
        if self.max_ticks == 0 {
            return Err(invalid_parameter(
                "max-ticks",
                &self.max_ticks,
                &"must be at least one",
            ));
        }
        Ok(())
    }
}

/// Totals of one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Ticks simulated
    pub ticks: usize,
    /// Bombs that went off
    pub detonations: usize,
    /// Destructible blocks cleared
    pub tiles_destroyed: usize,
    /// Whether every bomb went off before the tick limit
    pub settled: bool,
}

/// Loads a map, arms the requested bombs and runs the arena to completion
pub struct SimulationRunner {
    cli: Cli,
}

impl SimulationRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the simulation and write the requested outputs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The arguments fail validation
    /// - The map cannot be loaded
    /// - A requested bomb cell is not walkable
    /// - An output file cannot be written
    pub fn run(&self) -> Result<RunSummary> {
        self.cli.validate()?;
        let grid = load_map(&self.cli.map)?;
        let mut arena = self.build_arena(grid)?;

        let name = self
            .cli
            .map
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let progress = TickProgress::new(&name, self.cli.max_ticks, self.cli.should_show_progress());

        let summary = simulate(&mut arena, self.cli.dt, self.cli.max_ticks, |tick, arena| {
            progress.update(tick, arena.bombs().len());
        });
        progress.finish(summary.ticks);

        if !summary.settled {
            warn!(
                "tick limit {} reached with {} bombs armed",
                self.cli.max_ticks,
                arena.bombs().len()
            );
        }
        info!(
            "{name}: {} ticks, {} detonations, {} tiles destroyed",
            summary.ticks, summary.detonations, summary.tiles_destroyed
        );

        if let Some(grid) = arena.grid() {
            self.write_outputs(grid, &arena)?;
        }

        Ok(summary)
    }

    /// Create the arena and arm the requested bombs
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly requested bomb cell is not walkable
    pub fn build_arena(&self, grid: TileGrid) -> Result<Arena> {
        let random_sites = random_bomb_sites(&grid, self.cli.random_bombs, self.cli.seed);
        let mut arena = Arena::with_config(grid, self.cli.arena_config());

        for &pos in &self.cli.bombs {
            if !arena.drop_bomb(pos, self.cli.flame_range) {
                return Err(invalid_parameter(
                    "bomb",
                    &pos,
                    &"cell is not walkable or already holds a bomb",
                ));
            }
        }
        for pos in random_sites {
            if !arena.drop_bomb(pos, self.cli.flame_range) {
                warn!("random bomb site {pos} already taken, skipping");
            }
        }

        Ok(arena)
    }

    // Allow print for the final map, which is the tool's primary output
    #[allow(clippy::print_stdout)]
    fn write_outputs(&self, grid: &TileGrid, arena: &Arena) -> Result<()> {
        if !self.cli.quiet {
            print!("{grid}");
        }

        if self.cli.png {
            let png_path = Self::get_output_path(&self.cli.map, "png");
            export_grid_as_png(grid, &arena_markers(arena), &png_path, PNG_CELL_SCALE)?;
            info!("wrote {}", png_path.display());
        }

        if self.cli.save_map {
            let map_path = Self::get_output_path(&self.cli.map, "txt");
            save_map(grid, &map_path)?;
            info!("wrote {}", map_path.display());
        }

        Ok(())
    }

    /// Output file next to the map: `<stem>_result.<extension>`
    pub fn get_output_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Tick an arena until no bomb is armed or `max_ticks` is reached
///
/// `on_tick` runs after every tick with the tick number (starting at one).
/// Events are drained and logged as they occur.
pub fn simulate(
    arena: &mut Arena,
    dt: f64,
    max_ticks: usize,
    mut on_tick: impl FnMut(usize, &Arena),
) -> RunSummary {
    let mut summary = RunSummary {
        settled: arena.is_settled(),
        ..RunSummary::default()
    };

    while !summary.settled && summary.ticks < max_ticks {
        summary.ticks += 1;
        summary.detonations += arena.tick(dt);
        for event in arena.drain_events() {
            if matches!(event, ArenaEvent::TileDestroyed { .. }) {
                summary.tiles_destroyed += 1;
            }
            log_event(&event);
        }
        summary.settled = arena.is_settled();
        on_tick(summary.ticks, arena);
    }

    summary
}

/// Walkable cells chosen at random for bomb drops, in row-major order
pub fn random_bomb_sites(grid: &TileGrid, count: usize, seed: u64) -> Vec<GridPos> {
    if count == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sites = grid
        .cells()
        .map(|(pos, _)| pos)
        .filter(|&pos| grid.is_walkable(pos))
        .choose_multiple(&mut rng, count);
    sites.sort_by_key(|pos| (pos.y, pos.x));
    sites
}

fn log_event(event: &ArenaEvent) {
    match event {
        ArenaEvent::TileDestroyed { pos } => info!("tile destroyed at {pos}"),
        ArenaEvent::BombExploded {
            origin,
            owner,
            blast_tiles,
        } => match owner {
            Some(owner) => info!(
                "{owner}'s bomb exploded at {origin} over {} cells",
                blast_tiles.len()
            ),
            None => info!("bomb exploded at {origin} over {} cells", blast_tiles.len()),
        },
        ArenaEvent::PlayerMoved { player, pos } => info!("{player} moved to {pos}"),
        ArenaEvent::PlayerDied { player } => info!("{player} died"),
        ArenaEvent::PowerUpCollected { player, kind, pos } => {
            info!("{player} collected {kind} at {pos}");
        }
    }
}
