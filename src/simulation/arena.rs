//! Reference host driving the core for one arena
//!
//! The core components only report what happened; deciding what a blast does
//! to players and power-ups is the host's job. [`Arena`] is a headless host
//! that owns one grid, the players, the armed bombs and the power-ups lying
//! around, and applies the usual rules: blasts kill players standing in them,
//! burn power-ups, set off other bombs, and free their owner's bomb slot.

use std::collections::VecDeque;

use log::{debug, trace, warn};

use crate::algorithm::bomb::{Bomb, Detonation};
use crate::entities::pickup::{Collider, try_collect};
use crate::entities::player::{Player, PlayerId};
use crate::entities::power_up::{PowerUp, PowerUpKind};
use crate::io::configuration::DEFAULT_EXPLOSION_TIME;
use crate::simulation::events::ArenaEvent;
use crate::spatial::{GridId, GridPos, GridRegistry, TileGrid};

/// Rules applied by an [`Arena`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaConfig {
    /// Fuse length in seconds for newly placed bombs
    pub explosion_time: f64,
    /// Whether a blast sets off armed bombs lying in it
    pub chain_reactions: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            explosion_time: DEFAULT_EXPLOSION_TIME,
            chain_reactions: true,
        }
    }
}

/// Headless host for a single arena
#[derive(Debug)]
pub struct Arena {
    grids: GridRegistry,
    grid_id: GridId,
    players: Vec<Player>,
    bombs: Vec<Bomb>,
    power_ups: Vec<PowerUp>,
    events: Vec<ArenaEvent>,
    config: ArenaConfig,
    next_player_id: u32,
    elapsed: f64,
}

impl Arena {
    /// Create an arena over `grid` with default rules
    pub fn new(grid: TileGrid) -> Self {
        Self::with_config(grid, ArenaConfig::default())
    }

    /// Create an arena over `grid` with custom rules
    pub fn with_config(grid: TileGrid, config: ArenaConfig) -> Self {
        let mut grids = GridRegistry::new();
        let grid_id = grids.insert(grid);
        Self {
            grids,
            grid_id,
            players: Vec::new(),
            bombs: Vec::new(),
            power_ups: Vec::new(),
            events: Vec::new(),
            config,
            next_player_id: 0,
            elapsed: 0.0,
        }
    }

    /// The arena grid
    pub fn grid(&self) -> Option<&TileGrid> {
        self.grids.get(self.grid_id)
    }

    /// Handle of the arena grid inside [`Self::grids`]
    pub const fn grid_id(&self) -> GridId {
        self.grid_id
    }

    /// Registry holding the arena grid
    pub const fn grids(&self) -> &GridRegistry {
        &self.grids
    }

    /// Rules in effect
    pub const fn config(&self) -> ArenaConfig {
        self.config
    }

    /// Simulated seconds since creation
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// All players, dead ones included
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Armed bombs in placement order
    pub fn bombs(&self) -> &[Bomb] {
        &self.bombs
    }

    /// Power-ups lying on the arena
    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    /// Look up a player
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    /// Look up a player for direct stat changes
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id() == id)
    }

    /// Number of players still alive
    pub fn live_players(&self) -> usize {
        self.players.iter().filter(|player| player.is_alive()).count()
    }

    /// Whether an armed bomb occupies `pos`
    pub fn bomb_at(&self, pos: GridPos) -> bool {
        self.bombs
            .iter()
            .any(|bomb| !bomb.has_exploded() && bomb.origin() == pos)
    }

    /// Whether no bomb is waiting to go off
    pub const fn is_settled(&self) -> bool {
        self.bombs.is_empty()
    }

    /// Add a live player on `pos`, linked to the arena grid
    pub fn spawn_player(&mut self, pos: GridPos) -> PlayerId {
        let id = PlayerId(self.next_player_id);
        self.next_player_id += 1;
        self.players.push(Player::new(id, pos).with_grid(self.grid_id));
        debug!("spawned {id} at {pos}");
        id
    }

    /// Drop a power-up on `pos`
    pub fn spawn_power_up(&mut self, kind: PowerUpKind, pos: GridPos) {
        self.power_ups.push(PowerUp::new(kind, pos));
    }

    /// Step a player by `(dx, dy)` and collect whatever lies on the new cell
    ///
    /// Cells holding an armed bomb block movement in addition to the grid's
    /// own walkability rule.
    pub fn move_player(&mut self, id: PlayerId, dx: i32, dy: i32) -> bool {
        let Some(player) = self.players.iter_mut().find(|player| player.id() == id) else {
            warn!("move requested for unknown player {id}");
            return false;
        };
        let target = player.position().offset(dx, dy);
        if self
            .bombs
            .iter()
            .any(|bomb| !bomb.has_exploded() && bomb.origin() == target)
        {
            return false;
        }
        if !player.move_direction(dx, dy, &self.grids, &mut self.events) {
            return false;
        }

        while let Some(index) = self
            .power_ups
            .iter()
            .position(|power_up| power_up.position == target)
        {
            let power_up = self.power_ups.remove(index);
            match try_collect(power_up, Collider::Player(&*player), &mut self.events) {
                Ok(kind) => kind.apply(player),
                Err(power_up) => {
                    self.power_ups.insert(index, power_up);
                    break;
                }
            }
        }
        true
    }

    /// Arm a bomb under a player
    ///
    /// Fails when the player is unknown, dead, out of bomb slots, or already
    /// standing on a bomb.
    pub fn place_bomb(&mut self, id: PlayerId) -> bool {
        let Some(player) = self.players.iter_mut().find(|player| player.id() == id) else {
            warn!("bomb requested for unknown player {id}");
            return false;
        };
        let pos = player.position();
        if self
            .bombs
            .iter()
            .any(|bomb| !bomb.has_exploded() && bomb.origin() == pos)
        {
            return false;
        }
        if !player.place_bomb() {
            return false;
        }
        let bomb = Bomb::new(pos, Some(self.grid_id))
            .with_fuse(self.config.explosion_time)
            .with_flame_range(player.flame_range)
            .with_owner(id);
        self.bombs.push(bomb);
        debug!("{id} placed bomb at {pos}");
        true
    }

    /// Arm an ownerless bomb on a walkable cell
    pub fn drop_bomb(&mut self, pos: GridPos, flame_range: u32) -> bool {
        let walkable = self.grid().is_some_and(|grid| grid.is_walkable(pos));
        if !walkable || self.bomb_at(pos) {
            return false;
        }
        self.bombs.push(
            Bomb::new(pos, Some(self.grid_id))
                .with_fuse(self.config.explosion_time)
                .with_flame_range(flame_range),
        );
        debug!("bomb dropped at {pos}");
        true
    }

    /// Set off every armed bomb a player owns
    ///
    /// Requires the remote detonator power-up. Returns the number of the
    /// player's bombs detonated, including ones set off by the chain;
    /// bombs of other owners are not counted.
    pub fn detonate_remote(&mut self, id: PlayerId) -> usize {
        let allowed = self
            .player(id)
            .is_some_and(|player| player.is_alive() && player.has_remote_detonator);
        if !allowed {
            return 0;
        }

        let armed_before = self.armed_bombs_of(id);
        for index in 0..self.bombs.len() {
            let Some(bomb) = self.bombs.get_mut(index) else {
                continue;
            };
            if bomb.owner() != Some(id) {
                continue;
            }
            if let Some(detonation) = bomb.explode(&mut self.grids, &mut self.events) {
                self.resolve(detonation);
            }
        }
        let own = armed_before.saturating_sub(self.armed_bombs_of(id));
        self.bombs.retain(|bomb| !bomb.has_exploded());
        own
    }

    fn armed_bombs_of(&self, id: PlayerId) -> usize {
        self.bombs
            .iter()
            .filter(|bomb| bomb.owner() == Some(id) && !bomb.has_exploded())
            .count()
    }

    /// Advance every bomb by `delta` seconds
    ///
    /// Bombs are processed in placement order and each detonation, including
    /// the chain it triggers, is fully applied before the next bomb ticks.
    /// Returns the number of bombs that went off.
    pub fn tick(&mut self, delta: f64) -> usize {
        self.elapsed += delta;
        trace!("tick {delta:.3}s, elapsed {:.3}s", self.elapsed);

        let mut detonated = 0;
        for index in 0..self.bombs.len() {
            let Some(bomb) = self.bombs.get_mut(index) else {
                continue;
            };
            if let Some(detonation) = bomb.tick(delta, &mut self.grids, &mut self.events) {
                detonated += self.resolve(detonation);
            }
        }
        self.bombs.retain(|bomb| !bomb.has_exploded());
        detonated
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<ArenaEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a detonation and everything it sets off
    fn resolve(&mut self, first: Detonation) -> usize {
        let mut pending = VecDeque::from([first]);
        let mut resolved = 0;

        while let Some(detonation) = pending.pop_front() {
            resolved += 1;
            let blast = &detonation.blast_tiles;

            let owner = detonation.owner.and_then(|owner| {
                self.players.iter_mut().find(|player| player.id() == owner)
            });
            if let Some(owner) = owner {
                owner.notify_bomb_resolved();
            }

            for player in &mut self.players {
                if blast.contains(&player.position()) && player.take_damage(&mut self.events) {
                    debug!("{} caught in blast from {}", player.id(), detonation.origin);
                }
            }

            self.power_ups
                .retain(|power_up| !blast.contains(&power_up.position));

            if self.config.chain_reactions {
                for bomb in &mut self.bombs {
                    if !blast.contains(&bomb.origin()) {
                        continue;
                    }
                    if let Some(chained) = bomb.explode(&mut self.grids, &mut self.events) {
                        pending.push_back(chained);
                    }
                }
            }
        }

        resolved
    }
}
