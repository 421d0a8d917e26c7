//! Tests for the reference arena host

#[cfg(test)]
mod tests {
    use bomb_arena::ArenaEvent;
    use bomb_arena::entities::PowerUpKind;
    use bomb_arena::simulation::{Arena, ArenaConfig};
    use bomb_arena::spatial::{GridPos, TileGrid, TileKind};

    fn open_arena() -> Arena {
        Arena::new(TileGrid::new(5, 5))
    }

    #[test]
    fn test_spawn_assigns_sequential_ids() {
        let mut arena = open_arena();

        let first = arena.spawn_player(GridPos::new(0, 0));
        let second = arena.spawn_player(GridPos::new(4, 4));

        assert_ne!(first, second);
        assert_eq!(arena.live_players(), 2);
        assert_eq!(
            arena.player(first).and_then(|player| player.grid()),
            Some(arena.grid_id())
        );
    }

    // Tests a placed bomb reserves capacity until it explodes
    // Verified by skipping notify_bomb_resolved for the owner
    #[test]
    fn test_bomb_capacity_released_on_explosion() {
        let mut arena = open_arena();
        let id = arena.spawn_player(GridPos::new(0, 0));

        assert!(arena.place_bomb(id));
        assert!(!arena.place_bomb(id));
        assert!(arena.move_player(id, 1, 0));
        assert!(arena.move_player(id, 1, 0));

        assert_eq!(arena.tick(2.0), 1);

        assert!(arena.is_settled());
        assert_eq!(arena.player(id).map(|player| player.active_bombs()), Some(0));
        assert_eq!(arena.live_players(), 1);
        assert!(arena.place_bomb(id));
    }

    // Tests armed bombs block movement onto their cell
    #[test]
    fn test_bomb_blocks_movement() {
        let mut arena = open_arena();
        let id = arena.spawn_player(GridPos::new(0, 0));

        assert!(arena.drop_bomb(GridPos::new(1, 0), 1));

        assert!(!arena.move_player(id, 1, 0));
        assert!(arena.bomb_at(GridPos::new(1, 0)));
        assert_eq!(arena.player(id).map(|player| player.position()), Some(GridPos::new(0, 0)));
    }

    // Tests players inside a blast die and the death is reported
    // Verified by skipping the damage loop in resolve
    #[test]
    fn test_blast_kills_player() {
        let mut arena = open_arena();
        let id = arena.spawn_player(GridPos::new(1, 0));
        arena.drop_bomb(GridPos::new(0, 0), 1);

        arena.tick(2.0);

        assert_eq!(arena.live_players(), 0);
        assert!(
            arena
                .drain_events()
                .contains(&ArenaEvent::PlayerDied { player: id })
        );
        assert!(!arena.move_player(id, 1, 0));
    }

    // Tests a blast reaching another armed bomb sets it off in the same tick
    // Verified by disabling the chain loop in resolve
    #[test]
    fn test_chain_reaction() {
        let mut arena = open_arena();
        arena.drop_bomb(GridPos::new(0, 0), 1);
        arena.tick(1.0);
        arena.drop_bomb(GridPos::new(1, 0), 1);

        assert_eq!(arena.tick(1.0), 2);
        assert!(arena.is_settled());
    }

    #[test]
    fn test_chain_reaction_disabled() {
        let config = ArenaConfig {
            chain_reactions: false,
            ..ArenaConfig::default()
        };
        let mut arena = Arena::with_config(TileGrid::new(5, 5), config);
        arena.drop_bomb(GridPos::new(0, 0), 1);
        arena.tick(1.0);
        arena.drop_bomb(GridPos::new(1, 0), 1);

        assert_eq!(arena.tick(1.0), 1);
        assert_eq!(arena.bombs().len(), 1);
        assert_eq!(arena.tick(1.0), 1);
        assert!(arena.is_settled());
    }

    // Tests walking onto a power-up collects and applies it
    // Verified by not calling apply after a successful collection
    #[test]
    fn test_move_collects_power_up() {
        let mut arena = open_arena();
        let id = arena.spawn_player(GridPos::new(0, 0));
        arena.spawn_power_up(PowerUpKind::FlameUp, GridPos::new(1, 0));

        assert!(arena.move_player(id, 1, 0));

        assert!(arena.power_ups().is_empty());
        assert_eq!(arena.player(id).map(|player| player.flame_range), Some(2));
        assert!(arena.drain_events().iter().any(|event| matches!(
            event,
            ArenaEvent::PowerUpCollected {
                kind: PowerUpKind::FlameUp,
                ..
            }
        )));
    }

    #[test]
    fn test_blast_burns_power_ups() {
        let mut arena = open_arena();
        arena.spawn_power_up(PowerUpKind::BombUp, GridPos::new(1, 0));
        arena.spawn_power_up(PowerUpKind::Kick, GridPos::new(4, 4));
        arena.drop_bomb(GridPos::new(0, 0), 1);

        arena.tick(2.0);

        assert_eq!(arena.power_ups().len(), 1);
        assert!(
            arena
                .power_ups()
                .iter()
                .all(|power_up| power_up.kind == PowerUpKind::Kick)
        );
    }

    #[test]
    fn test_remote_detonation_requires_power_up() {
        let mut arena = open_arena();
        let id = arena.spawn_player(GridPos::new(2, 2));
        arena.place_bomb(id);

        assert_eq!(arena.detonate_remote(id), 0);

        if let Some(player) = arena.player_mut(id) {
            PowerUpKind::RemoteDetonator.apply(player);
        }
        assert!(arena.move_player(id, 1, 0));
        assert!(arena.move_player(id, 1, 0));

        assert_eq!(arena.detonate_remote(id), 1);
        assert!(arena.is_settled());
        assert_eq!(arena.live_players(), 1);
    }

    // Tests own bombs set off by the chain count toward the detonation total
    // Verified by counting only bombs exploded directly by the remote
    #[test]
    fn test_remote_detonation_counts_chained_own_bombs() {
        let mut arena = Arena::new(TileGrid::new(5, 1));
        let id = arena.spawn_player(GridPos::new(1, 0));
        if let Some(player) = arena.player_mut(id) {
            player.bomb_capacity = 2;
            PowerUpKind::RemoteDetonator.apply(player);
        }

        assert!(arena.place_bomb(id));
        assert!(arena.move_player(id, 1, 0));
        assert!(arena.place_bomb(id));
        assert!(arena.move_player(id, 1, 0));
        assert!(arena.move_player(id, 1, 0));

        assert_eq!(arena.detonate_remote(id), 2);
        assert!(arena.is_settled());
        assert_eq!(arena.live_players(), 1);
        assert_eq!(arena.player(id).map(|player| player.active_bombs()), Some(0));
    }

    #[test]
    fn test_drop_bomb_rejects_blocked_cells() {
        let mut grid = TileGrid::new(3, 1);
        grid.set_tile(GridPos::new(2, 0), TileKind::Wall);
        let mut arena = Arena::new(grid);

        assert!(arena.drop_bomb(GridPos::new(0, 0), 1));
        assert!(!arena.drop_bomb(GridPos::new(0, 0), 1));
        assert!(!arena.drop_bomb(GridPos::new(2, 0), 1));
        assert!(!arena.drop_bomb(GridPos::new(7, 0), 1));
        assert_eq!(arena.bombs().len(), 1);
    }

    // Tests destroyed tiles and explosions arrive through the drained events
    #[test]
    fn test_drain_events_empties_queue() {
        let mut grid = TileGrid::new(3, 1);
        grid.set_tile(GridPos::new(1, 0), TileKind::Destructible);
        let mut arena = Arena::new(grid);
        arena.drop_bomb(GridPos::new(0, 0), 2);

        arena.tick(0.5);
        arena.tick(1.5);

        let events = arena.drain_events();
        assert_eq!(events.len(), 2);
        assert!(arena.drain_events().is_empty());
        assert!((arena.elapsed() - 2.0).abs() < f64::EPSILON);
        assert_eq!(
            arena.grid().map(|grid| grid.tile(GridPos::new(1, 0))),
            Some(TileKind::Floor)
        );
    }
}
