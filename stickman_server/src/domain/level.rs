// A single playable level: the player, every other entity, and the frame loop.

use crate::domain::entity::{Bounds, Entity, EntityId, Flag, Mushroom, Obstacle, Platform, TickContext};
use crate::domain::events::GameEventSink;
use crate::domain::slime::Slime;
use crate::domain::stickman::{PlayerSize, StickMan};
use crate::domain::systems::collisions;
use tracing::debug;

/// Where the player starts. `y` is the ground line under the player's feet.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroSpawn {
    pub x: f64,
    pub y: f64,
    pub size: PlayerSize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlimeSpawn {
    pub x: f64,
    pub y: f64,
    pub chases: bool,
}

/// Validated level description, ready to be built into a [`Level`].
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub width: f64,
    pub floor_height: f64,
    pub hero: HeroSpawn,
    pub platforms: Vec<Bounds>,
    pub slimes: Vec<SlimeSpawn>,
    // Top-left corners.
    pub mushrooms: Vec<(f64, f64)>,
    pub flag: Option<(f64, f64)>,
}

/// Owns everything alive in one level. Cloning yields a fully independent copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    hero: StickMan,
    entities: Vec<Entity>,
    width: f64,
    floor_height: f64,
    next_id: u64,
    ticks: u64,
}

impl Level {
    /// Assembles a level from already-constructed parts.
    pub fn new(hero: StickMan, entities: Vec<Entity>, width: f64, floor_height: f64) -> Self {
        let next_id = entities
            .iter()
            .map(|e| e.body().id.0)
            .chain(std::iter::once(hero.body.id.0))
            .max()
            .map_or(0, |max| max + 1);
        Self {
            hero,
            entities,
            width,
            floor_height,
            next_id,
            ticks: 0,
        }
    }

    /// Builds a fresh level; the player gets id 0 and everything else follows
    /// in layout order.
    pub fn build(layout: &LevelLayout) -> Self {
        let mut ids = (1u64..).map(EntityId);
        let mut next = || ids.next().unwrap_or(EntityId(u64::MAX));

        let hero = StickMan::new(EntityId(0), layout.hero.x, layout.hero.y, layout.hero.size);

        let mut entities = Vec::new();
        for bounds in &layout.platforms {
            entities.push(Entity::Platform(Platform::new(next(), *bounds)));
        }
        for slime in &layout.slimes {
            entities.push(Entity::Slime(Slime::new(next(), slime.x, slime.y, slime.chases)));
        }
        for &(x, y) in &layout.mushrooms {
            entities.push(Entity::Mushroom(Mushroom::new(next(), x, y)));
        }
        if let Some((x, y)) = layout.flag {
            entities.push(Entity::Flag(Flag::new(next(), x, y)));
        }

        Self::new(hero, entities, layout.width, layout.floor_height)
    }

    pub fn hero(&self) -> &StickMan {
        &self.hero
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn level_width(&self) -> f64 {
        self.width
    }

    pub fn floor_height(&self) -> f64 {
        self.floor_height
    }

    /// Frames simulated since the level was built.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Pre-tick view of the player and every active entity.
    pub fn snapshot(&self) -> Vec<Obstacle> {
        std::iter::once(self.hero.body.obstacle())
            .chain(
                self.entities
                    .iter()
                    .filter(|e| e.is_active())
                    .map(|e| e.body().obstacle()),
            )
            .collect()
    }

    /// Advances one frame.
    ///
    /// Every entity reads the same pre-tick snapshot, so the outcome does not
    /// depend on the order entities are stored in.
    pub fn tick(&mut self, events: &mut dyn GameEventSink) {
        let obstacles = self.snapshot();
        let ctx = TickContext {
            obstacles: &obstacles,
            hero_center_x: self.hero.body.bounds.center_x(),
            floor_height: self.floor_height,
            level_width: self.width,
        };

        self.hero.tick(&ctx);
        for entity in self.entities.iter_mut().filter(|e| e.is_active()) {
            entity.tick(&ctx);
        }

        collisions::resolve(&mut self.hero, &mut self.entities, self.width, events);
        self.entities.retain(Entity::is_active);
        self.ticks += 1;
    }

    pub fn move_left(&mut self) -> bool {
        let obstacles = self.snapshot();
        self.hero.move_left(&obstacles)
    }

    pub fn move_right(&mut self) -> bool {
        let obstacles = self.snapshot();
        self.hero.move_right(&obstacles, self.width)
    }

    pub fn stop(&mut self) -> bool {
        self.hero.stop()
    }

    pub fn jump(&mut self) -> bool {
        let obstacles = self.snapshot();
        self.hero.jump(&obstacles, self.floor_height)
    }

    /// Spawns a bullet from the player. Fails unless the player is upgraded.
    pub fn shoot(&mut self) -> bool {
        let Some(bullet) = self.hero.shoot(EntityId(self.next_id)) else {
            return false;
        };
        debug!(bullet_id = self.next_id, left = bullet.is_left(), "bullet fired");
        self.next_id += 1;
        self.entities.push(Entity::Bullet(bullet));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::RecordingSink;

    const FLOOR: f64 = 400.0;

    fn layout() -> LevelLayout {
        LevelLayout {
            width: 800.0,
            floor_height: FLOOR,
            hero: HeroSpawn {
                x: 40.0,
                y: FLOOR,
                size: PlayerSize::Normal,
            },
            platforms: vec![Bounds::new(300.0, 330.0, 100.0, 16.0)],
            slimes: vec![SlimeSpawn {
                x: 600.0,
                y: FLOOR - 18.0,
                chases: false,
            }],
            mushrooms: vec![(120.0, FLOOR - 20.0)],
            flag: Some((760.0, FLOOR - 48.0)),
        }
    }

    #[test]
    fn build_assigns_ids_in_layout_order() {
        let level = Level::build(&layout());

        assert_eq!(level.hero().body.id, EntityId(0));
        let ids: Vec<u64> = level.entities().iter().map(|e| e.body().id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(matches!(level.entities()[0], Entity::Platform(_)));
        assert!(matches!(level.entities()[3], Entity::Flag(_)));
    }

    #[test]
    fn snapshot_includes_hero_and_skips_inactive() {
        let mut level = Level::build(&layout());
        level.entities[2].body_mut().deactivate();

        let snapshot = level.snapshot();
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot[0].id, EntityId(0));
        assert!(snapshot.iter().all(|o| o.id != EntityId(3)));
    }

    #[test]
    fn inactive_entities_are_pruned_after_the_tick() {
        let mut sink = RecordingSink::default();
        let mut level = Level::build(&layout());
        level.entities[2].body_mut().deactivate();

        level.tick(&mut sink);

        assert_eq!(level.entities().len(), 3);
        assert_eq!(level.ticks(), 1);
    }

    #[test]
    fn shooting_spawns_fresh_ids_only_when_upgraded() {
        let mut sink = RecordingSink::default();
        let mut level = Level::build(&layout());
        assert!(!level.shoot());

        for _ in 0..90 {
            level.move_right();
            level.tick(&mut sink);
        }
        assert!(level.hero().upgraded());
        assert_eq!(sink.score, 50);

        assert!(level.shoot());
        assert!(level.shoot());
        let bullet_ids: Vec<u64> = level
            .entities()
            .iter()
            .filter(|e| matches!(e, Entity::Bullet(_)))
            .map(|e| e.body().id.0)
            .collect();
        assert_eq!(bullet_ids, vec![5, 6]);
    }

    #[test]
    fn jump_is_routed_through_the_ground_check() {
        let mut sink = RecordingSink::default();
        let mut level = Level::build(&layout());

        assert!(level.jump());
        level.tick(&mut sink);
        assert!(!level.jump());
    }

    #[test]
    fn wall_blocks_the_player() {
        let mut sink = RecordingSink::default();
        let mut layout = layout();
        layout.platforms = vec![Bounds::new(100.0, 300.0, 20.0, 100.0)];
        layout.mushrooms.clear();
        let mut level = Level::build(&layout);

        level.move_right();
        for _ in 0..100 {
            level.tick(&mut sink);
        }

        assert_eq!(level.hero().body.bounds.right(), 100.0);
        assert!(!level.move_right());
    }

    #[test]
    fn tick_outcome_is_independent_of_entity_order() {
        let mut sink = RecordingSink::default();
        let hero = StickMan::new(EntityId(0), 10.0, FLOOR, PlayerSize::Normal);
        // Two slimes walking into each other's former positions.
        let a = Entity::Slime(Slime::new(EntityId(1), 200.0, FLOOR - 18.0, false));
        let b = Entity::Slime(Slime::new(EntityId(2), 226.0, FLOOR - 18.0, true));
        let wall = Entity::Platform(Platform::new(EntityId(3), Bounds::new(150.0, 300.0, 20.0, 100.0)));

        let mut forward = Level::new(hero.clone(), vec![a.clone(), b.clone(), wall.clone()], 800.0, FLOOR);
        let mut reverse = Level::new(hero, vec![wall, b, a], 800.0, FLOOR);
        for _ in 0..120 {
            forward.tick(&mut sink);
            reverse.tick(&mut sink);
        }

        let mut left: Vec<Entity> = forward.entities().to_vec();
        let mut right: Vec<Entity> = reverse.entities().to_vec();
        left.sort_by_key(|e| e.body().id);
        right.sort_by_key(|e| e.body().id);
        assert_eq!(left, right);
        assert_eq!(forward.hero(), reverse.hero());
    }

    #[test]
    fn landing_on_a_platform_never_sticks_the_hero() {
        let mut sink = RecordingSink::default();
        for i in 0..400 {
            let top = 200.0 + f64::from(i) * 0.37;
            let hero = StickMan::new(EntityId(0), 100.0, top - 30.0, PlayerSize::Normal);
            let platform = Entity::Platform(Platform::new(
                EntityId(1),
                Bounds::new(0.0, top, 1000.0, 16.0),
            ));
            let mut level = Level::new(hero, vec![platform], 2000.0, 1000.0);

            for _ in 0..100 {
                level.tick(&mut sink);
            }
            assert!((level.hero().body.bounds.bottom() - top).abs() < 1e-9, "top {top}");

            assert!(level.move_right(), "top {top}");
            for _ in 0..10 {
                level.tick(&mut sink);
            }
            assert!(level.hero().body.bounds.x > 109.999, "top {top}");
        }
    }

    #[test]
    fn hero_pressed_against_a_wall_can_still_jump() {
        let mut sink = RecordingSink::default();
        for i in 0..400 {
            let wall_x = 300.0 + f64::from(i) * 0.731;
            let hero = StickMan::new(EntityId(0), wall_x - 30.0, FLOOR, PlayerSize::Normal);
            let wall = Entity::Platform(Platform::new(
                EntityId(1),
                Bounds::new(wall_x, 0.0, 20.0, FLOOR),
            ));
            let mut level = Level::new(hero, vec![wall], 2000.0, FLOOR);

            level.move_right();
            for _ in 0..20 {
                level.tick(&mut sink);
            }
            assert!((level.hero().body.bounds.right() - wall_x).abs() < 1e-9, "wall {wall_x}");

            let before = level.hero().body.bounds.y;
            assert!(level.jump(), "wall {wall_x}");
            level.tick(&mut sink);
            assert!(level.hero().body.bounds.y < before - 3.0, "wall {wall_x}");
        }
    }

    #[test]
    fn clones_do_not_share_state() {
        let mut sink = RecordingSink::default();
        let mut level = Level::build(&layout());
        let saved = level.clone();

        level.move_right();
        for _ in 0..30 {
            level.tick(&mut sink);
        }

        assert_eq!(saved.hero().body.bounds.x, 40.0);
        assert_eq!(saved.ticks(), 0);
        assert_ne!(level, saved);
    }
}
