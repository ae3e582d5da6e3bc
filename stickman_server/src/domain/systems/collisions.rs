use crate::domain::entity::{Bounds, Entity, EntityId};
use crate::domain::events::GameEventSink;
use crate::domain::stickman::StickMan;
use crate::domain::tuning::enemy::SLIME_KILL_SCORE;
use tracing::{debug, info};

/// Applies the consequences of overlaps produced by this frame's movement.
///
/// Runs after every entity has ticked and before inactive entities are pruned.
pub fn resolve(
    hero: &mut StickMan,
    entities: &mut [Entity],
    level_width: f64,
    events: &mut dyn GameEventSink,
) {
    resolve_bullets(entities, level_width, events);
    resolve_hero(hero, entities, events);
}

fn resolve_bullets(entities: &mut [Entity], level_width: f64, events: &mut dyn GameEventSink) {
    for i in 0..entities.len() {
        let (id, bounds) = match &entities[i] {
            Entity::Bullet(b) if b.body.active => (b.body.id, b.body.bounds),
            _ => continue,
        };

        let off_screen = bounds.right() < 0.0 || bounds.left() > level_width;
        let target = if off_screen {
            None
        } else {
            entities.iter().position(|e| stops_bullet(e, id, &bounds))
        };
        if !off_screen && target.is_none() {
            continue;
        }

        if let Some(j) = target {
            if let Entity::Slime(slime) = &mut entities[j] {
                slime.squash();
                events.score_changed(SLIME_KILL_SCORE);
                info!(bullet_id = id.0, slime_id = slime.body.id.0, "slime shot");
            }
        }
        if let Entity::Bullet(bullet) = &mut entities[i] {
            bullet.stop();
            debug!(bullet_id = id.0, off_screen, "bullet stopped");
        }
    }
}

// Bullets stop on slimes and on anything solid.
fn stops_bullet(entity: &Entity, bullet_id: EntityId, bullet: &Bounds) -> bool {
    let body = entity.body();
    if !body.active || body.id == bullet_id || !body.bounds.intersects(bullet) {
        return false;
    }
    matches!(entity, Entity::Slime(_)) || body.solid
}

fn resolve_hero(hero: &mut StickMan, entities: &mut [Entity], events: &mut dyn GameEventSink) {
    for entity in entities.iter_mut() {
        let body = entity.body();
        if !body.active || !body.bounds.intersects(&hero.body.bounds) {
            continue;
        }

        match entity {
            Entity::Slime(slime) => {
                if stomps(hero, &slime.body.bounds) {
                    slime.squash();
                    hero.bounce();
                    events.score_changed(SLIME_KILL_SCORE);
                    info!(slime_id = slime.body.id.0, "slime squashed");
                } else {
                    hero.die(events);
                    info!(slime_id = slime.body.id.0, "hero died");
                    // Hero is back at spawn; nothing else can touch it this frame.
                    return;
                }
            }
            Entity::Mushroom(mushroom) => {
                mushroom.body.deactivate();
                hero.upgrade(events);
                info!(mushroom_id = mushroom.body.id.0, "hero upgraded");
            }
            Entity::Flag(_) => {
                hero.next_level(events);
                return;
            }
            Entity::Platform(_) | Entity::Bullet(_) => {}
        }
    }
}

// Landing on the top half of a slime while not rising squashes it.
fn stomps(hero: &StickMan, slime: &Bounds) -> bool {
    hero.motion.y_velocity >= 0.0 && hero.body.bounds.bottom() <= slime.center_y()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bullet::Bullet;
    use crate::domain::entity::{Flag, Mushroom, Platform};
    use crate::domain::slime::Slime;
    use crate::domain::stickman::PlayerSize;
    use crate::domain::test_support::RecordingSink;

    const FLOOR: f64 = 400.0;

    fn hero_at(x: f64) -> StickMan {
        StickMan::new(EntityId(0), x, FLOOR, PlayerSize::Normal)
    }

    fn slime_at(id: u64, x: f64, y: f64) -> Entity {
        Entity::Slime(Slime::new(EntityId(id), x, y, false))
    }

    #[test]
    fn bullet_kills_slime_and_stops() {
        let mut sink = RecordingSink::default();
        let mut hero = hero_at(0.0);
        let mut entities = vec![
            slime_at(1, 200.0, 382.0),
            Entity::Bullet(Bullet::new(EntityId(2), 205.0, 385.0, false)),
        ];

        resolve(&mut hero, &mut entities, 1000.0, &mut sink);

        assert!(!entities[0].is_active());
        assert!(!entities[1].is_active());
        assert_eq!(sink.score, SLIME_KILL_SCORE);
    }

    #[test]
    fn bullet_stops_at_platforms_and_level_edges() {
        let mut sink = RecordingSink::default();
        let mut hero = hero_at(0.0);
        let mut entities = vec![
            Entity::Platform(Platform::new(EntityId(1), Bounds::new(300.0, 300.0, 50.0, 50.0))),
            Entity::Bullet(Bullet::new(EntityId(2), 310.0, 310.0, true)),
            Entity::Bullet(Bullet::new(EntityId(3), -11.0, 100.0, true)),
            Entity::Bullet(Bullet::new(EntityId(4), 1001.0, 100.0, false)),
            Entity::Bullet(Bullet::new(EntityId(5), 500.0, 100.0, false)),
        ];

        resolve(&mut hero, &mut entities, 1000.0, &mut sink);

        assert!(entities[0].is_active());
        assert!(!entities[1].is_active());
        assert!(!entities[2].is_active());
        assert!(!entities[3].is_active());
        assert!(entities[4].is_active());
        assert_eq!(sink.score, 0);
    }

    #[test]
    fn walking_into_a_slime_kills_the_hero() {
        let mut sink = RecordingSink::default();
        let mut hero = hero_at(100.0);
        hero.body.bounds.x = 190.0;
        let mut entities = vec![slime_at(1, 200.0, 382.0)];

        resolve(&mut hero, &mut entities, 1000.0, &mut sink);

        assert_eq!(sink.lives_lost, 1);
        assert_eq!(hero.body.bounds.x, 100.0);
        assert!(entities[0].is_active());
    }

    #[test]
    fn landing_on_a_slime_squashes_it() {
        let mut sink = RecordingSink::default();
        let mut hero = hero_at(200.0);
        // Feet just inside the slime's top edge, falling.
        hero.body.bounds.y = 382.0 - 40.0 + 2.0;
        hero.motion.y_velocity = 1.5;
        let mut entities = vec![slime_at(1, 200.0, 382.0)];

        resolve(&mut hero, &mut entities, 1000.0, &mut sink);

        assert!(!entities[0].is_active());
        assert_eq!(sink.lives_lost, 0);
        assert_eq!(sink.score, SLIME_KILL_SCORE);
        assert!(hero.motion.y_velocity < 0.0);
    }

    #[test]
    fn mushroom_upgrades_once_and_flag_completes() {
        let mut sink = RecordingSink::default();
        let mut hero = hero_at(100.0);
        let mut entities = vec![
            Entity::Mushroom(Mushroom::new(EntityId(1), 105.0, 380.0)),
            Entity::Flag(Flag::new(EntityId(2), 110.0, 352.0)),
        ];

        resolve(&mut hero, &mut entities, 1000.0, &mut sink);
        resolve(&mut hero, &mut entities, 1000.0, &mut sink);

        assert!(hero.upgraded());
        assert!(!entities[0].is_active());
        assert_eq!(sink.score, 50);
        assert_eq!(sink.completions, 2);
    }
}
