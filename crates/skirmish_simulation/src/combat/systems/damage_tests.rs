//! Tests for damage systems.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::super::damage::apply_damage_requests;
    use crate::arena::AnimationSignalEvent;
    use crate::combat::{DamageDealt, DamageRequest, EntityDied, HitSway, PunchSide, SwayParams};
    use crate::components::{
        CollisionDisabled, CombatTarget, Dead, DeathGrace, DespawnAfter, Health,
    };
    use crate::shared::{AnimSignal, AnimTrigger};

    fn damage_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time<Fixed>>()
            .add_event::<DamageRequest>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_event::<AnimationSignalEvent>()
            .add_systems(Update, apply_damage_requests);
        app
    }

    fn current<E: Event + Clone>(app: &App) -> Vec<E> {
        app.world()
            .resource::<Events<E>>()
            .iter_current_update_events()
            .cloned()
            .collect()
    }

    fn hit(target: Entity, amount: i32) -> DamageRequest {
        DamageRequest {
            target,
            amount,
            side: None,
            source: None,
        }
    }

    #[test]
    fn test_request_wounds_and_reports() {
        let mut app = damage_app();
        let target = app.world_mut().spawn(Health::new(100)).id();

        app.world_mut().send_event(hit(target, 30));
        app.update();

        assert_eq!(app.world().get::<Health>(target).map(|h| h.current), Some(70));

        let dealt = current::<DamageDealt>(&app);
        assert_eq!(dealt.len(), 1);
        assert_eq!(dealt[0].remaining, 70);
        assert!(!dealt[0].target_died);

        let signals = current::<AnimationSignalEvent>(&app);
        assert_eq!(
            signals,
            vec![AnimationSignalEvent {
                entity: target,
                signal: AnimSignal::Trigger(AnimTrigger::Hit),
            }]
        );
    }

    #[test]
    fn test_killing_blow_marks_dead_once() {
        let mut app = damage_app();
        let target = app
            .world_mut()
            .spawn((Health::new(100), DeathGrace { seconds: 2.0 }, CombatTarget(None)))
            .id();

        app.world_mut().send_event(hit(target, 30));
        app.world_mut().send_event(hit(target, 80));
        app.world_mut().send_event(hit(target, 80));
        app.update();

        let health = app.world().get::<Health>(target).copied();
        assert_eq!(health.map(|h| h.current), Some(-10));
        assert!(app.world().get::<Dead>(target).is_some());
        assert!(app.world().get::<CollisionDisabled>(target).is_some());
        assert!(app.world().get::<CombatTarget>(target).is_none());

        let despawn_time = app.world().get::<DespawnAfter>(target).map(|d| d.despawn_time);
        assert_eq!(despawn_time, Some(2.0));

        assert_eq!(current::<EntityDied>(&app).len(), 1);
        // Third request was ignored entirely
        assert_eq!(current::<DamageDealt>(&app).len(), 2);
    }

    #[test]
    fn test_melee_hit_starts_sway() {
        let mut app = damage_app();
        let target = app
            .world_mut()
            .spawn((Health::new(100), HitSway::default(), SwayParams::default()))
            .id();

        app.world_mut().send_event(DamageRequest {
            side: Some(PunchSide::Left),
            ..hit(target, 10)
        });
        app.update();

        let sway = app.world().get::<HitSway>(target).copied().unwrap_or_default();
        assert!(sway.is_active());
        assert_eq!(sway.peak_yaw, 18.0);
    }

    #[test]
    fn test_request_for_missing_actor_is_ignored() {
        let mut app = damage_app();
        let gone = app.world_mut().spawn(Health::new(100)).id();
        app.world_mut().despawn(gone);

        app.world_mut().send_event(hit(gone, 10));
        app.update();

        assert!(current::<DamageDealt>(&app).is_empty());
    }
}
