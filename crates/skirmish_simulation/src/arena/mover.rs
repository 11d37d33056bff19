//! Headless kinematic mover and actor separation.

use bevy::prelude::*;

use crate::components::{Actor, Body, CollisionDisabled};
use crate::shared::KinematicMover;

use super::ArenaGeometry;

/// Moves bodies against the arena: obstacles stop horizontal motion
/// (sliding along the free axis), the floor stops vertical motion.
pub struct ArenaMover<'a> {
    pub geometry: &'a ArenaGeometry,
}

impl ArenaMover<'_> {
    fn blocked(&self, base: Vec3, body: &Body) -> bool {
        self.geometry
            .obstacles
            .iter()
            .any(|obstacle| obstacle.overlaps_body(base, body))
    }
}

impl KinematicMover for ArenaMover<'_> {
    fn move_body(&mut self, from: Vec3, delta: Vec3, body: &Body) -> Vec3 {
        let mut position = from;

        let full = from + Vec3::new(delta.x, 0.0, delta.z);
        if !self.blocked(full, body) {
            position = full;
        } else {
            let along_x = from + Vec3::new(delta.x, 0.0, 0.0);
            let along_z = from + Vec3::new(0.0, 0.0, delta.z);
            if delta.x != 0.0 && !self.blocked(along_x, body) {
                position = along_x;
            } else if delta.z != 0.0 && !self.blocked(along_z, body) {
                position = along_z;
            }
        }

        position.y = (position.y + delta.y).max(self.geometry.ground_height);
        position
    }
}

/// Share of the overlap each actor of a pair takes per step.
const PUSH_STRENGTH: f32 = 0.5;

/// System: keep living actors from standing inside each other.
pub fn separate_actors(
    mut query: Query<(Entity, &mut Transform, &Body), (With<Actor>, Without<CollisionDisabled>)>,
) {
    let positions: Vec<(Entity, Vec3, f32)> = query
        .iter()
        .map(|(e, t, body)| (e, t.translation, body.radius))
        .collect();

    for (entity, mut transform, body) in query.iter_mut() {
        let mut push = Vec3::ZERO;

        for (other_entity, other_pos, other_radius) in &positions {
            if *other_entity == entity {
                continue;
            }

            let mut to_other = *other_pos - transform.translation;
            to_other.y = 0.0;
            let distance = to_other.length();
            let min_distance = body.radius + other_radius;

            if distance < min_distance && distance > 0.01 {
                let push_dir = -to_other / distance;
                push += push_dir * (min_distance - distance) * PUSH_STRENGTH;
            }
        }

        transform.translation += push;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Obstacle;
    use crate::components::ActorTag;

    #[test]
    fn test_free_move_and_floor_clamp() {
        let geometry = ArenaGeometry::default();
        let mut mover = ArenaMover {
            geometry: &geometry,
        };

        let to = mover.move_body(Vec3::ZERO, Vec3::new(1.0, -0.5, 2.0), &Body::default());
        assert_eq!(to, Vec3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn test_wall_slides_along_free_axis() {
        let geometry = ArenaGeometry {
            ground_height: 0.0,
            obstacles: vec![Obstacle::new(Vec3::new(0.0, 1.0, -2.0), Vec3::new(5.0, 1.0, 0.5))],
        };
        let mut mover = ArenaMover {
            geometry: &geometry,
        };

        // Diagonal into the wall: z is blocked, x still moves
        let to = mover.move_body(Vec3::new(0.0, 0.0, -0.9), Vec3::new(0.3, 0.0, -0.3), &Body::default());
        assert_eq!(to, Vec3::new(0.3, 0.0, -0.9));
    }

    #[test]
    fn test_separation_pushes_apart() {
        let mut app = App::new();
        let a = app
            .world_mut()
            .spawn((Actor { tag: ActorTag::Player }, Body::default(), Transform::from_xyz(0.0, 0.0, 0.0)))
            .id();
        let b = app
            .world_mut()
            .spawn((Actor { tag: ActorTag::Enemy }, Body::default(), Transform::from_xyz(0.6, 0.0, 0.0)))
            .id();
        app.add_systems(Update, separate_actors);

        app.update();

        let xa = app.world().get::<Transform>(a).map(|t| t.translation.x);
        let xb = app.world().get::<Transform>(b).map(|t| t.translation.x);
        // 0.4 overlap, each side takes half
        assert!((xa.unwrap() - (-0.2)).abs() < 1e-5);
        assert!((xb.unwrap() - 0.8).abs() < 1e-5);
    }
}
