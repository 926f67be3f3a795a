use glam::Vec2;

use crate::core::scene::Scene;

/// Position every orbiting body at the given elapsed time and apply
/// self-rotation to all bodies.
///
/// Positions are absolute functions of elapsed time, never integrated from
/// the previous frame, so calling this with any sequence of times leaves the
/// scene exactly where a single call with the last time would.
pub fn advance_bodies(scene: &mut Scene, elapsed: f64) {
    for body in scene.iter_mut() {
        if !body.active {
            continue;
        }
        if let Some(orbit) = &body.orbit {
            let p = orbit.position(elapsed);
            // f64 orbit math, f32 at the screen-coordinate step
            body.pos = Vec2::new(p.x as f32, p.y as f32);
        }
        body.rotation = (body.spin as f64 * elapsed) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::entity::Entity;
    use crate::components::orbit::OrbitComponent;
    use crate::core::orbit::OrbitPath;

    fn scene_with_orbiter() -> Scene {
        let mut scene = Scene::new();
        scene.spawn(
            Entity::new(EntityId(1))
                .with_tag("mercury")
                .with_spin(0.3)
                .with_orbit(OrbitComponent::new(
                    OrbitPath::ellipse(0.0, -10.0, 20.0, 30.0),
                    0.5,
                )),
        );
        scene
    }

    #[test]
    fn positions_depend_only_on_elapsed_time() {
        let mut a = scene_with_orbiter();
        let mut b = scene_with_orbiter();

        advance_bodies(&mut a, 3.7);

        // Different call history, same final time.
        advance_bodies(&mut b, 0.4);
        advance_bodies(&mut b, 12.0);
        advance_bodies(&mut b, 3.7);

        let pa = a.get(EntityId(1)).unwrap().pos;
        let pb = b.get(EntityId(1)).unwrap().pos;
        assert_eq!(pa, pb);
    }

    #[test]
    fn orbiter_starts_at_path_start() {
        let mut scene = scene_with_orbiter();
        advance_bodies(&mut scene, 0.0);
        let pos = scene.get(EntityId(1)).unwrap().pos;
        assert!((pos.x - 20.0).abs() < 1e-5);
        assert!((pos.y - -10.0).abs() < 1e-5);
    }

    #[test]
    fn half_period_reaches_antipodal_point() {
        // speed 0.5 → period 2s → t=1.0 is half way around
        let mut scene = scene_with_orbiter();
        advance_bodies(&mut scene, 1.0);
        let pos = scene.get(EntityId(1)).unwrap().pos;
        assert!((pos.x - -20.0).abs() < 1e-4);
        assert!((pos.y - -10.0).abs() < 1e-4);
    }

    #[test]
    fn spin_is_proportional_to_elapsed() {
        let mut scene = scene_with_orbiter();
        advance_bodies(&mut scene, 2.0);
        let rot = scene.get(EntityId(1)).unwrap().rotation;
        assert!((rot - 0.6).abs() < 1e-5);
    }

    #[test]
    fn body_without_orbit_keeps_its_position() {
        let mut scene = Scene::new();
        scene.spawn(
            Entity::new(EntityId(1))
                .with_tag("sun")
                .with_pos(Vec2::ZERO)
                .with_spin(0.1),
        );
        advance_bodies(&mut scene, 5.0);
        let sun = scene.get(EntityId(1)).unwrap();
        assert_eq!(sun.pos, Vec2::ZERO);
        assert!((sun.rotation - 0.5).abs() < 1e-5);
    }

    #[test]
    fn inactive_bodies_are_skipped() {
        let mut scene = scene_with_orbiter();
        scene.get_mut(EntityId(1)).unwrap().active = false;
        advance_bodies(&mut scene, 1.0);
        let body = scene.get(EntityId(1)).unwrap();
        assert_eq!(body.pos, Vec2::ZERO);
        assert_eq!(body.rotation, 0.0);
    }
}
