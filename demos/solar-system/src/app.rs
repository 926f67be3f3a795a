//! Solar System — a sun and nine planets on nested elliptical paths.
//!
//! All motion comes from the engine's motion system; this app only declares
//! the scene and reports timing to the UI layer.

use glam::Vec2;
use orrery_engine::{
    App, AppConfig, AppEvent, Entity, EntityId, FrameContext, MeshComponent, OrbitComponent, Rgb,
    SceneContext, Surface,
};

use crate::bodies;

// ── App event kinds to the UI ────────────────────────────────────────

const EVENT_TIME_INFO: f32 = 1.0;

pub struct SolarSystem {
    sun_id: Option<EntityId>,
    planet_ids: [Option<EntityId>; bodies::PLANET_COUNT],
    /// Texture manifests load asynchronously; surfaces are swapped once the
    /// registry shows up.
    textures_applied: bool,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            sun_id: None,
            planet_ids: [None; bodies::PLANET_COUNT],
            textures_applied: false,
        }
    }

    /// Swap flat colors for manifest textures on every body the manifest
    /// names. Bodies without a matching entry keep their color.
    fn apply_textures(&self, ctx: &mut SceneContext) {
        let specs = bodies::planet_specs();
        for (i, spec) in specs.iter().enumerate() {
            let id = match self.planet_ids[i] {
                Some(id) => id,
                None => continue,
            };
            let slot = match ctx.textures.slot(spec.name) {
                Some(slot) => slot,
                None => continue,
            };
            if let Some(body) = ctx.scene.get_mut(id) {
                if let Some(mesh) = &mut body.mesh {
                    mesh.surface = Surface::Texture(slot);
                }
            }
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl App for SolarSystem {
    fn config(&self) -> AppConfig {
        AppConfig {
            max_bodies: 16,
            max_events: 8,
            ..AppConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut SceneContext) {
        // ── Sun ──────────────────────────────────────────────────────
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(sun_id)
                .with_tag("sun")
                .with_pos(Vec2::ZERO)
                .with_spin(bodies::SUN_SPIN)
                .with_mesh(
                    MeshComponent::sphere(bodies::SUN_RADIUS, Rgb::from_hex(bodies::SUN_COLOR))
                        .with_emissive(bodies::SUN_EMISSIVE)
                        .with_shininess(bodies::SUN_SHININESS),
                ),
        );
        self.sun_id = Some(sun_id);

        // ── Planets ──────────────────────────────────────────────────
        for (i, spec) in bodies::planet_specs().iter().enumerate() {
            let orbit = OrbitComponent::new(spec.path, spec.speed);
            let start = orbit.position(0.0);

            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(spec.name)
                    .with_pos(Vec2::new(start.x as f32, start.y as f32))
                    .with_spin(spec.spin)
                    .with_mesh(MeshComponent::sphere(spec.radius, Rgb::from_hex(spec.color)))
                    .with_orbit(orbit),
            );
            self.planet_ids[i] = Some(id);
        }
    }

    fn update(&mut self, ctx: &mut SceneContext, frame: &FrameContext) {
        if !self.textures_applied && !ctx.textures.is_empty() {
            self.apply_textures(ctx);
            self.textures_applied = true;
        }

        ctx.emit_event(AppEvent {
            kind: EVENT_TIME_INFO,
            a: frame.elapsed as f32,
            b: frame.dt,
            c: ctx.scene.len() as f32,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{advance_bodies, TextureManifest, TextureRegistry};

    fn initialized() -> (SolarSystem, SceneContext) {
        let mut app = SolarSystem::new();
        let mut ctx = SceneContext::new();
        app.init(&mut ctx);
        (app, ctx)
    }

    #[test]
    fn spawns_sun_and_nine_planets() {
        let (_, ctx) = initialized();
        assert_eq!(ctx.scene.len(), 1 + bodies::PLANET_COUNT);

        let sun = ctx.scene.find_by_tag("sun").unwrap();
        assert!(sun.orbit.is_none());

        let mercury = ctx.scene.find_by_tag("mercury").unwrap();
        assert!(mercury.orbit.is_some());
    }

    #[test]
    fn mercury_starts_on_its_path() {
        let (_, ctx) = initialized();
        let mercury = ctx.scene.find_by_tag("mercury").unwrap();
        assert!((mercury.pos.x - 20.0).abs() < 1e-5);
        assert!((mercury.pos.y - -10.0).abs() < 1e-5);
    }

    #[test]
    fn mercury_reaches_antipode_at_half_period() {
        let (_, mut ctx) = initialized();
        // speed 1/2 → period 2s
        advance_bodies(&mut ctx.scene, 1.0);
        let mercury = ctx.scene.find_by_tag("mercury").unwrap();
        assert!((mercury.pos.x - -20.0).abs() < 1e-4);
        assert!((mercury.pos.y - -10.0).abs() < 1e-4);
    }

    #[test]
    fn sun_stays_put_while_planets_move() {
        let (_, mut ctx) = initialized();
        advance_bodies(&mut ctx.scene, 0.5);
        let sun = ctx.scene.find_by_tag("sun").unwrap();
        assert_eq!(sun.pos, Vec2::ZERO);
        assert!(sun.rotation > 0.0);
    }

    #[test]
    fn update_emits_time_info() {
        let (mut app, mut ctx) = initialized();
        let frame = FrameContext {
            elapsed: 1.5,
            dt: 1.0 / 60.0,
        };
        app.update(&mut ctx, &frame);
        assert_eq!(ctx.events.len(), 1);
        assert_eq!(ctx.events[0].kind, EVENT_TIME_INFO);
        assert!((ctx.events[0].a - 1.5).abs() < 1e-6);
    }

    #[test]
    fn manifest_textures_replace_flat_colors() {
        let (mut app, mut ctx) = initialized();
        let manifest = TextureManifest::from_json(
            r#"{ "textures": [ { "name": "earth", "path": "earth.jpg" } ] }"#,
        )
        .unwrap();
        ctx.textures = TextureRegistry::from_manifest(&manifest);

        let frame = FrameContext {
            elapsed: 0.0,
            dt: 0.0,
        };
        app.update(&mut ctx, &frame);

        let earth = ctx.scene.find_by_tag("earth").unwrap();
        assert!(matches!(
            earth.mesh.as_ref().unwrap().surface,
            Surface::Texture(_)
        ));
        // Mars has no manifest entry and keeps its color.
        let mars = ctx.scene.find_by_tag("mars").unwrap();
        assert!(matches!(
            mars.mesh.as_ref().unwrap().surface,
            Surface::Color(_)
        ));
    }
}
