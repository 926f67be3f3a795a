//! Body data — ellipse paths, sizes, and colors for the sun and nine planets.
//!
//! The paths are stylized, not to scale: nested ellipses with offset centers
//! so the orbits read well on screen. Speeds halve (roughly) per ring so the
//! inner planets visibly lap the outer ones.

use std::f64::consts::PI;

use orrery_engine::OrbitPath;

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLUTO: usize = 8;
pub const PLANET_COUNT: usize = 9;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 10.0;
pub const SUN_COLOR: u32 = 0xFFFF00;
pub const SUN_EMISSIVE: f32 = 2.5;
pub const SUN_SHININESS: f32 = 8.0;
/// Slow visible roll, radians per second.
pub const SUN_SPIN: f32 = 0.05;

// ── Planets ──────────────────────────────────────────────────────────

/// Everything needed to spawn one planet.
pub struct PlanetSpec {
    /// Tag and texture-manifest name.
    pub name: &'static str,
    /// Sphere radius in world units.
    pub radius: f32,
    /// Flat surface color (0xRRGGBB), used when no texture is loaded.
    pub color: u32,
    pub path: OrbitPath,
    /// Fraction of the path covered per second.
    pub speed: f64,
    /// Self-rotation rate in radians per second (exaggerated for
    /// readability; Venus and Uranus roll retrograde).
    pub spin: f32,
}

pub fn planet_specs() -> [PlanetSpec; PLANET_COUNT] {
    [
        PlanetSpec {
            name: "mercury",
            radius: 1.0,
            color: 0x666666,
            path: OrbitPath::ellipse(0.0, -10.0, 20.0, 30.0),
            speed: 1.0 / 2.0,
            spin: 0.25,
        },
        PlanetSpec {
            name: "venus",
            radius: 1.5,
            color: 0xCCCCCC,
            path: OrbitPath::new(0.0, -15.0, 30.0, 45.0, PI / 2.0, 5.0 * PI / 2.0).reversed(),
            speed: 1.0 / 4.0,
            spin: -0.10,
        },
        PlanetSpec {
            name: "earth",
            radius: 1.5,
            color: 0x0000FF,
            path: OrbitPath::new(0.0, -20.0, 40.0, 60.0, PI, 3.0 * PI),
            speed: 1.0 / 8.0,
            spin: 0.80,
        },
        PlanetSpec {
            name: "mars",
            radius: 1.0,
            color: 0xFF6633,
            path: OrbitPath::new(0.0, -15.0, 50.0, 75.0, 3.0 * PI / 2.0, 7.0 * PI / 2.0),
            speed: 1.0 / 16.0,
            spin: 0.78,
        },
        PlanetSpec {
            name: "jupiter",
            radius: 2.5,
            color: 0xFF9999,
            path: OrbitPath::ellipse(0.0, -15.0, 60.0, 90.0),
            speed: 1.0 / 32.0,
            spin: 1.90,
        },
        PlanetSpec {
            name: "saturn",
            radius: 2.5,
            color: 0xFFFFCC,
            path: OrbitPath::new(0.0, -15.0, 70.0, 105.0, PI / 2.0, 5.0 * PI / 2.0),
            speed: 1.0 / 64.0,
            spin: 1.75,
        },
        PlanetSpec {
            name: "uranus",
            radius: 2.0,
            color: 0xCCCCFF,
            path: OrbitPath::new(0.0, -15.0, 80.0, 120.0, PI, 3.0 * PI),
            speed: 1.0 / 96.0,
            spin: -1.10,
        },
        PlanetSpec {
            name: "neptune",
            radius: 2.0,
            color: 0x0000FF,
            path: OrbitPath::new(0.0, -15.0, 90.0, 135.0, 3.0 * PI / 2.0, 7.0 * PI / 2.0),
            speed: 1.0 / 128.0,
            spin: 1.20,
        },
        PlanetSpec {
            name: "pluto",
            radius: 1.0,
            color: 0xCCCCCC,
            path: OrbitPath::ellipse(0.0, -15.0, 100.0, 150.0),
            speed: 1.0 / 160.0,
            spin: 0.10,
        },
    ]
}
