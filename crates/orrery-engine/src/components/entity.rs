use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::mesh::MeshComponent;
use crate::components::orbit::OrbitComponent;

/// Fat entity — a celestial body with optional components.
/// Designed for simplicity over ECS purity; a scene holds tens of bodies.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding bodies by name ("sun", "mercury", ...).
    pub tag: String,
    /// Whether this body is active (inactive bodies are skipped).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec2,
    /// Self-rotation in radians, derived from `spin * elapsed`.
    pub rotation: f32,
    /// Self-rotation rate in radians per second.
    pub spin: f32,
    /// Sphere mesh (optional — bodies without meshes are invisible).
    pub mesh: Option<MeshComponent>,
    /// Orbit path (None for the sun).
    pub orbit: Option<OrbitComponent>,
}

impl Entity {
    /// Create a new body with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            rotation: 0.0,
            spin: 0.0,
            mesh: None,
            orbit: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_orbit(mut self, orbit: OrbitComponent) -> Self {
        self.orbit = Some(orbit);
        self
    }
}
