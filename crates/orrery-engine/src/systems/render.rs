use crate::components::entity::Entity;
use crate::components::mesh::Surface;
use crate::renderer::instance::{BodyBuffer, BodyInstance};

/// Slot value marking a flat-color surface on the wire.
const NO_TEXTURE: f32 = -1.0;

/// Build the body instance buffer from the scene.
/// Inactive bodies and bodies without meshes are skipped.
pub fn build_body_buffer<'a>(bodies: impl Iterator<Item = &'a Entity>, buffer: &mut BodyBuffer) {
    buffer.clear();

    for body in bodies {
        if !body.active {
            continue;
        }
        let mesh = match &body.mesh {
            Some(m) => m,
            None => continue,
        };

        let (r, g, b, texture_slot) = match mesh.surface {
            Surface::Color(c) => (c.r, c.g, c.b, NO_TEXTURE),
            Surface::Texture(slot) => (1.0, 1.0, 1.0, slot.0 as f32),
        };

        buffer.push(BodyInstance {
            x: body.pos.x,
            y: body.pos.y,
            z: 0.0,
            radius: mesh.radius,
            rotation: body.rotation,
            r,
            g,
            b,
            emissive: mesh.emissive,
            shininess: mesh.shininess,
            texture_slot,
            _pad: 0.0,
        });
    }
}
