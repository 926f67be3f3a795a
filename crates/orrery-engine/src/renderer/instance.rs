use bytemuck::{Pod, Zeroable};

/// Per-body render data written to SharedArrayBuffer for the TypeScript
/// renderer. 12 floats = 48 bytes per instance (wire format — never changes).
///
/// `texture_slot` is -1.0 for flat-color surfaces, otherwise the slot index
/// from the texture manifest.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    pub rotation: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive: f32,
    pub shininess: f32,
    pub texture_slot: f32,
    pub _pad: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of body instances for one frame.
pub struct BodyBuffer {
    instances: Vec<BodyInstance>,
}

impl BodyBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for BodyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_instance_is_48_bytes() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), 48);
        assert_eq!(BodyInstance::FLOATS, 12);
    }

    #[test]
    fn buffer_push_and_count() {
        let mut buf = BodyBuffer::new();
        buf.push(BodyInstance::default());
        buf.push(BodyInstance::default());
        assert_eq!(buf.instance_count(), 2);
    }
}
