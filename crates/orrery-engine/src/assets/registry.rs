use std::collections::HashMap;

use crate::assets::manifest::TextureManifest;
use crate::components::mesh::TextureSlot;

/// Registry of named texture slots, built from a TextureManifest.
/// Scene code resolves texture references by name when spawning bodies.
pub struct TextureRegistry {
    slots: HashMap<String, TextureSlot>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Build a registry from a parsed TextureManifest.
    pub fn from_manifest(manifest: &TextureManifest) -> Self {
        let mut slots = HashMap::with_capacity(manifest.textures.len());
        for (i, desc) in manifest.textures.iter().enumerate() {
            let slot = desc.slot.unwrap_or(i as u32);
            slots.insert(desc.name.clone(), TextureSlot(slot));
        }
        Self { slots }
    }

    /// Look up a texture slot by name. Returns None if not found.
    pub fn slot(&self, name: &str) -> Option<TextureSlot> {
        self.slots.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
