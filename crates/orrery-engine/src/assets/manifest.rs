use serde::{Deserialize, Serialize};

/// Texture manifest describing the surface images available to a scene.
/// Loaded from a JSON file at runtime; the TypeScript side binds each image
/// to the slot index the renderer samples from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Ordered list of textures. A texture's slot defaults to its index.
    pub textures: Vec<TextureDescriptor>,
}

/// Describes a single texture image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Name scene code refers to (e.g. "earth").
    pub name: String,
    /// Relative path to the image file (e.g. "earth.jpg").
    pub path: String,
    /// Explicit slot override; defaults to the list index.
    #[serde(default)]
    pub slot: Option<u32>,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
