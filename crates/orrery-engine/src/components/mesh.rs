/// Linear RGB color for sphere rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert a 0xRRGGBB color literal.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self {
            r: 0.6,
            g: 0.6,
            b: 0.8,
        }
    }
}

/// Index of a texture image loaded by the renderer, assigned through the
/// texture manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSlot(pub u32);

/// Visual surface of a body: a flat color or a texture reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    Color(Rgb),
    Texture(TextureSlot),
}

/// Component for sphere-rendered bodies.
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    /// Sphere radius in world units.
    pub radius: f32,
    pub surface: Surface,
    /// Phong specular exponent (default: 32.0).
    pub shininess: f32,
    /// HDR glow multiplier (default: 0.0, values > 0 push into EDR range).
    pub emissive: f32,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            radius: 1.0,
            surface: Surface::Color(Rgb::default()),
            shininess: 32.0,
            emissive: 0.0,
        }
    }
}

impl MeshComponent {
    pub fn sphere(radius: f32, color: Rgb) -> Self {
        Self {
            radius,
            surface: Surface::Color(color),
            ..Default::default()
        }
    }

    pub fn textured_sphere(radius: f32, slot: TextureSlot) -> Self {
        Self {
            radius,
            surface: Surface::Texture(slot),
            ..Default::default()
        }
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}
