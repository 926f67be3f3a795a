pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::api::app::{App, AppConfig, SceneContext};
pub use crate::api::types::{AppEvent, EntityId};
pub use crate::assets::manifest::TextureManifest;
pub use crate::assets::registry::TextureRegistry;
pub use crate::bridge::protocol::ProtocolLayout;
pub use crate::components::entity::Entity;
pub use crate::components::mesh::{MeshComponent, Rgb, Surface, TextureSlot};
pub use crate::components::orbit::OrbitComponent;
pub use crate::core::driver::{AnimationDriver, DriverState};
pub use crate::core::orbit::OrbitPath;
pub use crate::core::scene::Scene;
pub use crate::core::time::{FrameClock, FrameContext};
pub use crate::renderer::camera::{CameraConfig, CameraUniform, PerspectiveCamera};
pub use crate::renderer::instance::{BodyBuffer, BodyInstance};
pub use crate::systems::motion::advance_bodies;
pub use crate::systems::render::build_body_buffer;
