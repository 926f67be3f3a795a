use crate::api::types::{AppEvent, EntityId};
use crate::assets::registry::TextureRegistry;
use crate::core::scene::Scene;
use crate::core::time::FrameContext;
use crate::renderer::camera::CameraConfig;

/// Configuration for the engine, provided by the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Maximum number of body instances (default: 64).
    pub max_bodies: usize,
    /// Maximum number of app events per frame (default: 32).
    pub max_events: usize,
    /// Camera placement and projection parameters.
    pub camera: CameraConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_bodies: 64,
            max_events: 32,
            camera: CameraConfig::default(),
        }
    }
}

/// The core contract every scene app must fulfill.
pub trait App {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Setup initial state: spawn the bodies, attach their orbits.
    fn init(&mut self, ctx: &mut SceneContext);

    /// Per-frame logic after the motion system has positioned the bodies.
    /// `frame` carries the elapsed time this frame was evaluated at.
    fn update(&mut self, ctx: &mut SceneContext, frame: &FrameContext);
}

/// Mutable access to engine state, passed to App::init and App::update.
pub struct SceneContext {
    pub scene: Scene,
    pub events: Vec<AppEvent>,
    pub textures: TextureRegistry,
    next_id: u32,
}

impl SceneContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            events: Vec::new(),
            textures: TextureRegistry::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit an event to be forwarded to the UI layer.
    pub fn emit_event(&mut self, event: AppEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::new()
    }
}
