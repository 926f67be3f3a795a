use orrery_engine::{
    advance_bodies, build_body_buffer, AnimationDriver, App, AppConfig, BodyBuffer, CameraUniform,
    PerspectiveCamera, ProtocolLayout, SceneContext, TextureManifest, TextureRegistry,
};

/// Generic app runner that wires up the frame loop.
///
/// Each concrete scene (e.g. `solar-system`) creates a `thread_local!`
/// AppRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
///
/// The browser's refresh callback calls `tick(dt)` every frame; the driver
/// inside decides whether a frame actually runs, so teardown is `stop()`
/// rather than unhooking the callback.
pub struct AppRunner<A: App> {
    app: A,
    ctx: SceneContext,
    driver: AnimationDriver,
    camera: PerspectiveCamera,
    bodies: BodyBuffer,
    camera_uniform: CameraUniform,
    layout: ProtocolLayout,
    config: AppConfig,
    initialized: bool,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let layout = ProtocolLayout::from_config(&config);
        let camera = PerspectiveCamera::new(config.camera.clone());
        let bodies = BodyBuffer::with_capacity(config.max_bodies);
        let camera_uniform = camera.uniform();

        Self {
            app,
            ctx: SceneContext::new(),
            driver: AnimationDriver::new(),
            camera,
            bodies,
            camera_uniform,
            layout,
            config,
            initialized: false,
        }
    }

    /// Initialize the scene and start the driver. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.app.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.app.init(&mut self.ctx);
        self.driver.start();
        self.initialized = true;
    }

    /// Load the texture manifest JSON. A parse failure is logged and the
    /// scene keeps its flat-color surfaces.
    pub fn load_manifest(&mut self, json: &str) {
        match TextureManifest::from_json(json) {
            Ok(manifest) => {
                self.ctx.textures = TextureRegistry::from_manifest(&manifest);
                log::info!("texture manifest: {} textures", self.ctx.textures.len());
            }
            Err(err) => {
                log::error!("texture manifest rejected: {err}");
            }
        }
    }

    /// Viewport resize from the canvas container. The camera aspect and
    /// uniform are re-derived only when the dimensions actually changed.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.camera.set_viewport(width, height) {
            self.camera_uniform = self.camera.uniform();
        }
    }

    /// Stop the frame loop permanently (view teardown).
    pub fn stop(&mut self) {
        self.driver.stop();
    }

    /// Run one frame: advance the clock, position the bodies, run app logic,
    /// rebuild the instance buffer. A no-op unless the driver is running.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }
        let frame = match self.driver.begin_frame(dt) {
            Some(frame) => frame,
            None => return,
        };

        self.ctx.clear_frame_data();
        advance_bodies(&mut self.ctx.scene, frame.elapsed);
        self.app.update(&mut self.ctx, &frame);
        build_body_buffer(self.ctx.scene.iter(), &mut self.bodies);
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn bodies_ptr(&self) -> *const f32 {
        self.bodies.instances_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.bodies.instance_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.camera_uniform.view_proj.as_ptr() as *const f32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.camera.viewport().0
    }

    pub fn viewport_height(&self) -> f32 {
        self.camera.viewport().1
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_bodies(&self) -> u32 {
        self.layout.max_bodies as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{
        Entity, FrameContext, MeshComponent, OrbitComponent, OrbitPath, Rgb,
    };

    /// Minimal one-planet scene for runner tests.
    struct OnePlanet;

    impl App for OnePlanet {
        fn config(&self) -> AppConfig {
            AppConfig {
                max_bodies: 4,
                max_events: 4,
                ..AppConfig::default()
            }
        }

        fn init(&mut self, ctx: &mut SceneContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("mercury")
                    .with_mesh(MeshComponent::sphere(1.0, Rgb::from_hex(0x666666)))
                    .with_orbit(OrbitComponent::new(
                        OrbitPath::ellipse(0.0, -10.0, 20.0, 30.0),
                        0.5,
                    )),
            );
        }

        fn update(&mut self, _ctx: &mut SceneContext, _frame: &FrameContext) {}
    }

    #[test]
    fn tick_before_init_is_a_noop() {
        let mut runner = AppRunner::new(OnePlanet);
        runner.tick(0.016);
        assert_eq!(runner.body_count(), 0);
    }

    #[test]
    fn tick_builds_the_body_buffer() {
        let mut runner = AppRunner::new(OnePlanet);
        runner.init();
        runner.tick(0.016);
        assert_eq!(runner.body_count(), 1);
    }

    #[test]
    fn stop_freezes_the_scene() {
        let mut runner = AppRunner::new(OnePlanet);
        runner.init();
        runner.tick(1.0);
        let before = runner.ctx.scene.find_by_tag("mercury").unwrap().pos;
        runner.stop();
        runner.tick(1.0);
        let after = runner.ctx.scene.find_by_tag("mercury").unwrap().pos;
        assert_eq!(before, after);
        assert!(!runner.is_running());
    }

    #[test]
    fn resize_reaches_the_camera_uniform() {
        let mut runner = AppRunner::new(OnePlanet);
        runner.init();
        runner.resize(800.0, 600.0);
        let wide = runner.camera_uniform.view_proj;
        runner.resize(800.0, 600.0); // idempotent
        assert_eq!(wide, runner.camera_uniform.view_proj);
        runner.resize(400.0, 600.0);
        assert_ne!(wide, runner.camera_uniform.view_proj);
    }

    #[test]
    fn bad_manifest_keeps_flat_colors() {
        let mut runner = AppRunner::new(OnePlanet);
        runner.init();
        runner.load_manifest("{ nope");
        assert!(runner.ctx.textures.is_empty());
    }
}
