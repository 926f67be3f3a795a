pub mod camera;
pub mod instance;
