pub mod motion;
pub mod render;
