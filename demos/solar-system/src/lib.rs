use wasm_bindgen::prelude::*;

mod app;
mod bodies;
use app::SolarSystem;

orrery_web::export_app!(SolarSystem, "solar-system");
