// src/application/ports/mod.rs
pub mod rendering;
pub mod time;
pub mod util;

pub type ContentRendererPort = dyn rendering::ContentRenderer;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
