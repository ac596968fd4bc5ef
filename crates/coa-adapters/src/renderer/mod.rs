//! Template rendering engines.

mod tera_renderer;

pub use tera_renderer::TeraRenderer;
