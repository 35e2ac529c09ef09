pub mod mesh;
pub mod projection;
pub mod texture;
pub mod texture_atlas;
pub mod world_renderer;

pub use world_renderer::WorldRenderer;
