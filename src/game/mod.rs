pub mod blocks;
pub mod camera;
pub mod culling;
pub mod edit;
pub mod grid;
pub mod intersect;
pub mod material;
pub mod player;
pub mod raycast;
pub mod world;

pub use edit::{EditAction, EditController, EditOutcome};
pub use raycast::{cast_ray, Ray};
