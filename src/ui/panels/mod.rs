pub mod camera_info;
pub mod material_hints;
