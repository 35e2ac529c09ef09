pub mod camera_controller;
pub mod edit_bindings;
