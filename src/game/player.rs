use cgmath::prelude::*;
use crate::game::blocks::DynamicBlockList;

const GRAVITY: f32 = -9.8;
const GROUND_Y: f32 = 10.0;

/// Toy physics for the free-fly camera: gravity down to a flat ground plane
/// and a crude push-back from placed blocks. Off unless enabled.
pub struct Player {
    pub velocity: cgmath::Vector3<f32>,
    pub gravity_enabled: bool,
}

impl Player {
    pub fn new(gravity_enabled: bool) -> Self {
        Self {
            velocity: cgmath::Vector3::zero(),
            gravity_enabled,
        }
    }

    pub fn toggle_gravity(&mut self) {
        self.gravity_enabled = !self.gravity_enabled;
        self.velocity = cgmath::Vector3::zero();
        log::info!("Gravity {}", if self.gravity_enabled { "on" } else { "off" });
    }

    pub fn update(&mut self, position: &mut cgmath::Point3<f32>, blocks: &DynamicBlockList, dt: f32) {
        if !self.gravity_enabled {
            return;
        }

        self.velocity.y += GRAVITY * dt;

        let previous = *position;
        *position += self.velocity * dt;

        if position.y < GROUND_Y {
            position.y = GROUND_Y;
            self.velocity.y = 0.0;
        }

        // Blocks are unit cubes, treat them as spheres of radius one.
        if blocks.iter().any(|block| position.distance(block.position) < 1.0) {
            *position = previous;
        }
    }
}
