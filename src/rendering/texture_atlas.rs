use image::{Rgba, RgbaImage};
use crate::game::material::Material;

pub const TILES_PER_ROW: u32 = 4;
pub const TILE_PIXELS: u32 = 16;

/// A square atlas with one tile per material, painted at startup from each
/// material's base color.
#[derive(Copy, Clone)]
pub struct TextureAtlas {
    tile_size: f32,
}

impl TextureAtlas {
    pub fn new() -> Self {
        Self {
            tile_size: 1.0 / TILES_PER_ROW as f32,
        }
    }

    pub fn get_uvs(&self, material: Material) -> [[f32; 2]; 6] {
        let (u, v) = Self::get_tile_coords(material);

        let u_min = u as f32 * self.tile_size;
        let u_max = (u + 1) as f32 * self.tile_size;
        let v_min = v as f32 * self.tile_size;
        let v_max = (v + 1) as f32 * self.tile_size;

        // 6 vertices (2 triangles) for the quad
        [
            [u_min, v_max], // Bottom-left
            [u_max, v_max], // Bottom-right
            [u_max, v_min], // Top-right
            [u_min, v_max], // Bottom-left
            [u_max, v_min], // Top-right
            [u_min, v_min], // Top-left
        ]
    }

    // Tile position in the atlas, in tiles
    fn get_tile_coords(material: Material) -> (u32, u32) {
        let index = material.atlas_index();
        (index % TILES_PER_ROW, index / TILES_PER_ROW)
    }

    pub fn build_image() -> RgbaImage {
        let size = TILES_PER_ROW * TILE_PIXELS;
        let mut image = RgbaImage::from_pixel(size, size, Rgba([255, 0, 255, 255]));

        for material in Material::ALL {
            let (u, v) = Self::get_tile_coords(material);
            let [r, g, b] = material.base_color();
            let alpha = if material == Material::Glass { 160 } else { 255 };

            for py in 0..TILE_PIXELS {
                for px in 0..TILE_PIXELS {
                    let edge = px == 0 || py == 0 || px == TILE_PIXELS - 1 || py == TILE_PIXELS - 1;
                    let shade = if edge { 0.6 } else { speckle(px, py, material.atlas_index()) };

                    image.put_pixel(
                        u * TILE_PIXELS + px,
                        v * TILE_PIXELS + py,
                        Rgba([scale(r, shade), scale(g, shade), scale(b, shade), alpha]),
                    );
                }
            }
        }

        image
    }
}

impl Default for TextureAtlas {
    fn default() -> Self {
        Self::new()
    }
}

// Cheap per-pixel brightness jitter so tiles don't look flat.
fn speckle(x: u32, y: u32, seed: u32) -> f32 {
    let mut h = x.wrapping_mul(374_761_393) ^ y.wrapping_mul(668_265_263) ^ seed.wrapping_mul(2_246_822_519);
    h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
    0.85 + (h >> 28) as f32 / 15.0 * 0.15
}

fn scale(channel: u8, shade: f32) -> u8 {
    (channel as f32 * shade).round().clamp(0.0, 255.0) as u8
}
