//! Image utilities
//! Keeps us from having to use specific bevy render types in the physics engine,
//! the host converts to a bevy image when it wants a texture

use bevy::{
    math::Rect,
    render::{
        render_resource::{Extent3d, TextureDimension, TextureFormat},
        texture::Image,
    },
};

/// Representing a raw RGBA image
/// Game engine agnostic, full ownership, no lifetimes, not a component
#[derive(Clone, Debug)]
pub struct RawImage {
    pub bounds: Rect,
    pub pixels: Vec<u8>,
}

/// Create an empty image
impl Default for RawImage {
    fn default() -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, 0.0, 0.0),
            pixels: Vec::new(),
        }
    }
}

impl RawImage {
    /// The rgba bytes of the pixel at column x and row y
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        let width = self.bounds.width() as usize;
        if x >= width {
            return None;
        }
        let start = (y * width + x) * 4;
        self.pixels
            .get(start..start + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Convert to a bevy image
    /// Load this into an asset server to get a texture like the following
    /// ```ignore
    /// let image: RawImage = simulation.texture();
    /// let image_handle: Handle<Image> = images.add(image.to_bevy_image());
    /// ```
    pub fn to_bevy_image(self) -> Image {
        let size = Extent3d {
            width: self.bounds.width() as u32,
            height: self.bounds.height() as u32,
            depth_or_array_layers: 1,
        };

        Image::new(
            size,
            TextureDimension::D2,
            self.pixels,
            TextureFormat::Rgba8UnormSrgb,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_lookup() {
        let image = RawImage {
            bounds: Rect::new(0.0, 0.0, 2.0, 1.0),
            pixels: vec![1, 2, 3, 4, 5, 6, 7, 8],
        };
        assert_eq!(image.pixel(0, 0), Some([1, 2, 3, 4]));
        assert_eq!(image.pixel(1, 0), Some([5, 6, 7, 8]));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 1), None);
    }

    #[test]
    fn test_default_is_empty() {
        let image = RawImage::default();
        assert!(image.pixels.is_empty());
        assert_eq!(image.pixel(0, 0), None);
    }
}
