use crate::error::AssetError;

/// Pixel format of a loaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    Rgba8,
}

/// A decoded texture with raw pixel data.
#[derive(Debug, Clone)]
pub struct TextureAsset {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub format: TextureFormat,
}

/// Decode fetched image bytes into an RGBA8 texture. `label` names the
/// asset in error reports.
pub fn decode_texture(label: &str, bytes: &[u8]) -> Result<TextureAsset, AssetError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| AssetError::Decode(label.to_string(), e.to_string()))?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(TextureAsset {
        width,
        height,
        data: rgba.into_raw(),
        format: TextureFormat::Rgba8,
    })
}

impl TextureAsset {
    /// Copy out a sub-rectangle as its own texture. Returns `None` when
    /// the region exceeds the bounds.
    pub fn region(&self, x: u32, y: u32, w: u32, h: u32) -> Option<TextureAsset> {
        let right = x.checked_add(w)?;
        let bottom = y.checked_add(h)?;
        if right > self.width || bottom > self.height {
            return None;
        }

        let mut data = Vec::with_capacity((w * h * 4) as usize);
        for row in y..bottom {
            let start = ((row * self.width + x) * 4) as usize;
            let end = start + (w * 4) as usize;
            data.extend_from_slice(&self.data[start..end]);
        }

        Some(TextureAsset {
            width: w,
            height: h,
            data,
            format: self.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{png_gradient, png_solid};

    #[test]
    fn decodes_png_bytes() {
        let bytes = png_solid(4, 3, [255, 0, 0, 255]);
        let tex = decode_texture("solid.png", &bytes).unwrap();
        assert_eq!((tex.width, tex.height), (4, 3));
        assert_eq!(tex.format, TextureFormat::Rgba8);
        assert_eq!(&tex.data[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_texture("bad.png", b"not an image").unwrap_err();
        assert!(matches!(err, AssetError::Decode(_, _)));
    }

    #[test]
    fn region_copies_the_right_pixels() {
        let base = decode_texture("grad.png", &png_gradient(8, 8)).unwrap();
        let sub = base.region(2, 1, 3, 2).unwrap();
        assert_eq!((sub.width, sub.height), (3, 2));
        // Gradient encodes (x, y) into the red and green channels.
        assert_eq!(&sub.data[..4], &[2, 1, 0, 255]);
        assert_eq!(&sub.data[4..8], &[3, 1, 0, 255]);
    }

    #[test]
    fn region_out_of_bounds_is_none() {
        let base = decode_texture("grad.png", &png_gradient(8, 8)).unwrap();
        assert!(base.region(4, 0, 5, 1).is_none());
        assert!(base.region(0, 7, 1, 2).is_none());
    }
}
