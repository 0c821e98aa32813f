use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

/// Encode a solid-color PNG.
pub(crate) fn png_solid(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    encode(RgbaImage::from_pixel(width, height, Rgba(rgba)))
}

/// Encode a PNG whose pixel at (x, y) is [x, y, 0, 255], so crops can be
/// checked for correct offsets.
pub(crate) fn png_gradient(width: u32, height: u32) -> Vec<u8> {
    encode(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, 0, 255])
    }))
}

fn encode(img: RgbaImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}
