use std::collections::HashMap;

use serde::Deserialize;

use crate::error::AssetError;
use crate::texture::TextureAsset;

/// Sprite-sheet descriptor wire format. A JSON asset whose top level
/// carries a `frames` field is treated as one of these; anything else is
/// plain metadata.
#[derive(Debug, Deserialize)]
pub struct SheetDescriptor {
    pub frames: HashMap<String, SheetFrame>,
    pub meta: SheetMeta,
}

#[derive(Debug, Deserialize)]
pub struct SheetFrame {
    pub frame: FrameRect,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Deserialize)]
pub struct SheetMeta {
    /// Path of the base image the frames are cut from.
    pub image: String,
}

/// Slice the decoded base image into one texture per named frame. `label`
/// names the sheet in error reports.
pub fn slice_sheet(
    label: &str,
    sheet: &SheetDescriptor,
    base: &TextureAsset,
) -> Result<Vec<(String, TextureAsset)>, AssetError> {
    let mut frames = Vec::with_capacity(sheet.frames.len());

    for (name, entry) in &sheet.frames {
        let FrameRect { x, y, w, h } = entry.frame;
        let texture = base.region(x, y, w, h).ok_or_else(|| {
            AssetError::Parse(
                label.to_string(),
                format!("frame '{name}' exceeds the sheet bounds"),
            )
        })?;
        frames.push((name.clone(), texture));
    }

    Ok(frames)
}
