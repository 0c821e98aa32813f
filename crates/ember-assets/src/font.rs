use std::collections::HashMap;

use serde::Deserialize;

use crate::error::AssetError;
use crate::texture::TextureAsset;

/// Bitmap-font descriptor in the BMFont XML format: an `info` header, a
/// `common` metrics block, the page images, and per-character glyph
/// declarations.
#[derive(Debug, Deserialize)]
pub struct FontDescriptor {
    pub info: FontInfo,
    pub common: FontCommon,
    pub pages: FontPages,
    #[serde(default)]
    pub chars: FontChars,
}

#[derive(Debug, Deserialize)]
pub struct FontInfo {
    #[serde(rename = "@face")]
    pub face: String,
    #[serde(rename = "@size", default)]
    pub size: i32,
}

#[derive(Debug, Deserialize)]
pub struct FontCommon {
    #[serde(rename = "@lineHeight")]
    pub line_height: u32,
    #[serde(rename = "@base", default)]
    pub base: u32,
}

#[derive(Debug, Deserialize)]
pub struct FontPages {
    #[serde(rename = "page", default)]
    pub pages: Vec<FontPage>,
}

#[derive(Debug, Deserialize)]
pub struct FontPage {
    #[serde(rename = "@id", default)]
    pub id: u32,
    #[serde(rename = "@file")]
    pub file: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct FontChars {
    #[serde(rename = "char", default)]
    pub chars: Vec<FontChar>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FontChar {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@x")]
    pub x: u32,
    #[serde(rename = "@y")]
    pub y: u32,
    #[serde(rename = "@width")]
    pub width: u32,
    #[serde(rename = "@height")]
    pub height: u32,
    #[serde(rename = "@xoffset", default)]
    pub x_offset: i32,
    #[serde(rename = "@yoffset", default)]
    pub y_offset: i32,
    #[serde(rename = "@xadvance", default)]
    pub x_advance: i32,
    #[serde(rename = "@page", default)]
    pub page: u32,
}

/// Parse a fetched `.fnt` payload. `label` names the asset in error
/// reports.
pub fn parse_descriptor(label: &str, xml: &str) -> Result<FontDescriptor, AssetError> {
    quick_xml::de::from_str(xml).map_err(|e| AssetError::Parse(label.to_string(), e.to_string()))
}

impl FontDescriptor {
    /// The backing image of the first page declaration, which is the one
    /// the loader fetches.
    pub fn first_page(&self) -> Option<&str> {
        self.pages.pages.first().map(|p| p.file.as_str())
    }
}

/// One renderable glyph region on the font's page texture.
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub x_offset: i32,
    pub y_offset: i32,
    pub x_advance: i32,
    pub page: u32,
}

/// A registered bitmap font: descriptor metrics plus the decoded page
/// image.
#[derive(Debug, Clone)]
pub struct BitmapFont {
    pub face: String,
    pub size: i32,
    pub line_height: u32,
    pub base: u32,
    pub glyphs: HashMap<char, Glyph>,
    pub page: TextureAsset,
}

impl BitmapFont {
    /// Combine a parsed descriptor with its backing page image.
    pub fn from_descriptor(descriptor: &FontDescriptor, page: TextureAsset) -> Self {
        let mut glyphs = HashMap::with_capacity(descriptor.chars.chars.len());
        for ch in &descriptor.chars.chars {
            // Character ids outside the Unicode range are dropped.
            if let Some(key) = char::from_u32(ch.id) {
                glyphs.insert(
                    key,
                    Glyph {
                        x: ch.x,
                        y: ch.y,
                        width: ch.width,
                        height: ch.height,
                        x_offset: ch.x_offset,
                        y_offset: ch.y_offset,
                        x_advance: ch.x_advance,
                        page: ch.page,
                    },
                );
            }
        }

        Self {
            face: descriptor.info.face.clone(),
            size: descriptor.info.size,
            line_height: descriptor.common.line_height,
            base: descriptor.common.base,
            glyphs,
            page,
        }
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }
}
