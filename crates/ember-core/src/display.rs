use serde::{Deserialize, Serialize};

/// Describes the display the engine is targeting. Assets may ship in
/// multiple resolution variants; the profile decides which variant the
/// loader requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayProfile {
    /// Device scale factor. 1 requests base assets, 2 requests `@2x`
    /// variants, and so on.
    pub scale: u32,
}

impl DisplayProfile {
    /// Create a profile for the given scale factor.
    pub fn new(scale: u32) -> Self {
        Self { scale }
    }

    /// Whether assets should be requested as resolution variants.
    pub fn variant_required(&self) -> bool {
        self.scale > 1
    }

    /// The marker inserted before the file extension of variant paths,
    /// e.g. `@2x`.
    pub fn variant_marker(&self) -> String {
        format!("@{}x", self.scale)
    }
}

impl Default for DisplayProfile {
    fn default() -> Self {
        Self { scale: 1 }
    }
}
