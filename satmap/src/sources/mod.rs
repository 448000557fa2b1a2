//! Raster tile sources. Make sure you follow terms of usage of the particular source.

mod googlemaps;

pub use googlemaps::{GoogleMaps, GoogleMapsStyle};
use serde::{Deserialize, Serialize};

/// Identifies the tile in the tile grid.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct TileId {
    /// X number of the tile.
    pub x: u32,

    /// Y number of the tile.
    pub y: u32,

    /// Zoom level, where 0 means no zoom.
    /// See: <https://wiki.openstreetmap.org/wiki/Zoom_levels>
    pub zoom: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribution {
    pub text: &'static str,
    pub url: &'static str,
}

/// URL of a raster tile server with `{x}`, `{y}` and `{z}` placeholders, as used by the
/// `tiles` array of a raster source in the style document.
///
/// The template is not validated. Whatever goes in here ends up in the style document and the
/// renderer reports tiles which cannot be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileUrlTemplate(String);

impl TileUrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of the particular tile.
    pub fn tile_url(&self, tile_id: TileId) -> String {
        self.0
            .replace("{x}", &tile_id.x.to_string())
            .replace("{y}", &tile_id.y.to_string())
            .replace("{z}", &tile_id.zoom.to_string())
    }
}

impl From<&str> for TileUrlTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl std::fmt::Display for TileUrlTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_substituted() {
        let template = TileUrlTemplate::new("https://example.com/{z}/{x}/{y}.png");
        let url = template.tile_url(TileId {
            x: 3,
            y: 5,
            zoom: 7,
        });
        assert_eq!(url, "https://example.com/7/3/5.png");
    }

    #[test]
    fn malformed_template_is_passed_through() {
        let template = TileUrlTemplate::new("not a url {q}");
        assert_eq!(template.as_str(), "not a url {q}");
        assert_eq!(
            template.tile_url(TileId {
                x: 1,
                y: 2,
                zoom: 3
            }),
            "not a url {q}"
        );
    }
}
