use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    host::RequestCode,
    sources::{GoogleMaps, TileUrlTemplate},
    style::{StyleBuilder, StyleDescriptor},
    zoom::{Zoom, ZoomRange},
};

/// Everything the screen needs to know at startup. Defaults show Google's hybrid satellite
/// imagery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Raster tile server.
    pub tiles: TileUrlTemplate,

    /// Size of each tile, should be a multiple of 256.
    pub tile_size: u32,

    /// Id of the raster source, also used for its layer.
    pub source_id: String,

    /// Zoom levels at which the raster layer is shown.
    pub layer_zoom: ZoomRange,

    /// Zoom levels the camera is allowed to use.
    pub zoom_preference: ZoomRange,

    /// Zoom used when going to the user's location.
    pub recenter_zoom: Zoom,

    /// Duration of the camera animation when going to the user's location.
    pub recenter_duration_ms: u64,

    pub permission_request_code: RequestCode,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tiles: GoogleMaps::default().template(),
            tile_size: 256,
            source_id: "tms-tiles".to_owned(),
            layer_zoom: ZoomRange::FULL,
            zoom_preference: ZoomRange::new_unchecked(5., 18.),
            recenter_zoom: Zoom::new_unchecked(15.),
            recenter_duration_ms: 1000,
            permission_request_code: RequestCode(1),
        }
    }
}

impl MapConfig {
    pub fn recenter_duration(&self) -> Duration {
        Duration::from_millis(self.recenter_duration_ms)
    }

    pub fn style(&self) -> StyleDescriptor {
        StyleBuilder::new(self.tiles.clone())
            .source_id(self.source_id.clone())
            .tile_size(self.tile_size)
            .zoom(self.layer_zoom)
            .build()
    }
}
