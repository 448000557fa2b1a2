//! Fixed markers, turned into a GeoJSON source and a symbol layer of the style.

use serde::{Deserialize, Serialize};

use crate::{
    Position,
    error::Error,
    host::StyleHandle,
    lon_lat,
    style::{Layer, Source, SymbolLayout},
};

pub const MARKER_SOURCE_ID: &str = "marker-source";
pub const MARKER_LAYER_ID: &str = "marker-layer";
pub const MARKER_ICON_ID: &str = "marker-icon-id";

/// GeoJSON geometry. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl Feature {
    pub fn point(position: Position) -> Self {
        Self {
            geometry: Geometry::Point {
                coordinates: [position.x(), position.y()],
            },
            properties: Default::default(),
        }
    }

    pub fn position(&self) -> Position {
        match self.geometry {
            Geometry::Point {
                coordinates: [lon, lat],
            } => lon_lat(lon, lat),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}

/// Ordered, fixed list of marker positions. Markers are identified by their index only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkerSet(Vec<Position>);

impl MarkerSet {
    pub fn new(positions: Vec<Position>) -> Self {
        Self(positions)
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One point feature per marker, in the same order.
    pub fn features(&self) -> FeatureCollection {
        self.0.iter().copied().map(Feature::point).collect()
    }
}

impl FromIterator<Position> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Image drawn for every marker of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    /// Character drawn inside of the marker.
    pub glyph: char,
}

impl Default for Icon {
    fn default() -> Self {
        Self { glyph: '📍' }
    }
}

/// Registers a [`MarkerSet`] as a symbol layer of the style. Icons of this layer may overlap
/// each other and ignore collision, so no marker is ever hidden.
#[derive(Debug, Clone)]
pub struct MarkerOverlay {
    pub source_id: String,
    pub layer_id: String,
    pub icon_id: String,
    pub icon: Icon,
}

impl Default for MarkerOverlay {
    fn default() -> Self {
        Self {
            source_id: MARKER_SOURCE_ID.to_owned(),
            layer_id: MARKER_LAYER_ID.to_owned(),
            icon_id: MARKER_ICON_ID.to_owned(),
            icon: Icon::default(),
        }
    }
}

impl MarkerOverlay {
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    /// Add the icon, the source and the layer to the `style`. Meant to be called once per
    /// loaded style. The style is left untouched if any of the ids is already taken.
    ///
    /// # Errors
    ///
    /// When one of the ids is taken, or the style rejects an addition.
    pub fn register(&self, markers: &MarkerSet, style: &mut dyn StyleHandle) -> Result<(), Error> {
        if style.has_image(&self.icon_id) {
            return Err(Error::DuplicateImage(self.icon_id.clone()));
        }
        if style.has_source(&self.source_id) {
            return Err(Error::DuplicateSource(self.source_id.clone()));
        }
        if style.has_layer(&self.layer_id) {
            return Err(Error::DuplicateLayer(self.layer_id.clone()));
        }

        style.add_image(&self.icon_id, self.icon)?;
        style.add_source(
            &self.source_id,
            Source::Geojson {
                data: markers.features(),
            },
        )?;
        style.add_layer(Layer::Symbol {
            id: self.layer_id.clone(),
            source: self.source_id.clone(),
            layout: SymbolLayout {
                icon_image: self.icon_id.clone(),
                icon_allow_overlap: true,
                icon_ignore_placement: true,
            },
        })?;

        log::debug!(
            "Registered {} markers as layer '{}'.",
            markers.len(),
            self.layer_id
        );
        Ok(())
    }
}
