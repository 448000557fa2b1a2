//! Style document in the shape MapLibre renderers expect. Only the parts used
//! by this crate are modelled: raster and GeoJSON sources, raster and symbol layers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    host::StyleHandle,
    overlay::{FeatureCollection, Icon},
    sources::TileUrlTemplate,
    zoom::ZoomRange,
};

pub const STYLE_VERSION: u8 = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Source {
    #[serde(rename_all = "camelCase")]
    Raster {
        tiles: Vec<TileUrlTemplate>,
        tile_size: u32,
    },
    Geojson { data: FeatureCollection },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SymbolLayout {
    pub icon_image: String,
    pub icon_allow_overlap: bool,
    pub icon_ignore_placement: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Layer {
    Raster {
        id: String,
        source: String,
        minzoom: u8,
        maxzoom: u8,
    },
    Symbol {
        id: String,
        source: String,
        layout: SymbolLayout,
    },
}

impl Layer {
    pub fn id(&self) -> &str {
        match self {
            Self::Raster { id, .. } | Self::Symbol { id, .. } => id,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Self::Raster { source, .. } | Self::Symbol { source, .. } => source,
        }
    }
}

/// The JSON document handed to the renderer. Images are added at runtime and are not part of
/// the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDocument {
    pub version: u8,
    pub sources: BTreeMap<String, Source>,
    pub layers: Vec<Layer>,
    #[serde(skip)]
    images: BTreeMap<String, Icon>,
}

impl Default for StyleDocument {
    fn default() -> Self {
        Self {
            version: STYLE_VERSION,
            sources: BTreeMap::new(),
            layers: Vec::new(),
            images: BTreeMap::new(),
        }
    }
}

impl StyleDocument {
    /// # Errors
    ///
    /// When `json` is not a style document.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Serialization itself does not fail for documents built by this crate, the error comes
    /// from `serde_json`'s signature.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn source(&self, id: &str) -> Option<&Source> {
        self.sources.get(id)
    }

    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id() == id)
    }

    pub fn image(&self, id: &str) -> Option<&Icon> {
        self.images.get(id)
    }
}

impl StyleHandle for StyleDocument {
    fn has_image(&self, id: &str) -> bool {
        self.images.contains_key(id)
    }

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layer(id).is_some()
    }

    fn add_image(&mut self, id: &str, icon: Icon) -> Result<(), Error> {
        if self.images.contains_key(id) {
            return Err(Error::DuplicateImage(id.to_owned()));
        }
        self.images.insert(id.to_owned(), icon);
        Ok(())
    }

    fn add_source(&mut self, id: &str, source: Source) -> Result<(), Error> {
        if self.sources.contains_key(id) {
            return Err(Error::DuplicateSource(id.to_owned()));
        }
        self.sources.insert(id.to_owned(), source);
        Ok(())
    }

    fn add_layer(&mut self, layer: Layer) -> Result<(), Error> {
        if self.layer(layer.id()).is_some() {
            return Err(Error::DuplicateLayer(layer.id().to_owned()));
        }
        if !self.sources.contains_key(layer.source()) {
            return Err(Error::UnknownSource {
                layer: layer.id().to_owned(),
                source_id: layer.source().to_owned(),
            });
        }
        self.layers.push(layer);
        Ok(())
    }
}

/// Immutable description of the base map: one raster source and one raster layer showing it.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    source_id: String,
    tiles: TileUrlTemplate,
    tile_size: u32,
    zoom: ZoomRange,
}

impl StyleDescriptor {
    pub fn tiles(&self) -> &TileUrlTemplate {
        &self.tiles
    }

    /// Fresh document for the renderer. The layer has the same id as its source.
    pub fn document(&self) -> StyleDocument {
        let mut document = StyleDocument::default();
        document.sources.insert(
            self.source_id.clone(),
            Source::Raster {
                tiles: vec![self.tiles.clone()],
                tile_size: self.tile_size,
            },
        );
        document.layers.push(Layer::Raster {
            id: self.source_id.clone(),
            source: self.source_id.clone(),
            minzoom: self.zoom.min().round(),
            maxzoom: self.zoom.max().round(),
        });
        document
    }
}

/// Builds a [`StyleDescriptor`].
///
/// ```
/// use satmap::{StyleBuilder, ZoomRange, sources::GoogleMaps};
///
/// let style = StyleBuilder::new(GoogleMaps::default().template())
///     .zoom(ZoomRange::new(0., 22.).unwrap())
///     .build();
/// assert!(style.document().to_json().unwrap().contains("lyrs=y"));
/// ```
#[derive(Debug, Clone)]
pub struct StyleBuilder {
    source_id: String,
    tiles: TileUrlTemplate,
    tile_size: u32,
    zoom: ZoomRange,
}

impl StyleBuilder {
    pub fn new(tiles: TileUrlTemplate) -> Self {
        Self {
            source_id: "tms-tiles".to_owned(),
            tiles,
            tile_size: 256,
            zoom: ZoomRange::FULL,
        }
    }

    pub fn source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self
    }

    /// Size of each tile, should be a multiple of 256.
    pub fn tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn zoom(mut self, zoom: ZoomRange) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn build(self) -> StyleDescriptor {
        StyleDescriptor {
            source_id: self.source_id,
            tiles: self.tiles,
            tile_size: self.tile_size,
            zoom: self.zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::GoogleMaps;

    fn descriptor() -> StyleDescriptor {
        StyleBuilder::new(GoogleMaps::default().template()).build()
    }

    #[test]
    fn document_has_the_renderer_schema() {
        let json = serde_json::to_value(descriptor().document()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "version": 8,
                "sources": {
                    "tms-tiles": {
                        "type": "raster",
                        "tiles": ["https://mt1.google.com/vt/lyrs=y&x={x}&y={y}&z={z}"],
                        "tileSize": 256
                    }
                },
                "layers": [{
                    "id": "tms-tiles",
                    "type": "raster",
                    "source": "tms-tiles",
                    "minzoom": 0,
                    "maxzoom": 22
                }]
            })
        );
    }

    #[test]
    fn builder_options_end_up_in_the_document() {
        let document = StyleBuilder::new("https://example.com/{z}/{x}/{y}.png".into())
            .source_id("base")
            .tile_size(512)
            .zoom(ZoomRange::new(3., 17.).unwrap())
            .build()
            .document();

        assert_eq!(
            document.source("base"),
            Some(&Source::Raster {
                tiles: vec!["https://example.com/{z}/{x}/{y}.png".into()],
                tile_size: 512
            })
        );
        assert_eq!(
            document.layer("base"),
            Some(&Layer::Raster {
                id: "base".to_owned(),
                source: "base".to_owned(),
                minzoom: 3,
                maxzoom: 17
            })
        );
    }

    #[test]
    fn document_survives_json() {
        let document = descriptor().document();
        let parsed = StyleDocument::from_json(&document.to_json().unwrap()).unwrap();
        assert_eq!(parsed, document);
    }

    #[test]
    fn layer_needs_an_existing_source() {
        let mut document = StyleDocument::default();
        let result = document.add_layer(Layer::Raster {
            id: "orphan".to_owned(),
            source: "nowhere".to_owned(),
            minzoom: 0,
            maxzoom: 22,
        });
        assert!(matches!(result, Err(Error::UnknownSource { .. })));
        assert!(document.layers.is_empty());
    }

    #[test]
    fn duplicate_source_is_rejected() {
        let mut document = descriptor().document();
        let result = document.add_source(
            "tms-tiles",
            Source::Geojson {
                data: FeatureCollection::default(),
            },
        );
        assert!(matches!(result, Err(Error::DuplicateSource(id)) if id == "tms-tiles"));
    }
}
