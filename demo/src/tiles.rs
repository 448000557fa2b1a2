use egui::Context;
use satmap::{
    StyleDocument,
    sources::{self, TileUrlTemplate},
    style::{Layer, Source},
};
use walkers::{HttpOptions, HttpTiles, TileId, sources::Attribution};

/// Tile server described by a raster source of the style.
pub struct TemplateSource {
    template: TileUrlTemplate,
    tile_size: u32,
    attribution: sources::Attribution,
}

impl walkers::sources::TileSource for TemplateSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        self.template.tile_url(sources::TileId {
            x: tile_id.x,
            y: tile_id.y,
            zoom: tile_id.zoom,
        })
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: self.attribution.text,
            url: self.attribution.url,
            logo_light: None,
            logo_dark: None,
        }
    }

    fn tile_size(&self) -> u32 {
        self.tile_size
    }
}

/// Tiles of a raster layer, shown only within the layer's zoom levels.
pub struct RasterLayer {
    pub tiles: HttpTiles,
    minzoom: f64,
    maxzoom: f64,
}

impl RasterLayer {
    pub fn visible_at(&self, zoom: f64) -> bool {
        self.minzoom <= zoom && zoom <= self.maxzoom
    }
}

fn http_options() -> HttpOptions {
    HttpOptions {
        // No writable working directory on Android.
        cache: if cfg!(target_os = "android") || std::env::var("NO_HTTP_CACHE").is_ok() {
            None
        } else {
            Some(".cache".into())
        },
        ..Default::default()
    }
}

/// Raster sources referenced by the raster layers of the `style`, in the layer order.
pub fn templates(style: &StyleDocument) -> Vec<(TileUrlTemplate, u32, u8, u8)> {
    style
        .layers
        .iter()
        .filter_map(|layer| match layer {
            Layer::Raster {
                id,
                source,
                minzoom,
                maxzoom,
            } => match style.source(source) {
                Some(Source::Raster { tiles, tile_size }) => match tiles.first() {
                    Some(template) => Some((template.clone(), *tile_size, *minzoom, *maxzoom)),
                    None => {
                        log::warn!("Raster source of layer '{id}' has no tiles.");
                        None
                    }
                },
                _ => {
                    log::warn!("Layer '{id}' needs a raster source, '{source}' is not one.");
                    None
                }
            },
            Layer::Symbol { .. } => None,
        })
        .collect()
}

pub fn raster_layers(
    style: &StyleDocument,
    attribution: sources::Attribution,
    egui_ctx: &Context,
) -> Vec<RasterLayer> {
    templates(style)
        .into_iter()
        .map(|(template, tile_size, minzoom, maxzoom)| {
            log::info!("Fetching tiles from '{template}'.");
            RasterLayer {
                tiles: HttpTiles::with_options(
                    TemplateSource {
                        template,
                        tile_size,
                        attribution,
                    },
                    http_options(),
                    egui_ctx.to_owned(),
                ),
                minzoom: minzoom.into(),
                maxzoom: maxzoom.into(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use satmap::{
        MapConfig,
        host::StyleHandle as _,
        overlay::{MarkerOverlay, MarkerSet},
    };

    #[test]
    fn templates_come_from_raster_layers_only() {
        let mut style = MapConfig::default().style().document();
        MarkerOverlay::default()
            .register(&MarkerSet::default(), &mut style)
            .unwrap();

        let templates = templates(&style);
        assert_eq!(templates.len(), 1);
        let (template, tile_size, minzoom, maxzoom) = &templates[0];
        assert_eq!(template.as_str(), "https://mt1.google.com/vt/lyrs=y&x={x}&y={y}&z={z}");
        assert_eq!((*tile_size, *minzoom, *maxzoom), (256, 0, 22));
    }

    #[test]
    fn layer_over_non_raster_source_is_skipped() {
        let mut style = StyleDocument::default();
        style
            .add_source(
                "points",
                Source::Geojson {
                    data: Default::default(),
                },
            )
            .unwrap();
        style
            .add_layer(Layer::Raster {
                id: "wrong".to_owned(),
                source: "points".to_owned(),
                minzoom: 0,
                maxzoom: 22,
            })
            .unwrap();

        assert!(templates(&style).is_empty());
    }

    #[test]
    fn tile_urls_follow_the_template() {
        let source = TemplateSource {
            template: "https://example.com/{z}/{x}/{y}.png".into(),
            tile_size: 256,
            attribution: sources::GoogleMaps::default().attribution(),
        };
        let url = walkers::sources::TileSource::tile_url(
            &source,
            TileId {
                x: 1,
                y: 2,
                zoom: 3,
            },
        );
        assert_eq!(url, "https://example.com/3/1/2.png");
    }
}
