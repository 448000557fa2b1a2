use super::{Attribution, TileUrlTemplate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GoogleMapsStyle {
    /// Streets view.
    Default,
    /// Satellite imagery only.
    Satellite,
    /// Satellite imagery with roads and labels.
    #[default]
    Hybrid,
}

impl GoogleMapsStyle {
    fn api_slug(self) -> &'static str {
        match self {
            Self::Default => "m",
            Self::Satellite => "s",
            Self::Hybrid => "y",
        }
    }
}

/// Google's raster tile endpoint. The default style is `Hybrid`, i.e. `lyrs=y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleMaps {
    pub style: GoogleMapsStyle,
}

impl GoogleMaps {
    pub fn template(&self) -> TileUrlTemplate {
        let slug = self.style.api_slug();
        TileUrlTemplate::new(format!(
            "https://mt1.google.com/vt/lyrs={slug}&x={{x}}&y={{y}}&z={{z}}"
        ))
    }

    pub fn attribution(&self) -> Attribution {
        Attribution {
            text: "Map data © Google",
            url: "https://www.google.com/intl/en_us/help/terms_maps/",
        }
    }
}
