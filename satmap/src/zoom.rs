use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("invalid zoom level")]
pub struct InvalidZoom;

/// Highest zoom level a style layer may declare.
pub const MAX_ZOOM: f64 = 22.;

/// Zoom level, where 0 shows the whole world on a single tile.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Zoom(f64);

impl TryFrom<f64> for Zoom {
    type Error = InvalidZoom;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // NaN fails this check as well.
        if !(0. ..=MAX_ZOOM).contains(&value) {
            Err(InvalidZoom)
        } else {
            Ok(Self(value))
        }
    }
}

// The reverse shouldn't be implemented, since we already have TryFrom<f64>.
#[allow(clippy::from_over_into)]
impl Into<f64> for Zoom {
    fn into(self) -> f64 {
        self.0
    }
}

impl Zoom {
    /// For constants which are known to be valid.
    pub(crate) const fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    pub fn round(&self) -> u8 {
        self.0.round() as u8
    }

    /// Zoom in by one level, stopping at the `range`'s maximum. Returns `Err(InvalidZoom)` if
    /// already there.
    pub fn zoom_in(&mut self, range: ZoomRange) -> Result<(), InvalidZoom> {
        self.step(1., range)
    }

    /// Zoom out by one level, stopping at the `range`'s minimum. Returns `Err(InvalidZoom)` if
    /// already there.
    pub fn zoom_out(&mut self, range: ZoomRange) -> Result<(), InvalidZoom> {
        self.step(-1., range)
    }

    fn step(&mut self, delta: f64, range: ZoomRange) -> Result<(), InvalidZoom> {
        let next = range.clamp(self.0 + delta);
        // Never move against the requested direction, e.g. when starting outside of the range.
        if (next.0 - self.0) * delta > 0. {
            *self = next;
            Ok(())
        } else {
            Err(InvalidZoom)
        }
    }
}

/// Inclusive range of zoom levels. Used both for the visibility of style layers and for the
/// camera's zoom preference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawZoomRange")]
pub struct ZoomRange {
    min: Zoom,
    max: Zoom,
}

#[derive(Deserialize)]
struct RawZoomRange {
    min: Zoom,
    max: Zoom,
}

impl TryFrom<RawZoomRange> for ZoomRange {
    type Error = InvalidZoom;

    fn try_from(raw: RawZoomRange) -> Result<Self, Self::Error> {
        Self::new(raw.min.into(), raw.max.into())
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl ZoomRange {
    /// Every zoom level a style layer may use.
    pub const FULL: Self = Self {
        min: Zoom(0.),
        max: Zoom(MAX_ZOOM),
    };

    /// For constants which are known to be valid.
    pub(crate) const fn new_unchecked(min: f64, max: f64) -> Self {
        Self {
            min: Zoom(min),
            max: Zoom(max),
        }
    }

    pub fn new(min: f64, max: f64) -> Result<Self, InvalidZoom> {
        let min = Zoom::try_from(min)?;
        let max = Zoom::try_from(max)?;
        if min > max {
            return Err(InvalidZoom);
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Zoom {
        self.min
    }

    pub fn max(&self) -> Zoom {
        self.max
    }

    /// Closest zoom level within the range. NaN ends up at the minimum.
    pub fn clamp(&self, value: f64) -> Zoom {
        if value >= self.max.0 {
            self.max
        } else if value > self.min.0 {
            Zoom(value)
        } else {
            self.min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructing_zoom() {
        assert_eq!(15, Zoom::try_from(15.).unwrap().round());
        assert_eq!(22, Zoom::try_from(22.).unwrap().round());
        assert_eq!(InvalidZoom, Zoom::try_from(23.).unwrap_err());
        assert_eq!(InvalidZoom, Zoom::try_from(-1.).unwrap_err());
        assert_eq!(InvalidZoom, Zoom::try_from(f64::NAN).unwrap_err());
    }

    #[test]
    fn test_zooming_in_stops_at_the_preference() {
        let range = ZoomRange::new(5., 18.).unwrap();
        let mut zoom = Zoom::try_from(17.).unwrap();
        assert!(zoom.zoom_in(range).is_ok());
        assert_eq!(18, zoom.round());
        assert_eq!(Err(InvalidZoom), zoom.zoom_in(range));
        assert_eq!(18, zoom.round());
    }

    #[test]
    fn test_zooming_out_stops_at_the_preference() {
        let range = ZoomRange::new(5., 18.).unwrap();
        let mut zoom = Zoom::try_from(6.).unwrap();
        assert!(zoom.zoom_out(range).is_ok());
        assert_eq!(5, zoom.round());
        assert_eq!(Err(InvalidZoom), zoom.zoom_out(range));
    }

    #[test]
    fn test_fractional_zoom_steps_up_to_the_bound() {
        let range = ZoomRange::new(5., 18.).unwrap();

        let mut zoom = Zoom::try_from(17.3).unwrap();
        assert!(zoom.zoom_in(range).is_ok());
        assert_eq!(zoom, Zoom::try_from(18.).unwrap());

        let mut zoom = Zoom::try_from(5.6).unwrap();
        assert!(zoom.zoom_out(range).is_ok());
        assert_eq!(zoom, Zoom::try_from(5.).unwrap());
    }

    #[test]
    fn test_zoom_outside_of_the_range_does_not_step_backwards() {
        let range = ZoomRange::new(5., 18.).unwrap();
        let mut zoom = Zoom::try_from(20.).unwrap();
        assert_eq!(Err(InvalidZoom), zoom.zoom_in(range));
        assert_eq!(20, zoom.round());
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert_eq!(Err(InvalidZoom), ZoomRange::new(18., 5.));
        assert!(ZoomRange::new(5., 5.).is_ok());
    }

    #[test]
    fn test_clamping() {
        let range = ZoomRange::new(5., 18.).unwrap();
        assert_eq!(5, range.clamp(1.).round());
        assert_eq!(12, range.clamp(12.).round());
        assert_eq!(18, range.clamp(40.).round());
        assert_eq!(5, range.clamp(f64::NAN).round());
    }

    #[test]
    fn test_deserializing_range_validates_bounds() {
        let range: ZoomRange = serde_json::from_str(r#"{"min": 5, "max": 18}"#).unwrap();
        assert_eq!(range, ZoomRange::new(5., 18.).unwrap());

        assert!(serde_json::from_str::<ZoomRange>(r#"{"min": 18, "max": 5}"#).is_err());
        assert!(serde_json::from_str::<ZoomRange>(r#"{"min": 0, "max": 30}"#).is_err());
    }
}
