//! Location provider of the demo. Desktops rarely have a GPS receiver, so the fix comes from the
//! `SATMAP_LOCATION` environment variable, e.g. `SATMAP_LOCATION="-6.59,106.80,45"` (latitude,
//! longitude and optionally heading in degrees).

use satmap::{
    Position,
    host::LocationComponent,
    lat_lon,
    location::{CameraMode, RenderMode},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub position: Position,
    /// Degrees clockwise from the north.
    pub heading: Option<f32>,
}

impl Fix {
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split(',').map(str::trim);
        let lat = parts.next()?.parse().ok()?;
        let lon = parts.next()?.parse().ok()?;
        let heading = match parts.next() {
            Some(heading) => Some(heading.parse().ok()?),
            None => None,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            position: lat_lon(lat, lon),
            heading,
        })
    }

    pub fn from_env() -> Option<Self> {
        let value = std::env::var("SATMAP_LOCATION").ok()?;
        let fix = Self::parse(&value);
        if fix.is_none() {
            log::warn!("Ignoring SATMAP_LOCATION='{value}', expected 'lat,lon[,heading]'.");
        }
        fix
    }
}

#[derive(Debug, Default)]
pub struct DeviceLocation {
    fix: Option<Fix>,
    activated: bool,
    enabled: bool,
    pub(crate) camera_mode: CameraMode,
    render_mode: RenderMode,
}

impl DeviceLocation {
    pub fn new(fix: Option<Fix>) -> Self {
        Self {
            fix,
            ..Default::default()
        }
    }

    /// Fix to be drawn on the map, if the component is on.
    pub fn visible_fix(&self) -> Option<Fix> {
        if self.activated && self.enabled {
            self.fix
        } else {
            None
        }
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }
}

impl LocationComponent for DeviceLocation {
    fn activate(&mut self) {
        log::debug!("Location component activated, fix: {:?}.", self.fix);
        self.activated = true;
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn set_camera_mode(&mut self, mode: CameraMode) {
        self.camera_mode = mode;
    }

    fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    fn last_known_location(&self) -> Option<Position> {
        self.visible_fix().map(|fix| fix.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_fix() {
        assert_eq!(
            Fix::parse("-6.59, 106.8"),
            Some(Fix {
                position: lat_lon(-6.59, 106.8),
                heading: None
            })
        );
        assert_eq!(Fix::parse("1,2,90").unwrap().heading, Some(90.0));
        assert_eq!(Fix::parse("1"), None);
        assert_eq!(Fix::parse("1,x"), None);
        assert_eq!(Fix::parse("1,2,north"), None);
        assert_eq!(Fix::parse("1,2,3,4"), None);
    }

    #[test]
    fn no_location_until_enabled() {
        let mut location = DeviceLocation::new(Fix::parse("1,2"));
        assert_eq!(location.last_known_location(), None);

        location.activate();
        location.set_enabled(true);
        assert_eq!(location.last_known_location(), Some(lat_lon(1.0, 2.0)));
    }
}
