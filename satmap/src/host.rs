//! Boundary between this crate and the mapping SDK which hosts it. The SDK owns rendering, tile
//! fetching, the camera and the location provider. This crate only talks to it through these
//! traits, and is told about asynchronous progress through [`Event`]s.

use std::{collections::BTreeMap, fmt, time::Duration};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    Position,
    camera::CameraUpdate,
    error::Error,
    location::{CameraMode, RenderMode},
    overlay::Icon,
    style::{Layer, Source, StyleDocument},
    zoom::ZoomRange,
};

/// Correlates a permission request with its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestCode(pub i32);

/// Asynchronous notifications from the host, delivered on the UI thread in no particular
/// relation to user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Answer to [`MapView::get_map_async`]. [`MapView::map`] returns the map from now on.
    MapReady,
    /// The style given to [`MapHandle::set_style`] got loaded.
    StyleReady,
    /// User answered the permission prompt.
    PermissionResult {
        request_code: RequestCode,
        granted: bool,
    },
}

/// Host's view holding the map. Its lifecycle calls must be forwarded verbatim, since the
/// renderer's thread and native resources follow them.
pub trait MapView {
    type Map: MapHandle;

    fn on_create(&mut self, saved_state: Option<&SavedState>);
    fn on_start(&mut self);
    fn on_resume(&mut self);
    fn on_pause(&mut self);
    fn on_stop(&mut self);
    fn on_low_memory(&mut self);
    fn on_destroy(&mut self);
    fn on_save_instance_state(&mut self, out: &mut SavedState);

    /// Request the map. The host answers with [`Event::MapReady`].
    fn get_map_async(&mut self);

    /// The map, once it is ready and until the view is destroyed.
    fn map(&mut self) -> Option<&mut Self::Map>;
}

/// Live map.
pub trait MapHandle {
    fn set_zoom_preference(&mut self, range: ZoomRange);

    /// Replace the style. The host answers with [`Event::StyleReady`].
    fn set_style(&mut self, style: StyleDocument);

    /// Style currently in use, `None` until it gets loaded.
    fn style_mut(&mut self) -> Option<&mut dyn StyleHandle>;

    /// Animate the camera. `None` means the host's default duration.
    fn animate_camera(&mut self, update: CameraUpdate, duration: Option<Duration>);

    fn location_component(&mut self) -> &mut dyn LocationComponent;
}

/// Loaded style which can still be extended.
pub trait StyleHandle {
    fn has_image(&self, id: &str) -> bool;
    fn has_source(&self, id: &str) -> bool;
    fn has_layer(&self, id: &str) -> bool;

    /// # Errors
    ///
    /// When the `id` is already taken.
    fn add_image(&mut self, id: &str, icon: Icon) -> Result<(), Error>;

    /// # Errors
    ///
    /// When the `id` is already taken.
    fn add_source(&mut self, id: &str, source: Source) -> Result<(), Error>;

    /// # Errors
    ///
    /// When the layer's id is already taken, or its source does not exist.
    fn add_layer(&mut self, layer: Layer) -> Result<(), Error>;
}

/// SDK facility which fuses location signals and shows the user's position on the map.
pub trait LocationComponent {
    /// Bind the component to the map's current style.
    fn activate(&mut self);
    fn set_enabled(&mut self, enabled: bool);
    fn set_camera_mode(&mut self, mode: CameraMode);
    fn set_render_mode(&mut self, mode: RenderMode);

    /// `None` until the first fix.
    fn last_known_location(&self) -> Option<Position>;
}

/// Operating system's fine location permission.
pub trait PermissionHost {
    fn is_granted(&self) -> bool;

    /// Show the permission prompt. The host answers with [`Event::PermissionResult`].
    fn request(&mut self, request_code: RequestCode);
}

/// Transient messages shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    PermissionDenied,
    LocationUnavailable,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PermissionDenied => "Location permission denied",
            Self::LocationUnavailable => "Location not available",
        })
    }
}

pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Bundle the view writes its state to before it goes away, and gets back when re-created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedState(BTreeMap<String, serde_json::Value>);

impl SavedState {
    /// # Errors
    ///
    /// When `value` cannot be represented as JSON.
    pub fn put(&mut self, key: &str, value: impl Serialize) -> Result<(), Error> {
        self.0.insert(key.to_owned(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Value under `key`, `None` if it is missing or has a different type.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.0.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("Ignoring saved '{key}': {err}.");
                None
            }
        }
    }
}
