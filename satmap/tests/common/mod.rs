//! Recording fakes of the host.

#![allow(dead_code)]

use std::time::Duration;

use satmap::{
    MapConfig, Position, StyleDocument, ViewController, ZoomRange,
    camera::CameraUpdate,
    host::{
        Event, LocationComponent, MapHandle, MapView, Notice, Notifier, PermissionHost,
        RequestCode, SavedState, StyleHandle,
    },
    lat_lon,
    location::{CameraMode, RenderMode},
    overlay::MarkerSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Create { restored: bool },
    GetMapAsync,
    Start,
    Resume,
    Pause,
    Stop,
    LowMemory,
    Destroy,
    SaveState,
}

#[derive(Debug, Default)]
pub struct FakeLocation {
    pub activated: bool,
    pub enabled: bool,
    pub camera_mode: CameraMode,
    pub render_mode: RenderMode,
    pub last_known: Option<Position>,
}

impl LocationComponent for FakeLocation {
    fn activate(&mut self) {
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
        self.last_known
    }
}

#[derive(Debug, Default)]
pub struct FakeMap {
    pub zoom_preference: Option<ZoomRange>,
    pub styles_set: usize,
    pub style: Option<StyleDocument>,
    pub camera: Vec<(CameraUpdate, Option<Duration>)>,
    pub location: FakeLocation,
}

impl FakeMap {
    /// Map with a loaded, empty style.
    pub fn styled() -> Self {
        Self {
            style: Some(StyleDocument::default()),
            ..Default::default()
        }
    }
}

impl MapHandle for FakeMap {
    fn set_zoom_preference(&mut self, range: ZoomRange) {
        self.zoom_preference = Some(range);
    }

    fn set_style(&mut self, style: StyleDocument) {
        self.styles_set += 1;
        self.style = Some(style);
    }

    fn style_mut(&mut self) -> Option<&mut dyn StyleHandle> {
        self.style.as_mut().map(|style| style as &mut dyn StyleHandle)
    }

    fn animate_camera(&mut self, update: CameraUpdate, duration: Option<Duration>) {
        self.camera.push((update, duration));
    }

    fn location_component(&mut self) -> &mut dyn LocationComponent {
        &mut self.location
    }
}

#[derive(Debug, Default)]
pub struct FakeView {
    pub calls: Vec<Call>,
    pub map: Option<FakeMap>,
    /// Fix the location component of the map will have.
    pub last_known: Option<Position>,
}

impl MapView for FakeView {
    type Map = FakeMap;

    fn on_create(&mut self, saved_state: Option<&SavedState>) {
        self.calls.push(Call::Create {
            restored: saved_state.is_some(),
        });
    }

    fn on_start(&mut self) {
        self.calls.push(Call::Start);
    }

    fn on_resume(&mut self) {
        self.calls.push(Call::Resume);
    }

    fn on_pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn on_stop(&mut self) {
        self.calls.push(Call::Stop);
    }

    fn on_low_memory(&mut self) {
        self.calls.push(Call::LowMemory);
    }

    fn on_destroy(&mut self) {
        self.calls.push(Call::Destroy);
        self.map = None;
    }

    fn on_save_instance_state(&mut self, out: &mut SavedState) {
        self.calls.push(Call::SaveState);
        out.put("saved", true).unwrap();
    }

    fn get_map_async(&mut self) {
        self.calls.push(Call::GetMapAsync);
        self.map = Some(FakeMap {
            location: FakeLocation {
                last_known: self.last_known,
                ..Default::default()
            },
            ..Default::default()
        });
    }

    fn map(&mut self) -> Option<&mut FakeMap> {
        self.map.as_mut()
    }
}

#[derive(Debug, Default)]
pub struct FakePermissions {
    pub granted: bool,
    pub requests: Vec<RequestCode>,
}

impl PermissionHost for FakePermissions {
    fn is_granted(&self) -> bool {
        self.granted
    }

    fn request(&mut self, request_code: RequestCode) {
        self.requests.push(request_code);
    }
}

#[derive(Debug, Default)]
pub struct Notices(pub Vec<Notice>);

impl Notifier for Notices {
    fn notify(&mut self, notice: Notice) {
        self.0.push(notice);
    }
}

pub type Controller = ViewController<FakeView, FakePermissions, Notices>;

/// The three places shown by the app.
pub fn markers() -> MarkerSet {
    MarkerSet::new(vec![
        lat_lon(-6.597411747869523, 106.79954502190401),
        lat_lon(-6.5951501278058995, 106.79134899885425),
        lat_lon(-6.552345730663087, 106.72280278334873),
    ])
}

pub fn controller(already_granted: bool, last_known: Option<Position>) -> Controller {
    let _ = env_logger::try_init();

    ViewController::new(
        FakeView {
            last_known,
            ..Default::default()
        },
        FakePermissions {
            granted: already_granted,
            ..Default::default()
        },
        Notices::default(),
        &MapConfig::default(),
        markers(),
    )
}

/// Controller which went through the whole startup sequence.
pub fn started(already_granted: bool, last_known: Option<Position>) -> Controller {
    let mut controller = controller(already_granted, last_known);
    controller.on_create(None);
    controller.on_start();
    controller.on_resume();
    controller.handle(Event::MapReady);
    controller.handle(Event::StyleReady);
    controller
}

pub fn map(controller: &mut Controller) -> &mut FakeMap {
    controller.view_mut().map.as_mut().unwrap()
}
