//! Map view hosted by walkers. Tiles are fetched by [`walkers::HttpTiles`], the markers and the
//! user's position are drawn by plugins, and the camera lives in [`walkers::MapMemory`].

use std::{
    sync::mpsc::Sender,
    time::{Duration, Instant},
};

use egui::{Context, Ui};
use satmap::{
    Position, StyleDocument, Zoom, ZoomRange,
    camera::CameraUpdate,
    host::{Event, LocationComponent, MapHandle, MapView, SavedState, StyleHandle},
    lat_lon,
    location::CameraMode,
    sources::Attribution,
    to_lat_lon,
};
use walkers::{Map, MapMemory};

use crate::{
    animation::{CameraAnimation, DEFAULT_DURATION},
    location::{DeviceLocation, Fix},
    plugins::{LocationPuck, StyleMarkers},
    tiles::{RasterLayer, raster_layers},
};

const CENTER_KEY: &str = "camera_center";
const ZOOM_KEY: &str = "camera_zoom";

fn set_zoom(memory: &mut MapMemory, zoom: f64) {
    if let Err(err) = memory.set_zoom(zoom) {
        log::warn!("Map rejected zoom {zoom}: {err}.");
    }
}

pub struct WalkersMap {
    memory: MapMemory,
    zoom_preference: ZoomRange,
    style: Option<StyleDocument>,
    /// Built lazily from the style, `None` when they need to be (re)built.
    layers: Option<Vec<RasterLayer>>,
    location: DeviceLocation,
    animation: Option<CameraAnimation>,
    /// Whether the memory was told to follow the location fix.
    following: bool,
    home: Position,
    attribution: Attribution,
    events: Sender<Event>,
    egui_ctx: Context,
}

impl WalkersMap {
    fn new(
        home: Position,
        fix: Option<Fix>,
        attribution: Attribution,
        events: Sender<Event>,
        egui_ctx: Context,
    ) -> Self {
        Self {
            memory: MapMemory::default(),
            zoom_preference: ZoomRange::default(),
            style: None,
            layers: None,
            location: DeviceLocation::new(fix),
            animation: None,
            following: false,
            home,
            attribution,
            events,
            egui_ctx,
        }
    }

    fn tracking(&self) -> bool {
        self.location.camera_mode == CameraMode::Tracking
    }

    /// Where the map is centered when it is not detached.
    fn anchor(&self) -> Position {
        match self.location.visible_fix() {
            Some(fix) if self.tracking() => fix.position,
            _ => self.home,
        }
    }

    fn center(&self) -> Position {
        self.memory.detached().unwrap_or_else(|| self.anchor())
    }

    fn animate_to(&mut self, target: Position, zoom: f64, duration: Duration) {
        self.animation = Some(CameraAnimation::new(
            (self.center(), self.memory.zoom()),
            (target, zoom),
            Instant::now(),
            duration,
        ));
        self.egui_ctx.request_repaint();
    }

    /// Advance the camera to the moment `now`: play the animation, keep following the fix while
    /// tracking, and keep the zoom within the preference.
    pub fn step(&mut self, now: Instant) {
        if let Some(animation) = &self.animation {
            let (position, zoom) = animation.sample(now);
            let finished = animation.finished(now);
            set_zoom(&mut self.memory, zoom);
            self.memory.center_at(position);
            if finished {
                self.animation = None;
                if self.tracking() {
                    self.memory.follow_my_position();
                }
            }
            return;
        }

        match (self.tracking(), self.following) {
            (true, false) => {
                self.memory.follow_my_position();
                self.following = true;
            }
            (true, true) if self.memory.detached().is_some() => {
                log::debug!("Map got dragged, camera stops tracking.");
                self.location.set_camera_mode(CameraMode::None);
                self.following = false;
            }
            (false, _) => self.following = false,
            _ => (),
        }

        let zoom = self.memory.zoom();
        let clamped: f64 = self.zoom_preference.clamp(zoom).into();
        if (clamped - zoom).abs() > f64::EPSILON {
            set_zoom(&mut self.memory, clamped);
        }
    }

    fn release_tiles(&mut self) {
        self.layers = None;
    }

    pub fn show(&mut self, ui: &mut Ui) {
        self.step(Instant::now());

        let my_position = self.anchor();
        let zoom = self.memory.zoom();
        let markers = self.style.as_ref().map(StyleMarkers::new);
        let puck = self.location.visible_fix().map(|fix| LocationPuck {
            fix,
            render_mode: self.location.render_mode(),
        });

        let layers = self.layers.get_or_insert_with(|| match &self.style {
            Some(style) => raster_layers(style, self.attribution, &self.egui_ctx),
            None => Vec::new(),
        });

        let mut map = Map::new(None, &mut self.memory, my_position);
        for layer in layers.iter_mut().filter(|layer| layer.visible_at(zoom)) {
            map = map.with_layer(&mut layer.tiles, 1.0);
        }
        if let Some(markers) = markers {
            map = map.with_plugin(markers);
        }
        if let Some(puck) = puck {
            map = map.with_plugin(puck);
        }
        map.show(ui, |_, _, _, _| {});

        if self.animation.is_some() {
            ui.ctx().request_repaint();
        }
    }
}

impl MapHandle for WalkersMap {
    fn set_zoom_preference(&mut self, range: ZoomRange) {
        log::debug!("Zoom preference: {:?}..{:?}.", range.min(), range.max());
        self.zoom_preference = range;
    }

    fn set_style(&mut self, style: StyleDocument) {
        log::info!(
            "Loading a style with {} source(s) and {} layer(s).",
            style.sources.len(),
            style.layers.len()
        );
        self.style = Some(style);
        self.release_tiles();
        if self.events.send(Event::StyleReady).is_err() {
            log::warn!("Nobody is listening for the style to load.");
        }
        self.egui_ctx.request_repaint();
    }

    fn style_mut(&mut self) -> Option<&mut dyn StyleHandle> {
        self.style
            .as_mut()
            .map(|style| style as &mut dyn StyleHandle)
    }

    fn animate_camera(&mut self, update: CameraUpdate, duration: Option<Duration>) {
        let duration = duration.unwrap_or(DEFAULT_DURATION);
        match update {
            CameraUpdate::ZoomIn | CameraUpdate::ZoomOut => {
                let mut zoom = self.zoom_preference.clamp(self.memory.zoom());
                let result = if update == CameraUpdate::ZoomIn {
                    zoom.zoom_in(self.zoom_preference)
                } else {
                    zoom.zoom_out(self.zoom_preference)
                };
                match result {
                    Ok(()) => self.animate_to(self.center(), zoom.into(), duration),
                    Err(_) => log::debug!("Zoom preference reached, not zooming."),
                }
            }
            CameraUpdate::Position(position) => {
                self.animate_to(position.target, position.zoom.into(), duration);
            }
        }
    }

    fn location_component(&mut self) -> &mut dyn LocationComponent {
        &mut self.location
    }
}

/// Hosts [`WalkersMap`] and follows the lifecycle of the window.
pub struct WalkersMapView {
    egui_ctx: Context,
    events: Sender<Event>,
    fix: Option<Fix>,
    attribution: Attribution,
    home: Position,
    restored: Option<(Position, f64)>,
    map: Option<WalkersMap>,
    started: bool,
}

impl WalkersMapView {
    pub fn new(
        egui_ctx: Context,
        events: Sender<Event>,
        fix: Option<Fix>,
        attribution: Attribution,
        home: Position,
    ) -> Self {
        Self {
            egui_ctx,
            events,
            fix,
            attribution,
            home,
            restored: None,
            map: None,
            started: false,
        }
    }

    pub fn attribution(&self) -> Attribution {
        self.attribution
    }

    pub fn show(&mut self, ui: &mut Ui) {
        if !self.started {
            return;
        }
        if let Some(map) = &mut self.map {
            map.show(ui);
        }
    }
}

impl MapView for WalkersMapView {
    type Map = WalkersMap;

    fn on_create(&mut self, saved_state: Option<&SavedState>) {
        self.restored = saved_state.and_then(|state| {
            let (lat, lon) = state.get::<(f64, f64)>(CENTER_KEY)?;
            let zoom = state.get::<f64>(ZOOM_KEY)?;
            match Zoom::try_from(zoom) {
                Ok(zoom) => Some((lat_lon(lat, lon), zoom.into())),
                Err(err) => {
                    log::warn!("Not restoring the camera, saved zoom {zoom}: {err}.");
                    None
                }
            }
        });
        if let Some((center, zoom)) = self.restored {
            log::info!("Restoring the camera at {:?}, zoom {zoom}.", to_lat_lon(center));
        }
    }

    fn on_start(&mut self) {
        self.started = true;
    }

    fn on_resume(&mut self) {
        self.egui_ctx.request_repaint();
    }

    fn on_pause(&mut self) {}

    fn on_stop(&mut self) {
        self.started = false;
    }

    fn on_low_memory(&mut self) {
        if let Some(map) = &mut self.map {
            log::info!("Releasing tiles.");
            map.release_tiles();
        }
    }

    fn on_destroy(&mut self) {
        self.map = None;
    }

    fn on_save_instance_state(&mut self, out: &mut SavedState) {
        let Some(map) = &self.map else {
            return;
        };
        let result = out
            .put(CENTER_KEY, to_lat_lon(map.center()))
            .and_then(|()| out.put(ZOOM_KEY, map.memory.zoom()));
        if let Err(err) = result {
            log::warn!("Could not save the camera: {err}.");
        }
    }

    fn get_map_async(&mut self) {
        let mut map = WalkersMap::new(
            self.home,
            self.fix,
            self.attribution,
            self.events.clone(),
            self.egui_ctx.clone(),
        );
        if let Some((center, zoom)) = self.restored.take() {
            set_zoom(&mut map.memory, zoom);
            map.memory.center_at(center);
        }
        self.map = Some(map);
        if self.events.send(Event::MapReady).is_err() {
            log::warn!("Nobody is listening for the map to get ready.");
        }
    }

    fn map(&mut self) -> Option<&mut WalkersMap> {
        self.map.as_mut()
    }
}
