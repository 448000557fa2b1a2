use crate::{
    camera::CameraUpdate,
    config::MapConfig,
    host::{Event, MapHandle, MapView, Notifier, PermissionHost, RequestCode, SavedState},
    location::{LocationGate, PermissionOutcome},
    overlay::{MarkerOverlay, MarkerSet},
    style::StyleDescriptor,
    zoom::ZoomRange,
};

/// How far the startup sequence got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Readiness {
    /// Waiting for [`Event::MapReady`].
    #[default]
    NotReady,
    /// Map is there, waiting for [`Event::StyleReady`].
    MapReady,
    /// Markers are registered, location tracking is requested or active.
    StyleReady,
    /// View got destroyed, nothing is acted upon anymore.
    Destroyed,
}

/// The map screen. Forwards the lifecycle to the view, sequences the startup as [`Event`]s
/// come in, and turns button taps into camera commands. Taps which come before the map is
/// ready are ignored.
pub struct ViewController<V, P, N>
where
    V: MapView,
    P: PermissionHost,
    N: Notifier,
{
    view: V,
    permissions: P,
    notifier: N,
    readiness: Readiness,
    style: StyleDescriptor,
    zoom_preference: ZoomRange,
    markers: MarkerSet,
    overlay: MarkerOverlay,
    gate: LocationGate,
}

impl<V, P, N> ViewController<V, P, N>
where
    V: MapView,
    P: PermissionHost,
    N: Notifier,
{
    pub fn new(view: V, permissions: P, notifier: N, config: &MapConfig, markers: MarkerSet) -> Self {
        Self {
            view,
            permissions,
            notifier,
            readiness: Readiness::NotReady,
            style: config.style(),
            zoom_preference: config.zoom_preference,
            markers,
            overlay: MarkerOverlay::default(),
            gate: LocationGate::new(config),
        }
    }

    pub fn with_overlay(mut self, overlay: MarkerOverlay) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    pub fn gate(&self) -> &LocationGate {
        &self.gate
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn permissions(&self) -> &P {
        &self.permissions
    }

    pub fn permissions_mut(&mut self) -> &mut P {
        &mut self.permissions
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn on_create(&mut self, saved_state: Option<&SavedState>) {
        log::info!("Creating the map view.");
        self.view.on_create(saved_state);
        self.view.get_map_async();
    }

    pub fn on_start(&mut self) {
        log::debug!("Start.");
        self.view.on_start();
    }

    pub fn on_resume(&mut self) {
        log::debug!("Resume.");
        self.view.on_resume();
    }

    pub fn on_pause(&mut self) {
        log::debug!("Pause.");
        self.view.on_pause();
    }

    pub fn on_stop(&mut self) {
        log::debug!("Stop.");
        self.view.on_stop();
    }

    pub fn on_low_memory(&mut self) {
        log::info!("Low memory.");
        self.view.on_low_memory();
    }

    pub fn on_destroy(&mut self) {
        log::info!("Destroying the map view.");
        self.view.on_destroy();
        self.readiness = Readiness::Destroyed;
    }

    pub fn on_save_instance_state(&mut self, out: &mut SavedState) {
        log::debug!("Saving instance state.");
        self.view.on_save_instance_state(out);
    }

    pub fn handle(&mut self, event: Event) {
        if self.readiness == Readiness::Destroyed {
            log::debug!("Ignoring {event:?}, view is destroyed.");
            return;
        }

        match event {
            Event::MapReady => self.map_ready(),
            Event::StyleReady => self.style_ready(),
            Event::PermissionResult {
                request_code,
                granted,
            } => self.permission_result(request_code, granted),
        }
    }

    fn map_ready(&mut self) {
        if self.readiness != Readiness::NotReady {
            log::debug!("Ignoring map ready in {:?}.", self.readiness);
            return;
        }

        let Some(map) = self.view.map() else {
            log::warn!("Map was reported ready, but the view has none.");
            return;
        };

        map.set_zoom_preference(self.zoom_preference);
        map.set_style(self.style.document());
        self.readiness = Readiness::MapReady;
    }

    fn style_ready(&mut self) {
        if self.readiness != Readiness::MapReady {
            log::debug!("Ignoring style ready in {:?}.", self.readiness);
            return;
        }

        let Some(map) = self.view.map() else {
            log::warn!("Style was reported ready, but the view has no map.");
            return;
        };

        match map.style_mut() {
            Some(style) => {
                if let Err(err) = self.overlay.register(&self.markers, style) {
                    log::error!("Could not add markers: {err}.");
                }
            }
            None => log::warn!("Style was reported ready, but the map has none."),
        }

        self.readiness = Readiness::StyleReady;

        if let Err(err) = self
            .gate
            .ensure(map, &mut self.permissions, &mut self.notifier)
        {
            log::error!("Could not enable location tracking: {err}.");
        }
    }

    fn permission_result(&mut self, request_code: RequestCode, granted: bool) {
        let outcome = self
            .gate
            .on_permission_result(request_code, granted, &mut self.notifier);

        if outcome != PermissionOutcome::Activate {
            return;
        }

        // Until the style is ready, the grant is kept by the gate and used on style ready.
        if self.readiness != Readiness::StyleReady {
            log::debug!("Permission granted in {:?}, activating later.", self.readiness);
            return;
        }

        if let Some(map) = self.view.map()
            && let Err(err) = self.gate.activate(map)
        {
            log::error!("Could not enable location tracking: {err}.");
        }
    }

    /// Live map, `None` before map ready and after destroy.
    fn live_map(&mut self) -> Option<&mut V::Map> {
        match self.readiness {
            Readiness::MapReady | Readiness::StyleReady => self.view.map(),
            Readiness::NotReady | Readiness::Destroyed => None,
        }
    }

    pub fn zoom_in(&mut self) {
        self.camera(CameraUpdate::ZoomIn);
    }

    pub fn zoom_out(&mut self) {
        self.camera(CameraUpdate::ZoomOut);
    }

    fn camera(&mut self, update: CameraUpdate) {
        if let Some(map) = self.live_map() {
            map.animate_camera(update, None);
        } else {
            log::debug!("Ignoring {update:?}, map is not ready.");
        }
    }

    /// Go to the user's last known location, or tell them it is not available.
    pub fn recenter(&mut self) {
        if !matches!(
            self.readiness,
            Readiness::MapReady | Readiness::StyleReady
        ) {
            log::debug!("Ignoring recenter, map is not ready.");
            return;
        }

        if let Some(map) = self.view.map() {
            self.gate.recenter(map, &mut self.notifier);
        }
    }
}
