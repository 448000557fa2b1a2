//! Permission-gated location tracking, and recentring the camera on the last known location.

use std::time::Duration;

use crate::{
    camera::{CameraPosition, CameraUpdate},
    config::MapConfig,
    error::Error,
    host::{MapHandle, Notice, Notifier, PermissionHost, RequestCode},
    zoom::Zoom,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    #[default]
    NotRequested,
    /// Prompt is shown, waiting for the user.
    Requested,
    Granted,
    Denied,
}

/// How the camera reacts to location updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    #[default]
    None,
    /// Camera follows the position.
    Tracking,
}

/// How the position is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Normal,
    /// Position marker rotates with the heading.
    Compass,
}

/// What the caller should do after [`LocationGate::on_permission_result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionOutcome {
    /// Permission got granted, tracking should be activated with the current map.
    Activate,
    Denied,
    /// Result was not for us, or nobody asked.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct LocationGate {
    state: PermissionState,
    request_code: RequestCode,
    tracking: bool,
    recenter_zoom: Zoom,
    recenter_duration: Duration,
}

impl LocationGate {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            state: PermissionState::NotRequested,
            request_code: config.permission_request_code,
            tracking: false,
            recenter_zoom: config.recenter_zoom,
            recenter_duration: config.recenter_duration(),
        }
    }

    pub fn state(&self) -> PermissionState {
        self.state
    }

    /// Whether [`LocationGate::activate`] succeeded.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Activate tracking if allowed, ask for the permission if nobody did yet.
    ///
    /// # Errors
    ///
    /// Only if activation fails, see [`LocationGate::activate`].
    pub fn ensure(
        &mut self,
        map: &mut dyn MapHandle,
        permissions: &mut dyn PermissionHost,
        notifier: &mut dyn Notifier,
    ) -> Result<(), Error> {
        // Permission might have been granted in a previous session.
        if self.state == PermissionState::NotRequested && permissions.is_granted() {
            self.state = PermissionState::Granted;
        }

        match self.state {
            PermissionState::Granted if self.tracking => {
                log::debug!("Location tracking is already active.");
            }
            PermissionState::Granted => self.activate(map)?,
            PermissionState::NotRequested => {
                log::info!("Requesting location permission.");
                self.state = PermissionState::Requested;
                permissions.request(self.request_code);
            }
            PermissionState::Requested => {
                log::debug!("Location permission prompt is still pending.");
            }
            PermissionState::Denied => notifier.notify(Notice::PermissionDenied),
        }
        Ok(())
    }

    pub fn on_permission_result(
        &mut self,
        request_code: RequestCode,
        granted: bool,
        notifier: &mut dyn Notifier,
    ) -> PermissionOutcome {
        if request_code != self.request_code {
            log::warn!("Ignoring permission result for {request_code:?}.");
            return PermissionOutcome::Ignored;
        }

        if self.state != PermissionState::Requested {
            log::warn!(
                "Ignoring permission result, no request is outstanding ({:?}).",
                self.state
            );
            return PermissionOutcome::Ignored;
        }

        if granted {
            log::info!("Location permission granted.");
            self.state = PermissionState::Granted;
            PermissionOutcome::Activate
        } else {
            log::info!("Location permission denied.");
            self.state = PermissionState::Denied;
            notifier.notify(Notice::PermissionDenied);
            PermissionOutcome::Denied
        }
    }

    /// Enable the location component, with the camera following the position and the marker
    /// rotating with the heading.
    ///
    /// # Errors
    ///
    /// [`Error::PermissionNotGranted`] if called before the permission is granted,
    /// [`Error::StyleNotLoaded`] if the map has no style yet. Nothing is changed in such case.
    pub fn activate(&mut self, map: &mut dyn MapHandle) -> Result<(), Error> {
        if self.state != PermissionState::Granted {
            return Err(Error::PermissionNotGranted);
        }
        if map.style_mut().is_none() {
            return Err(Error::StyleNotLoaded);
        }

        let component = map.location_component();
        component.activate();
        component.set_enabled(true);
        component.set_camera_mode(CameraMode::Tracking);
        component.set_render_mode(RenderMode::Compass);
        self.tracking = true;

        log::info!("Location tracking activated.");
        Ok(())
    }

    /// Move the camera to the last known location. Returns whether the camera got moved,
    /// otherwise the user is told that the location is not available.
    pub fn recenter(&self, map: &mut dyn MapHandle, notifier: &mut dyn Notifier) -> bool {
        let location = if self.tracking {
            map.location_component().last_known_location()
        } else {
            None
        };

        if let Some(target) = location {
            map.animate_camera(
                CameraUpdate::Position(CameraPosition {
                    target,
                    zoom: self.recenter_zoom,
                }),
                Some(self.recenter_duration),
            );
            true
        } else {
            notifier.notify(Notice::LocationUnavailable);
            false
        }
    }
}
