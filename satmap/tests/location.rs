mod common;

use common::{FakeMap, FakePermissions, Notices};
use satmap::{
    Error, MapConfig, Zoom,
    host::{Notice, RequestCode},
    lat_lon,
    location::{CameraMode, LocationGate, PermissionOutcome, PermissionState},
};

fn gate() -> LocationGate {
    let _ = env_logger::try_init();
    LocationGate::new(&MapConfig::default())
}

#[test]
fn activation_requires_the_permission() {
    let mut gate = gate();
    let mut map = FakeMap::default();

    assert!(matches!(
        gate.activate(&mut map),
        Err(Error::PermissionNotGranted)
    ));
    assert!(!map.location.activated);
    assert_eq!(map.location.camera_mode, CameraMode::None);
    assert!(!gate.is_tracking());
}

#[test]
fn pending_prompt_is_not_shown_twice() {
    let mut gate = gate();
    let mut map = FakeMap::default();
    let mut permissions = FakePermissions::default();
    let mut notices = Notices::default();

    gate.ensure(&mut map, &mut permissions, &mut notices).unwrap();
    gate.ensure(&mut map, &mut permissions, &mut notices).unwrap();

    assert_eq!(permissions.requests, vec![RequestCode(1)]);
    assert_eq!(gate.state(), PermissionState::Requested);
}

#[test]
fn denied_gate_never_activates() {
    let mut gate = gate();
    let mut map = FakeMap::default();
    let mut permissions = FakePermissions::default();
    let mut notices = Notices::default();

    gate.ensure(&mut map, &mut permissions, &mut notices).unwrap();
    assert_eq!(
        gate.on_permission_result(RequestCode(1), false, &mut notices),
        PermissionOutcome::Denied
    );

    // Even if the system changed its mind in the meantime.
    permissions.granted = true;
    gate.ensure(&mut map, &mut permissions, &mut notices).unwrap();

    assert!(!map.location.activated);
    assert_eq!(
        notices.0,
        vec![Notice::PermissionDenied, Notice::PermissionDenied]
    );
    assert_eq!(permissions.requests.len(), 1);
}

#[test]
fn result_without_request_is_ignored() {
    let mut gate = gate();
    let mut notices = Notices::default();

    assert_eq!(
        gate.on_permission_result(RequestCode(1), true, &mut notices),
        PermissionOutcome::Ignored
    );
    assert_eq!(gate.state(), PermissionState::NotRequested);
}

#[test]
fn granted_gate_activates_once() {
    let mut gate = gate();
    let mut map = FakeMap::styled();
    let mut permissions = FakePermissions {
        granted: true,
        ..Default::default()
    };
    let mut notices = Notices::default();

    gate.ensure(&mut map, &mut permissions, &mut notices).unwrap();
    map.location.activated = false;
    gate.ensure(&mut map, &mut permissions, &mut notices).unwrap();

    assert!(!map.location.activated, "activated a second time");
    assert!(gate.is_tracking());
    assert!(permissions.requests.is_empty());
}

#[test]
fn activation_requires_a_loaded_style() {
    let mut gate = gate();
    let mut map = FakeMap::default();
    let mut permissions = FakePermissions {
        granted: true,
        ..Default::default()
    };
    let mut notices = Notices::default();

    assert!(matches!(
        gate.ensure(&mut map, &mut permissions, &mut notices),
        Err(Error::StyleNotLoaded)
    ));
    assert!(!map.location.activated);
    assert!(!gate.is_tracking());

    // Once the style is there, the grant is still remembered.
    map.style = FakeMap::styled().style;
    gate.ensure(&mut map, &mut permissions, &mut notices).unwrap();
    assert!(map.location.activated);
    assert_eq!(gate.state(), PermissionState::Granted);
}

#[test]
fn recenter_uses_the_configured_zoom() {
    let config = MapConfig {
        recenter_zoom: Zoom::try_from(12.0).unwrap(),
        recenter_duration_ms: 250,
        ..Default::default()
    };
    let mut gate = LocationGate::new(&config);
    let mut map = FakeMap::styled();
    map.location.last_known = Some(lat_lon(-6.6, 106.8));
    let mut permissions = FakePermissions {
        granted: true,
        ..Default::default()
    };
    let mut notices = Notices::default();

    gate.ensure(&mut map, &mut permissions, &mut notices).unwrap();
    assert!(gate.recenter(&mut map, &mut notices));

    let (update, duration) = map.camera[0];
    assert!(matches!(
        update,
        satmap::camera::CameraUpdate::Position(position) if position.zoom.round() == 12
    ));
    assert_eq!(duration, Some(std::time::Duration::from_millis(250)));
}
