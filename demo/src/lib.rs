//! Satellite map screen of `satmap`, hosted by walkers and egui.

mod animation;
mod lifecycle;
mod location;
mod map_view;
mod notices;
mod permissions;
mod places;
mod plugins;
mod tiles;
mod windows;

use std::sync::mpsc::{Receiver, channel};

use egui::Context;
use satmap::{
    MapConfig, ViewController,
    host::{Event, PermissionHost as _, SavedState},
    sources::{Attribution, GoogleMaps},
};

pub use location::Fix;

use crate::{
    lifecycle::{Transition, WindowLifecycle},
    map_view::WalkersMapView,
    notices::Toasts,
    permissions::DialogPermissions,
    windows::Command,
};

type Controller = ViewController<WalkersMapView, DialogPermissions, Toasts>;

/// Keys in eframe's storage.
const SAVED_STATE_KEY: &str = "satmap";
const PERMISSION_KEY: &str = "satmap_location_permission";

fn attribution(config: &MapConfig) -> Attribution {
    let google = GoogleMaps::default();
    if config.tiles == google.template() {
        google.attribution()
    } else {
        Attribution {
            text: "Custom tile server",
            url: "",
        }
    }
}

fn restore(storage: Option<&dyn eframe::Storage>) -> Option<SavedState> {
    let json = storage?.get_string(SAVED_STATE_KEY)?;
    match serde_json::from_str(&json) {
        Ok(state) => Some(state),
        Err(err) => {
            log::warn!("Ignoring saved state: {err}.");
            None
        }
    }
}

pub struct SatMapApp {
    controller: Controller,
    events: Receiver<Event>,
    lifecycle: WindowLifecycle,
}

impl SatMapApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &MapConfig, fix: Option<Fix>) -> Self {
        let (sender, events) = channel();
        let markers = places::markers();
        let home = markers
            .positions()
            .first()
            .copied()
            .unwrap_or_else(|| satmap::lat_lon(0., 0.));

        let view = WalkersMapView::new(
            cc.egui_ctx.clone(),
            sender.clone(),
            fix,
            attribution(config),
            home,
        );
        // Stands in for the system remembering the permission.
        let granted = cc
            .storage
            .and_then(|storage| storage.get_string(PERMISSION_KEY))
            .is_some_and(|value| value == "granted");
        let mut controller = Controller::new(
            view,
            DialogPermissions::new(granted, sender),
            Toasts::default(),
            config,
            markers,
        );

        controller.on_create(restore(cc.storage).as_ref());

        Self {
            controller,
            events,
            lifecycle: WindowLifecycle::default(),
        }
    }

    fn apply(&mut self, transitions: impl IntoIterator<Item = Transition>) {
        for transition in transitions {
            match transition {
                Transition::Start => self.controller.on_start(),
                Transition::Resume => self.controller.on_resume(),
                Transition::Pause => self.controller.on_pause(),
                Transition::Stop => self.controller.on_stop(),
            }
        }
    }

    fn handle_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            log::debug!("{event:?}");
            self.controller.handle(event);
        }
    }

    fn command(&mut self, command: Command) {
        match command {
            Command::ZoomIn => self.controller.zoom_in(),
            Command::ZoomOut => self.controller.zoom_out(),
            Command::Recenter => self.controller.recenter(),
        }
    }
}

impl eframe::App for SatMapApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let (focused, minimized) =
            ctx.input(|i| (i.focused, i.viewport().minimized.unwrap_or(false)));
        let transitions = self.lifecycle.update(focused, minimized);
        self.apply(transitions);

        self.handle_events();

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        let mut commands = Vec::new();
        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let view = self.controller.view_mut();
                view.show(ui);

                // Draw utility windows.
                commands.extend(windows::zoom(ui));
                commands.extend(windows::recenter(ui));
                windows::acknowledge(ui, view.attribution());
            });

        for command in commands {
            self.command(command);
        }

        self.controller.permissions_mut().show(ctx);
        self.controller.notifier_mut().show(ctx);

        // Permission answers and style loads should not wait for the next input.
        self.handle_events();
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let mut state = SavedState::default();
        self.controller.on_save_instance_state(&mut state);
        match serde_json::to_string(&state) {
            Ok(json) => storage.set_string(SAVED_STATE_KEY, json),
            Err(err) => log::warn!("Could not save the state: {err}."),
        }
        if self.controller.permissions().is_granted() {
            storage.set_string(PERMISSION_KEY, "granted".to_owned());
        }
    }
}

impl Drop for SatMapApp {
    fn drop(&mut self) {
        let transitions = self.lifecycle.shutdown();
        self.apply(transitions);
        self.controller.on_destroy();
    }
}
