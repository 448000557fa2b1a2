use std::sync::mpsc::Sender;

use egui::{Align2, Context, RichText, Window};
use satmap::host::{Event, PermissionHost, RequestCode};

/// Location permission, asked for with an in-app dialog. The answer is remembered for as long
/// as the app runs.
pub struct DialogPermissions {
    granted: bool,
    pending: Option<RequestCode>,
    events: Sender<Event>,
}

impl DialogPermissions {
    pub fn new(granted: bool, events: Sender<Event>) -> Self {
        Self {
            granted,
            pending: None,
            events,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Answer the pending request, as if the user clicked one of the buttons.
    pub fn answer(&mut self, granted: bool) {
        let Some(request_code) = self.pending.take() else {
            return;
        };
        log::info!("Location permission granted: {granted}.");
        self.granted = granted;
        if self
            .events
            .send(Event::PermissionResult {
                request_code,
                granted,
            })
            .is_err()
        {
            log::warn!("Nobody is listening for the permission result.");
        }
    }

    pub fn show(&mut self, ctx: &Context) {
        if !self.is_pending() {
            return;
        }

        let mut answer = None;
        Window::new("Location")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0., 0.])
            .show(ctx, |ui| {
                ui.label("Allow the map to show your precise location?");
                ui.horizontal(|ui| {
                    if ui.button(RichText::new("Allow").heading()).clicked() {
                        answer = Some(true);
                    }
                    if ui.button(RichText::new("Deny").heading()).clicked() {
                        answer = Some(false);
                    }
                });
            });

        if let Some(granted) = answer {
            self.answer(granted);
        }
    }
}

impl PermissionHost for DialogPermissions {
    fn is_granted(&self) -> bool {
        self.granted
    }

    fn request(&mut self, request_code: RequestCode) {
        log::debug!("Asking for the location permission, {request_code:?}.");
        self.pending = Some(request_code);
    }
}
