use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use egui::{Align2, Context, Window};
use satmap::host::{Notice, Notifier};

/// How long a toast stays on the screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Short-lived messages at the bottom of the screen.
#[derive(Default)]
pub struct Toasts {
    shown: VecDeque<(Notice, Instant)>,
}

impl Toasts {
    /// Notices still worth showing at `now`.
    pub fn visible(&mut self, now: Instant) -> impl Iterator<Item = &Notice> {
        self.shown
            .retain(|(_, since)| now.saturating_duration_since(*since) < TOAST_DURATION);
        self.shown.iter().map(|(notice, _)| notice)
    }

    pub fn show(&mut self, ctx: &Context) {
        let now = Instant::now();
        let notices: Vec<_> = self.visible(now).copied().collect();
        let Some(oldest) = self.shown.front().map(|(_, since)| *since) else {
            return;
        };

        Window::new("Toasts")
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(Align2::CENTER_BOTTOM, [0., -60.])
            .show(ctx, |ui| {
                for notice in notices {
                    ui.label(notice.to_string());
                }
            });

        ctx.request_repaint_after((oldest + TOAST_DURATION).saturating_duration_since(now));
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, notice: Notice) {
        log::info!("{notice}.");
        self.shown.push_back((notice, Instant::now()));
    }
}
