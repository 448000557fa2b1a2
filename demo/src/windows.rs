use egui::{Align2, RichText, Ui, Window};
use satmap::sources::Attribution;

pub fn acknowledge(ui: &Ui, attribution: Attribution) {
    Window::new("Acknowledge")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_TOP, [10., 10.])
        .show(ui.ctx(), |ui| {
            ui.hyperlink_to(attribution.text, attribution.url);
        });
}

/// What the user asked for with the buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ZoomIn,
    ZoomOut,
    Recenter,
}

/// Simple GUI to zoom in and out.
pub fn zoom(ui: &Ui) -> Option<Command> {
    let mut command = None;
    Window::new("Map")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    command = Some(Command::ZoomIn);
                }

                if ui.button(RichText::new("➖").heading()).clicked() {
                    command = Some(Command::ZoomOut);
                }
            });
        });
    command
}

/// Button which brings the camera back to the user's position.
pub fn recenter(ui: &Ui) -> Option<Command> {
    let mut command = None;
    Window::new("Center")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_BOTTOM, [-10., -10.])
        .show(ui.ctx(), |ui| {
            if ui.button(RichText::new("◎").heading()).clicked() {
                command = Some(Command::Recenter);
            }
        });
    command
}
