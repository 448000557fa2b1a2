use egui::{Align2, Color32, FontId, Response, Shape, Stroke, Ui, vec2};
use satmap::{
    Position, StyleDocument,
    location::RenderMode,
    style::{Layer, Source},
};
use walkers::{MapMemory, Plugin, Projector};

use crate::location::Fix;

/// Draws the symbol layers of the style. Every feature is drawn, overlapping icons included.
pub struct StyleMarkers {
    markers: Vec<(Position, char)>,
}

impl StyleMarkers {
    pub fn new(style: &StyleDocument) -> Self {
        let mut markers = Vec::new();
        for layer in &style.layers {
            let Layer::Symbol { source, layout, .. } = layer else {
                continue;
            };
            let Some(Source::Geojson { data }) = style.source(source) else {
                log::warn!("Symbol layer '{}' has no GeoJSON source.", layer.id());
                continue;
            };
            let Some(icon) = style.image(&layout.icon_image) else {
                log::warn!("Image '{}' is missing.", layout.icon_image);
                continue;
            };
            markers.extend(
                data.features
                    .iter()
                    .map(|feature| (feature.position(), icon.glyph)),
            );
        }
        Self { markers }
    }
}

impl Plugin for StyleMarkers {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        _response: &Response,
        projector: &Projector,
        _map_memory: &MapMemory,
    ) {
        let painter = ui.painter();
        for (position, glyph) in &self.markers {
            let screen_position = projector.project(*position).to_pos2();

            painter.circle(
                screen_position,
                12.,
                Color32::WHITE.gamma_multiply(0.8),
                Stroke::new(2., Color32::BLACK.gamma_multiply(0.8)),
            );

            painter.text(
                screen_position,
                Align2::CENTER_CENTER,
                glyph.to_string(),
                FontId::proportional(14.),
                Color32::BLACK,
            );
        }
    }
}

/// User's position. In the compass mode, a wedge shows the heading.
pub struct LocationPuck {
    pub fix: Fix,
    pub render_mode: RenderMode,
}

impl Plugin for LocationPuck {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        _response: &Response,
        projector: &Projector,
        _map_memory: &MapMemory,
    ) {
        let painter = ui.painter();
        let center = projector.project(self.fix.position).to_pos2();
        let blue = Color32::from_rgb(0x1e, 0x88, 0xe5);

        if let (RenderMode::Compass, Some(heading)) = (self.render_mode, self.fix.heading) {
            let angle = heading.to_radians();
            let forward = vec2(angle.sin(), -angle.cos());
            let side = vec2(forward.y, -forward.x);
            painter.add(Shape::convex_polygon(
                vec![
                    center + forward * 22.,
                    center + side * 8.,
                    center - side * 8.,
                ],
                blue.gamma_multiply(0.6),
                Stroke::NONE,
            ));
        }

        painter.circle_filled(center, 12., blue.gamma_multiply(0.25));
        painter.circle(center, 7., blue, Stroke::new(2., Color32::WHITE));
    }
}
