//! Clickable axis label strips.
//!
//! Three X labels stacked below the plot and three Y labels rotated −90°
//! in the left margin. Active/inactive styling follows the color scheme;
//! the selection state guarantees exactly one active label per axis.

use egui::epaint::TextShape;
use egui::{CursorIcon, Pos2, Rect, Response, RichText, Sense, TextStyle, Vec2};

use crate::color_scheme::ColorScheme;
use crate::data::field::{XField, YField};
use crate::selection::AxisSelection;

/// Pitch between stacked label rows/columns, in pixels.
const LABEL_PITCH: f32 = 20.0;

fn clickable_label(
    ui: &mut egui::Ui,
    text: &str,
    active: bool,
    scheme: ColorScheme,
) -> Response {
    let color = if active {
        scheme.label_active()
    } else {
        scheme.label_inactive()
    };
    let mut rich = RichText::new(text).color(color);
    if active {
        rich = rich.strong();
    }
    ui.add(egui::Label::new(rich).sense(Sense::click()))
        .on_hover_cursor(CursorIcon::PointingHand)
}

/// Draw the three X labels centered under the plot. Returns the field whose
/// label was clicked this frame, if any.
pub fn x_axis_labels(
    ui: &mut egui::Ui,
    selection: &AxisSelection,
    scheme: ColorScheme,
    width: f32,
) -> Option<XField> {
    let mut clicked = None;
    ui.allocate_ui_with_layout(
        Vec2::new(width, 3.0 * LABEL_PITCH + 10.0),
        egui::Layout::top_down(egui::Align::Center),
        |ui| {
            for (field, active) in selection.x_label_states() {
                if clickable_label(ui, field.axis_title(), active, scheme).clicked() {
                    clicked = Some(field);
                }
            }
        },
    );
    clicked
}

/// Draw the three rotated Y labels in the left margin. Columns stack outward
/// from the plot edge, [`LABEL_PITCH`] apart. Returns the field whose label
/// was clicked this frame, if any.
pub fn y_axis_labels(
    ui: &mut egui::Ui,
    selection: &AxisSelection,
    scheme: ColorScheme,
    width: f32,
    height: f32,
) -> Option<YField> {
    let mut clicked = None;
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
    let painter = ui.painter_at(rect.expand(2.0));
    let font = TextStyle::Body.resolve(ui.style());

    for (i, (field, active)) in selection.y_label_states().into_iter().enumerate() {
        let color = if active {
            scheme.label_active()
        } else {
            scheme.label_inactive()
        };
        let galley = painter.layout_no_wrap(field.axis_title().to_string(), font.clone(), color);
        let center_x = rect.right() - LABEL_PITCH * (i as f32 + 1.0);
        let center = Pos2::new(center_x, rect.center().y);

        // Rotation is about the galley origin, so anchor it such that the
        // rotated text ends up centered on `center`.
        let origin = Pos2::new(
            center.x - galley.size().y * 0.5,
            center.y + galley.size().x * 0.5,
        );
        let band = Rect::from_center_size(center, Vec2::new(galley.size().y, galley.size().x));
        let response = ui
            .interact(band, ui.id().with(("y_axis_label", i)), Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);
        painter.add(TextShape::new(origin, galley, color).with_angle(-std::f32::consts::FRAC_PI_2));
        if response.clicked() {
            clicked = Some(field);
        }
    }
    clicked
}
