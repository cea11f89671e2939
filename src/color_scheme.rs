//! Color scheme definitions for the scatter chart.

use egui::{Color32, Context, Visuals};

/// Visual theme for the chart UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    /// Light theme, matching the chart's print-style look.
    Light,
    /// Dark theme.
    Dark,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Light
    }
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Light, ColorScheme::Dark]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Light => "Light",
            ColorScheme::Dark => "Dark",
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            ColorScheme::Light => Visuals::light(),
            ColorScheme::Dark => Visuals::dark(),
        }
    }

    /// Apply this scheme's visuals to the egui context.
    pub fn apply_to_ctx(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }

    /// Fill color of the marker circles (semi-transparent so overlapping
    /// states stay readable).
    pub fn marker_fill(&self) -> Color32 {
        match self {
            ColorScheme::Light => Color32::from_rgba_unmultiplied(0x89, 0xbd, 0xd3, 160),
            ColorScheme::Dark => Color32::from_rgba_unmultiplied(0x5d, 0x9a, 0xc4, 180),
        }
    }

    /// Color of the abbreviation text drawn on each marker.
    pub fn marker_text(&self) -> Color32 {
        Color32::WHITE
    }

    /// Color of the currently selected axis label.
    pub fn label_active(&self) -> Color32 {
        match self {
            ColorScheme::Light => Color32::from_gray(20),
            ColorScheme::Dark => Color32::from_gray(235),
        }
    }

    /// Color of the unselected axis labels.
    pub fn label_inactive(&self) -> Color32 {
        match self {
            ColorScheme::Light => Color32::from_gray(140),
            ColorScheme::Dark => Color32::from_gray(120),
        }
    }
}
