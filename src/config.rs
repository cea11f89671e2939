//! Configuration types for the scatter chart.

use std::time::Duration;

use crate::animation::Easing;
use crate::color_scheme::ColorScheme;

// ─────────────────────────────────────────────────────────────────────────────
// Chart geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Margins around the plot area, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartMargins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for ChartMargins {
    fn default() -> Self {
        ChartMargins {
            top: 20.0,
            right: 40.0,
            bottom: 80.0,
            left: 100.0,
        }
    }
}

/// Fixed drawing-canvas geometry.
///
/// The plot area is derived from the canvas size and margins, not from
/// content: the bottom margin holds the three X labels, the left margin the
/// three rotated Y labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub margins: ChartMargins,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        ChartGeometry {
            canvas_width: 950.0,
            canvas_height: 450.0,
            margins: ChartMargins::default(),
        }
    }
}

impl ChartGeometry {
    pub fn plot_width(&self) -> f32 {
        self.canvas_width - self.margins.left - self.margins.right
    }

    pub fn plot_height(&self) -> f32 {
        self.canvas_height - self.margins.top - self.margins.bottom
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transition
// ─────────────────────────────────────────────────────────────────────────────

/// Timing of the re-render transition triggered by an axis change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        TransitionConfig {
            duration: Duration::from_millis(1000),
            easing: Easing::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ScatterConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the scatter chart.
///
/// | Field           | Purpose |
/// |-----------------|---------|
/// | `geometry`      | Canvas size, margins, derived plot area |
/// | `transition`    | Duration and easing of axis-change animations |
/// | `marker_radius` | Circle radius in pixels |
/// | `color_scheme`  | Visual theme |
#[derive(Clone)]
pub struct ScatterConfig {
    /// Native window title and on-screen heading.
    pub title: String,
    /// Fixed canvas geometry.
    pub geometry: ChartGeometry,
    /// Axis-change transition timing.
    pub transition: TransitionConfig,
    /// Marker circle radius in pixels.
    pub marker_radius: f32,
    /// Font size of the abbreviation label drawn on each marker.
    pub abbr_font_size: f32,
    /// Color scheme / visual theme.
    pub color_scheme: ColorScheme,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        ScatterConfig {
            title: "State Health Metrics".to_string(),
            geometry: ChartGeometry::default(),
            transition: TransitionConfig::default(),
            marker_radius: 15.0,
            abbr_font_size: 11.0,
            color_scheme: ColorScheme::default(),
            native_options: None,
        }
    }
}
