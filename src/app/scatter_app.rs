//! The scatter chart application.
//!
//! `ScatterApp` owns the dataset, the axis selection, the scales and the
//! in-flight tweens, and renders the interactive plot each frame. Click
//! handling runs inside the single-threaded update pass, so events are
//! serialized by construction and a click on the already-active label is a
//! true no-op (nothing is rebuilt, no transition starts).

use std::time::{Duration, Instant};

use eframe::egui::{self, RichText};
use egui_plot::{Plot, PlotPoint, Points, Text};

use crate::animation::Tween;
use crate::app::axis_labels;
use crate::config::ScatterConfig;
use crate::data::dataset::Dataset;
use crate::render::{label_positions, marker_positions};
use crate::scale::{x_scale, y_scale, LinearScale, ScaleError};
use crate::selection::{AxisEvent, AxisSelection};
use crate::tooltip::TooltipBinder;

pub struct ScatterApp {
    dataset: Dataset,
    pub(crate) config: ScatterConfig,
    selection: AxisSelection,
    x_scale: LinearScale,
    y_scale: LinearScale,
    tooltip: TooltipBinder,
    /// Marker centers, tweened in plot-pixel space.
    markers: Tween,
    /// Abbreviation label anchors, tweened in plot-pixel space.
    abbr_labels: Tween,
    /// Single-entry tween over the `[min, max]` X domain, so the axis
    /// rescales in the same motion as the markers.
    x_domain: Tween,
    /// Single-entry tween over the `[min, max]` Y domain.
    y_domain: Tween,
}

impl ScatterApp {
    /// Build the app for a loaded dataset.
    ///
    /// Fails if the dataset is empty or a metric holds a non-finite value;
    /// the loader already rejects both, this guards direct construction via
    /// [`Dataset::from_records`].
    pub fn new(dataset: Dataset, config: ScatterConfig) -> Result<Self, ScaleError> {
        let selection = AxisSelection::default();
        let xs = x_scale(&dataset, selection.x, &config.geometry)?;
        let ys = y_scale(&dataset, selection.y, &config.geometry)?;
        let duration = config.transition.duration;
        let easing = config.transition.easing;

        let markers = Tween::settled(
            marker_positions(&dataset, &selection, &xs, &ys),
            duration,
            easing,
        );
        let abbr_labels = Tween::settled(
            label_positions(&dataset, &selection, &xs, &ys),
            duration,
            easing,
        );
        let x_domain = Tween::settled(vec![[xs.domain().0, xs.domain().1]], duration, easing);
        let y_domain = Tween::settled(vec![[ys.domain().0, ys.domain().1]], duration, easing);
        let tooltip = TooltipBinder::new(selection.x, selection.y);

        Ok(ScatterApp {
            dataset,
            config,
            selection,
            x_scale: xs,
            y_scale: ys,
            tooltip,
            markers,
            abbr_labels,
            x_domain,
            y_domain,
        })
    }

    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    pub fn selection(&self) -> AxisSelection {
        self.selection
    }

    /// Click orchestration: run the reducer, then rebuild the changed axis
    /// scale, retarget the tweens and rebind the tooltip. A click on the
    /// already-active label returns before any of that happens.
    fn apply_event(&mut self, event: AxisEvent, now: Instant) {
        let Some(next) = self.selection.apply(event) else {
            return;
        };
        let rebuilt = match event {
            AxisEvent::SelectX(field) => {
                x_scale(&self.dataset, field, &self.config.geometry).map(|s| self.x_scale = s)
            }
            AxisEvent::SelectY(field) => {
                y_scale(&self.dataset, field, &self.config.geometry).map(|s| self.y_scale = s)
            }
        };
        if let Err(err) = rebuilt {
            // Selection stays on the previous, valid field.
            tracing::warn!("rejecting axis change: {err}");
            return;
        }
        self.selection = next;
        self.markers.retarget(
            marker_positions(&self.dataset, &next, &self.x_scale, &self.y_scale),
            now,
        );
        self.abbr_labels.retarget(
            label_positions(&self.dataset, &next, &self.x_scale, &self.y_scale),
            now,
        );
        self.x_domain
            .retarget(vec![[self.x_scale.domain().0, self.x_scale.domain().1]], now);
        self.y_domain
            .retarget(vec![[self.y_scale.domain().0, self.y_scale.domain().1]], now);
        self.tooltip = TooltipBinder::new(next.x, next.y);
        tracing::debug!("axis selection changed to ({}, {})", next.x, next.y);
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.markers.is_animating(now)
            || self.abbr_labels.is_animating(now)
            || self.x_domain.is_animating(now)
            || self.y_domain.is_animating(now)
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let geometry = self.config.geometry;
        let scheme = self.config.color_scheme;

        let mut clicked_x = None;
        let mut clicked_y = None;

        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.config.title);
                ui.weak(format!("{} states", self.dataset.len()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(geometry.margins.top);
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                clicked_y = axis_labels::y_axis_labels(
                    ui,
                    &self.selection,
                    scheme,
                    geometry.margins.left,
                    geometry.plot_height(),
                );
                ui.vertical(|ui| {
                    // Tweened pixel positions, converted back to data
                    // coordinates through the final scales for egui_plot.
                    let marker_px = self.markers.sample(now);
                    let label_px = self.abbr_labels.sample(now);
                    let x_bounds = self.x_domain.sample(now)[0];
                    let y_bounds = self.y_domain.sample(now)[0];
                    let marker_pts: Vec<[f64; 2]> = marker_px
                        .iter()
                        .map(|p| [self.x_scale.invert(p[0]), self.y_scale.invert(p[1])])
                        .collect();

                    let plot = Plot::new("scatter")
                        .width(geometry.plot_width())
                        .height(geometry.plot_height())
                        .allow_drag(false)
                        .allow_zoom(false)
                        .allow_scroll(false)
                        .allow_boxed_zoom(false)
                        .allow_double_click_reset(false);

                    let plot_response = plot.show(ui, |plot_ui| {
                        plot_ui.set_plot_bounds_x(x_bounds[0]..=x_bounds[1]);
                        plot_ui.set_plot_bounds_y(y_bounds[0]..=y_bounds[1]);
                        plot_ui.points(
                            Points::new("states", marker_pts.clone())
                                .radius(self.config.marker_radius)
                                .color(scheme.marker_fill()),
                        );
                        for (record, pos) in self.dataset.iter().zip(&label_px) {
                            let at = PlotPoint::new(
                                self.x_scale.invert(pos[0]),
                                self.y_scale.invert(pos[1]),
                            );
                            let rich = RichText::new(&record.abbr)
                                .size(self.config.abbr_font_size)
                                .color(scheme.marker_text());
                            plot_ui.text(Text::new("abbr", at, rich));
                        }
                    });

                    // Hover: nearest marker whose circle contains the
                    // pointer, tested in screen space.
                    if let Some(pointer) = plot_response.response.hover_pos() {
                        let transform = plot_response.transform;
                        let mut hovered = None;
                        let mut best = f32::INFINITY;
                        for (i, p) in marker_pts.iter().enumerate() {
                            let screen =
                                transform.position_from_point(&PlotPoint::new(p[0], p[1]));
                            let dist = screen.distance(pointer);
                            if dist <= self.config.marker_radius && dist < best {
                                best = dist;
                                hovered = Some(i);
                            }
                        }
                        if let Some(i) = hovered {
                            let text = self.tooltip.format(&self.dataset.records()[i]);
                            plot_response.response.clone().on_hover_ui_at_pointer(|ui| {
                                for line in text.lines() {
                                    ui.label(line);
                                }
                            });
                        }
                    }

                    ui.add_space(8.0);
                    clicked_x =
                        axis_labels::x_axis_labels(ui, &self.selection, scheme, geometry.plot_width());
                });
            });
        });

        if let Some(field) = clicked_x {
            self.apply_event(AxisEvent::SelectX(field), now);
        }
        if let Some(field) = clicked_y {
            self.apply_event(AxisEvent::SelectY(field), now);
        }

        if self.is_animating(now) {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
