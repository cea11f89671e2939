//! Axis selection state machine.
//!
//! The selection is the pair of currently chosen X and Y fields. Transitions
//! are a pure reducer over click events, so the whole machine is testable
//! without a rendering surface: the app owns one `AxisSelection`, feeds
//! validated events through [`AxisSelection::apply`], and only performs the
//! side-effecting re-render when the reducer actually produced a new state.

use std::fmt;

use thiserror::Error;

use crate::data::field::{XField, YField};

/// Which axis a raw selection event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// A validated click on one of the six axis labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisEvent {
    SelectX(XField),
    SelectY(YField),
}

/// Errors raised while validating raw selection events.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown {axis} axis field '{name}'")]
    UnknownField { axis: Axis, name: String },
}

/// The currently chosen X and Y fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisSelection {
    pub x: XField,
    pub y: YField,
}

impl Default for AxisSelection {
    fn default() -> Self {
        AxisSelection {
            x: XField::Poverty,
            y: YField::Obesity,
        }
    }
}

impl AxisSelection {
    /// Pure transition function. Returns `None` when the event selects the
    /// already-active field for its axis — a true no-op, so the caller must
    /// not re-render. Selecting a new X field leaves Y untouched, and vice
    /// versa.
    pub fn apply(self, event: AxisEvent) -> Option<AxisSelection> {
        match event {
            AxisEvent::SelectX(field) if field == self.x => None,
            AxisEvent::SelectX(field) => Some(AxisSelection { x: field, ..self }),
            AxisEvent::SelectY(field) if field == self.y => None,
            AxisEvent::SelectY(field) => Some(AxisSelection { y: field, ..self }),
        }
    }

    /// Validate a raw `(axis, field-name)` pair and apply it. A name outside
    /// the fixed field set for that axis is rejected without producing a new
    /// state, so the caller's selection is never corrupted by a stray event.
    pub fn apply_raw(
        self,
        axis: Axis,
        name: &str,
    ) -> Result<Option<AxisSelection>, SelectionError> {
        let event = match axis {
            Axis::X => XField::parse(name).map(AxisEvent::SelectX),
            Axis::Y => YField::parse(name).map(AxisEvent::SelectY),
        }
        .ok_or_else(|| SelectionError::UnknownField {
            axis,
            name: name.to_string(),
        })?;
        Ok(self.apply(event))
    }

    /// Label order and active flag for the X axis; exactly one entry is
    /// active in every reachable state.
    pub fn x_label_states(self) -> [(XField, bool); 3] {
        XField::ALL.map(|f| (f, f == self.x))
    }

    /// Label order and active flag for the Y axis; exactly one entry is
    /// active in every reachable state.
    pub fn y_label_states(self) -> [(YField, bool); 3] {
        YField::ALL.map(|f| (f, f == self.y))
    }
}
