//! Hover tooltip binding for the currently selected fields.
//!
//! A binder captures the `(x, y)` field pair it was built for; the app
//! rebuilds it on every selection change so the formatter can never refer to
//! a stale field.

use crate::data::dataset::Record;
use crate::data::field::{XField, YField};

/// Formats hover tooltips for one axis selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TooltipBinder {
    x: XField,
    y: YField,
}

impl TooltipBinder {
    pub fn new(x: XField, y: YField) -> Self {
        TooltipBinder { x, y }
    }

    /// The field pair this binder was built for.
    pub fn fields(&self) -> (XField, YField) {
        (self.x, self.y)
    }

    /// Tooltip text for one record: state name, then the prefixed value of
    /// each selected field on its own line.
    pub fn format(&self, record: &Record) -> String {
        format!(
            "{}\n{} {}\n{} {}",
            record.state,
            self.x.tooltip_prefix(),
            self.x.value(record),
            self.y.tooltip_prefix(),
            self.y.value(record),
        )
    }
}
