//! Linear scales mapping padded data domains to pixel ranges.
//!
//! A scale is derived from the dataset and one selected field: the domain is
//! the field's [0.8·min, 1.2·max] span, the range is the plot area in pixels
//! (`[0, width]` for X, `[height, 0]` for Y — flipped so larger values render
//! higher on screen). Scales are plain values; rebuilding one never touches
//! the dataset.

use thiserror::Error;

use crate::config::ChartGeometry;
use crate::data::dataset::Dataset;
use crate::data::field::{XField, YField};

/// Lower padding factor applied to the domain minimum.
pub const DOMAIN_PAD_MIN: f64 = 0.8;
/// Upper padding factor applied to the domain maximum.
pub const DOMAIN_PAD_MAX: f64 = 1.2;

/// Errors raised while deriving a scale from the dataset.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    #[error("cannot build a scale over an empty dataset")]
    EmptyDataset,
    #[error("field '{field}' has a non-finite value at record {index}")]
    InvalidField { field: &'static str, index: usize },
}

/// A linear mapping from a data domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to a pixel coordinate.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            // zero-span domain collapses to the range midpoint
            return (r0 + r1) * 0.5;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Map a pixel coordinate back to a domain value.
    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) * 0.5;
        }
        d0 + (pixel - r0) / span * (d1 - d0)
    }
}

fn padded_domain<I>(values: I, field: &'static str) -> Result<(f64, f64), ScaleError>
where
    I: IntoIterator<Item = f64>,
{
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut count = 0usize;
    for (index, v) in values.into_iter().enumerate() {
        if !v.is_finite() {
            return Err(ScaleError::InvalidField { field, index });
        }
        min = min.min(v);
        max = max.max(v);
        count += 1;
    }
    if count == 0 {
        return Err(ScaleError::EmptyDataset);
    }
    Ok((min * DOMAIN_PAD_MIN, max * DOMAIN_PAD_MAX))
}

/// Build the horizontal scale for the given field: padded domain mapped onto
/// `[0, plot_width]`.
pub fn x_scale(
    data: &Dataset,
    field: XField,
    geometry: &ChartGeometry,
) -> Result<LinearScale, ScaleError> {
    let domain = padded_domain(data.iter().map(|r| field.value(r)), field.name())?;
    Ok(LinearScale::new(domain, (0.0, geometry.plot_width() as f64)))
}

/// Build the vertical scale for the given field: padded domain mapped onto
/// `[plot_height, 0]` (pixel Y grows downward).
pub fn y_scale(
    data: &Dataset,
    field: YField,
    geometry: &ChartGeometry,
) -> Result<LinearScale, ScaleError> {
    let domain = padded_domain(data.iter().map(|r| field.value(r)), field.name())?;
    Ok(LinearScale::new(domain, (geometry.plot_height() as f64, 0.0)))
}
