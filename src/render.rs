//! Target positions for markers and abbreviation labels.
//!
//! Pure pixel-space layout: one marker center per record, mapped through the
//! current scales, and one text label sitting just below each marker. The
//! app feeds these targets into tweens; nothing here touches the dataset.

use crate::data::dataset::Dataset;
use crate::scale::LinearScale;
use crate::selection::AxisSelection;

/// Vertical drop of the abbreviation label below its marker center, in
/// pixels (pixel Y grows downward).
pub const ABBR_LABEL_DROP: f64 = 5.0;

/// Marker center positions for the selected fields, in plot pixels.
pub fn marker_positions(
    data: &Dataset,
    selection: &AxisSelection,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
) -> Vec<[f64; 2]> {
    data.iter()
        .map(|r| {
            [
                x_scale.map(selection.x.value(r)),
                y_scale.map(selection.y.value(r)),
            ]
        })
        .collect()
}

/// Abbreviation label positions: same X as the marker, [`ABBR_LABEL_DROP`]
/// below its center. The label follows the currently selected Y field.
pub fn label_positions(
    data: &Dataset,
    selection: &AxisSelection,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
) -> Vec<[f64; 2]> {
    marker_positions(data, selection, x_scale, y_scale)
        .into_iter()
        .map(|[x, y]| [x, y + ABBR_LABEL_DROP])
        .collect()
}
