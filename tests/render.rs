use statscatter::render::{label_positions, marker_positions, ABBR_LABEL_DROP};
use statscatter::{
    x_scale, y_scale, AxisEvent, AxisSelection, ChartGeometry, Dataset, Record, XField, YField,
};

fn record(state: &str, abbr: &str, metrics: [f64; 6]) -> Record {
    let [poverty, age, income, obesity, smokes, healthcare] = metrics;
    Record {
        state: state.to_string(),
        abbr: abbr.to_string(),
        poverty,
        age,
        income,
        obesity,
        smokes,
        healthcare,
    }
}

fn two_states() -> Dataset {
    Dataset::from_records(vec![
        record("A", "AA", [10.0, 30.0, 40000.0, 20.0, 15.0, 80.0]),
        record("B", "BB", [20.0, 40.0, 60000.0, 30.0, 25.0, 70.0]),
    ])
}

#[test]
fn markers_map_each_record_through_the_scales() {
    let data = two_states();
    let geometry = ChartGeometry::default();
    let selection = AxisSelection::default();
    let xs = x_scale(&data, selection.x, &geometry).unwrap();
    let ys = y_scale(&data, selection.y, &geometry).unwrap();

    let positions = marker_positions(&data, &selection, &xs, &ys);
    assert_eq!(positions.len(), data.len());
    for (record, pos) in data.iter().zip(&positions) {
        assert_eq!(pos[0], xs.map(record.poverty));
        assert_eq!(pos[1], ys.map(record.obesity));
    }
}

#[test]
fn labels_sit_five_pixels_below_their_marker() {
    let data = two_states();
    let geometry = ChartGeometry::default();
    let selection = AxisSelection::default();
    let xs = x_scale(&data, selection.x, &geometry).unwrap();
    let ys = y_scale(&data, selection.y, &geometry).unwrap();

    let markers = marker_positions(&data, &selection, &xs, &ys);
    let labels = label_positions(&data, &selection, &xs, &ys);
    for (marker, label) in markers.iter().zip(&labels) {
        assert_eq!(label[0], marker[0], "label keeps the marker's X");
        assert_eq!(
            label[1],
            marker[1] + ABBR_LABEL_DROP,
            "label hangs just below the marker center"
        );
    }
}

#[test]
fn labels_follow_the_selected_y_field() {
    let data = two_states();
    let geometry = ChartGeometry::default();
    let selection = AxisSelection::default()
        .apply(AxisEvent::SelectY(YField::Healthcare))
        .unwrap();
    let xs = x_scale(&data, selection.x, &geometry).unwrap();
    let ys = y_scale(&data, selection.y, &geometry).unwrap();

    let labels = label_positions(&data, &selection, &xs, &ys);
    for (record, label) in data.iter().zip(&labels) {
        assert_eq!(
            label[1],
            ys.map(record.healthcare) + ABBR_LABEL_DROP,
            "label Y must track the selected Y field, not any fixed column"
        );
    }
}

#[test]
fn switching_x_keeps_marker_y_positions() {
    let data = two_states();
    let geometry = ChartGeometry::default();
    let before = AxisSelection::default();
    let after = before.apply(AxisEvent::SelectX(XField::Income)).unwrap();

    let xs_before = x_scale(&data, before.x, &geometry).unwrap();
    let xs_after = x_scale(&data, after.x, &geometry).unwrap();
    let ys = y_scale(&data, before.y, &geometry).unwrap();

    let old = marker_positions(&data, &before, &xs_before, &ys);
    let new = marker_positions(&data, &after, &xs_after, &ys);
    for (a, b) in old.iter().zip(&new) {
        assert_eq!(a[1], b[1], "an X change must not move markers vertically");
    }
}
