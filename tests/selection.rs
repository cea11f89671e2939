use statscatter::{
    x_scale, Axis, AxisEvent, AxisSelection, ChartGeometry, Dataset, Record, SelectionError,
    XField, YField,
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

fn assert_one_active(selection: AxisSelection) {
    let x_active = selection
        .x_label_states()
        .iter()
        .filter(|(_, active)| *active)
        .count();
    let y_active = selection
        .y_label_states()
        .iter()
        .filter(|(_, active)| *active)
        .count();
    assert_eq!(x_active, 1, "exactly one X label must be active");
    assert_eq!(y_active, 1, "exactly one Y label must be active");
}

#[test]
fn initial_state_is_poverty_obesity() {
    let selection = AxisSelection::default();
    assert_eq!(selection.x, XField::Poverty);
    assert_eq!(selection.y, YField::Obesity);
    let [(_, poverty_active), _, _] = selection.x_label_states();
    let [(_, obesity_active), _, _] = selection.y_label_states();
    assert!(poverty_active, "poverty label starts active");
    assert!(obesity_active, "obesity label starts active");
    assert_one_active(selection);
}

#[test]
fn clicking_a_new_x_field_changes_only_x() {
    let selection = AxisSelection::default();
    let next = selection
        .apply(AxisEvent::SelectX(XField::Age))
        .expect("selecting a different field must transition");
    assert_eq!(next.x, XField::Age);
    assert_eq!(next.y, selection.y, "Y must be untouched by an X change");
    assert_one_active(next);
}

#[test]
fn clicking_a_new_y_field_changes_only_y() {
    let selection = AxisSelection::default();
    let next = selection
        .apply(AxisEvent::SelectY(YField::Smokes))
        .expect("selecting a different field must transition");
    assert_eq!(next.y, YField::Smokes);
    assert_eq!(next.x, selection.x, "X must be untouched by a Y change");
    assert_one_active(next);
}

#[test]
fn clicking_the_active_label_is_a_no_op() {
    let selection = AxisSelection::default();
    assert_eq!(
        selection.apply(AxisEvent::SelectX(XField::Poverty)),
        None,
        "re-selecting the active X field must not transition"
    );
    assert_eq!(
        selection.apply(AxisEvent::SelectY(YField::Obesity)),
        None,
        "re-selecting the active Y field must not transition"
    );
}

#[test]
fn double_click_is_idempotent() {
    let selection = AxisSelection::default();
    let after_first = selection.apply(AxisEvent::SelectX(XField::Age)).unwrap();
    let after_second = after_first.apply(AxisEvent::SelectX(XField::Age));
    assert_eq!(
        after_second, None,
        "the second click on the same label must be a no-op"
    );
}

#[test]
fn every_reachable_state_has_one_active_label_per_axis() {
    // Walk all transitions from all states.
    for x in XField::ALL {
        for y in YField::ALL {
            let state = AxisSelection { x, y };
            assert_one_active(state);
            for event in XField::ALL
                .map(AxisEvent::SelectX)
                .into_iter()
                .chain(YField::ALL.map(AxisEvent::SelectY))
            {
                if let Some(next) = state.apply(event) {
                    assert_one_active(next);
                }
            }
        }
    }
}

#[test]
fn age_click_rescales_x_and_leaves_y_alone() {
    let data = two_states();
    let geometry = ChartGeometry::default();
    let selection = AxisSelection::default();

    let next = selection.apply(AxisEvent::SelectX(XField::Age)).unwrap();
    let xs = x_scale(&data, next.x, &geometry).unwrap();
    assert!(
        (xs.domain().0 - 24.0).abs() < 1e-9 && (xs.domain().1 - 48.0).abs() < 1e-9,
        "age domain should be [24, 48], got {:?}",
        xs.domain()
    );
    assert_eq!(next.y, YField::Obesity, "Y selection must be unchanged");

    let [_, (age, age_active), _] = next.x_label_states();
    assert_eq!(age, XField::Age);
    assert!(age_active, "age label becomes active");
    let [(poverty, poverty_active), _, _] = next.x_label_states();
    assert_eq!(poverty, XField::Poverty);
    assert!(!poverty_active, "poverty label becomes inactive");
}

#[test]
fn raw_events_with_valid_names_apply() {
    let selection = AxisSelection::default();
    let next = selection
        .apply_raw(Axis::X, "age")
        .expect("'age' is a valid X field")
        .expect("selecting a different field must transition");
    assert_eq!(next.x, XField::Age);
}

#[test]
fn raw_events_with_unknown_names_are_rejected() {
    let selection = AxisSelection::default();
    let err = selection.apply_raw(Axis::X, "shoe_size").unwrap_err();
    assert_eq!(
        err,
        SelectionError::UnknownField {
            axis: Axis::X,
            name: "shoe_size".to_string()
        }
    );
    // A Y field name is not valid on the X axis either.
    assert!(selection.apply_raw(Axis::X, "obesity").is_err());
    assert!(selection.apply_raw(Axis::Y, "poverty").is_err());
}
