use augur_core::{
    AugurError, NamedSeries, RangePreset, align, align_labeled, compute_window,
    locate_last_non_null, window_for_preset,
};

#[test]
fn history_and_connected_forecast() {
    let series = [
        NamedSeries::dense("history", 0, &[10.0, 11.0, 12.0]),
        NamedSeries::dense("forecast", 2, &[12.0, 13.0, 14.0]).connected(),
    ];
    let frame = align(&series, 5).unwrap();
    assert_eq!(
        frame.get("history").unwrap(),
        &[Some(10.0), Some(11.0), Some(12.0), None, None]
    );
    assert_eq!(
        frame.get("forecast").unwrap(),
        &[None, None, Some(12.0), Some(13.0), Some(14.0)]
    );
    assert_eq!(frame.labels()[4].display(), "4");
}

#[test]
fn connector_overwrites_seed_with_previous_last_non_null() {
    let series = [
        NamedSeries::new("history", 0, vec![Some(1.0), Some(2.0), None]),
        NamedSeries::new("forecast", 2, vec![None, Some(9.0), Some(3.0)]).connected(),
    ];
    let frame = align(&series, 5).unwrap();
    // first non-null of the forecast sits at position 3
    assert_eq!(
        frame.get("forecast").unwrap(),
        &[None, None, None, Some(2.0), Some(3.0)]
    );
    assert_eq!(frame.get("history").unwrap(), &[Some(1.0), Some(2.0), None, None, None]);
}

#[test]
fn connector_without_predecessor_is_a_no_op() {
    let series = [NamedSeries::dense("forecast", 1, &[5.0, 6.0]).connected()];
    let frame = align(&series, 3).unwrap();
    assert_eq!(frame.get("forecast").unwrap(), &[None, Some(5.0), Some(6.0)]);
}

#[test]
fn shape_errors() {
    let series = [NamedSeries::dense("history", 0, &[1.0, 2.0, 3.0])];
    assert!(matches!(align(&series, 2), Err(AugurError::ShapeMismatch { .. })));
    assert!(matches!(align(&series, 4), Err(AugurError::ShapeMismatch { .. })));
    assert!(matches!(align(&series, 0), Err(AugurError::EmptySeries)));
    assert!(matches!(align(&[], 0), Err(AugurError::EmptySeries)));
    assert!(matches!(align(&[], 3), Err(AugurError::ShapeMismatch { .. })));
}

#[test]
fn labeled_alignment_checks_label_count() {
    let series = [NamedSeries::dense("intraday", 0, &[1.0, 2.0])];
    let frame = align_labeled(&series, 2, vec!["09:30".into(), "09:35".into()]).unwrap();
    assert_eq!(frame.labels()[1].display(), "09:35");
    let err = align_labeled(&series, 2, vec!["09:30".into()]).unwrap_err();
    assert!(matches!(err, AugurError::ShapeMismatch { .. }));
}

#[test]
fn window_examples() {
    assert_eq!(compute_window(50, 7, 7, 55).unwrap(), (43, 54));
    assert_eq!(compute_window(3, 22, 10, 100).unwrap(), (0, 13));
    assert_eq!(compute_window(0, 0, 0, 1).unwrap(), (0, 0));
    assert!(matches!(compute_window(0, 1, 1, 0), Err(AugurError::EmptySeries)));
    assert!(matches!(compute_window(5, 1, 1, 5), Err(AugurError::ShapeMismatch { .. })));
}

#[test]
fn presets_resolve_to_spans() {
    assert_eq!(window_for_preset("1d", 50, 60).unwrap(), (49, 51));
    assert_eq!(window_for_preset("3d", 50, 60).unwrap(), (47, 53));
    assert_eq!(window_for_preset("7d", 50, 60).unwrap(), (43, 57));
    assert_eq!(window_for_preset("1m", 50, 70).unwrap(), (28, 60));
    assert_eq!(window_for_preset("all", 50, 60).unwrap(), (0, 59));
    assert_eq!("all".parse::<RangePreset>().unwrap(), RangePreset::All);
}

#[test]
fn unknown_range_tag() {
    match window_for_preset("2w", 10, 20) {
        Err(AugurError::UnknownRange { tag }) => assert_eq!(tag, "2w"),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(serde_json::from_str::<RangePreset>(r#""1y""#).is_err());
    assert_eq!(serde_json::to_string(&RangePreset::OneMonth).unwrap(), r#""1m""#);
}

#[test]
fn last_non_null_examples() {
    assert_eq!(locate_last_non_null(&[Some(1.0), Some(2.0), None, None]), 1);
    assert_eq!(locate_last_non_null(&[None, None]), 0);
}
