use dragplot::validate::{validate_axes, validate_function, validate_labels, validate_line};
use dragplot::{CurveLook, HeadlessSurface, LabelInput, PlotError, PlotSurface};

#[test]
fn none_labels_pass_for_any_count() {
    for n in [0, 1, 3, 100] {
        assert_eq!(validate_labels(None, n).unwrap(), None);
    }
}

#[test]
fn matching_label_list_passes_through() {
    let labels = LabelInput::from(vec!["a", "b", "c"]);
    let out = validate_labels(Some(labels), 3).unwrap().unwrap();
    assert_eq!(out, vec!["a", "b", "c"]);
}

#[test]
fn short_label_list_is_dimension_mismatch() {
    let labels = LabelInput::from(vec!["a", "b"]);
    let err = validate_labels(Some(labels), 3).unwrap_err();
    assert!(matches!(
        err,
        PlotError::DimensionMismatch {
            labels: 2,
            points: 3
        }
    ));
}

#[test]
fn long_label_list_is_dimension_mismatch() {
    let labels = LabelInput::from(vec!["a", "b", "c", "d", "e"]);
    let err = validate_labels(Some(labels), 3).unwrap_err();
    assert!(matches!(err, PlotError::DimensionMismatch { .. }));
}

#[test]
fn scalar_label_wraps_for_single_point() {
    let out = validate_labels(Some(LabelInput::from("peak")), 1)
        .unwrap()
        .unwrap();
    assert_eq!(out, vec!["peak"]);
}

#[test]
fn numeric_scalar_label_becomes_text() {
    let out = validate_labels(Some(LabelInput::from(42.0)), 1)
        .unwrap()
        .unwrap();
    assert_eq!(out, vec!["42"]);
}

#[test]
fn scalar_label_for_many_points_is_dimension_mismatch() {
    let err = validate_labels(Some(LabelInput::from("peak")), 3).unwrap_err();
    assert!(matches!(err, PlotError::DimensionMismatch { .. }));
}

#[test]
fn json_label_input_shapes() {
    use serde_json::json;

    assert_eq!(LabelInput::from_json(&json!(null)).unwrap(), None);
    assert_eq!(
        LabelInput::from_json(&json!("top")).unwrap(),
        Some(LabelInput::from("top"))
    );
    assert_eq!(
        LabelInput::from_json(&json!(7)).unwrap(),
        Some(LabelInput::from("7"))
    );
    assert_eq!(
        LabelInput::from_json(&json!(["a", 2, "c"])).unwrap(),
        Some(LabelInput::from(vec!["a", "2", "c"]))
    );

    assert!(matches!(
        LabelInput::from_json(&json!(true)),
        Err(PlotError::BadLabelInput)
    ));
    assert!(matches!(
        LabelInput::from_json(&json!({"a": 1})),
        Err(PlotError::BadLabelInput)
    ));
    assert!(matches!(
        LabelInput::from_json(&json!(["a", false])),
        Err(PlotError::BadLabelInput)
    ));
}

#[test]
fn function_probe_accepts_singularity_at_zero() {
    // 1/x is infinite at the probe point; that is allowed
    assert!(validate_function(|x: f64| 1.0 / x).is_ok());
    assert!(validate_function(f64::sin).is_ok());
}

#[test]
fn function_probe_rejects_nan() {
    // 0/0 and sqrt(-1) do not map the probe to a number
    assert!(matches!(
        validate_function(|x: f64| x / x),
        Err(PlotError::NotAFunction)
    ));
    assert!(matches!(
        validate_function(|x: f64| (x - 1.0).sqrt()),
        Err(PlotError::NotAFunction)
    ));
}

#[test]
fn line_and_axes_handles_are_checked() {
    let mut surface = HeadlessSurface::new();
    let axes = surface.add_axes();
    let line = surface.add_line(axes, vec![0.0], vec![0.0], CurveLook::default());

    assert_eq!(validate_line(&surface, line).unwrap(), axes);
    assert!(matches!(
        validate_line(&surface, line + 1),
        Err(PlotError::NotALine)
    ));

    assert_eq!(validate_axes(&surface, axes).unwrap(), axes);
    assert!(matches!(
        validate_axes(&surface, axes + 1),
        Err(PlotError::NotAnAxes)
    ));
}
