use plot_facade::{
    Array, AxisScale, BinRule, Bins, DEFAULT_COLORS, Figure, FigureError, Options, Property,
    MAX_BINS, TraceKind, Value, validate_options,
};
use rand_distr::{Distribution, Normal};

#[test]
fn scatter_stores_data_verbatim() {
    let mut figure = Figure::new();
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![0.0, 1.0, 4.0, 9.0];
    figure
        .scatter(x.clone(), y.clone(), Options::new().with("label", "squares"))
        .unwrap();

    let trace = &figure.traces()[0];
    assert_eq!(trace.kind(), TraceKind::Scatter);
    assert_eq!(trace.label(), Some("squares"));
    assert_eq!(trace.color(), Some(DEFAULT_COLORS[0]));
    let scatter = trace.as_scatter().unwrap();
    assert_eq!(scatter.x.values(), x);
    assert_eq!(scatter.y.values(), y);
}

#[test]
fn scatter_length_mismatch() {
    let mut figure = Figure::new();
    let err = figure
        .scatter(vec![1.0, 2.0, 3.0], vec![1.0, 2.0], Options::new())
        .unwrap_err();
    assert_eq!(
        err,
        FigureError::LengthMismatch {
            left: "x",
            right: "y",
            left_len: 3,
            right_len: 2,
        }
    );
    assert!(figure.is_empty());
}

#[test]
fn scatter_rejects_unsupported_option() {
    let mut figure = Figure::new();
    let err = figure
        .scatter(vec![1.0], vec![1.0], Options::new().with("zlabel", "z"))
        .unwrap_err();
    assert!(matches!(err, FigureError::UnsupportedOption { .. }));
}

#[test]
fn default_color_cycle_has_period_nine() {
    let mut figure = Figure::new();
    let picked: Vec<_> = (0..10).map(|_| figure.pick_default_color()).collect();
    assert_eq!(picked[..9], DEFAULT_COLORS);
    assert_eq!(picked[9], picked[0]);
}

#[test]
fn histogram_step_outline() {
    let mut figure = Figure::new();
    figure
        .histogram(
            vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0],
            false,
            vec![1.0, 2.0, 3.0, 4.0],
            Options::new(),
        )
        .unwrap();
    let hist = figure.traces()[0].as_histogram().unwrap();

    let inf = f64::INFINITY;
    assert_eq!(hist.bin_edges, [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(hist.bin_count, [0, 1, 2, 3, 0]);
    assert_eq!(
        hist.x,
        [-inf, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0, inf]
    );
    assert_eq!(hist.y, [0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 0.0, 0.0]);
    assert_eq!(hist.underflow(), 0);
    assert_eq!(hist.overflow(), 0);
    assert_eq!(hist.bins(), 3);
}

#[test]
fn histogram_under_and_overflow() {
    let mut figure = Figure::new();
    figure
        .histogram(
            vec![-5.0, 0.5, 1.5, 7.0, 8.0, f64::NAN],
            false,
            vec![0.0, 1.0, 2.0],
            Options::new(),
        )
        .unwrap();
    let hist = figure.traces()[0].as_histogram().unwrap();
    assert_eq!(hist.bin_count, [1, 1, 1, 2]);
    assert_eq!(hist.y.first(), Some(&1.0));
    assert_eq!(hist.y.last(), Some(&2.0));
}

#[test]
fn histogram_density_keeps_raw_counts() {
    let mut figure = Figure::new();
    figure
        .histogram(vec![0.0, 0.0, 0.0, 1.0], true, vec![0.0, 0.5, 1.0], Options::new())
        .unwrap();
    let hist = figure.traces()[0].as_histogram().unwrap();
    assert!(hist.density);
    assert_eq!(hist.bin_count, [0, 3, 1, 0]);
    assert_eq!(hist.hist, [1.5, 0.5]);
}

#[test]
fn histogram_missing_values_do_not_change_bins() {
    let mut rng = rand::rng();
    let normal = Normal::new(10.0, 3.0).unwrap();
    let clean: Vec<f64> = (0..500).map(|_| normal.sample(&mut rng)).collect();
    let mut with_nan = clean.clone();
    for i in (0..with_nan.len()).step_by(7) {
        with_nan.insert(i, f64::NAN);
    }

    for bins in [
        Bins::default(),
        Bins::Rule(BinRule::Scott),
        Bins::Rule(BinRule::Rice),
        Bins::Count(12),
    ] {
        let mut figure = Figure::new();
        figure
            .histogram(clean.clone(), false, bins.clone(), Options::new())
            .unwrap();
        figure
            .histogram(with_nan.clone(), false, bins, Options::new())
            .unwrap();
        let a = figure.traces()[0].as_histogram().unwrap();
        let b = figure.traces()[1].as_histogram().unwrap();
        assert_eq!(a.bin_edges, b.bin_edges);
        assert_eq!(a.hist, b.hist);
        assert_eq!(a.bin_count, b.bin_count);
    }
}

#[test]
fn histogram_outlier_bin_count_is_bounded() {
    let mut samples: Vec<f64> = (0..1000).map(|i| f64::from(i) / 1000.0).collect();
    samples.push(1e13);
    let mut figure = Figure::new();
    let err = figure
        .histogram(samples.clone(), false, Bins::default(), Options::new())
        .unwrap_err();
    assert!(matches!(err, FigureError::InvalidValue { ref name, .. } if name == "bins"));
    assert!(
        figure
            .histogram(samples.clone(), false, usize::MAX, Options::new())
            .is_err()
    );
    assert!(figure.is_empty());

    // A moderate outlier still bins within the limit.
    samples.pop();
    samples.push(50.0);
    figure
        .histogram(samples, false, Bins::default(), Options::new())
        .unwrap();
    assert!(figure.traces()[0].as_histogram().unwrap().bins() <= MAX_BINS);
}

#[test]
fn histogram_requires_iterable_samples() {
    let mut figure = Figure::new();
    let err = figure
        .histogram(3.0, false, Bins::default(), Options::new())
        .unwrap_err();
    assert_eq!(
        err,
        FigureError::NotIterable {
            name: "samples".to_owned()
        }
    );
}

#[test]
fn heatmap_valid() {
    let mut figure = Figure::new();
    let z = Array::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, f64::NAN]]).unwrap();
    figure
        .heatmap(
            vec![0.0, 1.0, 2.0],
            vec![0.0, 1.0],
            z,
            Options::new()
                .with("zscale", "log")
                .with("zlim", (1, 2))
                .with("alpha", 0.5),
        )
        .unwrap();
    let heatmap = figure.traces()[0].as_heatmap().unwrap();
    assert_eq!(heatmap.zscale, AxisScale::Logarithmic);
    assert_eq!(heatmap.zlim, Some((1.0, 2.0)));
    assert_eq!(heatmap.zlabel, None);
    assert_eq!(heatmap.z.get2(0, 2), Some(3.0));
    assert!(heatmap.z.get2(1, 2).unwrap().is_nan());
}

#[test]
fn heatmap_shape_mismatch_reports_both_shapes() {
    let mut figure = Figure::new();
    let x = vec![0.0, 1.0];
    let y = vec![0.0, 1.0, 2.0];
    let z = Array::from_shape(vec![4, 2], vec![0.0; 8]).unwrap();
    let err = figure.heatmap(x, y, z, Options::new()).unwrap_err();
    match &err {
        FigureError::InvalidShape {
            name,
            expected,
            received,
        } => {
            assert_eq!(name, "z");
            assert_eq!(received, &[4, 2]);
            assert!(expected.contains("[3, 2]"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("[4, 2]"));
    assert!(figure.is_empty());
}

#[test]
fn heatmap_dimension_checks() {
    let mut figure = Figure::new();
    let z = Array::from_shape(vec![1, 1], vec![0.0]).unwrap();
    let err = figure
        .heatmap([[0.0]], vec![0.0], z.clone(), Options::new())
        .unwrap_err();
    assert!(matches!(err, FigureError::InvalidShape { ref name, .. } if name == "x"));

    let err = figure
        .heatmap(vec![0.0], vec![0.0], vec![0.0], Options::new())
        .unwrap_err();
    assert!(matches!(err, FigureError::InvalidShape { ref name, .. } if name == "z"));
}

#[test]
fn heatmap_option_errors() {
    let mut figure = Figure::new();
    let z = Array::from_shape(vec![1, 1], vec![0.0]).unwrap();
    let mut add = |options: Options| figure.heatmap(vec![0.0], vec![0.0], z.clone(), options);

    assert!(matches!(
        add(Options::new().with("zscale", "sqrt")),
        Err(FigureError::InvalidValue { .. })
    ));
    assert!(matches!(
        add(Options::new().with("zlabel", 3)),
        Err(FigureError::InvalidType { .. })
    ));
    assert!(matches!(
        add(Options::new().with("zlim", (1, "a"))),
        Err(FigureError::InvalidValue { .. })
    ));
    assert!(matches!(
        add(Options::new().with("zlim", (1, 2, 3))),
        Err(FigureError::InvalidValue { .. })
    ));
    assert!(matches!(
        add(Options::new().with("color", "red")),
        Err(FigureError::UnsupportedOption { .. })
    ));
    // Option errors win over shape errors.
    assert!(matches!(
        figure.heatmap(0.0, vec![0.0], z.clone(), Options::new().with("zscale", 1)),
        Err(FigureError::InvalidValue { .. })
    ));
    assert!(figure.is_empty());
}

#[test]
fn bulk_set_unknown_property_leaves_figure_untouched() {
    let mut figure = Figure::new();
    figure.set([("title", "before")]).unwrap();
    let err = figure
        .set([("xlabel", Value::from("x")), ("unknown_prop", Value::from(1))])
        .unwrap_err();
    assert!(matches!(err, FigureError::InvalidValue { .. }));
    assert_eq!(figure.get(Property::Title), Some(Value::from("before")));
    assert_eq!(figure.get(Property::XLabel), None);
}

#[test]
fn keyword_validator() {
    const ALLOWED: &[&str] = &["label", "color", "alpha"];
    let err = validate_options(ALLOWED, Options::new().with("bogus", 1)).unwrap_err();
    assert!(matches!(err, FigureError::UnsupportedOption { ref keys, .. } if keys == &["bogus"]));

    let subset = Options::new().with("alpha", 0.1).with("label", "l");
    assert_eq!(validate_options(ALLOWED, subset.clone()), Ok(subset));
}

#[test]
fn traces_keep_insertion_order() {
    let mut figure = Figure::new();
    let z = Array::from_shape(vec![1, 1], vec![0.0]).unwrap();
    figure.heatmap(vec![0.0], vec![0.0], z, Options::new()).unwrap();
    figure.scatter(vec![0.0], vec![0.0], Options::new()).unwrap();
    figure
        .histogram(vec![0.0], false, 2usize, Options::new())
        .unwrap();
    let kinds: Vec<_> = figure.traces().iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        [TraceKind::Heatmap, TraceKind::Scatter, TraceKind::Histogram]
    );
    // Heatmaps take no default color.
    assert_eq!(figure.traces()[1].color(), Some(DEFAULT_COLORS[0]));
}
