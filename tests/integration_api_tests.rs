//! End-to-end tests through the public API.
//!
//! ## Test Organization
//!
//! 1. **Differencing** - lengths, values, repeated orders, errors
//! 2. **Integration** - lengths, translation property, errors
//! 3. **Extrema** - reference shapes, tolerance, ordering, errors
//! 4. **Builders** - defaults, reuse, duplicate parameters

use approx::assert_relative_eq;
use seqcalc::prelude::*;

fn noisy_wave(n: usize) -> (Vec<f64>, Vec<f64>) {
    // Deterministic pseudo-noise keeps the test reproducible without an RNG.
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.02).collect();
    let y = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| xi.sin() + 0.01 * ((i * 7919 % 13) as f64 / 13.0 - 0.5))
        .collect();
    (x, y)
}

// ============================================================================
// Differencing
// ============================================================================

#[test]
fn test_diff_unit_spacing_values_and_length() {
    let y = [2.0, -1.0, 3.5, 3.5, 10.0];
    let d = diff(&y, 1).unwrap();

    assert_eq!(d.len(), y.len() - 1);
    for k in 0..d.len() {
        assert_eq!(d[k], y[k + 1] - y[k]);
    }
}

#[test]
fn test_diff_order_n_is_repeated_diff() {
    let y = [1.0, 8.0, 27.0, 64.0, 125.0, 216.0];

    for order in 1..y.len() {
        let direct = diff(&y, order).unwrap();
        let mut repeated = y.to_vec();
        for _ in 0..order {
            repeated = diff(&repeated, 1).unwrap();
        }
        assert_eq!(direct.len(), y.len() - order);
        assert_eq!(direct, repeated);
    }
}

#[test]
fn test_diff_third_order_of_cubic_is_constant() {
    let y: Vec<f64> = (0..8).map(|i| (i * i * i) as f64).collect();
    let d3 = diff(&y, 3).unwrap();
    assert!(d3.iter().all(|&v| v == 6.0));
}

#[test]
fn test_diff_xy_approximates_derivative() {
    let x: Vec<f64> = (0..200).map(|i| i as f64 * 0.001).collect();
    let y: Vec<f64> = x.iter().map(|&xi| xi * xi).collect();
    let d = diff_xy(&x, &y, 1).unwrap();

    // Forward difference of x^2 is x[k] + x[k+1].
    for k in 0..d.len() {
        assert_relative_eq!(d[k], x[k] + x[k + 1], epsilon = 1e-9);
    }
}

#[test]
fn test_diff_does_not_modify_inputs() {
    let x = vec![0.0, 1.0, 3.0, 4.0];
    let y = vec![1.0, 2.0, 0.0, 5.0];
    let (x0, y0) = (x.clone(), y.clone());

    let _ = diff_xy(&x, &y, 2).unwrap();
    let _ = diff(&y, 3).unwrap();

    assert_eq!(x, x0);
    assert_eq!(y, y0);
}

#[test]
fn test_diff_errors() {
    assert_eq!(diff(&[1.0, 2.0], 0), Err(SeqError::InvalidOrder(0)));
    assert_eq!(
        diff(&[1.0], 1),
        Err(SeqError::InsufficientLength { got: 1, min: 2 })
    );
    assert_eq!(
        diff(&[1.0, 2.0, 3.0], 3),
        Err(SeqError::InsufficientLength { got: 3, min: 4 })
    );
    assert_eq!(
        diff_xy(&[0.0, 1.0], &[1.0, 2.0, 3.0], 1),
        Err(SeqError::LengthMismatch { x_len: 2, y_len: 3 })
    );
}

#[test]
fn test_diff_xy_repeated_coordinate_is_degenerate() {
    let x = [0.0, 1.0, 1.0, 2.0];
    let y = [0.0, 1.0, 2.0, 3.0];

    assert_eq!(
        diff_xy(&x, &y, 1),
        Err(SeqError::DegenerateSpacing { index: 1 })
    );
}

// ============================================================================
// Integration
// ============================================================================

#[test]
fn test_integral_preserves_length() {
    let y = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(integral(&y, 1).unwrap().len(), 4);
    assert_eq!(integral(&y, 3).unwrap().len(), 4);
}

#[test]
fn test_integral_of_diff_translation_property() {
    let values = [3.0, 7.5, 2.25, -4.0, 0.0, 1.5, 9.0];
    let back = integral(&diff(&values, 1).unwrap(), 1).unwrap();

    assert_eq!(back.len(), values.len() - 1);
    let offset = back[0] - values[0];
    for k in 0..back.len() {
        assert_relative_eq!(back[k] - values[k], offset, epsilon = 1e-12);
    }
    assert_ne!(back, values[..values.len() - 1].to_vec());
}

#[test]
fn test_integral_xy_translation_property_uniform_grid() {
    let x: Vec<f64> = (0..20).map(|i| 1.0 + i as f64 * 0.25).collect();
    let y: Vec<f64> = x.iter().map(|&xi| xi.ln()).collect();

    let d = diff_xy(&x, &y, 1).unwrap();
    let back = integral_xy(&x[..d.len()], &d, 1).unwrap();

    let offset = back[0] - y[0];
    for k in 0..back.len() {
        assert_relative_eq!(back[k] - y[k], offset, epsilon = 1e-12);
    }
}

#[test]
fn test_integral_errors() {
    assert_eq!(integral(&[1.0, 2.0], 0), Err(SeqError::InvalidOrder(0)));
    assert_eq!(
        integral(&[1.0], 1),
        Err(SeqError::InsufficientLength { got: 1, min: 2 })
    );
    assert_eq!(
        integral_xy(&[0.0, 1.0, 2.0], &[1.0, 2.0], 1),
        Err(SeqError::LengthMismatch { x_len: 3, y_len: 2 })
    );
}

// ============================================================================
// Extrema
// ============================================================================

#[test]
fn test_extrema_single_peak() {
    let found = extrema(&[1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0], 0.1).unwrap();
    assert_eq!(found.maxima, vec![3]);
    assert!(found.minima.is_empty());
}

#[test]
fn test_extrema_two_dips_endpoints_not_reported() {
    let y = [5.0, 1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0, 5.0];
    let found = extrema(&y, 0.1).unwrap();

    assert_eq!(found.minima, vec![2, 6]);
    assert!(!found.maxima.contains(&0));
    assert!(!found.maxima.contains(&(y.len() - 1)));
}

#[test]
fn test_extrema_strictly_increasing_is_empty() {
    for n in [0, 1, 2, 3, 10, 1000] {
        let y: Vec<f64> = (0..n).map(|i| i as f64 * 0.37).collect();
        let found = extrema(&y, 0.1).unwrap();
        assert!(found.minima.is_empty());
        assert!(found.maxima.is_empty());
    }
}

#[test]
fn test_extrema_short_input_is_empty_not_error() {
    assert!(extrema::<f64>(&[], 0.1).unwrap().is_empty());
    assert!(extrema(&[42.0], 0.1).unwrap().is_empty());
    assert!(extrema_xy(&[0.0], &[42.0], 0.1).unwrap().is_empty());
}

#[test]
fn test_extrema_invalid_tolerance() {
    let inputs: [&[f64]; 3] = [&[1.0], &[1.0, 2.0], &[5.0, 1.0, 5.0, 1.0]];
    for values in inputs {
        for eps in [0.0, -0.1, -10.0] {
            assert_eq!(
                extrema(values, eps),
                Err(SeqError::InvalidTolerance(eps))
            );
        }
    }
    assert!(matches!(
        extrema_xy(&[0.0, 1.0], &[0.0, 1.0], f64::NAN),
        Err(SeqError::InvalidTolerance(_))
    ));
}

#[test]
fn test_extrema_xy_length_mismatch() {
    assert_eq!(
        extrema_xy(&[0.0, 1.0], &[0.0, 1.0, 2.0], 0.1),
        Err(SeqError::LengthMismatch { x_len: 2, y_len: 3 })
    );
}

#[test]
fn test_extrema_xy_intervals_bracket_true_extrema() {
    let (x, y) = noisy_wave(700); // x in [0, 14)
    let found = extrema_xy(&x, &y, 0.1).unwrap();

    use std::f64::consts::PI;
    let true_max = [PI / 2.0, 5.0 * PI / 2.0];
    let true_min = [3.0 * PI / 2.0, 7.0 * PI / 2.0];

    assert_eq!(found.maxima.len(), true_max.len());
    assert_eq!(found.minima.len(), true_min.len());
    for (iv, t) in found.maxima.iter().zip(true_max) {
        assert!(iv.contains(&t), "{:?} does not bracket {}", iv, t);
    }
    for (iv, t) in found.minima.iter().zip(true_min) {
        assert!(iv.contains(&t), "{:?} does not bracket {}", iv, t);
    }
}

#[test]
fn test_extrema_xy_intervals_disjoint_and_ordered() {
    let (x, y) = noisy_wave(2000);
    let found = extrema_xy(&x, &y, 0.05).unwrap();
    assert!(found.len() >= 10);

    let events = found.events();
    for w in events.windows(2) {
        let (a, b) = (w[0].1, w[1].1);
        assert!(a.start < a.end);
        assert!(a.start < b.start, "not ordered: {:?} then {:?}", a, b);
        assert!(a.end <= b.start, "overlap: {:?} and {:?}", a, b);
    }
}

#[test]
fn test_extrema_xy_opaque_coordinates() {
    let labels = ["a", "b", "c", "d", "e", "f", "g"];
    let y = [1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0];
    let found = extrema_xy(&labels, &y, 0.1).unwrap();

    assert_eq!(found.maxima, vec![Interval::new("c", "e")]);
}

#[test]
fn test_extrema_intervals_enclose_plateau() {
    let x: Vec<f64> = (0..7).map(|i| i as f64).collect();
    let found = extrema_xy(&x, &[1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0], 0.1).unwrap();
    assert_eq!(found.maxima, vec![Interval::new(2.0, 4.0)]);

    let flat_top = extrema(&[1.0, 5.0, 5.0, 5.0, 5.0, 1.0], 0.1).unwrap();
    assert_eq!(flat_top.maxima, vec![2]);
}

#[test]
fn test_extrema_xy_adjacent_intervals_do_not_overlap() {
    let x: Vec<f64> = (0..9).map(|i| i as f64).collect();
    let y = [5.0, 1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0, 5.0];
    let found = extrema_xy(&x, &y, 0.1).unwrap();

    assert_eq!(found.maxima, vec![Interval::new(4.0, 5.0)]);
    assert_eq!(
        found.minima,
        vec![Interval::new(0.0, 4.0), Interval::new(5.0, 8.0)]
    );
}

#[test]
fn test_extrema_f32() {
    let y = [0.0f32, 3.0, 0.0, 0.0];
    let found = extrema(&y, 0.5f32).unwrap();
    assert_eq!(found.maxima, vec![1]);
}

// ============================================================================
// Builders
// ============================================================================

#[test]
fn test_builder_defaults() {
    assert_eq!(Diff::new().build().unwrap().order(), DEFAULT_ORDER);
    assert_eq!(Integral::new().build().unwrap().order(), DEFAULT_ORDER);

    let finder = Extrema::<f64>::new().build().unwrap();
    assert_relative_eq!(finder.epsilon(), DEFAULT_EPSILON);
}

#[test]
fn test_builder_default_epsilon_matches_free_function() {
    let y = [0.0, 0.05, 0.0, 0.5, 0.0];
    let finder = Extrema::new().build().unwrap();

    assert_eq!(finder.locate(&y), extrema(&y, DEFAULT_EPSILON).unwrap());
}

#[test]
fn test_builder_models_are_reusable() {
    let second = Diff::new().order(2).build().unwrap();
    assert_eq!(second.apply(&[0.0, 1.0, 4.0]).unwrap(), vec![2.0]);
    assert_eq!(second.apply(&[1.0, 1.0, 1.0, 1.0]).unwrap(), vec![0.0, 0.0]);

    let x = [0.0, 2.0, 4.0];
    assert_eq!(second.apply_xy(&x, &[0.0, 4.0, 16.0]).unwrap(), vec![2.0]);

    let acc = Integral::new().order(2).build().unwrap();
    assert_eq!(acc.apply(&[1.0, 1.0]).unwrap(), vec![3.0, 1.0]);
    assert_eq!(acc.apply_xy(&[0.0, 1.0], &[1.0, 1.0]).unwrap(), vec![3.0, 1.0]);
}

#[test]
fn test_builder_invalid_parameters() {
    assert_eq!(
        Diff::new().order(0).build(),
        Err(SeqError::InvalidOrder(0))
    );
    assert_eq!(
        Integral::new().order(0).build(),
        Err(SeqError::InvalidOrder(0))
    );
    assert_eq!(
        Extrema::new().epsilon(-1.0).build(),
        Err(SeqError::InvalidTolerance(-1.0))
    );
}

#[test]
fn test_builder_duplicate_parameters() {
    assert_eq!(
        Diff::new().order(1).order(2).build(),
        Err(SeqError::DuplicateParameter { parameter: "order" })
    );
    assert_eq!(
        Integral::new().order(2).order(2).build(),
        Err(SeqError::DuplicateParameter { parameter: "order" })
    );
    assert_eq!(
        Extrema::new().epsilon(0.1).epsilon(0.2).build(),
        Err(SeqError::DuplicateParameter {
            parameter: "epsilon"
        })
    );
}

#[test]
fn test_locate_series_through_builder() {
    let series: Series<i64, f64> = vec![(-3, 0.0), (-1, 2.0), (4, 0.0)].into_iter().collect();
    let finder = Extrema::new().epsilon(0.5).build().unwrap();

    let points = finder.locate_series(&series);
    assert_eq!(points.maxima, vec![-1]);
}
