// tests/grid_test.rs
use bs_grid::analytics::bs_analytic::{bs_price, OptionKind};
use bs_grid::grid::grid_engine::{simulate_grid, GridSpec};
use bs_grid::grid::table::COLUMN_NAMES;

#[test]
fn test_single_cell_grid_matches_scalar_pricer() {
    let spec = GridSpec {
        s_values: vec![105.0],
        k_values: vec![95.0],
        t_values: vec![0.5],
        sigma_values: vec![0.25],
        r_values: vec![0.02],
        kind: OptionKind::Call,
    };

    let table = simulate_grid(&spec);
    assert_eq!(table.len(), 1);

    let row = table.row(0).expect("single row");
    assert_eq!(
        row.price,
        bs_price(105.0, 95.0, 0.5, 0.25, 0.02, OptionKind::Call)
    );
    assert_eq!(row.s, 105.0);
    assert_eq!(row.k, 95.0);
    assert_eq!(row.t, 0.5);
    assert_eq!(row.sigma, 0.25);
    assert_eq!(row.r, 0.02);
    assert_eq!(row.call_option, 1);
}

#[test]
fn test_empty_axis_yields_empty_table() {
    // The Cartesian product with any empty axis is empty, independently per axis
    for axis in 0..5 {
        let mut spec = GridSpec::default();
        match axis {
            0 => spec.s_values.clear(),
            1 => spec.k_values.clear(),
            2 => spec.t_values.clear(),
            3 => spec.sigma_values.clear(),
            _ => spec.r_values.clear(),
        }

        let table = simulate_grid(&spec);
        assert_eq!(spec.num_points(), 0);
        assert!(
            table.is_empty(),
            "Empty axis {} should yield zero rows, got {}",
            axis,
            table.len()
        );
    }
}

#[test]
fn test_two_spot_sweep_order() {
    let spec = GridSpec {
        s_values: vec![100.0, 110.0],
        ..Default::default()
    };

    let table = simulate_grid(&spec);
    assert_eq!(table.len(), 2);
    assert_eq!(table.spots(), &[100.0, 110.0]);

    for row in table.rows() {
        assert_eq!(row.k, 100.0);
        assert_eq!(row.t, 1.0);
        assert_eq!(row.sigma, 0.2);
        assert_eq!(row.r, 0.05);
        assert_eq!(row.call_option, 1);
    }
}

#[test]
fn test_rows_follow_nested_loop_order() {
    let spec = GridSpec {
        s_values: vec![95.0, 105.0],
        k_values: vec![100.0],
        t_values: vec![0.5, 1.0],
        sigma_values: vec![0.2],
        r_values: vec![0.01, 0.05],
        kind: OptionKind::Call,
    };

    let table = simulate_grid(&spec);

    let mut i = 0;
    for &s in &spec.s_values {
        for &k in &spec.k_values {
            for &t in &spec.t_values {
                for &sigma in &spec.sigma_values {
                    for &r in &spec.r_values {
                        let row = table.row(i).expect("row within bounds");
                        assert_eq!(
                            (row.s, row.k, row.t, row.sigma, row.r),
                            (s, k, t, sigma, r),
                            "Row {} out of sweep order",
                            i
                        );
                        assert_eq!(row.price, bs_price(s, k, t, sigma, r, spec.kind));
                        i += 1;
                    }
                }
            }
        }
    }
    assert_eq!(i, table.len());
}

#[test]
fn test_row_count_matches_axis_product() {
    let spec = GridSpec {
        s_values: vec![90.0, 100.0, 110.0],
        k_values: vec![95.0, 105.0],
        t_values: vec![0.25, 1.0],
        sigma_values: vec![0.1, 0.2, 0.3],
        r_values: vec![0.0, 0.05],
        kind: OptionKind::Put,
    };

    let table = simulate_grid(&spec);

    assert_eq!(table.len(), 3 * 2 * 2 * 3 * 2);
    assert_eq!(table.len(), spec.num_points());

    // Rate is the fastest axis, spot the slowest
    assert_eq!(table.rates()[0], 0.0);
    assert_eq!(table.rates()[1], 0.05);
    assert_eq!(table.sigmas()[0], 0.1);
    assert_eq!(table.sigmas()[2], 0.2);
    let block = 2 * 2 * 3 * 2;
    assert!(table.spots()[..block].iter().all(|&s| s == 90.0));
    assert_eq!(table.spots()[block], 100.0);

    // Whole sweep is puts
    assert!(table.call_flags().iter().all(|&flag| flag == 0));
}

#[test]
fn test_repeat_sweeps_are_identical() {
    let spec = GridSpec {
        s_values: vec![90.0, 100.0, 110.0],
        sigma_values: vec![0.15, 0.25],
        ..Default::default()
    };

    let first = simulate_grid(&spec);
    let second = simulate_grid(&spec);
    assert_eq!(first, second);
}

#[test]
fn test_degenerate_grid_values_flow_into_table() {
    // T = 0 rows carry non-finite prices; the sweep neither skips nor raises
    let spec = GridSpec {
        t_values: vec![0.0, 1.0],
        ..Default::default()
    };

    let table = simulate_grid(&spec);
    assert_eq!(table.len(), 2);
    assert!(!table.prices()[0].is_finite());
    assert!(table.prices()[1].is_finite());
}

#[test]
fn test_dense_export_shape_and_values() {
    let spec = GridSpec {
        s_values: vec![100.0, 120.0],
        ..Default::default()
    };

    let table = simulate_grid(&spec);
    let arr = table.to_array();

    assert_eq!(arr.dim(), (2, COLUMN_NAMES.len()));
    assert_eq!(arr[[0, 0]], table.prices()[0]);
    assert_eq!(arr[[1, 1]], 120.0);
    assert_eq!(arr[[0, 6]], 1.0);
}

#[test]
fn test_grid_validation() {
    let spec = GridSpec::default();
    assert!(spec.validate().is_ok());

    let bad = GridSpec {
        k_values: vec![100.0, 0.0],
        ..Default::default()
    };
    let err = bad.validate().expect_err("zero strike should be rejected");
    assert!(err.to_string().contains("k_values[1]"));

    let bad_rate = GridSpec {
        r_values: vec![f64::NAN],
        ..Default::default()
    };
    assert!(bad_rate.validate().is_err());
}
