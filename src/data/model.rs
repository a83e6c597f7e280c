// ---------------------------------------------------------------------------
// Curve – one decoded measurement row
// ---------------------------------------------------------------------------

/// A single sweep curve (one row of the measurement file).
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Legend label derived from the row's metadata columns.
    pub label: String,
    /// Ordered (x, y) points, all components finite.
    pub points: Vec<[f64; 2]>,
}

// ---------------------------------------------------------------------------
// Pair partitioning
// ---------------------------------------------------------------------------

/// Partition a run of interleaved values into (x, y) pairs.
///
/// Values are consumed two at a time, left to right; an odd trailing value
/// is dropped. Pairs with a non-finite component are filtered out, keeping
/// the relative order of the survivors.
pub fn finite_pairs(fields: &[f64]) -> Vec<(f64, f64)> {
    fields
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

// ---------------------------------------------------------------------------
// Row decoders
// ---------------------------------------------------------------------------

/// Decode a fall-transition row: `[slope, cap_1, val_1, cap_2, val_2, …]`.
///
/// One leading metadata column (the input slope, also the legend label),
/// then (load capacitance, fall time) pairs plotted as-is. Returns `None`
/// when no valid pair survives, so the row renders nothing.
pub fn decode_fall_transition(row: &[f64]) -> Option<Curve> {
    let (meta, rest) = row.split_first()?;
    let points: Vec<[f64; 2]> = finite_pairs(rest)
        .into_iter()
        .map(|(x, y)| [x, y])
        .collect();
    if points.is_empty() {
        return None;
    }
    Some(Curve {
        label: format!("{meta}"),
        points,
    })
}

/// Decode a setup-exploration row:
/// `[slope, capacitance, clk_1, prop_1, clk_2, prop_2, …]`.
///
/// Two leading metadata columns, then (clock delay in ps, propagation delay
/// in ns) pairs. The plotted y is the total delay `prop + clk / 1000.0`
/// (the clock delay converted ps → ns).
pub fn decode_setup_explore(row: &[f64]) -> Option<Curve> {
    if row.len() < 2 {
        return None;
    }
    let (slope_ns, cap_ff) = (row[0], row[1]);
    let points: Vec<[f64; 2]> = finite_pairs(&row[2..])
        .into_iter()
        .map(|(clk_ps, prop_ns)| [clk_ps, prop_ns + clk_ps / 1000.0])
        .collect();
    if points.is_empty() {
        return None;
    }
    Some(Curve {
        label: format!("islope={slope_ns:.3} ns, C={cap_ff:.3} fF"),
        points,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fall_transition_single_pair() {
        let curve = decode_fall_transition(&[0.5, 1.0, 0.15]).unwrap();
        assert_eq!(curve.label, "0.5");
        assert_eq!(curve.points, vec![[1.0, 0.15]]);
    }

    #[test]
    fn fall_transition_drops_odd_tail() {
        let curve = decode_fall_transition(&[0.5, 1.0, 0.15, 2.0]).unwrap();
        assert_eq!(curve.points, vec![[1.0, 0.15]]);
    }

    #[test]
    fn fall_transition_keeps_pair_order() {
        let curve = decode_fall_transition(&[0.1, 1.0, 0.2, 2.0, 0.3, 3.0, 0.4]).unwrap();
        assert_eq!(curve.points, vec![[1.0, 0.2], [2.0, 0.3], [3.0, 0.4]]);
    }

    #[test]
    fn setup_explore_totals_and_label() {
        let curve = decode_setup_explore(&[1.2, 3.4, 100.0, 0.02, 200.0, 0.03]).unwrap();
        assert_eq!(curve.label, "islope=1.200 ns, C=3.400 fF");
        assert_eq!(curve.points.len(), 2);
        assert!((curve.points[0][0] - 100.0).abs() < 1e-9);
        assert!((curve.points[0][1] - 0.12).abs() < 1e-9);
        assert!((curve.points[1][0] - 200.0).abs() < 1e-9);
        assert!((curve.points[1][1] - 0.23).abs() < 1e-9);
    }

    #[test]
    fn nan_pair_yields_no_curve() {
        assert!(decode_fall_transition(&[0.5, f64::NAN, 0.15]).is_none());
        assert!(decode_setup_explore(&[1.2, 3.4, 100.0, f64::INFINITY]).is_none());
    }

    #[test]
    fn metadata_only_row_yields_no_curve() {
        assert!(decode_fall_transition(&[0.5]).is_none());
        assert!(decode_setup_explore(&[1.2, 3.4]).is_none());
    }

    #[test]
    fn nan_metadata_still_labels() {
        // Only pair components are finiteness-checked, metadata is not.
        let curve = decode_fall_transition(&[f64::NAN, 1.0, 0.15]).unwrap();
        assert_eq!(curve.label, "NaN");
    }

    proptest! {
        #[test]
        fn finite_input_gives_floor_half_pairs(fields in prop::collection::vec(-1e6f64..1e6, 0..32)) {
            let pairs = finite_pairs(&fields);
            prop_assert_eq!(pairs.len(), fields.len() / 2);
        }

        #[test]
        fn pairs_preserve_order(fields in prop::collection::vec(-1e6f64..1e6, 0..32)) {
            let pairs = finite_pairs(&fields);
            for (i, (x, y)) in pairs.iter().enumerate() {
                prop_assert_eq!(*x, fields[2 * i]);
                prop_assert_eq!(*y, fields[2 * i + 1]);
            }
        }

        #[test]
        fn total_delay_is_prop_plus_clk_over_1000(
            clk in 0.0f64..1e4,
            prop_ns in 0.0f64..10.0,
        ) {
            let curve = decode_setup_explore(&[1.0, 2.0, clk, prop_ns]).unwrap();
            prop_assert!((curve.points[0][1] - (prop_ns + clk / 1000.0)).abs() < 1e-9);
        }
    }
}
