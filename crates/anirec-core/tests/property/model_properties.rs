use anirec_core::models::{FeatureMatrix, Rating};
use proptest::prelude::*;

fn arb_dense(max_rows: usize, max_cols: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1..max_rows, 1..max_cols).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(
            prop::collection::vec(prop_oneof![Just(0.0), -4.0f64..4.0], cols),
            rows,
        )
    })
}

// ── CSR canonicalization ───────────────────────────────────────────────

proptest! {
    #[test]
    fn dense_rows_survive_csr(dense in arb_dense(12, 16)) {
        let m = FeatureMatrix::from_dense(&dense).unwrap();
        prop_assert_eq!(m.n_rows(), dense.len());
        for (i, row) in dense.iter().enumerate() {
            prop_assert_eq!(&m.densify_row(i).unwrap(), row);
        }
    }

    #[test]
    fn entry_order_within_rows_is_irrelevant(dense in arb_dense(8, 12), seed in any::<u64>()) {
        let canonical = FeatureMatrix::from_dense(&dense).unwrap();

        // Rebuild the same CSR with each row's entries reversed or rotated.
        let mut indptr = vec![0];
        let mut indices = Vec::new();
        let mut data = Vec::new();
        for (i, row) in dense.iter().enumerate() {
            let mut entries: Vec<(usize, f64)> = row
                .iter()
                .enumerate()
                .filter(|(_, v)| **v != 0.0)
                .map(|(c, v)| (c, *v))
                .collect();
            if (seed >> (i % 64)) & 1 == 1 {
                entries.reverse();
            } else if !entries.is_empty() {
                let k = (seed as usize) % entries.len();
                entries.rotate_left(k);
            }
            for (c, v) in entries {
                indices.push(c);
                data.push(v);
            }
            indptr.push(indices.len());
        }
        let shuffled =
            FeatureMatrix::from_csr(dense.len(), dense[0].len(), indptr, indices, data).unwrap();
        prop_assert_eq!(shuffled, canonical);
    }

    #[test]
    fn sparse_dot_matches_dense_dot(dense in arb_dense(6, 10)) {
        let m = FeatureMatrix::from_dense(&dense).unwrap();
        for i in 0..m.n_rows() {
            for j in 0..m.n_rows() {
                let expected: f64 = dense[i].iter().zip(&dense[j]).map(|(a, b)| a * b).sum();
                let a = m.row(i).unwrap();
                let b = m.row(j).unwrap();
                prop_assert!((a.dot(&b) - expected).abs() < 1e-9);
                prop_assert!((a.dot_dense(&dense[j]) - expected).abs() < 1e-9);
            }
        }
    }
}

// ── Ratings ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_finite_rating_has_a_category(v in -10.0f64..10.0) {
        let r = Rating::from_option(Some(v));
        prop_assert!(r.is_available());
        prop_assert!(r.category().is_some());
        prop_assert_eq!(r.value(), Some(v));
    }

    #[test]
    fn rating_json_is_number_or_sentinel(v in prop::option::of(0.0f64..10.0)) {
        let json = serde_json::to_value(Rating::from_option(v)).unwrap();
        match v {
            Some(x) => prop_assert_eq!(json.as_f64(), Some(x)),
            None => prop_assert_eq!(json, serde_json::json!("N/A")),
        }
    }
}
