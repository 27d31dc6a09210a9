use anirec_core::config::ArtifactConfig;
use anirec_core::errors::AnirecError;
use anirec_core::models::ItemMetadata;
use anirec_store::{ArtifactStore, Artifacts};
use proptest::prelude::*;
use test_fixtures::{synthetic_catalog, write_artifact_dir};

const ARTIFACT_NAMES: [&str; 4] = ["vectorizer", "feature_matrix", "name_index", "item_metadata"];

// ── Row counts must agree ────────────────────────────────────────────────

proptest! {
    #[test]
    fn metadata_length_must_match_matrix_rows(rows in 1usize..40, keep in 0usize..40) {
        let c = synthetic_catalog(rows, 16, 3);
        let metadata: ItemMetadata = c.metadata.iter().take(keep).cloned().collect();
        let result = Artifacts::new(c.vectorizer, c.matrix, c.names, metadata);
        if keep >= rows {
            prop_assert!(result.is_ok());
        } else {
            let is_corrupt = matches!(result, Err(AnirecError::ArtifactCorrupt { .. }));
            prop_assert!(is_corrupt);
        }
    }
}

// ── Any missing file leaves the store unloaded ──────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn any_missing_artifact_leaves_store_unloaded(mask in 1u8..16) {
        let dir = tempfile::tempdir().unwrap();
        write_artifact_dir(dir.path(), &synthetic_catalog(8, 8, 2)).unwrap();
        let config = ArtifactConfig::in_dir(dir.path());
        let paths = [
            config.vectorizer_path(),
            config.matrix_path(),
            config.name_index_path(),
            config.metadata_path(),
        ];
        for (bit, path) in paths.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                std::fs::remove_file(path).unwrap();
            }
        }

        let mut store = ArtifactStore::new();
        let err = store.load(&config).unwrap_err();
        prop_assert!(!store.is_ready());

        let first_missing = ARTIFACT_NAMES[mask.trailing_zeros() as usize];
        match err {
            AnirecError::ArtifactMissing { artifact, .. } => prop_assert_eq!(artifact, first_missing),
            other => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
