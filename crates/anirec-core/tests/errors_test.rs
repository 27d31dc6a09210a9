use anirec_core::errors::*;

#[test]
fn not_found_carries_name() {
    let err = AnirecError::NotFound {
        name: "Totally Unknown Show".into(),
    };
    assert!(err.to_string().contains("Totally Unknown Show"));
}

#[test]
fn artifact_missing_carries_path() {
    let err = AnirecError::ArtifactMissing {
        artifact: "feature_matrix".into(),
        path: "/srv/model_assets/tfv_matrix.json".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("feature_matrix"));
    assert!(msg.contains("tfv_matrix.json"));
}

// --- Status codes ---

#[test]
fn client_faults_map_to_4xx() {
    let not_found = AnirecError::NotFound { name: "x".into() };
    let invalid = AnirecError::invalid_argument("top_n must be positive");
    assert_eq!(not_found.status_code(), 404);
    assert_eq!(invalid.status_code(), 400);
    assert!(not_found.is_client_error());
    assert!(invalid.is_client_error());
}

#[test]
fn unavailable_is_a_transient_server_fault() {
    let err = AnirecError::ServiceUnavailable {
        reason: "artifacts not loaded".into(),
    };
    assert_eq!(err.status_code(), 503);
    assert!(!err.is_client_error());
    assert_eq!(err.error_code(), error_code::SERVICE_UNAVAILABLE);
}

#[test]
fn load_errors_are_server_faults() {
    let corrupt = AnirecError::corrupt("item_metadata", "row count mismatch");
    assert_eq!(corrupt.status_code(), 500);
    assert_eq!(corrupt.error_code(), error_code::ARTIFACT_CORRUPT);
}

#[test]
fn boundary_string_prefixes_code() {
    let err = AnirecError::NotFound { name: "Naruto".into() };
    assert_eq!(
        err.boundary_string(),
        "[NOT_FOUND] anime 'Naruto' not found in catalog"
    );
}

// --- From impls ---

#[test]
fn config_error_converts_to_anirec_error() {
    let cfg = ConfigError::ValidationFailed {
        field: "engine.gamma".into(),
        message: "must be positive".into(),
    };
    let err: AnirecError = cfg.into();
    assert!(matches!(err, AnirecError::Config(_)));
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
    assert!(err.to_string().contains("engine.gamma"));
}
