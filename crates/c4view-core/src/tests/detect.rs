use crate::*;

#[test]
fn detects_each_c4_marker() {
    assert_eq!(detect_kind("C4Context\n  title System Context"), Some(C4Kind::C4Context));
    assert_eq!(detect_kind("C4Container\n  title Containers"), Some(C4Kind::C4Container));
    assert_eq!(detect_kind("C4Component\n  title Components"), Some(C4Kind::C4Component));
}

#[test]
fn rejects_other_dialects() {
    assert!(!is_c4("graph TD\n    A --> B"));
    assert!(!is_c4("sequenceDiagram\n    Alice->>Bob: Hello"));
    assert!(!is_c4(""));
}

#[test]
fn marker_is_a_substring_test_not_a_header_check() {
    assert!(is_c4("graph TD\n  A[\"mentions C4Context\"] --> B"));
    assert!(is_c4("   \n\n  C4Component"));
}

#[test]
fn marker_order_decides_reported_kind() {
    assert_eq!(
        detect_kind("C4Component\n%% not a C4Context"),
        Some(C4Kind::C4Context)
    );
}

#[test]
fn registry_reports_detector_id_or_error() {
    let reg = DetectorRegistry::c4();
    assert_eq!(reg.detect_type("C4Context").unwrap(), "c4");

    let err = reg.detect_type("pie\n  \"a\": 1").unwrap_err();
    assert!(
        err.to_string()
            .contains("No diagram type detected matching given configuration")
    );
}

#[test]
fn registry_uses_first_matching_detector() {
    fn always(_: &str) -> bool {
        true
    }
    let mut reg = DetectorRegistry::new();
    reg.add_fn("first", always);
    reg.add_fn("c4", is_c4);
    assert_eq!(reg.detect_type("C4Context").unwrap(), "first");
}
