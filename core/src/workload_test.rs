use crate::error::BenchError;
use crate::workload::Workload;

#[test]
fn subject_length_is_base_length_times_repeat_count() {
    let base = "'M' (1931). ";
    for repeat in [1usize, 2, 7, 1_000] {
        let workload = Workload::build(base, repeat).expect("valid workload");
        assert_eq!(workload.len(), base.len() * repeat);
        assert_eq!(workload.base_len(), base.len());
        assert_eq!(workload.repeat_count(), repeat);
        assert!(!workload.is_empty());
    }
}

#[test]
fn subject_is_exact_concatenation_with_no_separator() {
    let workload = Workload::build("ab", 3).expect("valid workload");
    assert_eq!(workload.as_str(), "ababab");
}

#[test]
fn identical_inputs_build_byte_identical_subjects() {
    let first = Workload::build("'Citizen Kane' (1941) ", 50).expect("valid workload");
    let second = Workload::build("'Citizen Kane' (1941) ", 50).expect("valid workload");
    assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
}

#[test]
fn zero_repeat_count_is_rejected() {
    let err = Workload::build("abc", 0).unwrap_err();
    assert!(matches!(err, BenchError::InvalidArgument(_)), "got {err:?}");
}

#[test]
fn empty_base_is_rejected_for_any_repeat_count() {
    for repeat in [1usize, 10, 10_000] {
        let err = Workload::build("", repeat).unwrap_err();
        assert!(matches!(err, BenchError::InvalidArgument(_)), "got {err:?}");
    }
}
