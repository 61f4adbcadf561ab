//! Configuration and failure paths: everything that must stop a run before
//! (or instead of) producing a partial result.

mod util;

use mesh_shear::prelude::*;
use util::recs;

#[test]
fn non_square_counts_cannot_start() {
    for n in [2, 3, 5, 6, 7, 8, 10, 15] {
        let words: Vec<Record> = (0..n)
            .map(|i| Record::try_from_word(&format!("w{i}")).unwrap())
            .collect();
        assert!(
            matches!(shear_sort(&words), Err(MeshShearError::NotPerfectSquare(m)) if m == n),
            "{n} records should not start a run"
        );
    }
}

#[test]
fn zero_records_cannot_start() {
    assert!(matches!(
        shear_sort(&[]),
        Err(MeshShearError::NotPerfectSquare(0))
    ));
}

#[test]
fn worker_count_contract() {
    assert!(validate_worker_count(16, 16).is_ok());
    let err = validate_worker_count(4, 16).unwrap_err();
    assert_eq!(
        err.to_string(),
        "worker count 4 does not match record count 16"
    );
}

#[test]
fn oversized_word_is_a_config_error() {
    let long = "x".repeat(MAX_WORD_LEN + 5);
    let err = Record::try_from_word(&long).unwrap_err();
    assert!(matches!(
        err,
        MeshShearError::RecordTooLong { len: 25, max: 20, .. }
    ));
}

#[test]
fn mesh_and_sort_agree_on_validation() {
    // whatever the mesh rejects, the sorter rejects identically
    for n in [3usize, 8, 12] {
        assert!(Mesh::new(n).is_err());
        let words = recs(&vec!["w"; n]);
        assert!(shear_sort(&words).is_err());
    }
    assert!(Mesh::new(9).is_ok());
}

#[test]
fn error_messages_name_the_cause() {
    assert_eq!(
        MeshShearError::NotPerfectSquare(7).to_string(),
        "cannot build a square mesh from 7 records (not a perfect square)"
    );
    assert!(MeshShearError::Aborted.to_string().contains("aborted"));
}
