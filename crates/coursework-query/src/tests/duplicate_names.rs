//! Name collisions in the name-to-count mapping.

use coursework_types::{Course, CourseName, EnrollmentCount};
use test_case::test_case;

use crate::pipeline::{DuplicateNamePolicy, to_name_count_mapping};
use crate::{CourseCatalog, QueryError};

fn catalog_with_duplicates() -> Vec<Course> {
    vec![
        Course::new("Rust", 120),
        Course::new("Go", 40),
        Course::new("Rust", 180),
    ]
}

#[test]
fn reject_is_the_default_policy() {
    assert_eq!(DuplicateNamePolicy::default(), DuplicateNamePolicy::Reject);
}

#[test]
fn keep_last_overwrites_earlier_count() {
    let mapping = to_name_count_mapping(
        &catalog_with_duplicates(),
        EnrollmentCount::new(100),
        DuplicateNamePolicy::KeepLast,
    )
    .unwrap();

    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping[&CourseName::from("Rust")], EnrollmentCount::new(180));
}

#[test]
fn reject_fails_on_second_occurrence() {
    let result = to_name_count_mapping(
        &catalog_with_duplicates(),
        EnrollmentCount::new(100),
        DuplicateNamePolicy::Reject,
    );

    assert!(matches!(
        result,
        Err(QueryError::DuplicateCourseName { ref name }) if name.as_str() == "Rust"
    ));
}

#[test]
fn catalog_rejection_names_the_duplicate() {
    let catalog: CourseCatalog = [Course::new("Rust", 120), Course::new("Rust", 130)]
        .into_iter()
        .collect();

    let err = catalog
        .name_counts_over(EnrollmentCount::new(100), DuplicateNamePolicy::Reject)
        .unwrap_err();

    assert_eq!(
        err,
        QueryError::DuplicateCourseName {
            name: "Rust".into()
        }
    );
    assert!(err.to_string().contains("Rust"));
}

#[test_case(DuplicateNamePolicy::Reject; "reject")]
#[test_case(DuplicateNamePolicy::KeepLast; "keep last")]
fn duplicates_filtered_out_do_not_collide(policy: DuplicateNamePolicy) {
    // Only one "Rust" survives a threshold of 150.
    let mapping = to_name_count_mapping(
        &catalog_with_duplicates(),
        EnrollmentCount::new(150),
        policy,
    )
    .unwrap();

    assert_eq!(mapping.len(), 1);
    assert_eq!(mapping[&CourseName::from("Rust")], EnrollmentCount::new(180));
}
