use proptest::prelude::*;
use test_case::test_case;

use super::*;

#[test]
fn seed_courses_keep_insertion_order() {
    let courses = seed_courses();
    let names: Vec<&str> = courses.iter().map(|c| c.name().as_str()).collect();
    assert_eq!(names, vec!["Python", "JavaScript", "Java 8", "C"]);
}

#[test]
fn course_display_shows_name_and_count() {
    let course = Course::new("Java 8", 113);
    assert_eq!(course.to_string(), "Java 8 (113 enrolled)");
}

#[test]
fn courses_with_equal_fields_are_equal() {
    assert_eq!(Course::new("C", 55), Course::from(("C", 55)));
    assert_ne!(Course::new("C", 55), Course::new("C", 56));
}

#[test_case(100, 101 => true; "one above")]
#[test_case(100, 100 => false; "equal is not over")]
#[test_case(100, 45 => false; "below")]
#[test_case(0, 0 => false; "zero threshold zero count")]
fn is_over_is_strict(threshold: u32, count: u32) -> bool {
    Course::new("x", count).is_over(EnrollmentCount::new(threshold))
}

#[test]
fn course_serializes_with_enrollment_key() {
    let json = serde_json::to_value(Course::new("Python", 45)).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Python", "enrollment": 45 }));
}

#[test]
fn course_deserializes_from_toml_table() {
    #[derive(Deserialize)]
    struct Catalog {
        courses: Vec<Course>,
    }

    let catalog: Catalog = toml::from_str(
        r#"
[[courses]]
name = "Rust"
enrollment = 7
"#,
    )
    .unwrap();

    assert_eq!(catalog.courses, vec![Course::new("Rust", 7)]);
}

#[test]
fn negative_enrollment_is_rejected() {
    let result: Result<Course, _> =
        serde_json::from_value(serde_json::json!({ "name": "Bad", "enrollment": -1 }));
    assert!(result.is_err());
}

proptest! {
    #[test]
    fn total_never_overflows(counts in prop::collection::vec(any::<u32>(), 0..64)) {
        let expected: u64 = counts.iter().map(|&c| u64::from(c)).sum();
        let total = EnrollmentCount::total(counts.into_iter().map(EnrollmentCount::new));
        prop_assert_eq!(total, expected);
    }
}
