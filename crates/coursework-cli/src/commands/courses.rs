//! Courses command - run every enrollment query over the configured catalog.

use anyhow::{Context, Result};
use coursework_config::CourseworkConfig;
use coursework_query::{DuplicateNamePolicy, NameCounts};
use coursework_types::EnrollmentCount;

use crate::style::{print_course_table, print_hint, print_section};

pub fn run(config: &CourseworkConfig, threshold: Option<u32>, keep_last: bool) -> Result<()> {
    let catalog = config.catalog.to_catalog();
    let threshold = threshold.map_or_else(|| config.pipeline.threshold(), EnrollmentCount::new);
    let policy = if keep_last {
        DuplicateNamePolicy::KeepLast
    } else {
        config.pipeline.duplicate_names
    };

    tracing::debug!(courses = catalog.len(), %threshold, ?policy, "running enrollment queries");

    let report = catalog
        .report(threshold, policy)
        .context("Failed to query the course catalog")?;

    print_section("Courses by enrollment");
    print_course_table(&report.sorted);

    print_section(&format!("Courses with more than {threshold} students"));
    if report.names_over.is_empty() {
        print_hint("none");
    }
    for name in &report.names_over {
        println!("{name}");
    }

    print_section("Their enrollment");
    for count in &report.counts_over {
        println!("{count}");
    }

    print_section("Enrollment of every course");
    for count in &report.all_counts {
        println!("{count}");
    }

    print_section(&format!("Total enrollment over {threshold}"));
    println!("{}", report.total_over);

    print_section("Any course over the threshold");
    match &report.any_over {
        Some(course) => println!("{}", course.name()),
        None => print_hint("no course matches"),
    }

    print_section("Enrollment by name");
    println!("{}", format_mapping(&report.name_counts));

    Ok(())
}

/// Renders a mapping as `{name=count, ...}` in key order.
pub fn format_mapping(mapping: &NameCounts) -> String {
    let entries: Vec<String> = mapping
        .iter()
        .map(|(name, count)| format!("{name}={count}"))
        .collect();
    format!("{{{}}}", entries.join(", "))
}
