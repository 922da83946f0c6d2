//! Titles command - ordering text by a derived key.

use std::thread::{self, JoinHandle};

use anyhow::{Result, anyhow};
use coursework_query::titles::{
    SAMPLE_TITLES, compare_by_length, sort_by_length, sort_with, title_length,
};

use crate::style::print_section;

pub fn run() -> Result<()> {
    let mut titles: Vec<String> = SAMPLE_TITLES.iter().map(ToString::to_string).collect();

    print_section("Titles");
    titles.iter().for_each(|t| println!("{t}"));

    print_section("Shortest first (key closure)");
    sort_by_length(&mut titles);
    print_with_lengths(&titles);

    print_section("Longest first (comparator closure)");
    sort_with(&mut titles, |a, b| compare_by_length(b, a));
    print_with_lengths(&titles);

    print_section("Shortest first (named comparator)");
    sort_with(&mut titles, compare_by_length);
    print_with_lengths(&titles);

    print_section("Alphabetical");
    sort_with(&mut titles, |a: &str, b: &str| a.cmp(b));
    titles.iter().for_each(|t| println!("{t}"));

    print_section("On another thread");
    spawn_announcement("Hello from a spawned thread")
        .join()
        .map_err(|_| anyhow!("announcement thread panicked"))?;

    Ok(())
}

fn print_with_lengths(titles: &[String]) {
    for title in titles {
        println!("{title} ({})", title_length(title));
    }
}

/// Spawns one thread that prints `message`.
///
/// Nothing is shared with the caller; the handle is only useful to wait
/// for the output before the process exits.
pub fn spawn_announcement(message: impl Into<String>) -> JoinHandle<()> {
    let message = message.into();
    thread::spawn(move || println!("{message}"))
}
