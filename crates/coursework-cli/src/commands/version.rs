//! Version command implementation.

/// Version information for the CLI.
const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = "coursework";

pub fn run() {
    println!("{NAME} {VERSION}");
    println!();
    println!("Enrollment queries and calendar walkthroughs over a course catalog.");
    println!();
    println!("Build info:");
    println!("  Target:       {}", std::env::consts::ARCH);
    println!("  OS:           {}", std::env::consts::OS);
}
