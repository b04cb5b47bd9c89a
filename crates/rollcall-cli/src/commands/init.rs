//! The `rollcall init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("roster.toml").exists() {
        println!("roster.toml already exists, skipping.");
    } else {
        std::fs::write("roster.toml", EXAMPLE_ROSTER)?;
        println!("Created roster.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit roster.toml with your students");
    println!("  2. Run: rollcall run --roster roster.toml");

    Ok(())
}

const EXAMPLE_ROSTER: &str = r#"# rollcall roster
# One [[students]] entry per student. IDs are assigned by you and must be
# unique; marks are keyed by them in the records file.

[[students]]
id = 20511
name = "John Doe"

[[students]]
id = 27649
name = "Jane Smith"

[[students]]
id = 78412
name = "Alice Johnson"

[[students]]
id = 69142
name = "Monica White"

[[students]]
id = 14023
name = "Jhon Welton"
"#;
