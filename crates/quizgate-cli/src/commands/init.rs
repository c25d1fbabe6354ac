//! The `quizgate init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizgate.toml").exists() {
        println!("quizgate.toml already exists, skipping.");
    } else {
        std::fs::write("quizgate.toml", SAMPLE_CONFIG)?;
        println!("Created quizgate.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizgate.toml to point at your generation service");
    println!("  2. Run: quizgate list");
    println!("  3. Run: quizgate status --generation <id>");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizgate configuration

# Base URL of the quiz generation service.
api_url = "http://localhost:8000/api"

# Per-request timeout in seconds.
timeout_secs = 30
"#;
