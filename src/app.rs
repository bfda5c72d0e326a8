use std::io::Write;

use crate::config::Config;
use crate::greet::greet;

pub const BANNER: &str = "🚀 Your UV project is running!";

pub const HINTS: [&str; 3] = [
    "✨ Edit src/main.rs to build your application",
    "📝 Add your dependencies to Cargo.toml",
    "🧪 Run tests with: cargo test",
];

/// Lines the entry point prints, in order.
pub fn banner_lines(config: &Config) -> Vec<String> {
    let mut lines = vec![
        BANNER.to_string(),
        greet(config.greeting.name.as_deref()),
    ];

    if config.ui.show_hints {
        lines.push(String::new());
        lines.extend(HINTS.iter().map(|hint| hint.to_string()));
    }

    lines
}

pub fn run<W: Write>(out: &mut W, config: &Config) -> std::io::Result<()> {
    for line in banner_lines(config) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
