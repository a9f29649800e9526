use std::env;
use std::fs;
use std::path::Path;

/// Forwards `KEY=VALUE` pairs from a local `.env` into `option_env!` lookups
/// made by `AppConfig::from_env`. Variables already set in the environment win.
fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for (key, value) in contents.lines().filter_map(parse_line) {
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, using built-in defaults for BACKEND_URL and friends.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BACKEND_URL");
    println!("cargo:rerun-if-env-changed=ENVIRONMENT");
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let value = value.trim().trim_matches('"');
    Some((key.trim(), value))
}
