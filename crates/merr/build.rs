//! Build script for merr
//!
//! Handles configuration merging:
//! 1. Start with library defaults
//! 2. If MERR_CONFIG_RS env var is set, parse user's config file
//! 3. Merge user values over defaults (user wins)
//! 4. Generate OUT_DIR/merr_merged_config.rs
//!
//! User only needs to specify values they want to change.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration parameter definition
struct ConfigParam {
    name: &'static str,
    rust_type: &'static str,
    default_value: &'static str,
}

/// All configuration parameters with their defaults
const CONFIG_PARAMS: &[ConfigParam] = &[
    ConfigParam {
        name: "STRERROR_BUF_SIZE",
        rust_type: "usize",
        default_value: "1000",
    },
    ConfigParam {
        name: "PREFIX_PAD",
        rust_type: "usize",
        default_value: "200",
    },
    ConfigParam {
        name: "BUG_MESSAGE",
        rust_type: "&str",
        default_value: "\"software bug\"",
    },
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest_path = Path::new(&out_dir).join("merr_merged_config.rs");

    let mut config: HashMap<&str, String> = CONFIG_PARAMS
        .iter()
        .map(|p| (p.name, p.default_value.to_string()))
        .collect();

    if let Ok(user_path) = env::var("MERR_CONFIG_RS") {
        println!("cargo:rerun-if-changed={}", user_path);

        match fs::read_to_string(&user_path) {
            Ok(content) => {
                parse_and_merge(&content, &mut config);
                println!("cargo:warning=Using custom merr config: {}", user_path);
            }
            Err(e) => {
                println!(
                    "cargo:warning=Failed to read MERR_CONFIG_RS ({}): {}",
                    user_path, e
                );
            }
        }
    }

    println!("cargo:rerun-if-env-changed=MERR_CONFIG_RS");
    println!("cargo:rerun-if-changed=build.rs");

    let output = generate_config(&config);
    fs::write(&dest_path, output).expect("Failed to write merged config");
}

/// Parse user's config file and merge values into config map
fn parse_and_merge(content: &str, config: &mut HashMap<&str, String>) {
    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        if !line.starts_with("pub const ") {
            continue;
        }

        if let Some((name, value)) = parse_const_line(line) {
            match CONFIG_PARAMS.iter().find(|p| p.name == name) {
                Some(param) => {
                    config.insert(param.name, value);
                }
                None => println!("cargo:warning=Unknown merr config parameter: {}", name),
            }
        }
    }
}

/// Parse a single `pub const NAME: TYPE = VALUE;` line into (name, value)
fn parse_const_line(line: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix("pub const ")?.trim();

    let colon_pos = rest.find(':')?;
    let name = rest[..colon_pos].trim().to_string();

    let eq_pos = rest.find('=')?;
    let semi_pos = rest.rfind(';').unwrap_or(rest.len());

    let value = rest[eq_pos + 1..semi_pos].trim().to_string();

    Some((name, value))
}

/// Generate the merged config Rust file
fn generate_config(config: &HashMap<&str, String>) -> String {
    let mut output = String::new();

    output.push_str("// Auto-generated by build.rs - do not edit\n");
    output.push_str("// Configuration merged from library defaults");

    if env::var("MERR_CONFIG_RS").is_ok() {
        output.push_str(" and user's merr_config.rs");
    }
    output.push_str("\n\n");

    for param in CONFIG_PARAMS {
        let value = config
            .get(param.name)
            .map(String::as_str)
            .unwrap_or(param.default_value);
        output.push_str(&format!(
            "pub const {}: {} = {};\n",
            param.name, param.rust_type, value
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_const_line() {
        let result = parse_const_line("pub const PREFIX_PAD: usize = 256;");
        assert_eq!(result, Some(("PREFIX_PAD".into(), "256".into())));

        let result = parse_const_line("pub const BUG_MESSAGE: &str = \"internal bug\";");
        assert_eq!(
            result,
            Some(("BUG_MESSAGE".into(), "\"internal bug\"".into()))
        );
    }

    #[test]
    fn test_parse_and_merge() {
        let mut config: HashMap<&str, String> = HashMap::new();
        config.insert("STRERROR_BUF_SIZE", "1000".into());

        let user_config = r#"
            // Custom config
            pub const STRERROR_BUF_SIZE: usize = 4096;
        "#;

        parse_and_merge(user_config, &mut config);

        assert_eq!(config.get("STRERROR_BUF_SIZE"), Some(&"4096".to_string()));
    }
}
