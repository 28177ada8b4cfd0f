//! Layering guardrails for the workspace crates.
//!
//! `minilang_core` is the vocabulary leaf and carries no dependencies. `minilang_syntax` may depend on
//! `minilang_core` but never on the `minilang` facade that re-exports it.

fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let manifest = include_str!("../crates/minilang_core/Cargo.toml");
    let deps = dependency_names(manifest);
    assert!(deps.is_empty(), "minilang_core must stay dependency-free, found {deps:?}");
}

#[test]
fn syntax_does_not_depend_on_facade() {
    let manifest = include_str!("../crates/minilang_syntax/Cargo.toml");
    let deps = dependency_names(manifest);
    assert!(deps.iter().any(|d| d == "minilang_core"));
    assert!(
        !deps.iter().any(|d| d == "minilang"),
        "`minilang` must not appear in minilang_syntax [dependencies]"
    );
}
