//! The list of loadable examples, grouped by category directory.

use std::{collections::BTreeMap, path::Path};

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Category for examples placed directly in the examples root.
pub const GENERAL_CATEGORY: &str = "general";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleEntry {
    /// File name without extension.
    pub name: String,
    /// Reference to put in the location hash to load this example.
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleGroup {
    pub category: String,
    pub examples: Vec<ExampleEntry>,
}

/// Walk `root` and group every visible file by its top-level directory.
///
/// Paths matching one of `ignores` (relative to `root`) are skipped.
pub fn scan_examples(root: &str, ignores: &[String], verbose: bool) -> Result<Vec<ExampleGroup>> {
    let root_path = Path::new(root);
    if !root_path.is_dir() {
        bail!("Examples directory not found: {}", root_path.display());
    }

    let mut patterns = Vec::new();
    for p in ignores {
        match Pattern::new(p) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let prefix = root.trim_start_matches("./").trim_end_matches('/');
    let mut groups: BTreeMap<String, Vec<ExampleEntry>> = BTreeMap::new();

    let walker = WalkDir::new(root_path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(&e.file_name().to_string_lossy()));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root_path) else {
            continue;
        };
        let relative: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        let relative_path = relative.join("/");

        if patterns.iter().any(|p| p.matches(&relative_path)) {
            continue;
        }

        let category = if relative.len() > 1 {
            relative[0].clone()
        } else {
            GENERAL_CATEGORY.to_string()
        };
        let name = entry
            .path()
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let reference = if prefix.is_empty() || prefix == "." {
            relative_path
        } else {
            format!("{}/{}", prefix, relative_path)
        };

        groups
            .entry(category)
            .or_default()
            .push(ExampleEntry { name, reference });
    }

    Ok(groups
        .into_iter()
        .map(|(category, examples)| ExampleGroup { category, examples })
        .collect())
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
