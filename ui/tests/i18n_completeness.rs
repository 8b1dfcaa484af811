use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical FTL file name inside every locale folder.
const FTL_FILENAME: &str = "reactive-resume-ui.ftl";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Message IDs defined in a Fluent file: `<id> = ...` lines, ignoring
/// comments, section headers and terms (`-term = ...`).
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Keys passed as the literal first argument of `t!(...)` anywhere under `src`.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    const NEEDLE: &str = "t!(\"";

    let mut found = BTreeSet::new();
    let mut pending = vec![src_root.to_path_buf()];

    while let Some(path) = pending.pop() {
        if path.is_dir() {
            let entries = fs::read_dir(&path).expect("readable source dir");
            pending.extend(entries.flatten().map(|e| e.path()));
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let content = fs::read_to_string(&path).expect("readable source file");
        for (idx, _) in content.match_indices(NEEDLE) {
            let rest = &content[idx + NEEDLE.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

/// `locale -> keys` for every locale folder (`xx-YY`) under `i18n/`.
fn locale_keys(i18n_root: &Path) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for entry in fs::read_dir(i18n_root).expect("i18n dir").flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !path.is_dir() || !name.contains('-') {
            continue;
        }
        let file = path.join(FTL_FILENAME);
        let content = fs::read_to_string(&file)
            .unwrap_or_else(|err| panic!("locale {name} has no readable {FTL_FILENAME}: {err}"));
        out.insert(name.to_string(), parse_ftl_keys(&content));
    }
    out
}

#[test]
fn i18n_completeness() {
    let root = crate_root();
    let locales = locale_keys(&root.join("i18n"));

    let fallback = locales
        .get("en-US")
        .expect("fallback locale en-US must exist");
    assert!(!fallback.is_empty(), "no message keys parsed from en-US");

    let referenced = referenced_keys(&root.join("src"));

    let missing_in_fallback: Vec<_> = referenced.difference(fallback).cloned().collect();
    assert!(
        missing_in_fallback.is_empty(),
        "t!() keys missing from en-US:\n{}",
        missing_in_fallback.join("\n")
    );

    let unused: Vec<_> = fallback.difference(&referenced).cloned().collect();
    assert!(
        unused.is_empty(),
        "en-US keys not referenced by any t!() call:\n{}",
        unused.join("\n")
    );

    let mut report = String::new();
    for (locale, keys) in &locales {
        let missing: Vec<_> = fallback.difference(keys).cloned().collect();
        if !missing.is_empty() {
            report.push_str(&format!("  {locale} ({} missing)\n", missing.len()));
            for key in missing {
                report.push_str(&format!("    {key}\n"));
            }
        }
    }
    assert!(
        report.is_empty(),
        "Locales with missing translations relative to en-US:\n{report}"
    );
}

#[test]
fn source_scanner_sees_landing_keys() {
    let keys = referenced_keys(&crate_root().join("src"));
    for key in ["common-title", "landing-actions-login", "landing-actions-register"] {
        assert!(keys.contains(key), "scanner missed `{key}`");
    }
}

#[test]
fn parser_skips_comments_and_terms() {
    let keys = parse_ftl_keys("# note = no\n## Section\n-brand = X\nhello = Hi\n  spaced-key = Yo\n");
    assert_eq!(
        keys.into_iter().collect::<Vec<_>>(),
        vec!["hello".to_string(), "spaced-key".to_string()]
    );
}
