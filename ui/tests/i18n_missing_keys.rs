use std::collections::{BTreeMap, BTreeSet, HashSet};

// Locale bundles embedded at compile time; register new locales in LOCALES.
const EN_US: &str = include_str!("../i18n/en-US/reactive-resume-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/reactive-resume-ui.ftl");
const FR_FR: &str = include_str!("../i18n/fr-FR/reactive-resume-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("es-ES", ES_ES), ("fr-FR", FR_FR)];

/// `(key, value)` for every single-line message definition.
fn messages(src: &str) -> Vec<(&str, &str)> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty() && !key.contains(char::is_whitespace))
        .collect()
}

fn keys(src: &str) -> BTreeSet<&str> {
    messages(src).into_iter().map(|(key, _)| key).collect()
}

/// Sorted `$variables` referenced by each message.
fn variables_by_key(src: &str) -> BTreeMap<&str, Vec<String>> {
    messages(src)
        .into_iter()
        .map(|(key, value)| {
            let mut vars: Vec<String> = value
                .split('$')
                .skip(1)
                .map(|rest| {
                    rest.chars()
                        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                        .collect()
                })
                .collect();
            vars.sort();
            (key, vars)
        })
        .collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<_> = messages(src)
        .into_iter()
        .filter(|(key, _)| !seen.insert(*key))
        .map(|(key, _)| key)
        .collect();
    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}: {dups:?}"
    );
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = keys(EN_US);
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);
        let present = keys(src);
        let missing: Vec<_> = fallback.difference(&present).copied().collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {}", missing.join(", ")));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n{}\nCopy the missing keys from en-US, then translate.",
        failures.join("\n")
    );
}

#[test]
fn no_locale_defines_keys_unknown_to_fallback() {
    let fallback = keys(EN_US);
    for (locale, src) in LOCALES {
        let extra: Vec<_> = keys(src).difference(&fallback).copied().collect();
        assert!(extra.is_empty(), "{locale} defines stale keys: {extra:?}");
    }
}

#[test]
fn placeable_variables_match_fallback() {
    let fallback = variables_by_key(EN_US);
    assert_eq!(fallback.get("footer-credit"), Some(&vec!["author".to_string()]));
    assert_eq!(
        fallback.get("landing-testimonials-contact"),
        Some(&vec!["email".to_string(), "website".to_string()])
    );

    for (locale, src) in LOCALES {
        let vars = variables_by_key(src);
        for (key, expected) in &fallback {
            assert_eq!(
                vars.get(key),
                Some(expected),
                "{locale}: `{key}` must use the same variables as en-US"
            );
        }
    }
}
