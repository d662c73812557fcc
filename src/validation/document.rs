//! Structural checks on a serialized configuration document.
//!
//! A set of lightweight well-formedness heuristics run before a real parse
//! is attempted downstream. This is deliberately not a validating XML
//! parser; it exists to catch gross corruption (truncated uploads, stray
//! edits) cheaply.

use std::sync::LazyLock;

use regex::Regex;

use super::ValidationReport;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9_.:-]*)([^>]*)>").expect("tag pattern compiles")
});

/// Heuristic well-formedness check on a raw configuration document.
///
/// A blank document is the only short-circuit; otherwise every check runs
/// independently. Tag-count mismatch and a missing XML declaration are
/// warnings (the heuristics are not authoritative); a missing root-element
/// pair, `config` marker or `templates` marker are errors, since no
/// downstream parse can succeed without them.
pub fn check_document(document: &str) -> ValidationReport {
    let mut report = ValidationReport::new();

    if document.trim().is_empty() {
        report.error("configuration document is empty");
        return report;
    }

    let mut opening = 0usize;
    let mut closing = 0usize;
    let mut root: Option<&str> = None;
    let mut has_config = false;
    let mut has_templates = false;

    for captures in TAG_RE.captures_iter(document) {
        let is_closing = !captures.get(1).map_or("", |m| m.as_str()).is_empty();
        let name = captures.get(2).map_or("", |m| m.as_str());
        let rest = captures.get(3).map_or("", |m| m.as_str());
        let self_closing = rest.trim_end().ends_with('/');

        if is_closing {
            closing += 1;
        } else if !self_closing {
            opening += 1;
            if root.is_none() {
                root = captures.get(2).map(|m| m.as_str());
            }
        }

        match name {
            "config" => has_config = true,
            "templates" => has_templates = true,
            _ => {}
        }
    }

    if opening != closing {
        report.warning(format!(
            "document has {opening} opening tags but {closing} closing tags"
        ));
    }

    if !document.trim_start().starts_with("<?xml") {
        report.warning("missing XML declaration prologue");
    }

    match root {
        Some(name) if document.contains(&format!("</{name}>")) => {}
        _ => report.error("missing matching root element pair"),
    }

    if !has_config {
        report.error("missing config element");
    }
    if !has_templates {
        report.error("missing templates element");
    }

    report
}
