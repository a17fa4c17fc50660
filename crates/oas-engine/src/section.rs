//! Format-preserving section insertion and replacement.
//!
//! Two strategies behind one signature. The structural path parses the
//! document, swaps the section's plain value in, and serializes back in
//! the detected notation: lossy for comments, exact for sibling data. The
//! textual fallback runs only when the document does not parse, so a user
//! is never blocked from inserting a section into broken text; it splices
//! whole lines around the indentation structure instead. Callers never
//! learn which strategy ran.

use crate::templates::Section;
use oas_document::{Yaml, detect, parse, to_text};
use tracing::debug;

/// Insert or replace a canned top-level section, returning the new text.
///
/// Mapping semantics: replacing keeps the key's original position among
/// its siblings, inserting appends it at the end. Upserting the same
/// section twice is stable.
pub fn upsert_section(text: &str, section: Section) -> String {
    upsert_section_with(
        text,
        section.key(),
        section.template_value(),
        section.template_text(),
    )
}

/// Insert or replace an arbitrary top-level section.
///
/// `template` is the section's plain value for structural edits;
/// `template_text` is its block-notation rendering, header line included,
/// spliced in verbatim by the textual fallback.
pub fn upsert_section_with(
    text: &str,
    key: &str,
    template: &Yaml,
    template_text: &str,
) -> String {
    let notation = detect(text);

    if let Ok(doc) = parse(text, notation)
        && let Yaml::Hash(mut entries) = doc.root.value
    {
        // `replace` keeps an existing key's position among its siblings;
        // `insert` would move it to the back.
        entries.replace(Yaml::String(key.to_string()), template.clone());
        if let Ok(out) = to_text(&Yaml::Hash(entries), notation) {
            return out;
        }
    }

    debug!("structural upsert of '{key}' failed, splicing lines instead");
    textual_upsert(text, key, template_text)
}

/// Line-based fallback for text the parser rejects.
fn textual_upsert(text: &str, key: &str, template_text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    let template_lines: Vec<&str> = template_text.split('\n').collect();
    let header = format!("{key}:");

    if let Some(start) = find_header(&lines, &header) {
        // Replace the header line plus its indented block.
        let end = block_extent(&lines, start);
        lines.splice(start..end, template_lines);
        return lines.join("\n");
    }

    let Some(at) = insertion_point(&lines, key) else {
        // Nothing to anchor on: the template becomes the document head.
        return format!("{template_text}\n{text}");
    };
    lines.splice(at..at, template_lines);
    lines.join("\n")
}

/// Index of the line whose trimmed content starts the named section.
fn find_header(lines: &[&str], header: &str) -> Option<usize> {
    lines
        .iter()
        .position(|line| line.trim_start().starts_with(header))
}

/// One past the last line of the section starting at `start`: the header
/// plus every immediately following indented line.
fn block_extent(lines: &[&str], start: usize) -> usize {
    let mut end = start + 1;
    while end < lines.len() && (lines[end].starts_with(' ') || lines[end].starts_with('\t')) {
        end += 1;
    }
    end
}

/// Where to insert a section that is not present yet, or `None` to prepend.
fn insertion_point(lines: &[&str], key: &str) -> Option<usize> {
    let after_openapi = find_header(lines, "openapi:").map(|i| i + 1);

    match key {
        // `info` belongs directly under the version header.
        "info" => after_openapi,
        // `paths` belongs after the whole `info` block when there is one.
        "paths" => find_header(lines, "info:")
            .map(|i| block_extent(lines, i))
            .or(after_openapi),
        _ => after_openapi,
    }
}
