//! SVG optimization passes.
//!
//! Every pass here leaves rendering untouched: only comments, editor
//! leftovers, unreferenced namespaces, empty containers, redundant grouping,
//! insignificant whitespace and over-long color spellings are removed.

use std::collections::HashSet;

use super::ast::*;
use super::SvgOptions;

/// Elements whose character data is rendered or interpreted.
const TEXT_CONTENT_ELEMENTS: &[&str] = &["text", "tspan", "textPath", "style", "script", "title", "desc"];

/// Elements whose subtree is foreign markup (XHTML) laid out by its own rules.
const OPAQUE_ELEMENTS: &[&str] = &["foreignObject"];

/// Containers that draw nothing without children.
const CONTAINER_ELEMENTS: &[&str] = &["g", "defs", "symbol", "marker", "clipPath", "mask", "pattern"];

const EDITOR_PREFIXES: &[&str] = &["sodipodi", "inkscape"];

const COLOR_ATTRIBUTES: &[&str] = &["fill", "stroke", "stop-color", "flood-color", "lighting-color", "color"];

/// Apply all enabled optimizations to the document.
pub fn optimize(doc: &mut Document, options: &SvgOptions) {
    collapse_whitespace(&mut doc.root, false);

    if options.remove_metadata {
        remove_metadata(&mut doc.root);
    }

    if options.remove_unused_namespaces {
        remove_unused_namespaces(&mut doc.root);
    }

    if options.remove_comments {
        remove_comments(&mut doc.root);
    }

    // selectors may target the element structure itself
    let has_stylesheet = contains_element(&doc.root, "style");

    if options.remove_empty && !has_stylesheet {
        remove_empty(&mut doc.root);
    }

    if options.collapse_groups && !has_stylesheet {
        collapse_groups(&mut doc.root);
    }

    if options.minify_colors {
        minify_colors(&mut doc.root);
    }
}

fn is_opaque(elem: &Element) -> bool {
    OPAQUE_ELEMENTS.contains(&elem.name.local.as_str())
}

fn contains_element(elem: &Element, name: &str) -> bool {
    elem.child_elements()
        .any(|child| child.is(name) || contains_element(child, name))
}

/// Drop whitespace-only text between elements, except where text is content.
fn collapse_whitespace(elem: &mut Element, preserve: bool) {
    let preserve = preserve
        || elem.preserves_space()
        || is_opaque(elem)
        || TEXT_CONTENT_ELEMENTS.contains(&elem.name.local.as_str());

    if !preserve {
        elem.children.retain(|node| match node {
            Node::Text(text) => !text.trim().is_empty(),
            _ => true,
        });
    }

    for child in elem.child_elements_mut() {
        collapse_whitespace(child, preserve);
    }
}

fn is_editor_name(name: &QName) -> bool {
    name.prefix
        .as_deref()
        .map(|prefix| EDITOR_PREFIXES.contains(&prefix))
        .unwrap_or(false)
}

/// Remove `<metadata>` plus editor-private elements and attributes.
fn remove_metadata(elem: &mut Element) {
    elem.children.retain(|node| match node {
        Node::Element(e) => !e.is("metadata") && !is_editor_name(&e.name),
        _ => true,
    });

    elem.attributes.retain(|attr| !is_editor_name(&attr.name));

    for child in elem.child_elements_mut() {
        remove_metadata(child);
    }
}

/// Remove `xmlns:prefix` declarations whose prefix nothing uses.
fn remove_unused_namespaces(elem: &mut Element) {
    let mut used_prefixes = HashSet::new();
    collect_used_prefixes(elem, &mut used_prefixes);
    strip_unused_declarations(elem, &used_prefixes);
}

fn collect_used_prefixes(elem: &Element, used: &mut HashSet<String>) {
    if let Some(prefix) = &elem.name.prefix {
        used.insert(prefix.clone());
    }

    for attr in &elem.attributes {
        if let Some(prefix) = &attr.name.prefix {
            if !attr.name.is_xmlns() {
                used.insert(prefix.clone());
            }
        }
    }

    for child in elem.child_elements() {
        collect_used_prefixes(child, used);
    }
}

fn strip_unused_declarations(elem: &mut Element, used: &HashSet<String>) {
    elem.attributes.retain(|attr| {
        // the default namespace is always kept
        attr.name.prefix.as_deref() != Some("xmlns") || used.contains(&attr.name.local)
    });

    for child in elem.child_elements_mut() {
        strip_unused_declarations(child, used);
    }
}

fn remove_comments(elem: &mut Element) {
    elem.children.retain(|node| !matches!(node, Node::Comment(_)));

    for child in elem.child_elements_mut() {
        remove_comments(child);
    }
}

/// Remove containers left with no children, innermost first.
fn remove_empty(elem: &mut Element) {
    if is_opaque(elem) {
        return;
    }

    for child in elem.child_elements_mut() {
        remove_empty(child);
    }

    elem.children.retain(|node| match node {
        Node::Element(e) => {
            !CONTAINER_ELEMENTS.contains(&e.name.local.as_str())
                || !e.children.is_empty()
                || e.get_attr("id").is_some()
        }
        _ => true,
    });
}

/// Replace attribute-less `<g>` wrappers by their children.
fn collapse_groups(elem: &mut Element) {
    if is_opaque(elem) {
        return;
    }

    for child in elem.child_elements_mut() {
        collapse_groups(child);
    }

    // <switch> renders its first matching direct child
    if elem.is("switch") {
        return;
    }

    let mut new_children = Vec::with_capacity(elem.children.len());
    for child in std::mem::take(&mut elem.children) {
        match child {
            Node::Element(mut e) if can_collapse_group(&e) => {
                new_children.extend(std::mem::take(&mut e.children));
            }
            other => new_children.push(other),
        }
    }
    elem.children = new_children;
}

fn can_collapse_group(elem: &Element) -> bool {
    elem.is("g") && elem.name.prefix.is_none() && elem.attributes.is_empty()
}

fn minify_colors(elem: &mut Element) {
    if is_opaque(elem) {
        return;
    }

    for attr in &mut elem.attributes {
        if attr.name.prefix.is_none() && COLOR_ATTRIBUTES.contains(&attr.name.local.as_str()) {
            if let Some(short) = shorten_hex_color(&attr.value) {
                attr.value = short;
            }
        }
    }

    for child in elem.child_elements_mut() {
        minify_colors(child);
    }
}

/// `#AABBCC` -> `#abc`, `#AABBCD` -> `#aabbcd`; anything else is left alone.
fn shorten_hex_color(value: &str) -> Option<String> {
    let hex = value.strip_prefix('#')?;
    if !(hex.len() == 3 || hex.len() == 6) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let hex = hex.to_ascii_lowercase();
    let bytes = hex.as_bytes();
    if bytes.len() == 6 && bytes[0] == bytes[1] && bytes[2] == bytes[3] && bytes[4] == bytes[5] {
        let short: String = [bytes[0], bytes[2], bytes[4]].iter().map(|&b| b as char).collect();
        return Some(format!("#{}", short));
    }

    Some(format!("#{}", hex))
}
