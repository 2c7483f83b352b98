//! SVG serialization to minified XML.

use super::ast::*;
use super::SvgOptions;

/// Serialize a Document without any formatting whitespace.
pub fn serialize(doc: &Document, options: &SvgOptions) -> String {
    let mut out = String::new();

    if !options.remove_xml_declaration {
        if let Some(ref decl) = doc.xml_declaration {
            out.push_str("<?xml version=\"");
            out.push_str(&decl.version);
            out.push('"');
            if let Some(ref enc) = decl.encoding {
                out.push_str(" encoding=\"");
                out.push_str(enc);
                out.push('"');
            }
            if let Some(standalone) = decl.standalone {
                out.push_str(" standalone=\"");
                out.push_str(if standalone { "yes" } else { "no" });
                out.push('"');
            }
            out.push_str("?>");
        }
    }

    if !options.remove_doctype {
        if let Some(ref dt) = doc.doctype {
            out.push_str("<!DOCTYPE ");
            out.push_str(dt);
            out.push('>');
        }
    }

    serialize_element(&mut out, &doc.root, options);

    out
}

fn serialize_element(out: &mut String, elem: &Element, options: &SvgOptions) {
    let name = elem.name.full_name();
    out.push('<');
    out.push_str(&name);

    for attr in &elem.attributes {
        out.push(' ');
        out.push_str(&attr.name.full_name());
        out.push_str("=\"");
        push_escaped_attr(out, &attr.value);
        out.push('"');
    }

    if elem.children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in &elem.children {
        serialize_node(out, child, options);
    }
    out.push_str("</");
    out.push_str(&name);
    out.push('>');
}

fn serialize_node(out: &mut String, node: &Node, options: &SvgOptions) {
    match node {
        Node::Element(elem) => serialize_element(out, elem, options),
        Node::Text(text) => push_escaped_text(out, text),
        Node::Comment(comment) => {
            if !options.remove_comments {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
        }
        Node::CData(data) => {
            out.push_str("<![CDATA[");
            out.push_str(data);
            out.push_str("]]>");
        }
        Node::ProcessingInstruction { target, content } => {
            out.push_str("<?");
            out.push_str(target);
            if let Some(c) = content {
                out.push(' ');
                out.push_str(c);
            }
            out.push_str("?>");
        }
    }
}

fn push_escaped_attr(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }
}

fn push_escaped_text(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
