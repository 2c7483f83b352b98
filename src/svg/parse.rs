//! SVG parsing from XML.

use std::collections::HashMap;

use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::ast::*;
use crate::error::{OptimizeError, Result};

/// Parse an SVG string into a Document.
///
/// Comments, whitespace and processing instructions outside the root
/// element are dropped. Text inside the tree is kept exactly as written.
/// Entities declared in the DOCTYPE are expanded in text and attributes.
pub fn parse_svg(svg: &str) -> Result<Document> {
    let mut reader = Reader::from_str(svg);

    let mut xml_declaration = None;
    let mut doctype = None;
    let mut entities = HashMap::new();
    let mut root = None;

    loop {
        match reader.read_event()? {
            Event::Decl(decl) => {
                xml_declaration = Some(XmlDeclaration {
                    version: String::from_utf8_lossy(decl.version()?.as_ref()).into_owned(),
                    encoding: decl
                        .encoding()
                        .transpose()
                        .ok()
                        .flatten()
                        .map(|e| String::from_utf8_lossy(e.as_ref()).into_owned()),
                    standalone: decl
                        .standalone()
                        .transpose()
                        .ok()
                        .flatten()
                        .map(|s| String::from_utf8_lossy(s.as_ref()) == "yes"),
                });
            }
            Event::DocType(dt) => {
                let text = String::from_utf8_lossy(&dt).trim().to_string();
                entities = parse_entity_declarations(&text);
                doctype = Some(text);
            }
            Event::Start(start) => {
                root = Some(parse_element(&mut reader, &start, &entities)?);
                break;
            }
            Event::Empty(start) => {
                root = Some(parse_element_start(&start, &entities)?);
                break;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let root = root.ok_or_else(|| OptimizeError::InvalidSvg("No root element found".into()))?;

    Ok(Document {
        xml_declaration,
        doctype,
        root,
    })
}

/// Internal general entities of a DOCTYPE subset, such as
/// `<!ENTITY ns_svg "http://www.w3.org/2000/svg">`. Parameter and external
/// entities are skipped.
fn parse_entity_declarations(doctype: &str) -> HashMap<String, String> {
    const ENTITY_DECL: &str = "<!ENTITY";

    let mut entities = HashMap::new();
    let mut rest = doctype;
    while let Some(start) = rest.find(ENTITY_DECL) {
        rest = rest[start + ENTITY_DECL.len()..].trim_start();
        if rest.starts_with('%') {
            continue;
        }

        let name_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let name = &rest[..name_end];
        rest = rest[name_end..].trim_start();

        let quote = match rest.chars().next() {
            Some(c @ ('"' | '\'')) => c,
            _ => continue,
        };
        let body = &rest[1..];
        let end = match body.find(quote) {
            Some(end) => end,
            None => break,
        };
        if !name.is_empty() {
            let raw = &body[..end];
            let value = unescape(raw).map(|v| v.into_owned()).unwrap_or_else(|_| raw.to_string());
            entities.insert(name.to_string(), value);
        }
        rest = &body[end + 1..];
    }
    entities
}

fn resolve_entity<'e>(entities: &'e HashMap<String, String>, name: &str) -> Option<&'e str> {
    resolve_predefined_entity(name).or_else(|| entities.get(name).map(String::as_str))
}

fn parse_element(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
    entities: &HashMap<String, String>,
) -> Result<Element> {
    let mut element = parse_element_start(start, entities)?;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                element
                    .children
                    .push(Node::Element(parse_element(reader, &start, entities)?));
            }
            Event::Empty(start) => {
                element
                    .children
                    .push(Node::Element(parse_element_start(&start, entities)?));
            }
            Event::End(_) => break,
            Event::Text(text) => {
                let text = text.unescape_with(|name| resolve_entity(entities, name))?;
                // merge adjacent text runs
                if let Some(Node::Text(prev)) = element.children.last_mut() {
                    prev.push_str(&text);
                } else {
                    element.children.push(Node::Text(text.into_owned()));
                }
            }
            Event::Comment(comment) => {
                element
                    .children
                    .push(Node::Comment(String::from_utf8_lossy(&comment).into_owned()));
            }
            Event::CData(cdata) => {
                element
                    .children
                    .push(Node::CData(String::from_utf8_lossy(&cdata).into_owned()));
            }
            Event::PI(pi) => {
                let content = String::from_utf8_lossy(&pi).into_owned();
                let (target, rest) = content
                    .split_once(char::is_whitespace)
                    .map(|(t, r)| (t.to_string(), Some(r.to_string())))
                    .unwrap_or_else(|| (content, None));
                element
                    .children
                    .push(Node::ProcessingInstruction { target, content: rest });
            }
            Event::Eof => {
                return Err(OptimizeError::InvalidSvg("Unexpected end of file".into()));
            }
            _ => {}
        }
    }

    Ok(element)
}

fn parse_element_start(start: &BytesStart, entities: &HashMap<String, String>) -> Result<Element> {
    let name_bytes = start.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;

    let mut element = Element {
        name: QName::parse(name),
        attributes: Vec::new(),
        children: Vec::new(),
    };

    for attr in start.attributes() {
        let attr = attr.map_err(|e| OptimizeError::InvalidSvg(format!("Invalid attribute: {}", e)))?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value_with(|name| resolve_entity(entities, name))?;
        element.attributes.push(Attribute {
            name: QName::parse(key),
            value: value.into_owned(),
        });
    }

    Ok(element)
}
