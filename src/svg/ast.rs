//! In-memory SVG tree.

/// A parsed SVG document.
#[derive(Debug, Clone)]
pub struct Document {
    pub xml_declaration: Option<XmlDeclaration>,
    pub doctype: Option<String>,
    pub root: Element,
}

#[derive(Debug, Clone)]
pub struct XmlDeclaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub name: QName,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

/// A qualified name, e.g. `xlink:href` or `rect`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub prefix: Option<String>,
    pub local: String,
}

impl QName {
    pub fn parse(s: &str) -> Self {
        match s.split_once(':') {
            Some((prefix, local)) => Self {
                prefix: Some(prefix.to_string()),
                local: local.to_string(),
            },
            None => Self {
                prefix: None,
                local: s.to_string(),
            },
        }
    }

    /// `xmlns` or `xmlns:prefix`
    pub fn is_xmlns(&self) -> bool {
        self.prefix.as_deref() == Some("xmlns") || (self.prefix.is_none() && self.local == "xmlns")
    }

    pub fn full_name(&self) -> String {
        match &self.prefix {
            Some(p) => format!("{}:{}", p, self.local),
            None => self.local.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    CData(String),
    ProcessingInstruction { target: String, content: Option<String> },
}

impl Element {
    /// Attribute value by local name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.local == name)
            .map(|a| a.value.as_str())
    }

    pub fn is(&self, name: &str) -> bool {
        self.name.local == name
    }

    /// Whether this element asks for its whitespace to be kept as written.
    pub fn preserves_space(&self) -> bool {
        self.attributes
            .iter()
            .any(|a| a.name.prefix.as_deref() == Some("xml") && a.name.local == "space" && a.value == "preserve")
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qname_parse() {
        let name = QName::parse("xlink:href");
        assert_eq!(name.prefix.as_deref(), Some("xlink"));
        assert_eq!(name.local, "href");
        assert_eq!(name.full_name(), "xlink:href");

        let name = QName::parse("rect");
        assert_eq!(name.prefix, None);
        assert_eq!(name.full_name(), "rect");
    }

    #[test]
    fn test_qname_is_xmlns() {
        assert!(QName::parse("xmlns").is_xmlns());
        assert!(QName::parse("xmlns:xlink").is_xmlns());
        assert!(!QName::parse("xlink:href").is_xmlns());
    }
}
