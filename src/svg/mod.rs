//! SVG minification.
//!
//! A quick-xml reader builds a small document tree, a handful of
//! rendering-neutral passes shrink it, and a compact writer emits it again.

mod ast;
mod optimize;
mod parse;
mod serialize;

pub use ast::{Attribute, Document, Element, Node, QName, XmlDeclaration};
pub use optimize::optimize;
pub use parse::parse_svg;
pub use serialize::serialize;

use crate::error::Result;

/// Minify an SVG string with default settings.
pub fn minify(svg: &str) -> Result<String> {
    minify_with_options(svg, &SvgOptions::default())
}

/// Minify an SVG string with custom options.
pub fn minify_with_options(svg: &str, options: &SvgOptions) -> Result<String> {
    let mut doc = parse_svg(svg)?;
    optimize(&mut doc, options);
    Ok(serialize(&doc, options))
}

/// Minification switches. Every pass is on by default.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Remove comments
    pub remove_comments: bool,
    /// Remove `<metadata>` and editor (Inkscape/Sodipodi) elements and attributes
    pub remove_metadata: bool,
    /// Remove XML declaration
    pub remove_xml_declaration: bool,
    /// Remove DOCTYPE
    pub remove_doctype: bool,
    /// Remove `xmlns:*` declarations whose prefix is never used
    pub remove_unused_namespaces: bool,
    /// Remove containers that ended up with no children
    pub remove_empty: bool,
    /// Unwrap `<g>` elements that carry no attributes
    pub collapse_groups: bool,
    /// Shorten colors (#ffffff -> #fff)
    pub minify_colors: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            remove_comments: true,
            remove_metadata: true,
            remove_xml_declaration: true,
            remove_doctype: true,
            remove_unused_namespaces: true,
            remove_empty: true,
            collapse_groups: true,
            minify_colors: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INKSCAPE_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!-- Created with Inkscape (http://www.inkscape.org/) -->
<svg
   xmlns="http://www.w3.org/2000/svg"
   xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
   xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd"
   xmlns:dc="http://purl.org/dc/elements/1.1/"
   width="64"
   height="64"
   inkscape:version="1.2">
  <sodipodi:namedview id="namedview1" pagecolor="#ffffff" />
  <metadata>
    <dc:title>Badge</dc:title>
  </metadata>
  <defs />
  <g>
    <circle cx="32" cy="32" r="30" fill="#FF0000" stroke="#000000" />
  </g>
  <text x="4" y="60">Hello  <tspan fill="#00ff00">world</tspan> !</text>
</svg>
"##;

    #[test]
    fn test_minify_inkscape_output() {
        let out = minify(INKSCAPE_SVG).unwrap();
        assert_eq!(
            out,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"><circle cx="32" cy="32" r="30" fill="#f00" stroke="#000"/><text x="4" y="60">Hello  <tspan fill="#0f0">world</tspan> !</text></svg>"##
        );
        assert!(out.len() < INKSCAPE_SVG.len());
    }

    #[test]
    fn test_minify_is_idempotent() {
        let once = minify(INKSCAPE_SVG).unwrap();
        let twice = minify(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_minify_output_reparses() {
        let out = minify(INKSCAPE_SVG).unwrap();
        let doc = parse_svg(&out).unwrap();
        assert!(doc.root.is("svg"));
        assert_eq!(doc.root.get_attr("width"), Some("64"));
    }

    #[test]
    fn test_all_passes_disabled_only_collapses_whitespace() {
        let options = SvgOptions {
            remove_comments: false,
            remove_metadata: false,
            remove_xml_declaration: false,
            remove_doctype: false,
            remove_unused_namespaces: false,
            remove_empty: false,
            collapse_groups: false,
            minify_colors: false,
        };
        let svg = "<?xml version=\"1.0\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <!-- keep -->\n  <g>\n    <rect fill=\"#FFFFFF\"/>\n  </g>\n</svg>\n";
        let out = minify_with_options(svg, &options).unwrap();
        assert_eq!(
            out,
            "<?xml version=\"1.0\"?><svg xmlns=\"http://www.w3.org/2000/svg\"><!-- keep --><g><rect fill=\"#FFFFFF\"/></g></svg>"
        );
    }

    #[test]
    fn test_minify_illustrator_export() {
        let svg = r##"<?xml version="1.0" encoding="utf-8"?>
<!-- Generator: Adobe Illustrator 16.0.0, SVG Export Plug-In . SVG Version: 6.00 Build 0)  -->
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd" [
	<!ENTITY ns_extend "http://ns.adobe.com/Extensibility/1.0/">
	<!ENTITY ns_svg "http://www.w3.org/2000/svg">
	<!ENTITY ns_xlink "http://www.w3.org/1999/xlink">
]>
<svg version="1.1" xmlns:x="&ns_extend;" xmlns="&ns_svg;" xmlns:xlink="&ns_xlink;" width="10px" height="10px">
<rect fill="#FF0000" width="10" height="10"/>
</svg>
"##;
        let out = minify(svg).unwrap();
        assert_eq!(
            out,
            r##"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" width="10px" height="10px"><rect fill="#f00" width="10" height="10"/></svg>"##
        );
        assert_eq!(minify(&out).unwrap(), out);
    }

    #[test]
    fn test_minify_rejects_non_svg_text() {
        assert!(minify("just some text").is_err());
        assert!(minify("<svg><g></svg>").is_err());
    }
}
