use image_optimizer::svg::{minify, parse_svg};
use image_optimizer::{is_image_file, mirror_path, ImageKind};
use proptest::prelude::*;
use std::path::{Path, PathBuf};

fn mixed_case(s: &str, mask: u32) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| if mask & (1 << i) != 0 { c.to_ascii_uppercase() } else { c })
        .collect()
}

fn svg_fragment() -> impl Strategy<Value = String> {
    let leaf = prop::sample::select(vec![
        r#"<rect width="1" height="2"/>"#,
        r##"<circle r="3" fill="#AABBCC"/>"##,
        "<!-- note -->",
        "<g/>",
        "<text>a  b</text>",
        "\n   ",
    ])
    .prop_map(|s| s.to_string());

    leaf.prop_recursive(3, 24, 4, |inner| {
        (prop::collection::vec(inner, 0..4), prop::bool::ANY).prop_map(|(children, with_id)| {
            let open = if with_id { r#"<g id="x">"# } else { "<g>" };
            format!("{}{}</g>", open, children.concat())
        })
    })
}

proptest! {
    #[test]
    fn recognized_extensions_ignore_case(
        ext in prop::sample::select(vec!["jpg", "jpeg", "png", "svg"]),
        mask in 0u32..16
    ) {
        let ext = mixed_case(ext, mask);
        let filename = format!("photo.{}", ext);
        prop_assert!(is_image_file(Path::new(&filename)));
        prop_assert!(ImageKind::from_extension(&ext).is_some());
    }

    #[test]
    fn other_extensions_are_not_images(ext in "[a-z]{1,5}") {
        prop_assume!(!["jpg", "jpeg", "png", "svg"].contains(&ext.as_str()));
        let filename = format!("file.{}", ext);
        prop_assert!(!is_image_file(Path::new(&filename)));
        prop_assert_eq!(ImageKind::from_extension(&ext), None);
    }

    #[test]
    fn mirror_path_keeps_relative_layout(segments in prop::collection::vec("[a-z0-9]{1,8}", 1..5)) {
        let source = PathBuf::from("/src/images");
        let output = PathBuf::from("/out/optimized");
        let relative: PathBuf = segments.iter().collect();

        let mirrored = mirror_path(&source, &output, &source.join(&relative));
        prop_assert_eq!(mirrored.strip_prefix(&output).unwrap(), relative.as_path());
    }

    #[test]
    fn svg_minify_is_idempotent_and_reparses(body in svg_fragment()) {
        let svg = format!("<svg xmlns=\"http://www.w3.org/2000/svg\">\n{}\n</svg>\n", body);

        let once = minify(&svg).unwrap();
        prop_assert!(once.len() < svg.len());
        prop_assert!(parse_svg(&once).is_ok());

        let twice = minify(&once).unwrap();
        prop_assert_eq!(once, twice);
    }
}
