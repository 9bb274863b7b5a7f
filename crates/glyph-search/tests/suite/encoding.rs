use std::collections::HashSet;

use glyph_search::{Codepoint, IconFormat};

#[test]
fn html_hex_matches_template_for_every_catalog_icon() {
    for icon in &super::sample_catalog() {
        let value = icon.codepoint().value();
        assert_eq!(
            IconFormat::HtmlHex.encode(icon.codepoint()),
            format!("&#x{value:04X};"),
            "{}",
            icon.label()
        );
    }
}

#[test]
fn encodings_are_injective_per_format() {
    let catalog = super::sample_catalog();
    let mut codepoints: Vec<Codepoint> = catalog.iter().map(|icon| icon.codepoint()).collect();
    codepoints.extend(
        [0x0, 0x41, 0x410, 0x4100, 0x1F600, 0x10_FFFF]
            .into_iter()
            .map(|value| Codepoint::new(value).unwrap()),
    );
    codepoints.sort();
    codepoints.dedup();

    for format in IconFormat::ALL {
        let encoded: HashSet<String> = codepoints.iter().map(|&cp| format.encode(cp)).collect();
        assert_eq!(encoded.len(), codepoints.len(), "{format}");
    }
}

#[test]
fn html_hex_round_trips_for_catalog_icons() {
    for icon in &super::sample_catalog() {
        let encoded = IconFormat::HtmlHex.encode(icon.codepoint());
        let (format, codepoint) = IconFormat::parse(&encoded).expect("encoded text should parse");
        assert_eq!(format, IconFormat::HtmlHex);
        assert_eq!(IconFormat::HtmlHex.encode(codepoint), encoded);
    }
}
