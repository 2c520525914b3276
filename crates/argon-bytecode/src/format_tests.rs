use argon_core::Colors;

use crate::format::{LineBuilder, hex_bytes, quote_text};

#[test]
fn prefix_pads_offset() {
    let lines = LineBuilder::new(3);
    assert_eq!(lines.prefix(7, &Colors::OFF), "  007 ");
    assert_eq!(lines.subline_prefix(), "      ");
}

#[test]
fn quote_escapes() {
    assert_eq!(quote_text("foo"), r#""foo""#);
    assert_eq!(quote_text("a\"b"), r#""a\"b""#);
    assert_eq!(quote_text("a\\b\nc"), r#""a\\b\nc""#);
}

#[test]
fn hex() {
    assert_eq!(hex_bytes(&[0x2a, 0, 0xff]), "2a 00 ff");
    assert_eq!(hex_bytes(&[]), "");
}
