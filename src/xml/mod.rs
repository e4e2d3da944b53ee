//! XML node tree, namespaces and parse/serialize entry points

mod namespace;
mod raw;

pub use namespace::*;
pub use raw::{XmlElement, XmlNode};

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use std::io::Cursor;

/// Parse a single XML element (and its whole subtree) from a string.
///
/// Leading declarations, comments and whitespace before the root element are
/// skipped; text inside the tree is kept verbatim (`xml:space` regions stay
/// intact). This is the usual way to hand a markup fragment to the typed
/// model's `from_element` constructors.
pub fn parse_element(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => return XmlElement::from_reader(&mut reader, &e),
            Event::Empty(e) => return Ok(XmlElement::from_empty(&e)),
            Event::Decl(_) | Event::Comment(_) | Event::Text(_) | Event::PI(_) => {}
            Event::Eof => {
                return Err(Error::InvalidDocument("No root element found".into()));
            }
            _ => {}
        }
        buf.clear();
    }
}

/// Serialize through a closure receiving a [`quick_xml::Writer`], returning
/// the produced markup as a string
pub fn write_to_string<F>(f: F) -> Result<String>
where
    F: FnOnce(&mut Writer<Cursor<Vec<u8>>>) -> Result<()>,
{
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    f(&mut writer)?;
    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8_lossy(&bytes).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_tree_roundtrip() {
        let xml = r#"<w:custom foo="bar"><w:child>text</w:child></w:custom>"#;
        let elem = parse_element(xml).unwrap();

        assert_eq!(elem.name, "w:custom");
        assert_eq!(elem.local_name(), "custom");
        assert_eq!(elem.attr("foo"), Some("bar"));
        assert_eq!(elem.children.len(), 1);
        assert_eq!(elem.find_child("child").unwrap().text(), "text");

        let out = write_to_string(|w| elem.write_to(w)).unwrap();
        assert_eq!(out, xml);
    }

    #[test]
    fn test_write_as_overrides_tag() {
        let elem = parse_element(r#"<m:oMath><m:r/></m:oMath>"#).unwrap();
        let out = write_to_string(|w| elem.write_as("m:oMathPara", w)).unwrap();
        assert_eq!(out, "<m:oMathPara><m:r/></m:oMathPara>");
    }

    #[test]
    fn test_attr_ns_prefers_w_prefix() {
        let elem = parse_element(r#"<w:u w:val="single" val="none"/>"#).unwrap();
        assert_eq!(elem.attr_ns("val"), Some("single"));
        assert_eq!(elem.w_val(), Some("single"));
    }

    #[test]
    fn test_namespace_constants() {
        assert!(W.contains("wordprocessingml"));
        assert!(R.contains("relationships"));
    }
}
