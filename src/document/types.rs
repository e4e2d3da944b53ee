//! Scalar leaf codecs shared across the element model
//!
//! Each codec converts one attribute string to one in-memory value and back.
//! Malformed input fails with [`Error::ScalarDecode`] carrying the element
//! name, attribute name and raw text; absent input is always represented as
//! `None` at the field level, never as an error.

use crate::error::{Error, Result};
use crate::xml::XmlElement;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// On/off toggle value (ST_OnOff)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnOff(pub bool);

impl OnOff {
    /// Parse from a flag element; a missing `w:val` means on (e.g. `<w:b/>`)
    pub fn parse(elem: &XmlElement) -> Result<Self> {
        match elem.w_val() {
            None => Ok(OnOff(true)),
            Some("1") | Some("true") | Some("on") => Ok(OnOff(true)),
            Some("0") | Some("false") | Some("off") => Ok(OnOff(false)),
            Some(other) => Err(Error::scalar(&elem.name, "w:val", other)),
        }
    }

    /// Parse from raw attribute text (for on/off values carried as attributes)
    pub fn parse_attr(element: &str, attr: &str, raw: &str) -> Result<Self> {
        match raw {
            "1" | "true" | "on" => Ok(OnOff(true)),
            "0" | "false" | "off" => Ok(OnOff(false)),
            other => Err(Error::scalar(element, attr, other)),
        }
    }

    /// Emit `<tag/>` when on; off equals the schema default and is omitted
    pub fn write_element<W: Write>(&self, tag: &str, writer: &mut Writer<W>) -> Result<()> {
        if self.0 {
            writer.write_event(Event::Empty(BytesStart::new(tag)))?;
        }
        Ok(())
    }

    /// Emit `<tag/>` when on and `<tag w:val="0"/>` when off.
    ///
    /// History records store captured values, not current formatting, so an
    /// off entry must survive the round trip instead of being omitted.
    pub fn write_element_explicit<W: Write>(
        &self,
        tag: &str,
        writer: &mut Writer<W>,
    ) -> Result<()> {
        let mut elem = BytesStart::new(tag);
        if !self.0 {
            elem.push_attribute(("w:val", "0"));
        }
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }

    /// Whether the toggle is on
    pub fn is_on(&self) -> bool {
        self.0
    }
}

/// Eight-digit hex identifier (ST_LongHexNumber), used for revision-save IDs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexId(pub u32);

impl HexId {
    /// Parse from raw attribute text
    pub fn parse(element: &str, attr: &str, raw: &str) -> Result<Self> {
        u32::from_str_radix(raw, 16)
            .map(HexId)
            .map_err(|_| Error::scalar(element, attr, raw))
    }

    /// Canonical uppercase eight-digit form
    pub fn to_hex(self) -> String {
        format!("{:08X}", self.0)
    }
}

/// Unsigned length in twentieths of a point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TwipsMeasure(pub u32);

/// Signed length in twentieths of a point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignedTwips(pub i32);

/// Font measurement in half-points (24 = 12pt)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HalfPoints(pub u32);

/// Plain decimal number attribute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecimalNumber(pub i64);

impl TwipsMeasure {
    pub fn parse(element: &str, attr: &str, raw: &str) -> Result<Self> {
        parse_number(element, attr, raw).map(TwipsMeasure)
    }

    /// Parse from the element's `w:val` attribute, `None` when absent
    pub(crate) fn parse_val(elem: &XmlElement) -> Result<Option<Self>> {
        match elem.w_val() {
            Some(raw) => Self::parse(&elem.name, "w:val", raw).map(Some),
            None => Ok(None),
        }
    }
}

impl SignedTwips {
    pub fn parse(element: &str, attr: &str, raw: &str) -> Result<Self> {
        parse_number(element, attr, raw).map(SignedTwips)
    }

    pub(crate) fn parse_val(elem: &XmlElement) -> Result<Option<Self>> {
        match elem.w_val() {
            Some(raw) => Self::parse(&elem.name, "w:val", raw).map(Some),
            None => Ok(None),
        }
    }
}

impl HalfPoints {
    pub fn parse(element: &str, attr: &str, raw: &str) -> Result<Self> {
        parse_number(element, attr, raw).map(HalfPoints)
    }

    pub(crate) fn parse_val(elem: &XmlElement) -> Result<Option<Self>> {
        match elem.w_val() {
            Some(raw) => Self::parse(&elem.name, "w:val", raw).map(Some),
            None => Ok(None),
        }
    }

    /// Size in points
    pub fn points(self) -> f32 {
        self.0 as f32 / 2.0
    }
}

impl DecimalNumber {
    pub fn parse(element: &str, attr: &str, raw: &str) -> Result<Self> {
        parse_number(element, attr, raw).map(DecimalNumber)
    }

    pub(crate) fn parse_val(elem: &XmlElement) -> Result<Option<Self>> {
        match elem.w_val() {
            Some(raw) => Self::parse(&elem.name, "w:val", raw).map(Some),
            None => Ok(None),
        }
    }
}

/// Parse an optional rsid-style hex attribute from an element
pub(crate) fn parse_rsid(elem: &XmlElement, local: &str) -> Result<Option<HexId>> {
    match elem.attr_ns(local) {
        Some(raw) => HexId::parse(&elem.name, &format!("w:{local}"), raw).map(Some),
        None => Ok(None),
    }
}

/// Parse any integer attribute, converting failures to [`Error::ScalarDecode`]
pub(crate) fn parse_number<T: std::str::FromStr>(
    element: &str,
    attr: &str,
    raw: &str,
) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::scalar(element, attr, raw))
}

/// Emit an empty `<tag w:val="..."/>` element
pub(crate) fn write_val_element<W: Write>(
    tag: &str,
    val: &str,
    writer: &mut Writer<W>,
) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    elem.push_attribute(("w:val", val));
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_element;

    #[test]
    fn test_on_off_values() {
        let on = parse_element("<w:b/>").unwrap();
        assert!(OnOff::parse(&on).unwrap().is_on());

        let off = parse_element(r#"<w:b w:val="0"/>"#).unwrap();
        assert!(!OnOff::parse(&off).unwrap().is_on());

        let bad = parse_element(r#"<w:b w:val="maybe"/>"#).unwrap();
        assert!(OnOff::parse(&bad).is_err());
    }

    #[test]
    fn test_hex_id_roundtrip() {
        let id = HexId::parse("w:p", "w:rsidR", "00AB12F3").unwrap();
        assert_eq!(id.0, 0x00AB12F3);
        assert_eq!(id.to_hex(), "00AB12F3");

        assert!(HexId::parse("w:p", "w:rsidR", "zz").is_err());
    }

    #[test]
    fn test_half_points() {
        let sz = HalfPoints::parse("w:sz", "w:val", "24").unwrap();
        assert_eq!(sz.points(), 12.0);
    }
}
