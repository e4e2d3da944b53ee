//! Generic XML node tree consumed and produced by the typed element model

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::BufRead;

use crate::error::{Error, Result};

/// One node of a parsed XML subtree
#[derive(Clone, Debug)]
pub enum XmlNode {
    /// Element node
    Element(XmlElement),
    /// Text node
    Text(String),
    /// Comment node
    Comment(String),
}

/// An XML element with ordered attributes and ordered children.
///
/// This is the input boundary of the typed model: every `from_element`
/// constructor walks one of these trees. Namespace URIs are not resolved;
/// names keep their prefix (e.g. `w:pPr`) and classification happens on the
/// local part only.
#[derive(Clone, Debug)]
pub struct XmlElement {
    /// Full element name (with prefix, e.g., "w:rPrChange")
    pub name: String,
    /// Attributes as (name, value) pairs, in document order
    pub attributes: Vec<(String, String)>,
    /// Child nodes, in document order
    pub children: Vec<XmlNode>,
    /// Whether this was a self-closing element
    pub self_closing: bool,
}

impl XmlElement {
    /// Create a new empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Namespace-stripped tag name ("pPr" for "w:pPr")
    pub fn local_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    /// Attribute value by exact qualified name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute value by local name, trying the `w:` prefix first
    pub fn attr_ns(&self, local: &str) -> Option<&str> {
        self.attr(&format!("w:{local}")).or_else(|| self.attr(local))
    }

    /// The `w:val` attribute (common in OOXML)
    pub fn w_val(&self) -> Option<&str> {
        self.attr_ns("val")
    }

    /// Child elements in document order, skipping text and comments
    pub fn element_children(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|c| {
            if let XmlNode::Element(e) = c {
                Some(e)
            } else {
                None
            }
        })
    }

    /// First child element with the given local name
    pub fn find_child(&self, local: &str) -> Option<&XmlElement> {
        self.element_children().find(|e| e.local_name() == local)
    }

    /// Concatenated text content of direct children
    pub fn text(&self) -> String {
        let mut result = String::new();
        for child in &self.children {
            if let XmlNode::Text(t) = child {
                result.push_str(t);
            }
        }
        result
    }

    /// Read a complete element from XML reader (starting after the start tag was read)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
        let attributes = read_attributes(start);

        let mut children = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let child = Self::from_reader(reader, &e)?;
                    children.push(XmlNode::Element(child));
                }
                Event::Empty(e) => {
                    children.push(XmlNode::Element(Self::from_empty(&e)));
                }
                Event::Text(t) => {
                    let text = t.unescape()?.to_string();
                    if !text.is_empty() {
                        children.push(XmlNode::Text(text));
                    }
                }
                Event::Comment(c) => {
                    children.push(XmlNode::Comment(String::from_utf8_lossy(&c).to_string()));
                }
                Event::End(e) => {
                    let end_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    if end_name == name {
                        break;
                    }
                }
                Event::Eof => return Err(Error::InvalidDocument("Unexpected EOF".into())),
                _ => {}
            }
            buf.clear();
        }

        Ok(Self {
            name,
            attributes,
            children,
            self_closing: false,
        })
    }

    /// Create from empty element tag
    pub fn from_empty(e: &BytesStart) -> Self {
        Self {
            name: String::from_utf8_lossy(e.name().as_ref()).to_string(),
            attributes: read_attributes(e),
            children: Vec::new(),
            self_closing: true,
        }
    }

    /// Write element to XML writer under its own name
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        self.write_as(&self.name, writer)
    }

    /// Write element to XML writer under a caller-chosen tag name.
    ///
    /// Used when the emitted tag is selected by a stored discriminant rather
    /// than by the subtree itself (e.g. `m:oMath` vs `m:oMathPara`).
    pub fn write_as<W: std::io::Write>(&self, tag: &str, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(tag);
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() && self.self_closing {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            for child in &self.children {
                child.write_to(writer)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }

        Ok(())
    }

    /// Add an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a child element
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Add a text child
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }
}

impl XmlNode {
    /// Write node to XML writer
    pub fn write_to<W: std::io::Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match self {
            XmlNode::Element(e) => e.write_to(writer),
            XmlNode::Text(t) => {
                writer.write_event(Event::Text(BytesText::new(t)))?;
                Ok(())
            }
            XmlNode::Comment(c) => {
                writer.write_event(Event::Comment(BytesText::new(c)))?;
                Ok(())
            }
        }
    }
}

fn read_attributes(e: &BytesStart) -> Vec<(String, String)> {
    e.attributes()
        .filter_map(|a| a.ok())
        .map(|a| {
            (
                String::from_utf8_lossy(a.key.as_ref()).to_string(),
                String::from_utf8_lossy(&a.value).to_string(),
            )
        })
        .collect()
}
