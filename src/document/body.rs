//! Document body and block-level content

use crate::document::choice::{ChoiceChild, ChoiceGroup};
use crate::document::paragraph::{BookmarkStart, Paragraph, RangeMarker};
use crate::document::section::SectionProperties;
use crate::error::Result;
use crate::xml::XmlElement;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Child kinds legal at the block level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockChildKind {
    Paragraph,
    BookmarkStart,
    BookmarkEnd,
}

/// Block-level content in a document body
#[derive(Clone, Debug)]
pub enum BlockChild {
    /// Paragraph
    Paragraph(Paragraph),
    /// Bookmark start between paragraphs
    BookmarkStart(BookmarkStart),
    /// Bookmark end between paragraphs
    BookmarkEnd(RangeMarker),
}

/// Document body (w:body)
#[derive(Clone, Debug, Default)]
pub struct Body {
    /// Block-level content, in document order
    pub content: ChoiceGroup<BlockChild>,
    /// Section properties, a fixed trailing child after the content group
    pub section_properties: Option<SectionProperties>,
}

impl Body {
    /// Parse from an element node (w:body)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut body = Body::default();

        for child in elem.element_children() {
            if body.content.parse_child(child)? {
                continue;
            }
            match child.local_name() {
                "sectPr" => {
                    body.section_properties = Some(SectionProperties::from_element(child)?);
                }
                other => {
                    log::debug!("skipping unrecognized body child <{other}>");
                }
            }
        }

        Ok(body)
    }

    /// Get all paragraphs
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.content.iter().filter_map(|c| {
            if let BlockChild::Paragraph(p) = c {
                Some(p)
            } else {
                None
            }
        })
    }

    /// Get all paragraphs mutably
    pub fn paragraphs_mut(&mut self) -> impl Iterator<Item = &mut Paragraph> {
        self.content.iter_mut().filter_map(|c| {
            if let BlockChild::Paragraph(p) = c {
                Some(p)
            } else {
                None
            }
        })
    }

    /// All paragraph text joined with newlines
    pub fn text(&self) -> String {
        self.paragraphs()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Add a paragraph
    pub fn add_paragraph(&mut self, para: Paragraph) {
        self.content.push(BlockChild::Paragraph(para));
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:body")))?;

        self.content.write_to(writer)?;

        // The section properties close the final section and always follow
        // the content group
        if let Some(sect_pr) = &self.section_properties {
            sect_pr.write_to(writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:body")))?;
        Ok(())
    }
}

impl ChoiceChild for BlockChild {
    type Kind = BlockChildKind;

    fn kind(&self) -> BlockChildKind {
        match self {
            BlockChild::Paragraph(_) => BlockChildKind::Paragraph,
            BlockChild::BookmarkStart(_) => BlockChildKind::BookmarkStart,
            BlockChild::BookmarkEnd(_) => BlockChildKind::BookmarkEnd,
        }
    }

    fn classify(node: &XmlElement) -> Option<Result<Self>> {
        let parsed = match node.local_name() {
            "p" => Paragraph::from_element(node).map(BlockChild::Paragraph),
            "bookmarkStart" => BookmarkStart::from_element(node).map(BlockChild::BookmarkStart),
            "bookmarkEnd" => RangeMarker::from_element(node).map(BlockChild::BookmarkEnd),
            _ => return None,
        };
        Some(parsed)
    }

    fn default_for(kind: BlockChildKind) -> Self {
        match kind {
            BlockChildKind::Paragraph => BlockChild::Paragraph(Paragraph::default()),
            BlockChildKind::BookmarkStart => {
                BlockChild::BookmarkStart(BookmarkStart::default())
            }
            BlockChildKind::BookmarkEnd => BlockChild::BookmarkEnd(RangeMarker::default()),
        }
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match self {
            BlockChild::Paragraph(para) => para.write_to(writer),
            BlockChild::BookmarkStart(marker) => marker.write_to(writer),
            BlockChild::BookmarkEnd(marker) => marker.write_as("w:bookmarkEnd", writer),
        }
    }
}
