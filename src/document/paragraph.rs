//! Paragraph element (w:p) and its content vocabulary

use crate::document::choice::{ChoiceChild, ChoiceGroup};
use crate::document::revision::{ParagraphPropertiesChange, RunTrackChange};
use crate::document::run::{Run, RunProperties};
use crate::document::types::{
    parse_rsid, write_val_element, DecimalNumber, HexId, OnOff, SignedTwips, TwipsMeasure,
};
use crate::error::Result;
use crate::xml::XmlElement;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Paragraph element (w:p)
#[derive(Clone, Debug, Default)]
pub struct Paragraph {
    /// Paragraph properties (fixed leading child)
    pub properties: Option<ParagraphProperties>,
    /// Paragraph content (runs, hyperlinks, markers, tracked content, math)
    pub content: ChoiceGroup<ParagraphChild>,
    /// Revision-save ID of the paragraph mark properties
    pub rsid_rpr: Option<HexId>,
    /// Revision-save ID of the paragraph
    pub rsid_r: Option<HexId>,
    /// Revision-save ID of the deletion
    pub rsid_del: Option<HexId>,
    /// Revision-save ID of the paragraph mark
    pub rsid_p: Option<HexId>,
    /// Default revision-save ID for runs
    pub rsid_r_default: Option<HexId>,
}

/// Child kinds legal inside a paragraph
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParagraphChildKind {
    Run,
    Hyperlink,
    SimpleField,
    BookmarkStart,
    BookmarkEnd,
    CommentRangeStart,
    CommentRangeEnd,
    MoveFromRangeStart,
    MoveFromRangeEnd,
    MoveToRangeStart,
    MoveToRangeEnd,
    Insertion,
    Deletion,
    MoveFrom,
    MoveTo,
    ProofError,
    PermStart,
    PermEnd,
    MathBlock,
    MathPara,
}

/// Content within a paragraph.
///
/// The kind and the payload type are separate axes: [`RangeMarker`] backs
/// five different kinds, [`RunTrackChange`] four and [`MoveRangeStart`] two.
/// The entry's kind, not the payload's type, selects the emitted tag.
#[derive(Clone, Debug)]
pub enum ParagraphChild {
    /// Text run
    Run(Run),
    /// Hyperlink
    Hyperlink(Hyperlink),
    /// Simple field (w:fldSimple)
    SimpleField(SimpleField),
    /// Bookmark start
    BookmarkStart(BookmarkStart),
    /// Bookmark end
    BookmarkEnd(RangeMarker),
    /// Comment range start
    CommentRangeStart(RangeMarker),
    /// Comment range end
    CommentRangeEnd(RangeMarker),
    /// Move-source range start
    MoveFromRangeStart(MoveRangeStart),
    /// Move-source range end
    MoveFromRangeEnd(RangeMarker),
    /// Move-destination range start
    MoveToRangeStart(MoveRangeStart),
    /// Move-destination range end
    MoveToRangeEnd(RangeMarker),
    /// Tracked insertion (w:ins)
    Insertion(RunTrackChange),
    /// Tracked deletion (w:del)
    Deletion(RunTrackChange),
    /// Tracked move source (w:moveFrom)
    MoveFrom(RunTrackChange),
    /// Tracked move destination (w:moveTo)
    MoveTo(RunTrackChange),
    /// Proofing error marker (w:proofErr)
    ProofError(ProofError),
    /// Editing permission range start (w:permStart)
    PermStart(PermStart),
    /// Editing permission range end (w:permEnd)
    PermEnd(RangeMarker),
    /// Office Math block, kept opaque (m:oMath)
    MathBlock(XmlElement),
    /// Office Math paragraph, kept opaque (m:oMathPara)
    MathPara(XmlElement),
}

/// Bookmark start marker (w:bookmarkStart)
#[derive(Clone, Debug, Default)]
pub struct BookmarkStart {
    /// Marker ID pairing start and end
    pub id: DecimalNumber,
    /// Bookmark name
    pub name: String,
}

/// End or standalone range marker carrying only a pairing ID.
///
/// Serves `bookmarkEnd`, `commentRangeStart`, `commentRangeEnd`,
/// `moveFromRangeEnd`, `moveToRangeEnd` and `permEnd`.
#[derive(Clone, Debug, Default)]
pub struct RangeMarker {
    /// Marker ID pairing start and end
    pub id: DecimalNumber,
}

/// Move range start marker (w:moveFromRangeStart / w:moveToRangeStart)
#[derive(Clone, Debug, Default)]
pub struct MoveRangeStart {
    /// Marker ID pairing start and end
    pub id: DecimalNumber,
    /// Move name
    pub name: String,
    /// Author of the move
    pub author: Option<String>,
    /// ISO timestamp
    pub date: Option<String>,
}

/// Proofing error marker (w:proofErr)
#[derive(Clone, Debug, Default)]
pub struct ProofError {
    /// spellStart, spellEnd, gramStart or gramEnd
    pub error_type: String,
}

/// Editing permission range start (w:permStart)
#[derive(Clone, Debug, Default)]
pub struct PermStart {
    /// Marker ID pairing start and end
    pub id: DecimalNumber,
    /// Single editor granted access
    pub editor: Option<String>,
    /// Editor group granted access
    pub editor_group: Option<String>,
}

/// Hyperlink element
#[derive(Clone, Debug, Default)]
pub struct Hyperlink {
    /// Relationship ID (for external links)
    pub r_id: Option<String>,
    /// Anchor (for internal links)
    pub anchor: Option<String>,
    /// Tooltip text
    pub tooltip: Option<String>,
    /// Add to visited-link history
    pub history: Option<OnOff>,
    /// Nested paragraph content
    pub content: ChoiceGroup<ParagraphChild>,
}

/// Simple field (w:fldSimple)
#[derive(Clone, Debug, Default)]
pub struct SimpleField {
    /// Field instruction
    pub instr: String,
    /// Current result content
    pub content: ChoiceGroup<ParagraphChild>,
}

impl Paragraph {
    /// Parse from an element node (w:p)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut para = Paragraph {
            rsid_rpr: parse_rsid(elem, "rsidRPr")?,
            rsid_r: parse_rsid(elem, "rsidR")?,
            rsid_del: parse_rsid(elem, "rsidDel")?,
            rsid_p: parse_rsid(elem, "rsidP")?,
            rsid_r_default: parse_rsid(elem, "rsidRDefault")?,
            ..Default::default()
        };

        for child in elem.element_children() {
            if para.content.parse_child(child)? {
                continue;
            }
            match child.local_name() {
                "pPr" => {
                    para.properties = Some(ParagraphProperties::from_element(child)?);
                }
                other => {
                    log::debug!("skipping unrecognized paragraph child <{other}>");
                }
            }
        }

        Ok(para)
    }

    /// Get all text in this paragraph
    pub fn text(&self) -> String {
        let mut result = String::new();
        for content in &self.content {
            match content {
                ParagraphChild::Run(run) => result.push_str(&run.text()),
                ParagraphChild::Hyperlink(link) => {
                    for run in link.content.all_of(ParagraphChildKind::Run) {
                        if let ParagraphChild::Run(r) = run {
                            result.push_str(&r.text());
                        }
                    }
                }
                ParagraphChild::Insertion(ins) => {
                    for run in ins.content.all_of(ParagraphChildKind::Run) {
                        if let ParagraphChild::Run(r) = run {
                            result.push_str(&r.text());
                        }
                    }
                }
                _ => {}
            }
        }
        result
    }

    /// Get style ID
    pub fn style(&self) -> Option<&str> {
        self.properties.as_ref()?.style.as_deref()
    }

    /// Get all runs
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.content.iter().filter_map(|c| {
            if let ParagraphChild::Run(r) = c {
                Some(r)
            } else {
                None
            }
        })
    }

    /// Check if this is a heading (has outline level or heading style)
    pub fn is_heading(&self) -> bool {
        if let Some(ref props) = self.properties {
            if props.outline_level.is_some() {
                return true;
            }
            if let Some(ref style) = props.style {
                return style.starts_with("Heading") || style.starts_with("heading");
            }
        }
        false
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("w:p");
        if let Some(id) = self.rsid_rpr {
            start.push_attribute(("w:rsidRPr", id.to_hex().as_str()));
        }
        if let Some(id) = self.rsid_r {
            start.push_attribute(("w:rsidR", id.to_hex().as_str()));
        }
        if let Some(id) = self.rsid_del {
            start.push_attribute(("w:rsidDel", id.to_hex().as_str()));
        }
        if let Some(id) = self.rsid_p {
            start.push_attribute(("w:rsidP", id.to_hex().as_str()));
        }
        if let Some(id) = self.rsid_r_default {
            start.push_attribute(("w:rsidRDefault", id.to_hex().as_str()));
        }

        if self.properties.is_none() && self.content.is_empty() {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            if let Some(props) = &self.properties {
                props.write_to(writer)?;
            }
            self.content.write_to(writer)?;
            writer.write_event(Event::End(BytesEnd::new("w:p")))?;
        }

        Ok(())
    }

    /// Create a new paragraph with text
    pub fn new(text: impl Into<String>) -> Self {
        let mut para = Paragraph::default();
        para.content.push(ParagraphChild::Run(Run::new(text)));
        para
    }

    /// Add a run to this paragraph
    pub fn add_run(&mut self, run: Run) {
        self.content.push(ParagraphChild::Run(run));
    }

    /// Set style
    pub fn set_style(&mut self, style: impl Into<String>) {
        self.properties.get_or_insert_with(Default::default).style = Some(style.into());
    }
}

impl ChoiceChild for ParagraphChild {
    type Kind = ParagraphChildKind;

    fn kind(&self) -> ParagraphChildKind {
        match self {
            ParagraphChild::Run(_) => ParagraphChildKind::Run,
            ParagraphChild::Hyperlink(_) => ParagraphChildKind::Hyperlink,
            ParagraphChild::SimpleField(_) => ParagraphChildKind::SimpleField,
            ParagraphChild::BookmarkStart(_) => ParagraphChildKind::BookmarkStart,
            ParagraphChild::BookmarkEnd(_) => ParagraphChildKind::BookmarkEnd,
            ParagraphChild::CommentRangeStart(_) => ParagraphChildKind::CommentRangeStart,
            ParagraphChild::CommentRangeEnd(_) => ParagraphChildKind::CommentRangeEnd,
            ParagraphChild::MoveFromRangeStart(_) => ParagraphChildKind::MoveFromRangeStart,
            ParagraphChild::MoveFromRangeEnd(_) => ParagraphChildKind::MoveFromRangeEnd,
            ParagraphChild::MoveToRangeStart(_) => ParagraphChildKind::MoveToRangeStart,
            ParagraphChild::MoveToRangeEnd(_) => ParagraphChildKind::MoveToRangeEnd,
            ParagraphChild::Insertion(_) => ParagraphChildKind::Insertion,
            ParagraphChild::Deletion(_) => ParagraphChildKind::Deletion,
            ParagraphChild::MoveFrom(_) => ParagraphChildKind::MoveFrom,
            ParagraphChild::MoveTo(_) => ParagraphChildKind::MoveTo,
            ParagraphChild::ProofError(_) => ParagraphChildKind::ProofError,
            ParagraphChild::PermStart(_) => ParagraphChildKind::PermStart,
            ParagraphChild::PermEnd(_) => ParagraphChildKind::PermEnd,
            ParagraphChild::MathBlock(_) => ParagraphChildKind::MathBlock,
            ParagraphChild::MathPara(_) => ParagraphChildKind::MathPara,
        }
    }

    fn classify(node: &XmlElement) -> Option<Result<Self>> {
        let parsed = match node.local_name() {
            "r" => Run::from_element(node).map(ParagraphChild::Run),
            "hyperlink" => Hyperlink::from_element(node).map(ParagraphChild::Hyperlink),
            "fldSimple" => SimpleField::from_element(node).map(ParagraphChild::SimpleField),
            "bookmarkStart" => {
                BookmarkStart::from_element(node).map(ParagraphChild::BookmarkStart)
            }
            "bookmarkEnd" => RangeMarker::from_element(node).map(ParagraphChild::BookmarkEnd),
            "commentRangeStart" => {
                RangeMarker::from_element(node).map(ParagraphChild::CommentRangeStart)
            }
            "commentRangeEnd" => {
                RangeMarker::from_element(node).map(ParagraphChild::CommentRangeEnd)
            }
            "moveFromRangeStart" => {
                MoveRangeStart::from_element(node).map(ParagraphChild::MoveFromRangeStart)
            }
            "moveFromRangeEnd" => {
                RangeMarker::from_element(node).map(ParagraphChild::MoveFromRangeEnd)
            }
            "moveToRangeStart" => {
                MoveRangeStart::from_element(node).map(ParagraphChild::MoveToRangeStart)
            }
            "moveToRangeEnd" => {
                RangeMarker::from_element(node).map(ParagraphChild::MoveToRangeEnd)
            }
            "ins" => RunTrackChange::from_element(node).map(ParagraphChild::Insertion),
            "del" => RunTrackChange::from_element(node).map(ParagraphChild::Deletion),
            "moveFrom" => RunTrackChange::from_element(node).map(ParagraphChild::MoveFrom),
            "moveTo" => RunTrackChange::from_element(node).map(ParagraphChild::MoveTo),
            "proofErr" => ProofError::from_element(node).map(ParagraphChild::ProofError),
            "permStart" => PermStart::from_element(node).map(ParagraphChild::PermStart),
            "permEnd" => RangeMarker::from_element(node).map(ParagraphChild::PermEnd),
            "oMath" => Ok(ParagraphChild::MathBlock(node.clone())),
            "oMathPara" => Ok(ParagraphChild::MathPara(node.clone())),
            _ => return None,
        };
        Some(parsed)
    }

    fn default_for(kind: ParagraphChildKind) -> Self {
        match kind {
            ParagraphChildKind::Run => ParagraphChild::Run(Run::default()),
            ParagraphChildKind::Hyperlink => ParagraphChild::Hyperlink(Hyperlink::default()),
            ParagraphChildKind::SimpleField => {
                ParagraphChild::SimpleField(SimpleField::default())
            }
            ParagraphChildKind::BookmarkStart => {
                ParagraphChild::BookmarkStart(BookmarkStart::default())
            }
            ParagraphChildKind::BookmarkEnd => {
                ParagraphChild::BookmarkEnd(RangeMarker::default())
            }
            ParagraphChildKind::CommentRangeStart => {
                ParagraphChild::CommentRangeStart(RangeMarker::default())
            }
            ParagraphChildKind::CommentRangeEnd => {
                ParagraphChild::CommentRangeEnd(RangeMarker::default())
            }
            ParagraphChildKind::MoveFromRangeStart => {
                ParagraphChild::MoveFromRangeStart(MoveRangeStart::default())
            }
            ParagraphChildKind::MoveFromRangeEnd => {
                ParagraphChild::MoveFromRangeEnd(RangeMarker::default())
            }
            ParagraphChildKind::MoveToRangeStart => {
                ParagraphChild::MoveToRangeStart(MoveRangeStart::default())
            }
            ParagraphChildKind::MoveToRangeEnd => {
                ParagraphChild::MoveToRangeEnd(RangeMarker::default())
            }
            ParagraphChildKind::Insertion => {
                ParagraphChild::Insertion(RunTrackChange::default())
            }
            ParagraphChildKind::Deletion => ParagraphChild::Deletion(RunTrackChange::default()),
            ParagraphChildKind::MoveFrom => ParagraphChild::MoveFrom(RunTrackChange::default()),
            ParagraphChildKind::MoveTo => ParagraphChild::MoveTo(RunTrackChange::default()),
            ParagraphChildKind::ProofError => ParagraphChild::ProofError(ProofError::default()),
            ParagraphChildKind::PermStart => ParagraphChild::PermStart(PermStart::default()),
            ParagraphChildKind::PermEnd => ParagraphChild::PermEnd(RangeMarker::default()),
            ParagraphChildKind::MathBlock => {
                ParagraphChild::MathBlock(XmlElement::new("m:oMath"))
            }
            ParagraphChildKind::MathPara => {
                ParagraphChild::MathPara(XmlElement::new("m:oMathPara"))
            }
        }
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match self {
            ParagraphChild::Run(run) => run.write_to(writer),
            ParagraphChild::Hyperlink(link) => link.write_to(writer),
            ParagraphChild::SimpleField(field) => field.write_to(writer),
            ParagraphChild::BookmarkStart(marker) => marker.write_to(writer),
            ParagraphChild::BookmarkEnd(marker) => marker.write_as("w:bookmarkEnd", writer),
            ParagraphChild::CommentRangeStart(marker) => {
                marker.write_as("w:commentRangeStart", writer)
            }
            ParagraphChild::CommentRangeEnd(marker) => {
                marker.write_as("w:commentRangeEnd", writer)
            }
            ParagraphChild::MoveFromRangeStart(marker) => {
                marker.write_as("w:moveFromRangeStart", writer)
            }
            ParagraphChild::MoveFromRangeEnd(marker) => {
                marker.write_as("w:moveFromRangeEnd", writer)
            }
            ParagraphChild::MoveToRangeStart(marker) => {
                marker.write_as("w:moveToRangeStart", writer)
            }
            ParagraphChild::MoveToRangeEnd(marker) => {
                marker.write_as("w:moveToRangeEnd", writer)
            }
            ParagraphChild::Insertion(change) => change.write_as("w:ins", writer),
            ParagraphChild::Deletion(change) => change.write_as("w:del", writer),
            ParagraphChild::MoveFrom(change) => change.write_as("w:moveFrom", writer),
            ParagraphChild::MoveTo(change) => change.write_as("w:moveTo", writer),
            ParagraphChild::ProofError(err) => err.write_to(writer),
            ParagraphChild::PermStart(perm) => perm.write_to(writer),
            ParagraphChild::PermEnd(marker) => marker.write_as("w:permEnd", writer),
            ParagraphChild::MathBlock(elem) => elem.write_as("m:oMath", writer),
            ParagraphChild::MathPara(elem) => elem.write_as("m:oMathPara", writer),
        }
    }
}

/// Parse an optional decimal marker ID, absent meaning zero
fn parse_marker_id(elem: &XmlElement) -> Result<DecimalNumber> {
    match elem.attr_ns("id") {
        Some(raw) => DecimalNumber::parse(&elem.name, "w:id", raw),
        None => Ok(DecimalNumber(0)),
    }
}

impl BookmarkStart {
    pub(crate) fn from_element(elem: &XmlElement) -> Result<Self> {
        Ok(BookmarkStart {
            id: parse_marker_id(elem)?,
            name: elem.attr_ns("name").unwrap_or_default().to_string(),
        })
    }

    pub(crate) fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("w:bookmarkStart");
        elem.push_attribute(("w:id", self.id.0.to_string().as_str()));
        elem.push_attribute(("w:name", self.name.as_str()));
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

impl RangeMarker {
    pub(crate) fn from_element(elem: &XmlElement) -> Result<Self> {
        Ok(RangeMarker {
            id: parse_marker_id(elem)?,
        })
    }

    pub(crate) fn write_as<W: Write>(&self, tag: &str, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new(tag);
        elem.push_attribute(("w:id", self.id.0.to_string().as_str()));
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

impl MoveRangeStart {
    fn from_element(elem: &XmlElement) -> Result<Self> {
        Ok(MoveRangeStart {
            id: parse_marker_id(elem)?,
            name: elem.attr_ns("name").unwrap_or_default().to_string(),
            author: elem.attr_ns("author").map(str::to_string),
            date: elem.attr_ns("date").map(str::to_string),
        })
    }

    fn write_as<W: Write>(&self, tag: &str, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new(tag);
        elem.push_attribute(("w:id", self.id.0.to_string().as_str()));
        elem.push_attribute(("w:name", self.name.as_str()));
        if let Some(author) = &self.author {
            elem.push_attribute(("w:author", author.as_str()));
        }
        if let Some(date) = &self.date {
            elem.push_attribute(("w:date", date.as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

impl ProofError {
    fn from_element(elem: &XmlElement) -> Result<Self> {
        Ok(ProofError {
            error_type: elem.attr_ns("type").unwrap_or_default().to_string(),
        })
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("w:proofErr");
        elem.push_attribute(("w:type", self.error_type.as_str()));
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

impl PermStart {
    fn from_element(elem: &XmlElement) -> Result<Self> {
        Ok(PermStart {
            id: parse_marker_id(elem)?,
            editor: elem.attr_ns("ed").map(str::to_string),
            editor_group: elem.attr_ns("edGrp").map(str::to_string),
        })
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("w:permStart");
        elem.push_attribute(("w:id", self.id.0.to_string().as_str()));
        if let Some(editor) = &self.editor {
            elem.push_attribute(("w:ed", editor.as_str()));
        }
        if let Some(group) = &self.editor_group {
            elem.push_attribute(("w:edGrp", group.as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

impl Hyperlink {
    /// Parse from an element node (w:hyperlink)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let history = match elem.attr_ns("history") {
            Some(raw) => Some(OnOff::parse_attr(&elem.name, "w:history", raw)?),
            None => None,
        };
        let mut link = Hyperlink {
            r_id: elem.attr("r:id").map(str::to_string),
            anchor: elem.attr_ns("anchor").map(str::to_string),
            tooltip: elem.attr_ns("tooltip").map(str::to_string),
            history,
            ..Default::default()
        };

        for child in elem.element_children() {
            if !link.content.parse_child(child)? {
                log::debug!(
                    "skipping unrecognized hyperlink child <{}>",
                    child.local_name()
                );
            }
        }

        Ok(link)
    }

    /// Runs directly inside this hyperlink
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.content.iter().filter_map(|c| {
            if let ParagraphChild::Run(r) = c {
                Some(r)
            } else {
                None
            }
        })
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("w:hyperlink");
        if let Some(r_id) = &self.r_id {
            start.push_attribute(("r:id", r_id.as_str()));
        }
        if let Some(anchor) = &self.anchor {
            start.push_attribute(("w:anchor", anchor.as_str()));
        }
        if let Some(tooltip) = &self.tooltip {
            start.push_attribute(("w:tooltip", tooltip.as_str()));
        }
        if let Some(history) = self.history {
            start.push_attribute(("w:history", if history.is_on() { "1" } else { "0" }));
        }

        if self.content.is_empty() {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            self.content.write_to(writer)?;
            writer.write_event(Event::End(BytesEnd::new("w:hyperlink")))?;
        }

        Ok(())
    }
}

impl SimpleField {
    /// Parse from an element node (w:fldSimple)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut field = SimpleField {
            instr: elem.attr_ns("instr").unwrap_or_default().to_string(),
            ..Default::default()
        };

        for child in elem.element_children() {
            if !field.content.parse_child(child)? {
                log::debug!(
                    "skipping unrecognized field child <{}>",
                    child.local_name()
                );
            }
        }

        Ok(field)
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("w:fldSimple");
        start.push_attribute(("w:instr", self.instr.as_str()));

        if self.content.is_empty() {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            self.content.write_to(writer)?;
            writer.write_event(Event::End(BytesEnd::new("w:fldSimple")))?;
        }

        Ok(())
    }
}

/// Numbering binding (w:numPr)
#[derive(Clone, Debug, Default)]
pub struct NumberingProperties {
    /// Level within the numbering definition (w:ilvl)
    pub level: Option<u32>,
    /// Numbering definition ID (w:numId)
    pub num_id: Option<u32>,
}

impl NumberingProperties {
    pub(crate) fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut props = NumberingProperties::default();
        for e in elem.element_children() {
            match e.local_name() {
                "ilvl" => {
                    if let Some(raw) = e.w_val() {
                        props.level =
                            Some(crate::document::types::parse_number(&e.name, "w:val", raw)?);
                    }
                }
                "numId" => {
                    if let Some(raw) = e.w_val() {
                        props.num_id =
                            Some(crate::document::types::parse_number(&e.name, "w:val", raw)?);
                    }
                }
                _ => {}
            }
        }
        Ok(props)
    }

    pub(crate) fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        if self.level.is_none() && self.num_id.is_none() {
            return Ok(());
        }
        writer.write_event(Event::Start(BytesStart::new("w:numPr")))?;
        if let Some(level) = self.level {
            write_val_element("w:ilvl", &level.to_string(), writer)?;
        }
        if let Some(num_id) = self.num_id {
            write_val_element("w:numId", &num_id.to_string(), writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:numPr")))?;
        Ok(())
    }
}

/// Custom tab stop (w:tab inside w:tabs)
#[derive(Clone, Debug, Default)]
pub struct TabStop {
    /// Tab kind (left, center, right, decimal, bar, clear)
    pub val: String,
    /// Position in twips
    pub pos: SignedTwips,
    /// Leader character
    pub leader: Option<String>,
}

impl TabStop {
    pub(crate) fn parse_list(tabs: &XmlElement) -> Result<Vec<Self>> {
        let mut list = Vec::new();
        for e in tabs.element_children() {
            if e.local_name() != "tab" {
                continue;
            }
            let pos = match e.attr_ns("pos") {
                Some(raw) => SignedTwips::parse(&e.name, "w:pos", raw)?,
                None => SignedTwips(0),
            };
            list.push(TabStop {
                val: e.w_val().unwrap_or("left").to_string(),
                pos,
                leader: e.attr_ns("leader").map(str::to_string),
            });
        }
        Ok(list)
    }

    pub(crate) fn write_list<W: Write>(list: &[Self], writer: &mut Writer<W>) -> Result<()> {
        if list.is_empty() {
            return Ok(());
        }
        writer.write_event(Event::Start(BytesStart::new("w:tabs")))?;
        for tab in list {
            let mut elem = BytesStart::new("w:tab");
            elem.push_attribute(("w:val", tab.val.as_str()));
            if let Some(leader) = &tab.leader {
                elem.push_attribute(("w:leader", leader.as_str()));
            }
            elem.push_attribute(("w:pos", tab.pos.0.to_string().as_str()));
            writer.write_event(Event::Empty(elem))?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:tabs")))?;
        Ok(())
    }
}

/// Inter-paragraph spacing (w:spacing)
#[derive(Clone, Debug, Default)]
pub struct Spacing {
    /// Space above (twips)
    pub before: Option<TwipsMeasure>,
    /// Space below (twips)
    pub after: Option<TwipsMeasure>,
    /// Line height value
    pub line: Option<DecimalNumber>,
    /// Line height rule (auto, exact, atLeast)
    pub line_rule: Option<String>,
}

impl Spacing {
    pub(crate) fn from_element(elem: &XmlElement) -> Result<Self> {
        let before = match elem.attr_ns("before") {
            Some(raw) => Some(TwipsMeasure::parse(&elem.name, "w:before", raw)?),
            None => None,
        };
        let after = match elem.attr_ns("after") {
            Some(raw) => Some(TwipsMeasure::parse(&elem.name, "w:after", raw)?),
            None => None,
        };
        let line = match elem.attr_ns("line") {
            Some(raw) => Some(DecimalNumber::parse(&elem.name, "w:line", raw)?),
            None => None,
        };
        Ok(Spacing {
            before,
            after,
            line,
            line_rule: elem.attr_ns("lineRule").map(str::to_string),
        })
    }

    pub(crate) fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("w:spacing");
        if let Some(before) = self.before {
            elem.push_attribute(("w:before", before.0.to_string().as_str()));
        }
        if let Some(after) = self.after {
            elem.push_attribute(("w:after", after.0.to_string().as_str()));
        }
        if let Some(line) = self.line {
            elem.push_attribute(("w:line", line.0.to_string().as_str()));
        }
        if let Some(rule) = &self.line_rule {
            elem.push_attribute(("w:lineRule", rule.as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

/// Paragraph indentation (w:ind)
#[derive(Clone, Debug, Default)]
pub struct Indentation {
    /// Left indent (twips)
    pub left: Option<SignedTwips>,
    /// Right indent (twips)
    pub right: Option<SignedTwips>,
    /// Hanging indent (twips)
    pub hanging: Option<SignedTwips>,
    /// First-line indent (twips)
    pub first_line: Option<SignedTwips>,
}

impl Indentation {
    pub(crate) fn from_element(elem: &XmlElement) -> Result<Self> {
        let parse = |attr: &str| -> Result<Option<SignedTwips>> {
            match elem.attr_ns(attr) {
                Some(raw) => SignedTwips::parse(&elem.name, &format!("w:{attr}"), raw).map(Some),
                None => Ok(None),
            }
        };
        Ok(Indentation {
            left: parse("left")?,
            right: parse("right")?,
            hanging: parse("hanging")?,
            first_line: parse("firstLine")?,
        })
    }

    pub(crate) fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("w:ind");
        if let Some(left) = self.left {
            elem.push_attribute(("w:left", left.0.to_string().as_str()));
        }
        if let Some(right) = self.right {
            elem.push_attribute(("w:right", right.0.to_string().as_str()));
        }
        if let Some(hanging) = self.hanging {
            elem.push_attribute(("w:hanging", hanging.0.to_string().as_str()));
        }
        if let Some(first_line) = self.first_line {
            elem.push_attribute(("w:firstLine", first_line.0.to_string().as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

/// Paragraph properties (w:pPr)
#[derive(Clone, Debug, Default)]
pub struct ParagraphProperties {
    /// Style ID
    pub style: Option<String>,
    /// Keep with next paragraph
    pub keep_next: Option<OnOff>,
    /// Keep lines together
    pub keep_lines: Option<OnOff>,
    /// Page break before
    pub page_break_before: Option<OnOff>,
    /// Widow/orphan control
    pub widow_control: Option<OnOff>,
    /// Numbering binding
    pub numbering: Option<NumberingProperties>,
    /// Suppress line numbers
    pub suppress_line_numbers: Option<OnOff>,
    /// Custom tab stops
    pub tabs: Vec<TabStop>,
    /// Inter-paragraph spacing
    pub spacing: Option<Spacing>,
    /// Indentation
    pub indentation: Option<Indentation>,
    /// Ignore spacing between same-style paragraphs
    pub contextual_spacing: Option<OnOff>,
    /// Justification/alignment
    pub justification: Option<String>,
    /// Outline level (for headings)
    pub outline_level: Option<u8>,
    /// Paragraph mark run properties
    pub mark_properties: Option<RunProperties>,
    /// Tracked change of these properties (w:pPrChange)
    pub change: Option<ParagraphPropertiesChange>,
}

impl ParagraphProperties {
    /// Parse from an element node (w:pPr)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut props = ParagraphProperties::default();

        for e in elem.element_children() {
            match e.local_name() {
                "pStyle" => props.style = e.w_val().map(str::to_string),
                "keepNext" => props.keep_next = Some(OnOff::parse(e)?),
                "keepLines" => props.keep_lines = Some(OnOff::parse(e)?),
                "pageBreakBefore" => props.page_break_before = Some(OnOff::parse(e)?),
                "widowControl" => props.widow_control = Some(OnOff::parse(e)?),
                "numPr" => props.numbering = Some(NumberingProperties::from_element(e)?),
                "suppressLineNumbers" => {
                    props.suppress_line_numbers = Some(OnOff::parse(e)?)
                }
                "tabs" => props.tabs = TabStop::parse_list(e)?,
                "spacing" => props.spacing = Some(Spacing::from_element(e)?),
                "ind" => props.indentation = Some(Indentation::from_element(e)?),
                "contextualSpacing" => props.contextual_spacing = Some(OnOff::parse(e)?),
                "jc" => props.justification = e.w_val().map(str::to_string),
                "outlineLvl" => {
                    props.outline_level = match e.w_val() {
                        Some(raw) => {
                            Some(crate::document::types::parse_number(&e.name, "w:val", raw)?)
                        }
                        None => None,
                    };
                }
                "rPr" => props.mark_properties = Some(RunProperties::from_element(e)?),
                "pPrChange" => {
                    props.change = Some(ParagraphPropertiesChange::from_element(e)?);
                }
                other => {
                    log::debug!("skipping unrecognized paragraph property <{other}>");
                }
            }
        }

        Ok(props)
    }

    fn has_content(&self) -> bool {
        self.style.is_some()
            || self.keep_next.is_some()
            || self.keep_lines.is_some()
            || self.page_break_before.is_some()
            || self.widow_control.is_some()
            || self.numbering.is_some()
            || self.suppress_line_numbers.is_some()
            || !self.tabs.is_empty()
            || self.spacing.is_some()
            || self.indentation.is_some()
            || self.contextual_spacing.is_some()
            || self.justification.is_some()
            || self.outline_level.is_some()
            || self.mark_properties.is_some()
            || self.change.is_some()
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        if !self.has_content() {
            return Ok(());
        }

        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;

        if let Some(style) = &self.style {
            write_val_element("w:pStyle", style, writer)?;
        }
        if let Some(flag) = self.keep_next {
            flag.write_element("w:keepNext", writer)?;
        }
        if let Some(flag) = self.keep_lines {
            flag.write_element("w:keepLines", writer)?;
        }
        if let Some(flag) = self.page_break_before {
            flag.write_element("w:pageBreakBefore", writer)?;
        }
        if let Some(flag) = self.widow_control {
            flag.write_element("w:widowControl", writer)?;
        }
        if let Some(numbering) = &self.numbering {
            numbering.write_to(writer)?;
        }
        if let Some(flag) = self.suppress_line_numbers {
            flag.write_element("w:suppressLineNumbers", writer)?;
        }
        TabStop::write_list(&self.tabs, writer)?;
        if let Some(spacing) = &self.spacing {
            spacing.write_to(writer)?;
        }
        if let Some(ind) = &self.indentation {
            ind.write_to(writer)?;
        }
        if let Some(flag) = self.contextual_spacing {
            flag.write_element("w:contextualSpacing", writer)?;
        }
        if let Some(jc) = &self.justification {
            write_val_element("w:jc", jc, writer)?;
        }
        if let Some(level) = self.outline_level {
            write_val_element("w:outlineLvl", &level.to_string(), writer)?;
        }
        if let Some(mark) = &self.mark_properties {
            mark.write_to(writer)?;
        }
        if let Some(change) = &self.change {
            change.write_to(writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        Ok(())
    }
}
