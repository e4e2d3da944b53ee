//! Revision tracking: tracked-content wrappers and original-formatting capture

use crate::document::choice::ChoiceGroup;
use crate::document::paragraph::{
    Indentation, NumberingProperties, ParagraphChild, Spacing, TabStop,
};
use crate::document::run::{Color, Underline};
use crate::document::types::{write_val_element, DecimalNumber, HalfPoints, OnOff, SignedTwips};
use crate::error::Result;
use crate::xml::XmlElement;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Attribute triple shared by every revision element: numeric id, author,
/// optional timestamp
#[derive(Clone, Debug, Default)]
pub struct TrackChange {
    /// Revision ID
    pub id: DecimalNumber,
    /// Author name
    pub author: String,
    /// ISO timestamp
    pub date: Option<String>,
}

impl TrackChange {
    /// Parse the shared attributes off a revision element
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let id = match elem.attr_ns("id") {
            Some(raw) => DecimalNumber::parse(&elem.name, "w:id", raw)?,
            None => DecimalNumber(0),
        };
        Ok(TrackChange {
            id,
            author: elem.attr_ns("author").unwrap_or_default().to_string(),
            date: elem.attr_ns("date").map(str::to_string),
        })
    }

    /// Push the shared attributes onto an opening tag
    pub(crate) fn push_attrs(&self, start: &mut BytesStart) {
        start.push_attribute(("w:id", self.id.0.to_string().as_str()));
        start.push_attribute(("w:author", self.author.as_str()));
        if let Some(date) = &self.date {
            start.push_attribute(("w:date", date.as_str()));
        }
    }

    /// Emit as an empty marker element (`<w:ins w:id=".." w:author=".."/>`)
    pub(crate) fn write_marker<W: Write>(&self, tag: &str, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(tag);
        self.push_attrs(&mut start);
        writer.write_event(Event::Empty(start))?;
        Ok(())
    }
}

/// Tracked run-level content wrapper, the payload of `w:ins`, `w:del`,
/// `w:moveFrom` and `w:moveTo` inside a paragraph. One concrete type serves
/// all four kinds; the paragraph entry's discriminant picks the tag.
#[derive(Clone, Debug, Default)]
pub struct RunTrackChange {
    /// Revision attributes
    pub change: TrackChange,
    /// Wrapped paragraph content
    pub content: ChoiceGroup<ParagraphChild>,
}

impl RunTrackChange {
    /// Parse from an element node
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut wrapper = RunTrackChange {
            change: TrackChange::from_element(elem)?,
            ..Default::default()
        };

        for child in elem.element_children() {
            if !wrapper.content.parse_child(child)? {
                log::debug!(
                    "skipping unrecognized tracked-content child <{}>",
                    child.local_name()
                );
            }
        }

        Ok(wrapper)
    }

    /// Write under the tag registered for the entry's kind
    pub fn write_as<W: Write>(&self, tag: &str, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(tag);
        self.change.push_attrs(&mut start);

        if self.content.is_empty() {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            self.content.write_to(writer)?;
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }

        Ok(())
    }
}

/// Original run formatting captured by a tracked formatting change.
///
/// Unlike a live [`crate::document::RunProperties`], every property here is a
/// list: the markup may repeat a property name, and each occurrence is
/// appended in parse order (an append log per property). Cross-property
/// interleaving from the source markup is deliberately not retained; on
/// write each list is flattened in the declared property order below, after
/// the four singleton revision markers.
#[derive(Clone, Debug, Default)]
pub struct PreviousRunProperties {
    /// Insertion marker (last wins when repeated)
    pub insertion: Option<TrackChange>,
    /// Deletion marker (last wins when repeated)
    pub deletion: Option<TrackChange>,
    /// Move-source marker (last wins when repeated)
    pub move_from: Option<TrackChange>,
    /// Move-destination marker (last wins when repeated)
    pub move_to: Option<TrackChange>,

    pub bold: Vec<OnOff>,
    pub bold_cs: Vec<OnOff>,
    pub italic: Vec<OnOff>,
    pub italic_cs: Vec<OnOff>,
    pub caps: Vec<OnOff>,
    pub small_caps: Vec<OnOff>,
    pub strike: Vec<OnOff>,
    pub double_strike: Vec<OnOff>,
    pub vanish: Vec<OnOff>,
    pub color: Vec<Color>,
    pub spacing: Vec<SignedTwips>,
    pub size: Vec<HalfPoints>,
    pub size_cs: Vec<HalfPoints>,
    pub highlight: Vec<String>,
    pub underline: Vec<Underline>,
    pub vertical_align: Vec<String>,
}

impl PreviousRunProperties {
    /// Parse from an element node (the w:rPr inside a change record)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut props = PreviousRunProperties::default();

        for e in elem.element_children() {
            match e.local_name() {
                "ins" => props.insertion = Some(TrackChange::from_element(e)?),
                "del" => props.deletion = Some(TrackChange::from_element(e)?),
                "moveFrom" => props.move_from = Some(TrackChange::from_element(e)?),
                "moveTo" => props.move_to = Some(TrackChange::from_element(e)?),
                "b" => props.bold.push(OnOff::parse(e)?),
                "bCs" => props.bold_cs.push(OnOff::parse(e)?),
                "i" => props.italic.push(OnOff::parse(e)?),
                "iCs" => props.italic_cs.push(OnOff::parse(e)?),
                "caps" => props.caps.push(OnOff::parse(e)?),
                "smallCaps" => props.small_caps.push(OnOff::parse(e)?),
                "strike" => props.strike.push(OnOff::parse(e)?),
                "dstrike" => props.double_strike.push(OnOff::parse(e)?),
                "vanish" => props.vanish.push(OnOff::parse(e)?),
                "color" => props.color.push(Color {
                    val: e.w_val().unwrap_or("auto").to_string(),
                    theme_color: e.attr_ns("themeColor").map(str::to_string),
                }),
                "spacing" => {
                    if let Some(v) = SignedTwips::parse_val(e)? {
                        props.spacing.push(v);
                    }
                }
                "sz" => {
                    if let Some(v) = HalfPoints::parse_val(e)? {
                        props.size.push(v);
                    }
                }
                "szCs" => {
                    if let Some(v) = HalfPoints::parse_val(e)? {
                        props.size_cs.push(v);
                    }
                }
                "highlight" => {
                    if let Some(v) = e.w_val() {
                        props.highlight.push(v.to_string());
                    }
                }
                "u" => props.underline.push(Underline {
                    val: e.w_val().unwrap_or("single").to_string(),
                    color: e.attr_ns("color").map(str::to_string),
                }),
                "vertAlign" => {
                    if let Some(v) = e.w_val() {
                        props.vertical_align.push(v.to_string());
                    }
                }
                other => {
                    log::debug!("skipping unrecognized previous run property <{other}>");
                }
            }
        }

        Ok(props)
    }

    fn is_empty(&self) -> bool {
        self.insertion.is_none()
            && self.deletion.is_none()
            && self.move_from.is_none()
            && self.move_to.is_none()
            && self.bold.is_empty()
            && self.bold_cs.is_empty()
            && self.italic.is_empty()
            && self.italic_cs.is_empty()
            && self.caps.is_empty()
            && self.small_caps.is_empty()
            && self.strike.is_empty()
            && self.double_strike.is_empty()
            && self.vanish.is_empty()
            && self.color.is_empty()
            && self.spacing.is_empty()
            && self.size.is_empty()
            && self.size_cs.is_empty()
            && self.highlight.is_empty()
            && self.underline.is_empty()
            && self.vertical_align.is_empty()
    }

    /// Write as a `w:rPr` element: markers first, then each property's list
    /// flattened in declared order
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        if self.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new("w:rPr")))?;
            return Ok(());
        }

        writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;

        if let Some(marker) = &self.insertion {
            marker.write_marker("w:ins", writer)?;
        }
        if let Some(marker) = &self.deletion {
            marker.write_marker("w:del", writer)?;
        }
        if let Some(marker) = &self.move_from {
            marker.write_marker("w:moveFrom", writer)?;
        }
        if let Some(marker) = &self.move_to {
            marker.write_marker("w:moveTo", writer)?;
        }

        for flag in &self.bold {
            flag.write_element_explicit("w:b", writer)?;
        }
        for flag in &self.bold_cs {
            flag.write_element_explicit("w:bCs", writer)?;
        }
        for flag in &self.italic {
            flag.write_element_explicit("w:i", writer)?;
        }
        for flag in &self.italic_cs {
            flag.write_element_explicit("w:iCs", writer)?;
        }
        for flag in &self.caps {
            flag.write_element_explicit("w:caps", writer)?;
        }
        for flag in &self.small_caps {
            flag.write_element_explicit("w:smallCaps", writer)?;
        }
        for flag in &self.strike {
            flag.write_element_explicit("w:strike", writer)?;
        }
        for flag in &self.double_strike {
            flag.write_element_explicit("w:dstrike", writer)?;
        }
        for flag in &self.vanish {
            flag.write_element_explicit("w:vanish", writer)?;
        }
        for color in &self.color {
            color.write_to(writer)?;
        }
        for spacing in &self.spacing {
            write_val_element("w:spacing", &spacing.0.to_string(), writer)?;
        }
        for size in &self.size {
            write_val_element("w:sz", &size.0.to_string(), writer)?;
        }
        for size in &self.size_cs {
            write_val_element("w:szCs", &size.0.to_string(), writer)?;
        }
        for highlight in &self.highlight {
            write_val_element("w:highlight", highlight, writer)?;
        }
        for underline in &self.underline {
            underline.write_to(writer)?;
        }
        for valign in &self.vertical_align {
            write_val_element("w:vertAlign", valign, writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
        Ok(())
    }
}

/// Tracked change of run formatting (w:rPrChange)
#[derive(Clone, Debug, Default)]
pub struct RunPropertiesChange {
    /// Revision attributes
    pub change: TrackChange,
    /// The formatting before the change
    pub previous: PreviousRunProperties,
}

impl RunPropertiesChange {
    /// Parse from an element node (w:rPrChange)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut record = RunPropertiesChange {
            change: TrackChange::from_element(elem)?,
            ..Default::default()
        };

        for child in elem.element_children() {
            match child.local_name() {
                "rPr" => {
                    record.previous = PreviousRunProperties::from_element(child)?;
                }
                other => {
                    log::debug!("skipping unrecognized rPrChange child <{other}>");
                }
            }
        }

        Ok(record)
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("w:rPrChange");
        self.change.push_attrs(&mut start);
        writer.write_event(Event::Start(start))?;
        self.previous.write_to(writer)?;
        writer.write_event(Event::End(BytesEnd::new("w:rPrChange")))?;
        Ok(())
    }
}

/// Original paragraph formatting captured by a tracked formatting change.
///
/// A fixed-shape trimmed copy of the live paragraph properties: no mark run
/// properties and no nested change record.
#[derive(Clone, Debug, Default)]
pub struct PreviousParagraphProperties {
    pub style: Option<String>,
    pub keep_next: Option<OnOff>,
    pub keep_lines: Option<OnOff>,
    pub page_break_before: Option<OnOff>,
    pub widow_control: Option<OnOff>,
    pub numbering: Option<NumberingProperties>,
    pub suppress_line_numbers: Option<OnOff>,
    pub tabs: Vec<TabStop>,
    pub spacing: Option<Spacing>,
    pub indentation: Option<Indentation>,
    pub contextual_spacing: Option<OnOff>,
    pub justification: Option<String>,
    pub outline_level: Option<u8>,
}

impl PreviousParagraphProperties {
    /// Parse from an element node (the w:pPr inside w:pPrChange)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut props = PreviousParagraphProperties::default();

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
                other => {
                    log::debug!("skipping unrecognized previous paragraph property <{other}>");
                }
            }
        }

        Ok(props)
    }

    /// Write as a `w:pPr` element
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
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

        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        Ok(())
    }
}

/// Tracked change of paragraph formatting (w:pPrChange)
#[derive(Clone, Debug, Default)]
pub struct ParagraphPropertiesChange {
    /// Revision attributes
    pub change: TrackChange,
    /// The formatting before the change
    pub previous: PreviousParagraphProperties,
}

impl ParagraphPropertiesChange {
    /// Parse from an element node (w:pPrChange)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut record = ParagraphPropertiesChange {
            change: TrackChange::from_element(elem)?,
            ..Default::default()
        };

        for child in elem.element_children() {
            match child.local_name() {
                "pPr" => {
                    record.previous = PreviousParagraphProperties::from_element(child)?;
                }
                other => {
                    log::debug!("skipping unrecognized pPrChange child <{other}>");
                }
            }
        }

        Ok(record)
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("w:pPrChange");
        self.change.push_attrs(&mut start);
        writer.write_event(Event::Start(start))?;
        self.previous.write_to(writer)?;
        writer.write_event(Event::End(BytesEnd::new("w:pPrChange")))?;
        Ok(())
    }
}
