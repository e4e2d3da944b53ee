//! Run element (w:r) - a contiguous run of text with uniform formatting

use crate::document::choice::{ChoiceChild, ChoiceGroup};
use crate::document::revision::RunPropertiesChange;
use crate::document::types::{
    parse_rsid, write_val_element, DecimalNumber, HalfPoints, HexId, OnOff, SignedTwips,
};
use crate::error::Result;
use crate::xml::XmlElement;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Run element (w:r)
#[derive(Clone, Debug, Default)]
pub struct Run {
    /// Run properties
    pub properties: Option<RunProperties>,
    /// Run content, in document order
    pub content: ChoiceGroup<RunChild>,
    /// Revision-save ID of the run properties
    pub rsid_rpr: Option<HexId>,
    /// Revision-save ID of the deletion
    pub rsid_del: Option<HexId>,
    /// Revision-save ID of the run
    pub rsid_r: Option<HexId>,
}

/// Child kinds legal inside a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunChildKind {
    Text,
    Tab,
    Break,
    CarriageReturn,
    SoftHyphen,
    NoBreakHyphen,
    Symbol,
    FieldChar,
    InstrText,
    LastRenderedPageBreak,
    Drawing,
    PositionalTab,
}

/// Content within a run.
///
/// `Text` and `InstrText` share the [`TextRun`] payload; the stored kind
/// decides whether `w:t` or `w:instrText` is emitted.
#[derive(Clone, Debug)]
pub enum RunChild {
    /// Text (w:t)
    Text(TextRun),
    /// Tab (w:tab)
    Tab,
    /// Break (w:br)
    Break(Break),
    /// Carriage return (w:cr)
    CarriageReturn,
    /// Soft hyphen
    SoftHyphen,
    /// Non-breaking hyphen
    NoBreakHyphen,
    /// Symbol character (w:sym)
    Symbol(Symbol),
    /// Field character (w:fldChar)
    FieldChar(FieldChar),
    /// Field instruction text (w:instrText)
    InstrText(TextRun),
    /// Rendered page-break marker (w:lastRenderedPageBreak)
    LastRenderedPageBreak,
    /// Drawing subtree, kept opaque (w:drawing)
    Drawing(XmlElement),
    /// Positional tab (w:ptab)
    PositionalTab(PositionalTab),
}

/// Literal text content
#[derive(Clone, Debug, Default)]
pub struct TextRun {
    /// The text value
    pub text: String,
}

/// Break element (w:br)
#[derive(Clone, Debug, Default)]
pub struct Break {
    /// Break type
    pub break_type: BreakType,
    /// Restart location for text-wrapping breaks
    pub clear: Option<String>,
}

/// Break type
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BreakType {
    #[default]
    TextWrapping,
    Page,
    Column,
    /// Other value (preserved as string)
    Other(String),
}

impl BreakType {
    /// Convert to the schema string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BreakType::TextWrapping => None,
            BreakType::Page => Some("page"),
            BreakType::Column => Some("column"),
            BreakType::Other(s) => Some(s),
        }
    }
}

/// Symbol character (w:sym)
#[derive(Clone, Debug, Default)]
pub struct Symbol {
    /// Symbol font
    pub font: Option<String>,
    /// Character code (hex)
    pub char_code: Option<u32>,
}

/// Field character (w:fldChar)
#[derive(Clone, Debug)]
pub struct FieldChar {
    /// begin, separate or end
    pub char_type: String,
    /// Field locked against recalculation
    pub locked: Option<OnOff>,
}

impl Default for FieldChar {
    fn default() -> Self {
        Self {
            char_type: "begin".to_string(),
            locked: None,
        }
    }
}

/// Positional tab (w:ptab)
#[derive(Clone, Debug, Default)]
pub struct PositionalTab {
    pub alignment: Option<String>,
    pub relative_to: Option<String>,
    pub leader: Option<String>,
}

impl Run {
    /// Parse from an element node (w:r)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut run = Run {
            rsid_rpr: parse_rsid(elem, "rsidRPr")?,
            rsid_del: parse_rsid(elem, "rsidDel")?,
            rsid_r: parse_rsid(elem, "rsidR")?,
            ..Default::default()
        };

        for child in elem.element_children() {
            if run.content.parse_child(child)? {
                continue;
            }
            match child.local_name() {
                "rPr" => {
                    run.properties = Some(RunProperties::from_element(child)?);
                }
                other => {
                    log::debug!("skipping unrecognized run child <{other}>");
                }
            }
        }

        Ok(run)
    }

    /// Get all text in this run
    pub fn text(&self) -> String {
        let mut result = String::new();
        for content in &self.content {
            match content {
                RunChild::Text(t) => result.push_str(&t.text),
                RunChild::Tab => result.push('\t'),
                RunChild::Break(b) if b.break_type == BreakType::TextWrapping => {
                    result.push('\n');
                }
                RunChild::CarriageReturn => result.push('\n'),
                _ => {}
            }
        }
        result
    }

    /// Check if bold
    pub fn bold(&self) -> bool {
        self.properties
            .as_ref()
            .and_then(|p| p.bold)
            .map(|b| b.is_on())
            .unwrap_or(false)
    }

    /// Check if italic
    pub fn italic(&self) -> bool {
        self.properties
            .as_ref()
            .and_then(|p| p.italic)
            .map(|i| i.is_on())
            .unwrap_or(false)
    }

    /// Get font size in points (None if not specified)
    pub fn font_size_pt(&self) -> Option<f32> {
        self.properties.as_ref()?.size.map(|s| s.points())
    }

    /// Get color (RGB hex string)
    pub fn color(&self) -> Option<&str> {
        self.properties.as_ref()?.color.as_ref().map(|c| c.val.as_str())
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("w:r");
        if let Some(id) = self.rsid_rpr {
            start.push_attribute(("w:rsidRPr", id.to_hex().as_str()));
        }
        if let Some(id) = self.rsid_del {
            start.push_attribute(("w:rsidDel", id.to_hex().as_str()));
        }
        if let Some(id) = self.rsid_r {
            start.push_attribute(("w:rsidR", id.to_hex().as_str()));
        }

        if self.properties.is_none() && self.content.is_empty() {
            writer.write_event(Event::Empty(start))?;
        } else {
            writer.write_event(Event::Start(start))?;
            if let Some(props) = &self.properties {
                props.write_to(writer)?;
            }
            self.content.write_to(writer)?;
            writer.write_event(Event::End(BytesEnd::new("w:r")))?;
        }

        Ok(())
    }

    /// Create a new run with text
    pub fn new(text: impl Into<String>) -> Self {
        let mut run = Run::default();
        run.content.push(RunChild::Text(TextRun {
            text: text.into(),
        }));
        run
    }

    /// Append a text segment to this run
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.content.push(RunChild::Text(TextRun {
            text: text.into(),
        }));
    }

    /// Set bold
    pub fn set_bold(&mut self, bold: bool) {
        self.properties.get_or_insert_with(Default::default).bold = Some(OnOff(bold));
    }

    /// Set italic
    pub fn set_italic(&mut self, italic: bool) {
        self.properties.get_or_insert_with(Default::default).italic = Some(OnOff(italic));
    }

    /// Set font size in points
    pub fn set_font_size_pt(&mut self, size: f32) {
        self.properties.get_or_insert_with(Default::default).size =
            Some(HalfPoints((size * 2.0) as u32));
    }
}

impl ChoiceChild for RunChild {
    type Kind = RunChildKind;

    fn kind(&self) -> RunChildKind {
        match self {
            RunChild::Text(_) => RunChildKind::Text,
            RunChild::Tab => RunChildKind::Tab,
            RunChild::Break(_) => RunChildKind::Break,
            RunChild::CarriageReturn => RunChildKind::CarriageReturn,
            RunChild::SoftHyphen => RunChildKind::SoftHyphen,
            RunChild::NoBreakHyphen => RunChildKind::NoBreakHyphen,
            RunChild::Symbol(_) => RunChildKind::Symbol,
            RunChild::FieldChar(_) => RunChildKind::FieldChar,
            RunChild::InstrText(_) => RunChildKind::InstrText,
            RunChild::LastRenderedPageBreak => RunChildKind::LastRenderedPageBreak,
            RunChild::Drawing(_) => RunChildKind::Drawing,
            RunChild::PositionalTab(_) => RunChildKind::PositionalTab,
        }
    }

    fn classify(node: &XmlElement) -> Option<Result<Self>> {
        let parsed = match node.local_name() {
            "t" => Ok(RunChild::Text(TextRun::from_element(node))),
            "tab" => Ok(RunChild::Tab),
            "br" => Break::from_element(node).map(RunChild::Break),
            "cr" => Ok(RunChild::CarriageReturn),
            "softHyphen" => Ok(RunChild::SoftHyphen),
            "noBreakHyphen" => Ok(RunChild::NoBreakHyphen),
            "sym" => Symbol::from_element(node).map(RunChild::Symbol),
            "fldChar" => FieldChar::from_element(node).map(RunChild::FieldChar),
            "instrText" => Ok(RunChild::InstrText(TextRun::from_element(node))),
            "lastRenderedPageBreak" => Ok(RunChild::LastRenderedPageBreak),
            "drawing" => Ok(RunChild::Drawing(node.clone())),
            "ptab" => Ok(RunChild::PositionalTab(PositionalTab::from_element(node))),
            _ => return None,
        };
        Some(parsed)
    }

    fn default_for(kind: RunChildKind) -> Self {
        match kind {
            RunChildKind::Text => RunChild::Text(TextRun::default()),
            RunChildKind::Tab => RunChild::Tab,
            RunChildKind::Break => RunChild::Break(Break::default()),
            RunChildKind::CarriageReturn => RunChild::CarriageReturn,
            RunChildKind::SoftHyphen => RunChild::SoftHyphen,
            RunChildKind::NoBreakHyphen => RunChild::NoBreakHyphen,
            RunChildKind::Symbol => RunChild::Symbol(Symbol::default()),
            RunChildKind::FieldChar => RunChild::FieldChar(FieldChar::default()),
            RunChildKind::InstrText => RunChild::InstrText(TextRun::default()),
            RunChildKind::LastRenderedPageBreak => RunChild::LastRenderedPageBreak,
            RunChildKind::Drawing => RunChild::Drawing(XmlElement::new("w:drawing")),
            RunChildKind::PositionalTab => {
                RunChild::PositionalTab(PositionalTab::default())
            }
        }
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match self {
            RunChild::Text(t) => t.write_as("w:t", writer),
            RunChild::Tab => {
                writer.write_event(Event::Empty(BytesStart::new("w:tab")))?;
                Ok(())
            }
            RunChild::Break(b) => b.write_to(writer),
            RunChild::CarriageReturn => {
                writer.write_event(Event::Empty(BytesStart::new("w:cr")))?;
                Ok(())
            }
            RunChild::SoftHyphen => {
                writer.write_event(Event::Empty(BytesStart::new("w:softHyphen")))?;
                Ok(())
            }
            RunChild::NoBreakHyphen => {
                writer.write_event(Event::Empty(BytesStart::new("w:noBreakHyphen")))?;
                Ok(())
            }
            RunChild::Symbol(s) => s.write_to(writer),
            RunChild::FieldChar(f) => f.write_to(writer),
            RunChild::InstrText(t) => t.write_as("w:instrText", writer),
            RunChild::LastRenderedPageBreak => {
                writer.write_event(Event::Empty(BytesStart::new(
                    "w:lastRenderedPageBreak",
                )))?;
                Ok(())
            }
            RunChild::Drawing(elem) => elem.write_as("w:drawing", writer),
            RunChild::PositionalTab(p) => p.write_to(writer),
        }
    }
}

impl TextRun {
    fn from_element(elem: &XmlElement) -> Self {
        TextRun { text: elem.text() }
    }

    fn write_as<W: Write>(&self, tag: &str, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(tag);
        // Preserve space if text has leading/trailing whitespace
        if self.text.starts_with(' ') || self.text.ends_with(' ') || self.text.contains("  ") {
            start.push_attribute(("xml:space", "preserve"));
        }
        writer.write_event(Event::Start(start))?;
        writer.write_event(Event::Text(BytesText::new(&self.text)))?;
        writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }
}

impl Break {
    fn from_element(elem: &XmlElement) -> Result<Self> {
        let break_type = match elem.attr_ns("type") {
            None => BreakType::TextWrapping,
            Some("page") => BreakType::Page,
            Some("column") => BreakType::Column,
            Some("textWrapping") => BreakType::TextWrapping,
            Some(other) => BreakType::Other(other.to_string()),
        };
        Ok(Break {
            break_type,
            clear: elem.attr_ns("clear").map(str::to_string),
        })
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("w:br");
        if let Some(t) = self.break_type.as_str() {
            start.push_attribute(("w:type", t));
        }
        if let Some(clear) = &self.clear {
            start.push_attribute(("w:clear", clear.as_str()));
        }
        writer.write_event(Event::Empty(start))?;
        Ok(())
    }
}

impl Symbol {
    fn from_element(elem: &XmlElement) -> Result<Self> {
        let char_code = match elem.attr_ns("char") {
            Some(raw) => Some(
                u32::from_str_radix(raw, 16)
                    .map_err(|_| crate::error::Error::scalar(&elem.name, "w:char", raw))?,
            ),
            None => None,
        };
        Ok(Symbol {
            font: elem.attr_ns("font").map(str::to_string),
            char_code,
        })
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("w:sym");
        if let Some(font) = &self.font {
            start.push_attribute(("w:font", font.as_str()));
        }
        if let Some(code) = self.char_code {
            start.push_attribute(("w:char", format!("{code:04X}").as_str()));
        }
        writer.write_event(Event::Empty(start))?;
        Ok(())
    }
}

impl FieldChar {
    fn from_element(elem: &XmlElement) -> Result<Self> {
        let locked = match elem.attr_ns("fldLock") {
            Some(raw) => Some(OnOff::parse_attr(&elem.name, "w:fldLock", raw)?),
            None => None,
        };
        Ok(FieldChar {
            char_type: elem
                .attr_ns("fldCharType")
                .unwrap_or("begin")
                .to_string(),
            locked,
        })
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("w:fldChar");
        start.push_attribute(("w:fldCharType", self.char_type.as_str()));
        if let Some(locked) = self.locked {
            if locked.is_on() {
                start.push_attribute(("w:fldLock", "1"));
            }
        }
        writer.write_event(Event::Empty(start))?;
        Ok(())
    }
}

impl PositionalTab {
    fn from_element(elem: &XmlElement) -> Self {
        PositionalTab {
            alignment: elem.attr_ns("alignment").map(str::to_string),
            relative_to: elem.attr_ns("relativeTo").map(str::to_string),
            leader: elem.attr_ns("leader").map(str::to_string),
        }
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("w:ptab");
        if let Some(v) = &self.alignment {
            start.push_attribute(("w:alignment", v.as_str()));
        }
        if let Some(v) = &self.relative_to {
            start.push_attribute(("w:relativeTo", v.as_str()));
        }
        if let Some(v) = &self.leader {
            start.push_attribute(("w:leader", v.as_str()));
        }
        writer.write_event(Event::Empty(start))?;
        Ok(())
    }
}

/// Font bindings for the four script slots (w:rFonts)
#[derive(Clone, Debug, Default)]
pub struct Fonts {
    pub ascii: Option<String>,
    pub h_ansi: Option<String>,
    pub east_asia: Option<String>,
    pub cs: Option<String>,
}

/// Text color (w:color)
#[derive(Clone, Debug, Default)]
pub struct Color {
    /// RGB hex value or "auto"
    pub val: String,
    /// Theme color name
    pub theme_color: Option<String>,
}

/// Underline (w:u)
#[derive(Clone, Debug)]
pub struct Underline {
    /// Underline pattern
    pub val: String,
    /// Underline color
    pub color: Option<String>,
}

impl Default for Underline {
    fn default() -> Self {
        Self {
            val: "single".to_string(),
            color: None,
        }
    }
}

/// Language bindings (w:lang)
#[derive(Clone, Debug, Default)]
pub struct Lang {
    pub val: Option<String>,
    pub east_asia: Option<String>,
    pub bidi: Option<String>,
}

/// Run properties (w:rPr)
///
/// A fixed-shape record: every child is optional, occurs at most once and is
/// serialized in schema order with absent and default values omitted.
#[derive(Clone, Debug, Default)]
pub struct RunProperties {
    /// Style ID
    pub style: Option<String>,
    /// Font bindings
    pub fonts: Option<Fonts>,
    /// Bold
    pub bold: Option<OnOff>,
    /// Bold for complex scripts
    pub bold_cs: Option<OnOff>,
    /// Italic
    pub italic: Option<OnOff>,
    /// Italic for complex scripts
    pub italic_cs: Option<OnOff>,
    /// All caps
    pub caps: Option<OnOff>,
    /// Small caps
    pub small_caps: Option<OnOff>,
    /// Strike-through
    pub strike: Option<OnOff>,
    /// Double strike-through
    pub double_strike: Option<OnOff>,
    /// Outline effect
    pub outline: Option<OnOff>,
    /// Shadow effect
    pub shadow: Option<OnOff>,
    /// Emboss effect
    pub emboss: Option<OnOff>,
    /// Imprint effect
    pub imprint: Option<OnOff>,
    /// Hidden text
    pub vanish: Option<OnOff>,
    /// Text color
    pub color: Option<Color>,
    /// Character spacing adjustment (twips)
    pub spacing: Option<SignedTwips>,
    /// Kerning threshold (half-points)
    pub kern: Option<HalfPoints>,
    /// Vertical position adjustment (half-points, signed)
    pub position: Option<DecimalNumber>,
    /// Font size (half-points, 24 = 12pt)
    pub size: Option<HalfPoints>,
    /// Font size for complex scripts
    pub size_cs: Option<HalfPoints>,
    /// Highlight color name
    pub highlight: Option<String>,
    /// Underline
    pub underline: Option<Underline>,
    /// Vertical alignment (superscript/subscript)
    pub vertical_align: Option<String>,
    /// Right-to-left text
    pub rtl: Option<OnOff>,
    /// Languages
    pub lang: Option<Lang>,
    /// Tracked change of these properties (w:rPrChange)
    pub change: Option<Box<RunPropertiesChange>>,
}

impl RunProperties {
    /// Parse from an element node (w:rPr)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut props = RunProperties::default();

        for e in elem.element_children() {
            match e.local_name() {
                "rStyle" => props.style = e.w_val().map(str::to_string),
                "rFonts" => {
                    props.fonts = Some(Fonts {
                        ascii: e.attr_ns("ascii").map(str::to_string),
                        h_ansi: e.attr_ns("hAnsi").map(str::to_string),
                        east_asia: e.attr_ns("eastAsia").map(str::to_string),
                        cs: e.attr_ns("cs").map(str::to_string),
                    });
                }
                "b" => props.bold = Some(OnOff::parse(e)?),
                "bCs" => props.bold_cs = Some(OnOff::parse(e)?),
                "i" => props.italic = Some(OnOff::parse(e)?),
                "iCs" => props.italic_cs = Some(OnOff::parse(e)?),
                "caps" => props.caps = Some(OnOff::parse(e)?),
                "smallCaps" => props.small_caps = Some(OnOff::parse(e)?),
                "strike" => props.strike = Some(OnOff::parse(e)?),
                "dstrike" => props.double_strike = Some(OnOff::parse(e)?),
                "outline" => props.outline = Some(OnOff::parse(e)?),
                "shadow" => props.shadow = Some(OnOff::parse(e)?),
                "emboss" => props.emboss = Some(OnOff::parse(e)?),
                "imprint" => props.imprint = Some(OnOff::parse(e)?),
                "vanish" => props.vanish = Some(OnOff::parse(e)?),
                "color" => {
                    props.color = Some(Color {
                        val: e.w_val().unwrap_or("auto").to_string(),
                        theme_color: e.attr_ns("themeColor").map(str::to_string),
                    });
                }
                "spacing" => props.spacing = SignedTwips::parse_val(e)?,
                "kern" => props.kern = HalfPoints::parse_val(e)?,
                "position" => props.position = DecimalNumber::parse_val(e)?,
                "sz" => props.size = HalfPoints::parse_val(e)?,
                "szCs" => props.size_cs = HalfPoints::parse_val(e)?,
                "highlight" => props.highlight = e.w_val().map(str::to_string),
                "u" => {
                    props.underline = Some(Underline {
                        val: e.w_val().unwrap_or("single").to_string(),
                        color: e.attr_ns("color").map(str::to_string),
                    });
                }
                "vertAlign" => props.vertical_align = e.w_val().map(str::to_string),
                "rtl" => props.rtl = Some(OnOff::parse(e)?),
                "lang" => {
                    props.lang = Some(Lang {
                        val: e.w_val().map(str::to_string),
                        east_asia: e.attr_ns("eastAsia").map(str::to_string),
                        bidi: e.attr_ns("bidi").map(str::to_string),
                    });
                }
                "rPrChange" => {
                    props.change = Some(Box::new(RunPropertiesChange::from_element(e)?));
                }
                other => {
                    log::debug!("skipping unrecognized run property <{other}>");
                }
            }
        }

        Ok(props)
    }

    fn has_content(&self) -> bool {
        self.style.is_some()
            || self.fonts.is_some()
            || self.bold.is_some()
            || self.bold_cs.is_some()
            || self.italic.is_some()
            || self.italic_cs.is_some()
            || self.caps.is_some()
            || self.small_caps.is_some()
            || self.strike.is_some()
            || self.double_strike.is_some()
            || self.outline.is_some()
            || self.shadow.is_some()
            || self.emboss.is_some()
            || self.imprint.is_some()
            || self.vanish.is_some()
            || self.color.is_some()
            || self.spacing.is_some()
            || self.kern.is_some()
            || self.position.is_some()
            || self.size.is_some()
            || self.size_cs.is_some()
            || self.highlight.is_some()
            || self.underline.is_some()
            || self.vertical_align.is_some()
            || self.rtl.is_some()
            || self.lang.is_some()
            || self.change.is_some()
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        if !self.has_content() {
            return Ok(());
        }

        writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;

        if let Some(style) = &self.style {
            write_val_element("w:rStyle", style, writer)?;
        }
        if let Some(fonts) = &self.fonts {
            fonts.write_to(writer)?;
        }
        if let Some(flag) = self.bold {
            flag.write_element("w:b", writer)?;
        }
        if let Some(flag) = self.bold_cs {
            flag.write_element("w:bCs", writer)?;
        }
        if let Some(flag) = self.italic {
            flag.write_element("w:i", writer)?;
        }
        if let Some(flag) = self.italic_cs {
            flag.write_element("w:iCs", writer)?;
        }
        if let Some(flag) = self.caps {
            flag.write_element("w:caps", writer)?;
        }
        if let Some(flag) = self.small_caps {
            flag.write_element("w:smallCaps", writer)?;
        }
        if let Some(flag) = self.strike {
            flag.write_element("w:strike", writer)?;
        }
        if let Some(flag) = self.double_strike {
            flag.write_element("w:dstrike", writer)?;
        }
        if let Some(flag) = self.outline {
            flag.write_element("w:outline", writer)?;
        }
        if let Some(flag) = self.shadow {
            flag.write_element("w:shadow", writer)?;
        }
        if let Some(flag) = self.emboss {
            flag.write_element("w:emboss", writer)?;
        }
        if let Some(flag) = self.imprint {
            flag.write_element("w:imprint", writer)?;
        }
        if let Some(flag) = self.vanish {
            flag.write_element("w:vanish", writer)?;
        }
        if let Some(color) = &self.color {
            color.write_to(writer)?;
        }
        if let Some(spacing) = self.spacing {
            write_val_element("w:spacing", &spacing.0.to_string(), writer)?;
        }
        if let Some(kern) = self.kern {
            write_val_element("w:kern", &kern.0.to_string(), writer)?;
        }
        if let Some(position) = self.position {
            write_val_element("w:position", &position.0.to_string(), writer)?;
        }
        if let Some(size) = self.size {
            write_val_element("w:sz", &size.0.to_string(), writer)?;
        }
        if let Some(size) = self.size_cs {
            write_val_element("w:szCs", &size.0.to_string(), writer)?;
        }
        if let Some(highlight) = &self.highlight {
            write_val_element("w:highlight", highlight, writer)?;
        }
        if let Some(underline) = &self.underline {
            underline.write_to(writer)?;
        }
        if let Some(valign) = &self.vertical_align {
            write_val_element("w:vertAlign", valign, writer)?;
        }
        if let Some(flag) = self.rtl {
            flag.write_element("w:rtl", writer)?;
        }
        if let Some(lang) = &self.lang {
            lang.write_to(writer)?;
        }
        if let Some(change) = &self.change {
            change.write_to(writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
        Ok(())
    }
}

impl Fonts {
    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("w:rFonts");
        if let Some(font) = &self.ascii {
            elem.push_attribute(("w:ascii", font.as_str()));
        }
        if let Some(font) = &self.h_ansi {
            elem.push_attribute(("w:hAnsi", font.as_str()));
        }
        if let Some(font) = &self.east_asia {
            elem.push_attribute(("w:eastAsia", font.as_str()));
        }
        if let Some(font) = &self.cs {
            elem.push_attribute(("w:cs", font.as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

impl Color {
    pub(crate) fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("w:color");
        elem.push_attribute(("w:val", self.val.as_str()));
        if let Some(theme) = &self.theme_color {
            elem.push_attribute(("w:themeColor", theme.as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

impl Underline {
    pub(crate) fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("w:u");
        elem.push_attribute(("w:val", self.val.as_str()));
        if let Some(color) = &self.color {
            elem.push_attribute(("w:color", color.as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

impl Lang {
    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("w:lang");
        if let Some(val) = &self.val {
            elem.push_attribute(("w:val", val.as_str()));
        }
        if let Some(val) = &self.east_asia {
            elem.push_attribute(("w:eastAsia", val.as_str()));
        }
        if let Some(val) = &self.bidi {
            elem.push_attribute(("w:bidi", val.as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}
