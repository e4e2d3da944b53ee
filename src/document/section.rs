//! Section properties (w:sectPr)

use crate::document::types::{
    parse_rsid, DecimalNumber, HexId, OnOff, SignedTwips, TwipsMeasure,
};
use crate::error::Result;
use crate::xml::XmlElement;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Header or footer part reference (w:headerReference / w:footerReference)
#[derive(Clone, Debug, Default)]
pub struct HeaderFooterReference {
    /// default, first or even
    pub ref_type: String,
    /// Relationship ID of the referenced part
    pub r_id: String,
}

/// Page dimensions (w:pgSz)
#[derive(Clone, Debug, Default)]
pub struct PageSize {
    /// Page width (twips)
    pub width: TwipsMeasure,
    /// Page height (twips)
    pub height: TwipsMeasure,
    /// portrait or landscape when explicit
    pub orientation: Option<String>,
}

/// Page margins (w:pgMar)
#[derive(Clone, Copy, Debug, Default)]
pub struct PageMargins {
    /// Top margin (twips, negative pins content to the edge)
    pub top: SignedTwips,
    /// Right margin (twips)
    pub right: TwipsMeasure,
    /// Bottom margin (twips, negative pins content to the edge)
    pub bottom: SignedTwips,
    /// Left margin (twips)
    pub left: TwipsMeasure,
    /// Header distance from edge (twips)
    pub header: TwipsMeasure,
    /// Footer distance from edge (twips)
    pub footer: TwipsMeasure,
    /// Gutter (twips)
    pub gutter: TwipsMeasure,
}

/// Column layout (w:cols)
#[derive(Clone, Debug, Default)]
pub struct Columns {
    /// Space between columns (twips)
    pub space: Option<TwipsMeasure>,
    /// Number of columns
    pub num: Option<u32>,
}

/// Document grid (w:docGrid)
#[derive(Clone, Debug, Default)]
pub struct DocGrid {
    /// Grid type (lines, linesAndChars, snapToChars)
    pub grid_type: Option<String>,
    /// Line pitch (twips)
    pub line_pitch: Option<DecimalNumber>,
}

/// Section properties (w:sectPr)
#[derive(Clone, Debug, Default)]
pub struct SectionProperties {
    /// Revision-save ID of the section
    pub rsid_r: Option<HexId>,
    /// Revision-save ID of the section mark
    pub rsid_sect: Option<HexId>,
    /// Header part references
    pub header_references: Vec<HeaderFooterReference>,
    /// Footer part references
    pub footer_references: Vec<HeaderFooterReference>,
    /// Page dimensions
    pub page_size: Option<PageSize>,
    /// Page margins
    pub page_margins: Option<PageMargins>,
    /// Column layout
    pub columns: Option<Columns>,
    /// Distinct first-page header/footer
    pub title_page: Option<OnOff>,
    /// Document grid
    pub doc_grid: Option<DocGrid>,
}

impl SectionProperties {
    /// A section with the stock page setup Word produces for a new blank
    /// document: US Letter, one-inch margins, half-inch header/footer
    /// distance, single column, 360-twip grid pitch.
    ///
    /// Construction with defaults is a separate operation from parsing;
    /// [`SectionProperties::from_element`] fills only what the markup says.
    pub fn standard() -> Self {
        SectionProperties {
            page_size: Some(PageSize {
                width: TwipsMeasure(12240),
                height: TwipsMeasure(15840),
                orientation: None,
            }),
            page_margins: Some(PageMargins {
                top: SignedTwips(1440),
                right: TwipsMeasure(1440),
                bottom: SignedTwips(1440),
                left: TwipsMeasure(1440),
                header: TwipsMeasure(720),
                footer: TwipsMeasure(720),
                gutter: TwipsMeasure(0),
            }),
            columns: Some(Columns {
                space: Some(TwipsMeasure(720)),
                num: None,
            }),
            doc_grid: Some(DocGrid {
                grid_type: None,
                line_pitch: Some(DecimalNumber(360)),
            }),
            ..Default::default()
        }
    }

    /// Parse from an element node (w:sectPr)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut sect = SectionProperties {
            rsid_r: parse_rsid(elem, "rsidR")?,
            rsid_sect: parse_rsid(elem, "rsidSect")?,
            ..Default::default()
        };

        for e in elem.element_children() {
            match e.local_name() {
                "headerReference" => {
                    sect.header_references.push(HeaderFooterReference::from_element(e));
                }
                "footerReference" => {
                    sect.footer_references.push(HeaderFooterReference::from_element(e));
                }
                "pgSz" => sect.page_size = Some(PageSize::from_element(e)?),
                "pgMar" => sect.page_margins = Some(PageMargins::from_element(e)?),
                "cols" => sect.columns = Some(Columns::from_element(e)?),
                "titlePg" => sect.title_page = Some(OnOff::parse(e)?),
                "docGrid" => sect.doc_grid = Some(DocGrid::from_element(e)?),
                other => {
                    log::debug!("skipping unrecognized section property <{other}>");
                }
            }
        }

        Ok(sect)
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("w:sectPr");
        if let Some(id) = self.rsid_r {
            start.push_attribute(("w:rsidR", id.to_hex().as_str()));
        }
        if let Some(id) = self.rsid_sect {
            start.push_attribute(("w:rsidSect", id.to_hex().as_str()));
        }
        writer.write_event(Event::Start(start))?;

        for header in &self.header_references {
            header.write_as("w:headerReference", writer)?;
        }
        for footer in &self.footer_references {
            footer.write_as("w:footerReference", writer)?;
        }
        if let Some(size) = &self.page_size {
            size.write_to(writer)?;
        }
        if let Some(margins) = &self.page_margins {
            margins.write_to(writer)?;
        }
        if let Some(cols) = &self.columns {
            cols.write_to(writer)?;
        }
        if let Some(flag) = self.title_page {
            flag.write_element("w:titlePg", writer)?;
        }
        if let Some(grid) = &self.doc_grid {
            grid.write_to(writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:sectPr")))?;
        Ok(())
    }
}

impl HeaderFooterReference {
    fn from_element(elem: &XmlElement) -> Self {
        HeaderFooterReference {
            ref_type: elem.attr_ns("type").unwrap_or("default").to_string(),
            r_id: elem.attr("r:id").unwrap_or_default().to_string(),
        }
    }

    fn write_as<W: Write>(&self, tag: &str, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new(tag);
        elem.push_attribute(("w:type", self.ref_type.as_str()));
        elem.push_attribute(("r:id", self.r_id.as_str()));
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

impl PageSize {
    fn from_element(elem: &XmlElement) -> Result<Self> {
        let width = match elem.attr_ns("w") {
            Some(raw) => TwipsMeasure::parse(&elem.name, "w:w", raw)?,
            None => TwipsMeasure(0),
        };
        let height = match elem.attr_ns("h") {
            Some(raw) => TwipsMeasure::parse(&elem.name, "w:h", raw)?,
            None => TwipsMeasure(0),
        };
        Ok(PageSize {
            width,
            height,
            orientation: elem.attr_ns("orient").map(str::to_string),
        })
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("w:pgSz");
        elem.push_attribute(("w:w", self.width.0.to_string().as_str()));
        elem.push_attribute(("w:h", self.height.0.to_string().as_str()));
        if let Some(orient) = &self.orientation {
            elem.push_attribute(("w:orient", orient.as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

impl PageMargins {
    fn from_element(elem: &XmlElement) -> Result<Self> {
        let signed = |attr: &str| -> Result<SignedTwips> {
            match elem.attr_ns(attr) {
                Some(raw) => SignedTwips::parse(&elem.name, &format!("w:{attr}"), raw),
                None => Ok(SignedTwips(0)),
            }
        };
        let unsigned = |attr: &str| -> Result<TwipsMeasure> {
            match elem.attr_ns(attr) {
                Some(raw) => TwipsMeasure::parse(&elem.name, &format!("w:{attr}"), raw),
                None => Ok(TwipsMeasure(0)),
            }
        };
        Ok(PageMargins {
            top: signed("top")?,
            right: unsigned("right")?,
            bottom: signed("bottom")?,
            left: unsigned("left")?,
            header: unsigned("header")?,
            footer: unsigned("footer")?,
            gutter: unsigned("gutter")?,
        })
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("w:pgMar");
        elem.push_attribute(("w:top", self.top.0.to_string().as_str()));
        elem.push_attribute(("w:right", self.right.0.to_string().as_str()));
        elem.push_attribute(("w:bottom", self.bottom.0.to_string().as_str()));
        elem.push_attribute(("w:left", self.left.0.to_string().as_str()));
        elem.push_attribute(("w:header", self.header.0.to_string().as_str()));
        elem.push_attribute(("w:footer", self.footer.0.to_string().as_str()));
        elem.push_attribute(("w:gutter", self.gutter.0.to_string().as_str()));
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

impl Columns {
    fn from_element(elem: &XmlElement) -> Result<Self> {
        let space = match elem.attr_ns("space") {
            Some(raw) => Some(TwipsMeasure::parse(&elem.name, "w:space", raw)?),
            None => None,
        };
        let num = match elem.attr_ns("num") {
            Some(raw) => Some(crate::document::types::parse_number(&elem.name, "w:num", raw)?),
            None => None,
        };
        Ok(Columns { space, num })
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("w:cols");
        if let Some(num) = self.num {
            elem.push_attribute(("w:num", num.to_string().as_str()));
        }
        if let Some(space) = self.space {
            elem.push_attribute(("w:space", space.0.to_string().as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}

impl DocGrid {
    fn from_element(elem: &XmlElement) -> Result<Self> {
        let line_pitch = match elem.attr_ns("linePitch") {
            Some(raw) => Some(DecimalNumber::parse(&elem.name, "w:linePitch", raw)?),
            None => None,
        };
        Ok(DocGrid {
            grid_type: elem.attr_ns("type").map(str::to_string),
            line_pitch,
        })
    }

    fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut elem = BytesStart::new("w:docGrid");
        if let Some(t) = &self.grid_type {
            elem.push_attribute(("w:type", t.as_str()));
        }
        if let Some(pitch) = self.line_pitch {
            elem.push_attribute(("w:linePitch", pitch.0.to_string().as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
        Ok(())
    }
}
