//! Document settings (w:settings)

use crate::document::types::{DecimalNumber, HexId, OnOff, TwipsMeasure};
use crate::error::Result;
use crate::xml::{minimal_document_namespaces, XmlElement};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Magnification setting (w:zoom)
#[derive(Clone, Debug, Default)]
pub struct Zoom {
    /// Zoom percentage
    pub percent: DecimalNumber,
}

/// Spelling and grammar state (w:proofState)
#[derive(Clone, Debug, Default)]
pub struct ProofState {
    /// clean or dirty
    pub spelling: Option<String>,
    /// clean or dirty
    pub grammar: Option<String>,
}

/// Theme font languages (w:themeFontLang)
#[derive(Clone, Debug, Default)]
pub struct ThemeFontLang {
    pub val: Option<String>,
    pub east_asia: Option<String>,
    pub bidi: Option<String>,
}

/// Revision-save ID registry (w:rsids).
///
/// One root value plus every ID the document has accumulated, a flattened
/// repeated-element list like the history records keep per property.
#[derive(Clone, Debug, Default)]
pub struct Rsids {
    /// Original revision-save ID (w:rsidRoot)
    pub root: Option<HexId>,
    /// All known IDs, in document order (w:rsid)
    pub values: Vec<HexId>,
}

/// Document settings aggregate (w:settings)
#[derive(Clone, Debug, Default)]
pub struct Settings {
    /// Magnification
    pub zoom: Option<Zoom>,
    /// Proofing state
    pub proof_state: Option<ProofState>,
    /// Default tab stop interval (w:defaultTabStop)
    pub default_tab_stop: Option<TwipsMeasure>,
    /// East Asian character compression (w:characterSpacingControl)
    pub character_spacing_control: Option<String>,
    /// Automatic hyphenation (w:autoHyphenation)
    pub auto_hyphenation: Option<OnOff>,
    /// Theme font languages
    pub theme_font_lang: Option<ThemeFontLang>,
    /// Decimal symbol for field results (w:decimalSymbol)
    pub decimal_symbol: Option<String>,
    /// List separator for field instructions (w:listSeparator)
    pub list_separator: Option<String>,
    /// Revision-save ID registry
    pub rsids: Option<Rsids>,
}

impl Settings {
    /// The stock settings Word writes into a new blank document.
    ///
    /// Parsing never injects these: [`Settings::from_element`] reflects only
    /// what the markup carries.
    pub fn standard() -> Self {
        Settings {
            zoom: Some(Zoom {
                percent: DecimalNumber(100),
            }),
            default_tab_stop: Some(TwipsMeasure(720)),
            character_spacing_control: Some("doNotCompress".to_string()),
            decimal_symbol: Some(".".to_string()),
            list_separator: Some(",".to_string()),
            ..Default::default()
        }
    }

    /// Parse from an element node (w:settings)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut settings = Settings::default();

        for e in elem.element_children() {
            match e.local_name() {
                "zoom" => {
                    let percent = match e.attr_ns("percent") {
                        Some(raw) => DecimalNumber::parse(&e.name, "w:percent", raw)?,
                        None => DecimalNumber(100),
                    };
                    settings.zoom = Some(Zoom { percent });
                }
                "proofState" => {
                    settings.proof_state = Some(ProofState {
                        spelling: e.attr_ns("spelling").map(str::to_string),
                        grammar: e.attr_ns("grammar").map(str::to_string),
                    });
                }
                "defaultTabStop" => {
                    settings.default_tab_stop = TwipsMeasure::parse_val(e)?;
                }
                "characterSpacingControl" => {
                    settings.character_spacing_control = e.w_val().map(str::to_string);
                }
                "autoHyphenation" => settings.auto_hyphenation = Some(OnOff::parse(e)?),
                "themeFontLang" => {
                    settings.theme_font_lang = Some(ThemeFontLang {
                        val: e.w_val().map(str::to_string),
                        east_asia: e.attr_ns("eastAsia").map(str::to_string),
                        bidi: e.attr_ns("bidi").map(str::to_string),
                    });
                }
                "decimalSymbol" => settings.decimal_symbol = e.w_val().map(str::to_string),
                "listSeparator" => settings.list_separator = e.w_val().map(str::to_string),
                "rsids" => settings.rsids = Some(Rsids::from_element(e)?),
                other => {
                    log::debug!("skipping unrecognized setting <{other}>");
                }
            }
        }

        Ok(settings)
    }

    /// Write as a settings part root with namespace declarations
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new("w:settings");
        for (name, uri) in minimal_document_namespaces() {
            start.push_attribute((name, uri));
        }
        writer.write_event(Event::Start(start))?;

        if let Some(zoom) = &self.zoom {
            let mut elem = BytesStart::new("w:zoom");
            elem.push_attribute(("w:percent", zoom.percent.0.to_string().as_str()));
            writer.write_event(Event::Empty(elem))?;
        }
        if let Some(proof) = &self.proof_state {
            let mut elem = BytesStart::new("w:proofState");
            if let Some(spelling) = &proof.spelling {
                elem.push_attribute(("w:spelling", spelling.as_str()));
            }
            if let Some(grammar) = &proof.grammar {
                elem.push_attribute(("w:grammar", grammar.as_str()));
            }
            writer.write_event(Event::Empty(elem))?;
        }
        if let Some(tab) = self.default_tab_stop {
            let mut elem = BytesStart::new("w:defaultTabStop");
            elem.push_attribute(("w:val", tab.0.to_string().as_str()));
            writer.write_event(Event::Empty(elem))?;
        }
        if let Some(flag) = self.auto_hyphenation {
            flag.write_element("w:autoHyphenation", writer)?;
        }
        if let Some(control) = &self.character_spacing_control {
            let mut elem = BytesStart::new("w:characterSpacingControl");
            elem.push_attribute(("w:val", control.as_str()));
            writer.write_event(Event::Empty(elem))?;
        }
        if let Some(lang) = &self.theme_font_lang {
            let mut elem = BytesStart::new("w:themeFontLang");
            if let Some(val) = &lang.val {
                elem.push_attribute(("w:val", val.as_str()));
            }
            if let Some(val) = &lang.east_asia {
                elem.push_attribute(("w:eastAsia", val.as_str()));
            }
            if let Some(val) = &lang.bidi {
                elem.push_attribute(("w:bidi", val.as_str()));
            }
            writer.write_event(Event::Empty(elem))?;
        }
        if let Some(symbol) = &self.decimal_symbol {
            let mut elem = BytesStart::new("w:decimalSymbol");
            elem.push_attribute(("w:val", symbol.as_str()));
            writer.write_event(Event::Empty(elem))?;
        }
        if let Some(separator) = &self.list_separator {
            let mut elem = BytesStart::new("w:listSeparator");
            elem.push_attribute(("w:val", separator.as_str()));
            writer.write_event(Event::Empty(elem))?;
        }
        if let Some(rsids) = &self.rsids {
            rsids.write_to(writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:settings")))?;
        Ok(())
    }
}

impl Rsids {
    /// Parse from an element node (w:rsids)
    pub fn from_element(elem: &XmlElement) -> Result<Self> {
        let mut rsids = Rsids::default();

        for e in elem.element_children() {
            match e.local_name() {
                "rsidRoot" => {
                    if let Some(raw) = e.w_val() {
                        rsids.root = Some(HexId::parse(&e.name, "w:val", raw)?);
                    }
                }
                "rsid" => {
                    if let Some(raw) = e.w_val() {
                        rsids.values.push(HexId::parse(&e.name, "w:val", raw)?);
                    }
                }
                _ => {}
            }
        }

        Ok(rsids)
    }

    /// Write to XML writer
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        if self.root.is_none() && self.values.is_empty() {
            return Ok(());
        }
        writer.write_event(Event::Start(BytesStart::new("w:rsids")))?;
        if let Some(root) = self.root {
            let mut elem = BytesStart::new("w:rsidRoot");
            elem.push_attribute(("w:val", root.to_hex().as_str()));
            writer.write_event(Event::Empty(elem))?;
        }
        for value in &self.values {
            let mut elem = BytesStart::new("w:rsid");
            elem.push_attribute(("w:val", value.to_hex().as_str()));
            writer.write_event(Event::Empty(elem))?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:rsids")))?;
        Ok(())
    }
}
