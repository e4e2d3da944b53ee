//! Integration test: parse → write round-trip over recognized markup

use pretty_assertions::assert_eq;

use linch_wml_rs::document::{Settings, TwipsMeasure};
use linch_wml_rs::xml;
use linch_wml_rs::{Body, Error, Paragraph, ParagraphChildKind, Run, SectionProperties};

fn roundtrip_paragraph(markup: &str) -> String {
    let node = xml::parse_element(markup).expect("should parse");
    let para = Paragraph::from_element(&node).expect("should build paragraph");
    xml::write_to_string(|w| para.write_to(w)).expect("should serialize")
}

#[test]
fn test_bookmark_scenario() {
    let markup = "<w:p>\
<w:bookmarkStart w:id=\"1\" w:name=\"b1\"/>\
<w:r><w:t>hello</w:t></w:r>\
<w:bookmarkEnd w:id=\"1\"/>\
</w:p>";

    let node = xml::parse_element(markup).unwrap();
    let para = Paragraph::from_element(&node).unwrap();

    assert_eq!(para.content.count_of(ParagraphChildKind::Run), 1);
    assert_eq!(para.content.count_of(ParagraphChildKind::BookmarkStart), 1);
    assert_eq!(para.content.count_of(ParagraphChildKind::BookmarkEnd), 1);
    assert_eq!(para.text(), "hello");

    let out = xml::write_to_string(|w| para.write_to(w)).unwrap();
    assert_eq!(out, markup);
}

#[test]
fn test_paragraph_with_properties_and_rsids() {
    let markup = "<w:p w:rsidR=\"00AB12F3\" w:rsidRDefault=\"00AB12F3\">\
<w:pPr><w:pStyle w:val=\"Heading1\"/><w:jc w:val=\"center\"/><w:outlineLvl w:val=\"0\"/></w:pPr>\
<w:r><w:rPr><w:b/><w:i/><w:sz w:val=\"24\"/></w:rPr><w:t>Title</w:t></w:r>\
</w:p>";

    let node = xml::parse_element(markup).unwrap();
    let para = Paragraph::from_element(&node).unwrap();

    assert_eq!(para.style(), Some("Heading1"));
    assert!(para.is_heading());
    let run = para.runs().next().unwrap();
    assert!(run.bold());
    assert!(run.italic());
    assert_eq!(run.font_size_pt(), Some(12.0));

    let out = xml::write_to_string(|w| para.write_to(w)).unwrap();
    assert_eq!(out, markup);
}

#[test]
fn test_unknown_children_are_dropped_not_errors() {
    let markup = "<w:p>\
<w:r><w:t>x</w:t></w:r>\
<w:customXml w:uri=\"urn:x\"><w:r><w:t>inner</w:t></w:r></w:customXml>\
</w:p>";

    let node = xml::parse_element(markup).unwrap();
    let para = Paragraph::from_element(&node).unwrap();

    assert_eq!(para.content.len(), 1);
    assert_eq!(para.text(), "x");

    let out = xml::write_to_string(|w| para.write_to(w)).unwrap();
    assert_eq!(out, "<w:p><w:r><w:t>x</w:t></w:r></w:p>");
}

#[test]
fn test_off_flag_is_omitted_on_write() {
    let markup = "<w:p><w:r><w:rPr><w:b w:val=\"0\"/><w:i/></w:rPr><w:t>x</w:t></w:r></w:p>";

    let out = roundtrip_paragraph(markup);
    assert_eq!(out, "<w:p><w:r><w:rPr><w:i/></w:rPr><w:t>x</w:t></w:r></w:p>");
}

#[test]
fn test_malformed_hex_rsid_rejects_paragraph() {
    let node = xml::parse_element("<w:p w:rsidR=\"nothex\"/>").unwrap();
    match Paragraph::from_element(&node) {
        Err(Error::ScalarDecode { element, attr, raw }) => {
            assert_eq!(element, "w:p");
            assert_eq!(attr, "w:rsidR");
            assert_eq!(raw, "nothex");
        }
        other => panic!("expected ScalarDecode, got {other:?}"),
    }
}

#[test]
fn test_malformed_flag_rejects_run() {
    let node =
        xml::parse_element("<w:r><w:rPr><w:b w:val=\"maybe\"/></w:rPr><w:t>x</w:t></w:r>")
            .unwrap();
    assert!(matches!(
        Run::from_element(&node),
        Err(Error::ScalarDecode { .. })
    ));
}

#[test]
fn test_tracked_content_roundtrip() {
    let markup = "<w:p>\
<w:ins w:id=\"5\" w:author=\"Ann\" w:date=\"2024-01-01T00:00:00Z\"><w:r><w:t>new</w:t></w:r></w:ins>\
<w:del w:id=\"6\" w:author=\"Ann\"><w:r><w:t>old</w:t></w:r></w:del>\
</w:p>";

    let node = xml::parse_element(markup).unwrap();
    let para = Paragraph::from_element(&node).unwrap();

    assert_eq!(para.content.count_of(ParagraphChildKind::Insertion), 1);
    assert_eq!(para.content.count_of(ParagraphChildKind::Deletion), 1);
    // Inserted text is part of the paragraph text, deleted text is not
    assert_eq!(para.text(), "new");

    let out = xml::write_to_string(|w| para.write_to(w)).unwrap();
    assert_eq!(out, markup);
}

#[test]
fn test_hyperlink_and_field_roundtrip() {
    let markup = "<w:p>\
<w:hyperlink r:id=\"rId4\" w:tooltip=\"home\"><w:r><w:t>link</w:t></w:r></w:hyperlink>\
<w:fldSimple w:instr=\" PAGE \"><w:r><w:t>1</w:t></w:r></w:fldSimple>\
</w:p>";

    let out = roundtrip_paragraph(markup);
    assert_eq!(out, markup);
}

#[test]
fn test_history_flattening() {
    // Two bold captures and one italic, bold interleaved around the italic
    let markup = "<w:r><w:rPr>\
<w:rPrChange w:id=\"3\" w:author=\"Ann\">\
<w:rPr><w:b/><w:i/><w:b w:val=\"0\"/></w:rPr>\
</w:rPrChange>\
</w:rPr><w:t>x</w:t></w:r>";

    let node = xml::parse_element(markup).unwrap();
    let run = Run::from_element(&node).unwrap();

    let change = run.properties.as_ref().unwrap().change.as_ref().unwrap();
    assert_eq!(change.change.author, "Ann");
    assert_eq!(change.previous.bold.len(), 2);
    assert!(change.previous.bold[0].is_on());
    assert!(!change.previous.bold[1].is_on());
    assert_eq!(change.previous.italic.len(), 1);

    // Write order groups each property's occurrences, markers first; the
    // original interleaving is not reproduced
    let out = xml::write_to_string(|w| run.write_to(w)).unwrap();
    assert_eq!(
        out,
        "<w:r><w:rPr>\
<w:rPrChange w:id=\"3\" w:author=\"Ann\">\
<w:rPr><w:b/><w:b w:val=\"0\"/><w:i/></w:rPr>\
</w:rPrChange>\
</w:rPr><w:t>x</w:t></w:r>"
    );
}

#[test]
fn test_history_singleton_markers_last_wins() {
    let markup = "<w:r><w:rPr>\
<w:rPrChange w:id=\"3\" w:author=\"Ann\">\
<w:rPr>\
<w:ins w:id=\"10\" w:author=\"Ann\"/>\
<w:ins w:id=\"11\" w:author=\"Bob\"/>\
<w:b/>\
</w:rPr>\
</w:rPrChange>\
</w:rPr><w:t>x</w:t></w:r>";

    let node = xml::parse_element(markup).unwrap();
    let run = Run::from_element(&node).unwrap();

    let previous = &run.properties.as_ref().unwrap().change.as_ref().unwrap().previous;
    let marker = previous.insertion.as_ref().unwrap();
    assert_eq!(marker.id.0, 11);
    assert_eq!(marker.author, "Bob");
}

#[test]
fn test_paragraph_properties_change_roundtrip() {
    let markup = "<w:p>\
<w:pPr><w:jc w:val=\"both\"/>\
<w:pPrChange w:id=\"8\" w:author=\"Ann\" w:date=\"2024-02-02T00:00:00Z\">\
<w:pPr><w:pStyle w:val=\"Normal\"/><w:jc w:val=\"left\"/></w:pPr>\
</w:pPrChange>\
</w:pPr>\
<w:r><w:t>x</w:t></w:r>\
</w:p>";

    let out = roundtrip_paragraph(markup);
    assert_eq!(out, markup);
}

#[test]
fn test_body_with_trailing_section_properties() {
    let markup = "<w:body>\
<w:p><w:r><w:t>one</w:t></w:r></w:p>\
<w:p><w:r><w:t>two</w:t></w:r></w:p>\
<w:sectPr>\
<w:pgSz w:w=\"12240\" w:h=\"15840\"/>\
<w:pgMar w:top=\"1440\" w:right=\"1440\" w:bottom=\"1440\" w:left=\"1440\" w:header=\"720\" w:footer=\"720\" w:gutter=\"0\"/>\
<w:cols w:space=\"720\"/>\
<w:docGrid w:linePitch=\"360\"/>\
</w:sectPr>\
</w:body>";

    let node = xml::parse_element(markup).unwrap();
    let body = Body::from_element(&node).unwrap();

    assert_eq!(body.paragraphs().count(), 2);
    assert_eq!(body.text(), "one\ntwo");
    assert!(body.section_properties.is_some());

    let out = xml::write_to_string(|w| body.write_to(w)).unwrap();
    assert_eq!(out, markup);
}

#[test]
fn test_math_blocks_keep_their_tags() {
    let markup = "<w:p>\
<m:oMath><m:r><m:t>a</m:t></m:r></m:oMath>\
<m:oMathPara><m:oMath><m:r><m:t>b</m:t></m:r></m:oMath></m:oMathPara>\
</w:p>";

    let node = xml::parse_element(markup).unwrap();
    let para = Paragraph::from_element(&node).unwrap();

    assert_eq!(para.content.count_of(ParagraphChildKind::MathBlock), 1);
    assert_eq!(para.content.count_of(ParagraphChildKind::MathPara), 1);

    let out = xml::write_to_string(|w| para.write_to(w)).unwrap();
    assert_eq!(out, markup);
}

#[test]
fn test_section_defaults_factory() {
    let sect = SectionProperties::standard();

    let size = sect.page_size.as_ref().unwrap();
    assert_eq!(size.width, TwipsMeasure(12240));
    assert_eq!(size.height, TwipsMeasure(15840));

    let margins = sect.page_margins.as_ref().unwrap();
    assert_eq!(margins.left, TwipsMeasure(1440));
    assert_eq!(margins.header, TwipsMeasure(720));

    // Defaults factory and parser are independent operations
    let parsed = SectionProperties::from_element(
        &xml::parse_element("<w:sectPr/>").unwrap(),
    )
    .unwrap();
    assert!(parsed.page_size.is_none());
}

#[test]
fn test_settings_roundtrip_and_defaults() {
    let defaults = Settings::standard();
    assert_eq!(defaults.zoom.as_ref().unwrap().percent.0, 100);
    assert_eq!(defaults.default_tab_stop, Some(TwipsMeasure(720)));
    assert_eq!(defaults.decimal_symbol.as_deref(), Some("."));

    let markup = "<w:settings xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\" xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">\
<w:zoom w:percent=\"110\"/>\
<w:defaultTabStop w:val=\"708\"/>\
<w:rsids><w:rsidRoot w:val=\"00AB12F3\"/><w:rsid w:val=\"00AB12F3\"/><w:rsid w:val=\"00C4D5E6\"/></w:rsids>\
</w:settings>";

    let node = xml::parse_element(markup).unwrap();
    let settings = Settings::from_element(&node).unwrap();

    assert_eq!(settings.zoom.as_ref().unwrap().percent.0, 110);
    assert_eq!(settings.default_tab_stop, Some(TwipsMeasure(708)));
    let rsids = settings.rsids.as_ref().unwrap();
    assert_eq!(rsids.root.unwrap().to_hex(), "00AB12F3");
    assert_eq!(rsids.values.len(), 2);

    let out = xml::write_to_string(|w| settings.write_to(w)).unwrap();
    assert_eq!(out, markup);
}

#[test]
fn test_empty_paragraph_stays_empty() {
    let out = roundtrip_paragraph("<w:p w:rsidR=\"00000001\"/>");
    assert_eq!(out, "<w:p w:rsidR=\"00000001\"/>");
}
