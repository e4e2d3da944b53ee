//! XML namespaces used in WordprocessingML markup

/// WordprocessingML main namespace
pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// Relationships namespace
pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
/// Office Math namespace
pub const M: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";
/// Drawing namespace
pub const WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
/// DrawingML main namespace
pub const A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

/// Standard namespace declarations for a document part root
pub fn document_namespaces() -> Vec<(&'static str, &'static str)> {
    vec![
        ("xmlns:w", W),
        ("xmlns:r", R),
        ("xmlns:m", M),
        ("xmlns:wp", WP),
        ("xmlns:a", A),
    ]
}

/// Minimal namespace declarations for a document part root
pub fn minimal_document_namespaces() -> Vec<(&'static str, &'static str)> {
    vec![("xmlns:w", W), ("xmlns:r", R)]
}
