//! # linch-wml-rs
//!
//! A typed WordprocessingML (OOXML `w:` namespace) element model for Rust.
//!
//! ## Features
//!
//! - Ordered, heterogeneous container contents modeled as choice groups
//!   with per-kind positional access
//! - Lossless element/attribute round-trip for everything the model
//!   recognizes; unknown extensions are skipped
//! - Revision tracking records, including original-formatting capture
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linch_wml_rs::{xml, Body, ParagraphChildKind};
//!
//! // Parse a body fragment
//! let node = xml::parse_element(markup)?;
//! let body = Body::from_element(&node)?;
//!
//! for para in body.paragraphs() {
//!     println!("{}", para.text());
//!     println!("{} runs", para.content.count_of(ParagraphChildKind::Run));
//! }
//!
//! // Serialize back
//! let out = xml::write_to_string(|w| body.write_to(w))?;
//! ```

pub mod document;
pub mod error;
pub mod xml;

pub use document::{
    Body, ChoiceChild, ChoiceGroup, Paragraph, ParagraphChild, ParagraphChildKind, Run, RunChild,
    RunChildKind, SectionProperties, Settings,
};
pub use error::{Error, Result};
pub use xml::{XmlElement, XmlNode};
