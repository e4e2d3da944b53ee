//! Typed WordprocessingML element model

mod body;
mod choice;
mod paragraph;
mod revision;
mod run;
mod section;
mod settings;
mod types;

pub use body::{BlockChild, BlockChildKind, Body};
pub use choice::{ChoiceChild, ChoiceGroup};
pub use paragraph::{
    BookmarkStart, Hyperlink, Indentation, MoveRangeStart, NumberingProperties, Paragraph,
    ParagraphChild, ParagraphChildKind, ParagraphProperties, PermStart, ProofError, RangeMarker,
    SimpleField, Spacing, TabStop,
};
pub use revision::{
    ParagraphPropertiesChange, PreviousParagraphProperties, PreviousRunProperties,
    RunPropertiesChange, RunTrackChange, TrackChange,
};
pub use run::{
    Break, BreakType, Color, FieldChar, Fonts, Lang, PositionalTab, Run, RunChild, RunChildKind,
    RunProperties, Symbol, TextRun, Underline,
};
pub use section::{
    Columns, DocGrid, HeaderFooterReference, PageMargins, PageSize, SectionProperties,
};
pub use settings::{ProofState, Rsids, Settings, ThemeFontLang, Zoom};
pub use types::{DecimalNumber, HalfPoints, HexId, OnOff, SignedTwips, TwipsMeasure};
