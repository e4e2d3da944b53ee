//! Integration test: choice-group container semantics

use linch_wml_rs::document::RangeMarker;
use linch_wml_rs::xml;
use linch_wml_rs::{ChoiceChild, ChoiceGroup, Paragraph, ParagraphChild, ParagraphChildKind, Run};

fn sample_group() -> ChoiceGroup<ParagraphChild> {
    // [Run "a", BookmarkStart, Run "b", CommentRangeStart]
    let mut group = ChoiceGroup::new();
    group.push(ParagraphChild::Run(Run::new("a")));
    group.append_new(ParagraphChildKind::BookmarkStart);
    group.push(ParagraphChild::Run(Run::new("b")));
    group.append_new(ParagraphChildKind::CommentRangeStart);
    group
}

fn run_text(child: &ParagraphChild) -> String {
    match child {
        ParagraphChild::Run(r) => r.text(),
        other => panic!("expected a run, got {other:?}"),
    }
}

#[test]
fn test_order_preservation() {
    let group = sample_group();

    let kinds: Vec<_> = group.iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ParagraphChildKind::Run,
            ParagraphChildKind::BookmarkStart,
            ParagraphChildKind::Run,
            ParagraphChildKind::CommentRangeStart,
        ]
    );
}

#[test]
fn test_count_and_nth_per_kind() {
    let group = sample_group();

    assert_eq!(group.count_of(ParagraphChildKind::Run), 2);
    assert_eq!(group.count_of(ParagraphChildKind::BookmarkStart), 1);
    assert_eq!(group.count_of(ParagraphChildKind::Hyperlink), 0);

    // Per-kind index ignores the entries interleaved between the runs
    assert_eq!(run_text(group.nth_of(ParagraphChildKind::Run, 0).unwrap()), "a");
    assert_eq!(run_text(group.nth_of(ParagraphChildKind::Run, 1).unwrap()), "b");
    assert!(group.nth_of(ParagraphChildKind::Run, 2).is_none());

    let runs: Vec<_> = group.all_of(ParagraphChildKind::Run).map(run_text).collect();
    assert_eq!(runs, vec!["a", "b"]);
}

#[test]
fn test_removal_does_not_shift_other_kinds() {
    let mut group = sample_group();

    group.remove_at(ParagraphChildKind::BookmarkStart, 0);
    assert_eq!(group.len(), 3);
    assert_eq!(run_text(group.nth_of(ParagraphChildKind::Run, 1).unwrap()), "b");
}

#[test]
fn test_remove_out_of_range_is_noop() {
    let mut group = sample_group();

    assert!(group.remove_at(ParagraphChildKind::Run, 5).is_none());
    assert!(group.remove_at(ParagraphChildKind::Hyperlink, 0).is_none());
    assert_eq!(group.len(), 4);
}

#[test]
fn test_append_new_on_empty() {
    let mut group: ChoiceGroup<ParagraphChild> = ChoiceGroup::new();

    let entry = group.append_new(ParagraphChildKind::Run);
    assert!(matches!(entry, ParagraphChild::Run(_)));
    assert_eq!(group.len(), 1);
}

#[test]
fn test_insert_new_before_nth_of_kind() {
    let mut group: ChoiceGroup<ParagraphChild> = ChoiceGroup::new();
    group.push(ParagraphChild::Run(Run::new("a")));
    group.push(ParagraphChild::Run(Run::new("b")));

    if let ParagraphChild::Run(run) = group.insert_new(ParagraphChildKind::Run, 1) {
        run.add_text("middle");
    }

    let runs: Vec<_> = group.all_of(ParagraphChildKind::Run).map(run_text).collect();
    assert_eq!(runs, vec!["a", "middle", "b"]);
}

#[test]
fn test_insert_new_falls_back_to_front() {
    // With no entry of the requested kind present the insert goes to the
    // head of the whole sequence, not the end
    let mut group = sample_group();

    group.insert_new(ParagraphChildKind::ProofError, 0);
    assert_eq!(group.entries()[0].kind(), ParagraphChildKind::ProofError);
    assert_eq!(group.len(), 5);
}

#[test]
fn test_set_nth_replaces_matching_kind_only() {
    let mut group = sample_group();

    assert!(group.set_nth(1, ParagraphChild::Run(Run::new("B"))));
    assert_eq!(run_text(group.nth_of(ParagraphChildKind::Run, 1).unwrap()), "B");
    assert_eq!(group.len(), 4);

    assert!(!group.set_nth(7, ParagraphChild::Run(Run::new("x"))));
}

#[test]
fn test_shared_payload_type_keeps_distinct_tags() {
    // One marker type backs several kinds; the stored kind picks the tag
    let mut para = Paragraph::default();
    para.content
        .push(ParagraphChild::CommentRangeStart(RangeMarker::default()));
    para.content.push(ParagraphChild::Run(Run::new("x")));
    para.content
        .push(ParagraphChild::CommentRangeEnd(RangeMarker::default()));

    let out = xml::write_to_string(|w| para.write_to(w)).unwrap();
    assert!(out.contains("<w:commentRangeStart w:id=\"0\"/>"));
    assert!(out.contains("<w:commentRangeEnd w:id=\"0\"/>"));
}

#[test]
fn test_snapshot_is_independent() {
    let mut group = sample_group();
    let snapshot = group.snapshot();

    group.remove_at(ParagraphChildKind::Run, 0);
    assert_eq!(snapshot.len(), 4);
    assert_eq!(group.len(), 3);
}
