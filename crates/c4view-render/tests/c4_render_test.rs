use c4view_render::text::{TextMeasurer, UnicodeWidthMeasurer};
use c4view_render::{RenderOptions, render, render_with};
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn fixture(name: &str) -> String {
    let path = workspace_root().join("fixtures").join("c4").join(name);
    std::fs::read_to_string(&path).expect("fixture")
}

fn width(s: &str) -> usize {
    UnicodeWidthMeasurer.width(s)
}

#[test]
fn non_c4_input_is_rejected() {
    assert_eq!(render("graph TD\n    A --> B"), None);
    assert_eq!(render("sequenceDiagram\n    Alice->>Bob: Hello"), None);
}

#[test]
fn ungrouped_diagram_lists_relationships_after_the_grid() {
    let out = render("C4Context\nPerson(u,\"User\")\nSystem(s,\"Sys\")\nRel(u,s,\"Uses\")")
        .expect("c4");
    assert!(out.contains("User"));
    assert!(out.contains("Sys"));
    assert!(out.contains("Uses"));

    let lines = out.lines().collect::<Vec<_>>();
    let grid_end = lines
        .iter()
        .rposition(|l| l.contains('┘'))
        .expect("grid present");
    let edge = lines
        .iter()
        .position(|l| *l == "  User ──[Uses]──> Sys")
        .expect("edge line");
    assert!(edge > grid_end);
}

#[test]
fn basic_fixture_renders_exactly() {
    let out = render(&fixture("context_basic.mmd")).expect("c4");
    let blank = " ".repeat(18);
    let expected = [
        "System Context diagram".to_string(),
        "=".repeat(22),
        String::new(),
        format!("┌────────────────┐  ┌────────────────┐  {blank}"),
        format!("│    👤 User     │  │   📦 System    │  {blank}"),
        format!("│ A user of t... │  │ The main sy... │  {blank}"),
        format!("└────────────────┘  └────────────────┘  {blank}"),
        format!("{blank}  {blank}  {blank}"),
        format!("{blank}  {blank}  {blank}"),
        String::new(),
        "Relationships:".to_string(),
        "─".repeat(40),
        "  User ──[Uses]──> System".to_string(),
    ]
    .join("\n");
    assert_eq!(out, expected);
}

#[test]
fn boundary_frame_holds_one_row_with_a_blank_column() {
    let out = render(&fixture("enterprise_boundary.mmd")).expect("c4");
    let lines = out.lines().collect::<Vec<_>>();

    let header = lines
        .iter()
        .position(|l| l.starts_with("╔═ Boundary 1 "))
        .expect("boundary header");
    let footer = lines
        .iter()
        .position(|l| l.starts_with('╚'))
        .expect("boundary footer");

    // header, spacer, 6 slot lines, spacer, footer
    assert_eq!(footer - header, 9);
    for line in &lines[header..=footer] {
        assert_eq!(width(line), 63, "frame line width: {line:?}");
    }
    for line in &lines[header + 1..footer] {
        assert!(line.starts_with('║') && line.ends_with('║'));
    }

    let top = lines[header + 2];
    assert_eq!(top.matches('┌').count(), 2);
    assert!(top.ends_with(&format!("  {} ║", " ".repeat(18))));
    assert!(lines[header + 3].contains("👤 User 1"));
    assert!(lines[header + 3].contains("📦 System 1"));

    // Blank line after the frame, then the relationships block.
    assert_eq!(lines[footer + 1], "");
    assert_eq!(lines[footer + 2], "");
    assert_eq!(lines[footer + 3], "Relationships:");
    assert_eq!(lines.last().copied(), Some("  User 1 ──[User Action]──> System 1"));
}

#[test]
fn boundary_rows_are_separated_by_spacer_lines() {
    let out = render(&fixture("internet_banking.mmd")).expect("c4");
    let lines = out.lines().collect::<Vec<_>>();
    let header = lines
        .iter()
        .position(|l| l.starts_with("╔═ Internet Banking "))
        .expect("banking boundary");
    let spacer = format!("║{}║", " ".repeat(61));

    // header, spacer, row 1 (6), spacer, row 2 (6), spacer, footer
    assert_eq!(lines[header + 1], spacer);
    assert_eq!(lines[header + 8], spacer);
    assert!(lines[header + 10].contains("Database"));
    assert_eq!(lines[header + 15], spacer);
    assert!(lines[header + 16].starts_with('╚'));
}

#[test]
fn entities_outside_boundaries_are_not_drawn_when_boundaries_exist() {
    let out = render(&fixture("internet_banking.mmd")).expect("c4");
    assert!(!out.contains("👤 Customer"));
    // ...but they still resolve as relationship endpoints.
    assert!(out.contains("  Customer ──[Visits]──> Web App"));
    assert!(out.contains("  E-mail System ──[Sends e-mails to]──> Customer"));
}

#[test]
fn frames_are_emitted_in_declaration_order() {
    let out = render(&fixture("internet_banking.mmd")).expect("c4");
    let banking = out.find("╔═ Internet Banking").expect("banking");
    let bank = out.find("╔═ Big Bank plc").expect("bank");
    assert!(banking < bank);
    assert!(out.contains("📦 Mainfram..."));
}

#[test]
fn truncated_label_line_is_exactly_box_width() {
    let out = render("C4Context\nSystem(s, \"A very long system label\")").expect("c4");
    let line = out
        .lines()
        .find(|l| l.contains("..."))
        .expect("truncated line");
    let cell = line.split("  ").next().unwrap();
    assert_eq!(width(cell), 14 + 4);
}

#[test]
fn unresolved_relationship_keeps_header_only() {
    let out = render("C4Context\nRel(a,b,\"X\")").expect("c4");
    assert_eq!(out, format!("\nRelationships:\n{}", "─".repeat(40)));
}

#[test]
fn title_is_underlined_to_its_length() {
    let out = render("title My System\nC4Context\nPerson(u,\"U\",\"d\")").expect("c4");
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("My System"));
    assert_eq!(lines.next(), Some("========="));
    assert_eq!(lines.next(), Some(""));
}

#[test]
fn rendering_is_deterministic() {
    let text = fixture("internet_banking.mmd");
    assert_eq!(render(&text), render(&text));
}

#[test]
fn marker_only_input_renders_empty_text() {
    assert_eq!(render("C4Context").as_deref(), Some(""));
}

#[test]
fn layout_overrides_change_box_width() {
    let mut cfg = c4view_core::C4Config::empty_object();
    cfg.set_value("c4.boxWidth", serde_json::json!(12));
    cfg.set_value("c4.columns", serde_json::json!(1));
    let options = RenderOptions::from_config(&cfg);

    let out = render_with("C4Context\nSystem(a, \"A\")\nSystem(b, \"B\")", &options).expect("c4");
    let lines = out.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "┌──────────┐");
    // One column: two rows separated by a blank line.
    assert_eq!(lines[6], "");
    assert_eq!(lines[7], "┌──────────┐");
}

#[test]
fn oversized_layout_overrides_fall_back_to_defaults() {
    let mut cfg = c4view_core::C4Config::empty_object();
    cfg.set_value("c4.boxWidth", serde_json::json!(u64::MAX));
    cfg.set_value("c4.columns", serde_json::json!(u64::MAX));
    let options = RenderOptions::from_config(&cfg);

    let text = "C4Context\nBoundary(b, \"B\") {\nSystem(a, \"A\")\n}";
    let out = render_with(text, &options).expect("c4");
    assert_eq!(out, render(text).expect("c4"));
    assert!(out.lines().all(|l| l.is_empty() || width(l) == 63));
}
