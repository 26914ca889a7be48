use super::icons::{ELEMENT_ICON, PERSON_ICON, icon_for};
use super::*;
use c4view_core::EntityKind;

#[test]
fn glyphs_are_two_columns_wide() {
    let m = UnicodeWidthMeasurer;
    assert_eq!(m.width(PERSON_ICON), 2);
    assert_eq!(m.width(ELEMENT_ICON), 2);
    assert_eq!(CharCountMeasurer.width(PERSON_ICON), 1);
}

#[test]
fn only_persons_get_the_person_glyph() {
    assert_eq!(icon_for(EntityKind::Person), PERSON_ICON);
    assert_eq!(icon_for(EntityKind::System), ELEMENT_ICON);
    assert_eq!(icon_for(EntityKind::Container), ELEMENT_ICON);
    assert_eq!(icon_for(EntityKind::Component), ELEMENT_ICON);
}

#[test]
fn truncate_keeps_text_that_fits_exactly() {
    let m = UnicodeWidthMeasurer;
    assert_eq!(truncate_with_ellipsis("abcdef", 6, &m), "abcdef");
    assert_eq!(truncate_with_ellipsis("abcdefg", 6, &m), "abc...");
}

#[test]
fn truncate_never_splits_a_wide_glyph() {
    let m = UnicodeWidthMeasurer;
    // "日本語テキスト" is 14 columns; 8 - 3 leaves room for two glyphs only.
    let out = truncate_with_ellipsis("日本語テキスト", 8, &m);
    assert_eq!(out, "日本...");
    assert_eq!(m.width(&out), 7);
}

#[test]
fn center_puts_the_odd_column_on_the_right() {
    let m = UnicodeWidthMeasurer;
    assert_eq!(center("ab", 5, &m), " ab  ");
    assert_eq!(center("abc", 3, &m), "abc");
    assert_eq!(center("abcd", 2, &m), "abcd");
}

#[test]
fn take_width_stops_at_the_column_limit() {
    let m = UnicodeWidthMeasurer;
    assert_eq!(take_width("👤 User", 3, &m), "👤 ");
    assert_eq!(take_width("👤 User", 1, &m), "");
    assert_eq!(take_width("abc", 10, &m), "abc");
}
