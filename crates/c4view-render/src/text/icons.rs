//! Pictographic glyphs drawn in front of entity labels.

use c4view_core::EntityKind;

pub const PERSON_ICON: &str = "👤";
pub const ELEMENT_ICON: &str = "📦";

/// Persons get their own glyph; systems, containers and components share one.
pub fn icon_for(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Person => PERSON_ICON,
        EntityKind::System | EntityKind::Container | EntityKind::Component => ELEMENT_ICON,
    }
}
