use c4view_core::C4Config;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const DEFAULT_BOX_WIDTH: usize = 18;
pub const DEFAULT_COLUMNS: usize = 3;
pub const DEFAULT_SLOT_HEIGHT: usize = 6;
pub const DEFAULT_COLUMN_GAP: usize = 2;
pub const DEFAULT_RULE_WIDTH: usize = 40;

const MIN_BOX_WIDTH: usize = 8;
const MIN_COLUMNS: usize = 1;
const MIN_SLOT_HEIGHT: usize = 4;

const MAX_BOX_WIDTH: usize = 256;
const MAX_COLUMNS: usize = 16;
const MAX_SLOT_HEIGHT: usize = 64;
const MAX_COLUMN_GAP: usize = 16;
const MAX_RULE_WIDTH: usize = 1024;

/// Fixed grid geometry, measured in terminal columns and lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub box_width: usize,
    pub columns: usize,
    /// Lines reserved per box regardless of its actual height.
    pub slot_height: usize,
    pub column_gap: usize,
    /// Length of the divider under the relationships header.
    pub rule_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            box_width: DEFAULT_BOX_WIDTH,
            columns: DEFAULT_COLUMNS,
            slot_height: DEFAULT_SLOT_HEIGHT,
            column_gap: DEFAULT_COLUMN_GAP,
            rule_width: DEFAULT_RULE_WIDTH,
        }
    }
}

impl LayoutConfig {
    /// Reads `c4.*` overrides; missing or out-of-range values keep the default.
    pub fn from_config(config: &C4Config) -> Self {
        let mut layout = Self::default();
        let read = |path: &str, range: RangeInclusive<usize>| {
            config
                .get_u64(path)
                .and_then(|v| usize::try_from(v).ok())
                .filter(|v| range.contains(v))
        };

        if let Some(v) = read("c4.boxWidth", MIN_BOX_WIDTH..=MAX_BOX_WIDTH) {
            layout.box_width = v;
        }
        if let Some(v) = read("c4.columns", MIN_COLUMNS..=MAX_COLUMNS) {
            layout.columns = v;
        }
        if let Some(v) = read("c4.slotHeight", MIN_SLOT_HEIGHT..=MAX_SLOT_HEIGHT) {
            layout.slot_height = v;
        }
        if let Some(v) = read("c4.columnGap", 0..=MAX_COLUMN_GAP) {
            layout.column_gap = v;
        }
        if let Some(v) = read("c4.ruleWidth", 0..=MAX_RULE_WIDTH) {
            layout.rule_width = v;
        }
        layout
    }

    /// Width between the two vertical bars of a boundary frame.
    pub fn frame_inner_width(&self) -> usize {
        let boxes = self.box_width.saturating_mul(self.columns);
        let gaps = self
            .column_gap
            .saturating_mul(self.columns.saturating_sub(1));
        boxes.saturating_add(gaps).saturating_add(3)
    }
}
