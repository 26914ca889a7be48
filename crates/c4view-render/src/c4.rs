use crate::RenderOptions;
use crate::model::LayoutConfig;
use crate::text::icons::icon_for;
use crate::text::{TextMeasurer, center, truncate_with_ellipsis};
use c4view_core::{Boundary, Entity, ParsedDiagram};

const RELATIONSHIPS_HEADER: &str = "Relationships:";

/// Renders one entity box: a top border, the icon + label line, an optional description line,
/// and a bottom border. Every line is `width` columns wide as long as `width >= 7`.
pub fn render_box(
    label: &str,
    description: &str,
    width: usize,
    icon: &str,
    measurer: &dyn TextMeasurer,
) -> Vec<String> {
    let inner_width = width.saturating_sub(4);
    let border = "─".repeat(inner_width);

    let mut lines = Vec::with_capacity(4);
    lines.push(format!("┌─{border}─┐"));
    lines.push(content_line(&format!("{icon} {label}"), inner_width, measurer));
    if !description.is_empty() {
        lines.push(content_line(description, inner_width, measurer));
    }
    lines.push(format!("└─{border}─┘"));
    lines
}

fn content_line(text: &str, inner_width: usize, measurer: &dyn TextMeasurer) -> String {
    let fitted = truncate_with_ellipsis(text, inner_width, measurer);
    format!("│ {} │", center(&fitted, inner_width, measurer))
}

fn render_entity_box(
    entity: &Entity,
    layout: &LayoutConfig,
    measurer: &dyn TextMeasurer,
) -> Vec<String> {
    render_box(
        &entity.label,
        entity.description.as_deref().unwrap_or(""),
        layout.box_width,
        icon_for(entity.kind),
        measurer,
    )
}

/// Lays out `ids` row-major into a grid of fixed-height slots. Each returned row holds
/// `layout.slot_height` lines of cells joined by the column gap; missing cells are blank.
fn grid_rows(
    diagram: &ParsedDiagram,
    ids: &[&str],
    layout: &LayoutConfig,
    measurer: &dyn TextMeasurer,
) -> Vec<Vec<String>> {
    let columns = layout.columns.max(1);
    let blank = " ".repeat(layout.box_width);
    let gap = " ".repeat(layout.column_gap);

    ids.chunks(columns)
        .map(|chunk| {
            let boxes = (0..columns)
                .map(|col| match chunk.get(col).and_then(|id| diagram.entity(id)) {
                    Some(entity) => render_entity_box(entity, layout, measurer),
                    None => Vec::new(),
                })
                .collect::<Vec<_>>();

            (0..layout.slot_height)
                .map(|line| {
                    boxes
                        .iter()
                        .map(|b| b.get(line).map_or(blank.as_str(), String::as_str))
                        .collect::<Vec<_>>()
                        .join(&gap)
                })
                .collect()
        })
        .collect()
}

/// Renders entities without a frame; rows are separated by one blank line.
///
/// Missing cells are `box_width` blanks, not `box_width + 4`, so a short last row has the
/// same cell widths as a boundary row.
pub fn render_ungrouped_grid(
    diagram: &ParsedDiagram,
    ids: &[&str],
    layout: &LayoutConfig,
    measurer: &dyn TextMeasurer,
) -> Vec<String> {
    let rows = grid_rows(diagram, ids, layout, measurer);
    let mut out = Vec::new();
    for (idx, row) in rows.into_iter().enumerate() {
        if idx > 0 {
            out.push(String::new());
        }
        out.extend(row);
    }
    out
}

/// Renders a boundary's members inside a double-line frame headed by the boundary label.
pub fn render_boundary(
    diagram: &ParsedDiagram,
    boundary: &Boundary,
    layout: &LayoutConfig,
    measurer: &dyn TextMeasurer,
) -> Vec<String> {
    let inner_width = layout.frame_inner_width();
    let spacer = format!("║{}║", " ".repeat(inner_width));
    let header_fill = inner_width.saturating_sub(measurer.width(&boundary.label) + 3);

    let mut out = Vec::new();
    out.push(format!("╔═ {} {}╗", boundary.label, "═".repeat(header_fill)));
    out.push(spacer.clone());

    let ids = boundary
        .member_ids
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>();
    let rows = grid_rows(diagram, &ids, layout, measurer);
    for (idx, row) in rows.into_iter().enumerate() {
        if idx > 0 {
            out.push(spacer.clone());
        }
        out.extend(row.into_iter().map(|line| format!("║  {line} ║")));
    }

    out.push(spacer);
    out.push(format!("╚{}╝", "═".repeat(inner_width)));
    out
}

/// Renders the relationships block. The header is present whenever any relationship was
/// declared, even when none of them resolve.
pub fn render_relationships(diagram: &ParsedDiagram, layout: &LayoutConfig) -> Vec<String> {
    if diagram.relationships.is_empty() {
        return Vec::new();
    }

    let mut out = vec![
        String::new(),
        RELATIONSHIPS_HEADER.to_string(),
        "─".repeat(layout.rule_width),
    ];
    for rel in &diagram.relationships {
        let Some((from, to)) = diagram.resolve(rel) else {
            tracing::trace!(
                from = %rel.from_id,
                to = %rel.to_id,
                "skipping relationship with undeclared endpoint"
            );
            continue;
        };
        out.push(format!("  {} ──[{}]──> {}", from.label, rel.label, to.label));
    }
    out
}

/// Assembles the title, the grid(s) and the relationships block into one string.
pub fn render_c4_text(diagram: &ParsedDiagram, options: &RenderOptions) -> String {
    let layout = &options.layout;
    let measurer = options.text_measurer.as_ref();
    let mut out: Vec<String> = Vec::new();

    if let Some(title) = diagram.title.as_deref() {
        out.push(title.to_string());
        out.push("=".repeat(measurer.width(title)));
        out.push(String::new());
    }

    if diagram.boundaries.is_empty() {
        let ids = diagram
            .entities
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>();
        out.extend(render_ungrouped_grid(diagram, &ids, layout, measurer));
    } else {
        for boundary in &diagram.boundaries {
            out.extend(render_boundary(diagram, boundary, layout, measurer));
            out.push(String::new());
        }
    }

    out.extend(render_relationships(diagram, layout));
    out.join("\n")
}
