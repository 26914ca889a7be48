use crate::diagram::{
    Boundary, BoundaryKind, C4Kind, Entity, EntityKind, ParsedDiagram, Relationship,
};
use regex::Regex;
use std::sync::OnceLock;

const COMMENT_MARKER: &str = "%%";

/// One classified source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    Title(&'a str),
    DialectMarker(C4Kind),
    BoundaryOpen {
        kind: BoundaryKind,
        id: &'a str,
        label: &'a str,
    },
    PersonDecl {
        id: &'a str,
        label: &'a str,
        description: Option<&'a str>,
    },
    EntityDecl {
        kind: EntityKind,
        id: &'a str,
        label: &'a str,
        description: Option<&'a str>,
    },
    Relationship {
        from_id: &'a str,
        to_id: &'a str,
        label: &'a str,
    },
    BoundaryClose,
    Unmatched,
}

type StatementMatcher = for<'a> fn(&'a str) -> Option<Statement<'a>>;

// Boundary-open shares call syntax with entity declarations and must be tried first.
const MATCHERS: &[StatementMatcher] = &[
    match_boundary_open,
    match_person,
    match_entity,
    match_rel,
    match_boundary_close,
];

/// Parses C4 source into the entity graph. Lines that match no statement form are dropped.
pub fn parse_c4(code: &str) -> ParsedDiagram {
    let mut db = C4Db::default();
    for raw in code.trim().lines() {
        let t = raw.trim();
        if t.is_empty() || t.starts_with(COMMENT_MARKER) {
            continue;
        }
        let stmt = classify_statement(t);
        if stmt == Statement::Unmatched {
            tracing::trace!(line = t, "ignoring unrecognized C4 statement");
        }
        db.apply(stmt);
    }
    db.into_diagram()
}

/// Classifies a single trimmed, non-empty, non-comment line.
pub fn classify_statement(t: &str) -> Statement<'_> {
    if let Some(title) = try_parse_title(t) {
        return Statement::Title(title);
    }
    if let Some(kind) = C4Kind::from_marker(t) {
        return Statement::DialectMarker(kind);
    }
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(t))
        .unwrap_or(Statement::Unmatched)
}

#[derive(Debug, Default)]
struct C4Db {
    diagram: ParsedDiagram,
    /// Index of the most recently opened boundary. A closing brace does not reset it.
    current_boundary: Option<usize>,
}

impl C4Db {
    fn apply(&mut self, stmt: Statement<'_>) {
        match stmt {
            Statement::Title(title) => self.diagram.title = Some(title.to_string()),
            Statement::DialectMarker(kind) => {
                self.diagram.kind.get_or_insert(kind);
            }
            Statement::BoundaryOpen { kind, id, label } => self.add_boundary(kind, id, label),
            Statement::PersonDecl {
                id,
                label,
                description,
            } => self.add_entity(EntityKind::Person, id, label, description),
            Statement::EntityDecl {
                kind,
                id,
                label,
                description,
            } => self.add_entity(kind, id, label, description),
            Statement::Relationship {
                from_id,
                to_id,
                label,
            } => self.diagram.relationships.push(Relationship {
                from_id: from_id.to_string(),
                to_id: to_id.to_string(),
                label: label.to_string(),
            }),
            Statement::BoundaryClose | Statement::Unmatched => {}
        }
    }

    fn add_boundary(&mut self, kind: BoundaryKind, id: &str, label: &str) {
        self.current_boundary = Some(self.diagram.boundaries.len());
        self.diagram.boundaries.push(Boundary {
            kind,
            id: id.to_string(),
            label: label.to_string(),
            member_ids: Vec::new(),
        });
    }

    fn add_entity(&mut self, kind: EntityKind, id: &str, label: &str, description: Option<&str>) {
        let entity = Entity {
            kind,
            id: id.to_string(),
            label: label.to_string(),
            description: description.map(str::to_string),
        };
        if self.diagram.entities.insert(id.to_string(), entity).is_some() {
            tracing::debug!(id, "C4 entity redeclared; keeping the latest declaration");
        }

        if let Some(boundary) = self
            .current_boundary
            .and_then(|idx| self.diagram.boundaries.get_mut(idx))
        {
            boundary.member_ids.push(id.to_string());
        }
    }

    fn into_diagram(self) -> ParsedDiagram {
        self.diagram
    }
}

fn try_parse_title(t: &str) -> Option<&str> {
    t.strip_prefix("title ").map(str::trim)
}

fn boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"^(Boundary|Enterprise_Boundary|System_Boundary|Container_Boundary)\(([A-Za-z0-9_]+),\s*"([^"]+)"\)\s*\{?$"#,
        )
        .expect("valid regex")
    })
}

fn person_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^Person\(([A-Za-z0-9_]+),\s*"([^"]+)"(?:,\s*"([^"]+)")?\)$"#)
            .expect("valid regex")
    })
}

fn entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"^(System|Container|Component)\(([A-Za-z0-9_]+),\s*"([^"]+)"(?:,\s*"([^"]+)")?\)$"#,
        )
        .expect("valid regex")
    })
}

fn rel_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^Rel\(([A-Za-z0-9_]+),\s*([A-Za-z0-9_]+),\s*"([^"]+)""#)
            .expect("valid regex")
    })
}

fn match_boundary_open(t: &str) -> Option<Statement<'_>> {
    let caps = boundary_re().captures(t)?;
    Some(Statement::BoundaryOpen {
        kind: BoundaryKind::from_macro(caps.get(1)?.as_str())?,
        id: caps.get(2)?.as_str(),
        label: caps.get(3)?.as_str(),
    })
}

fn match_person(t: &str) -> Option<Statement<'_>> {
    let caps = person_re().captures(t)?;
    Some(Statement::PersonDecl {
        id: caps.get(1)?.as_str(),
        label: caps.get(2)?.as_str(),
        description: caps.get(3).map(|m| m.as_str()),
    })
}

fn match_entity(t: &str) -> Option<Statement<'_>> {
    let caps = entity_re().captures(t)?;
    Some(Statement::EntityDecl {
        kind: EntityKind::from_macro(caps.get(1)?.as_str())?,
        id: caps.get(2)?.as_str(),
        label: caps.get(3)?.as_str(),
        description: caps.get(4).map(|m| m.as_str()),
    })
}

fn match_rel(t: &str) -> Option<Statement<'_>> {
    let caps = rel_re().captures(t)?;
    Some(Statement::Relationship {
        from_id: caps.get(1)?.as_str(),
        to_id: caps.get(2)?.as_str(),
        label: caps.get(3)?.as_str(),
    })
}

fn match_boundary_close(t: &str) -> Option<Statement<'_>> {
    (t == "}").then_some(Statement::BoundaryClose)
}
