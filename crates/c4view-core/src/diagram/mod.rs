//! Semantic model produced by the C4 statement parser.

use indexmap::IndexMap;
use serde::Serialize;

/// Diagram level named by the dialect marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum C4Kind {
    C4Context,
    C4Container,
    C4Component,
}

impl C4Kind {
    pub const ALL: [C4Kind; 3] = [Self::C4Context, Self::C4Container, Self::C4Component];

    pub fn marker(self) -> &'static str {
        match self {
            Self::C4Context => "C4Context",
            Self::C4Container => "C4Container",
            Self::C4Component => "C4Component",
        }
    }

    pub fn from_marker(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.marker() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    Person,
    System,
    Container,
    Component,
}

impl EntityKind {
    /// Maps an entity declaration macro name to its kind.
    pub fn from_macro(name: &str) -> Option<Self> {
        match name {
            "Person" => Some(Self::Person),
            "System" => Some(Self::System),
            "Container" => Some(Self::Container),
            "Component" => Some(Self::Component),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub kind: EntityKind,
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BoundaryKind {
    Boundary,
    EnterpriseBoundary,
    SystemBoundary,
    ContainerBoundary,
}

impl BoundaryKind {
    pub fn from_macro(name: &str) -> Option<Self> {
        match name {
            "Boundary" => Some(Self::Boundary),
            "Enterprise_Boundary" => Some(Self::EnterpriseBoundary),
            "System_Boundary" => Some(Self::SystemBoundary),
            "Container_Boundary" => Some(Self::ContainerBoundary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Boundary {
    pub kind: BoundaryKind,
    pub id: String,
    pub label: String,
    /// Ids assigned to this boundary, in declaration order. An id declared twice appears twice.
    pub member_ids: Vec<String>,
}

/// A directed edge. Endpoints are resolved against the entity table at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub from_id: String,
    pub to_id: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDiagram {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<C4Kind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Keyed by id; keeps first-insertion order, overwrites replace the value in place.
    pub entities: IndexMap<String, Entity>,
    pub boundaries: Vec<Boundary>,
    pub relationships: Vec<Relationship>,
}

impl ParsedDiagram {
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Returns both endpoints of `rel` when they are declared.
    pub fn resolve(&self, rel: &Relationship) -> Option<(&Entity, &Entity)> {
        Some((self.entity(&rel.from_id)?, self.entity(&rel.to_id)?))
    }
}
