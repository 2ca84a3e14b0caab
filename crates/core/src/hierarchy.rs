//! The four-level entity hierarchy and the parent/child relations between
//! adjacent levels.
//!
//! ```text
//! Project ── rel_Project_WP ──> WorkPackage ── rel_WP_subWP ──> SubWorkPackage ── rel_subWP_item ──> Item
//! ```
//!
//! A child may only be dropped onto the level directly above it. Every
//! relation table holds at most one parent per child.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One level of the hierarchy, as named on the wire (`project`, `wp`, `subwp`, `item`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Project,
    #[serde(rename = "wp")]
    WorkPackage,
    #[serde(rename = "subwp")]
    SubWorkPackage,
    Item,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Project,
        EntityKind::WorkPackage,
        EntityKind::SubWorkPackage,
        EntityKind::Item,
    ];

    /// Wire name used by the drag-and-drop client.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Project => "project",
            EntityKind::WorkPackage => "wp",
            EntityKind::SubWorkPackage => "subwp",
            EntityKind::Item => "item",
        }
    }

    /// Table holding rows of this kind.
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::Project => "tb_Project",
            EntityKind::WorkPackage => "tb_WP",
            EntityKind::SubWorkPackage => "tb_subWP",
            EntityKind::Item => "tb_item",
        }
    }

    /// Human-readable entity name for error messages.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Project => "Project",
            EntityKind::WorkPackage => "WorkPackage",
            EntityKind::SubWorkPackage => "SubWorkPackage",
            EntityKind::Item => "Item",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown entity type '{s}'")))
    }
}

/// A parent/child link table between two adjacent levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    ProjectWorkPackage,
    WorkPackageSubWorkPackage,
    SubWorkPackageItem,
}

impl Relation {
    pub const ALL: [Relation; 3] = [
        Relation::ProjectWorkPackage,
        Relation::WorkPackageSubWorkPackage,
        Relation::SubWorkPackageItem,
    ];

    pub fn table(self) -> &'static str {
        match self {
            Relation::ProjectWorkPackage => "rel_Project_WP",
            Relation::WorkPackageSubWorkPackage => "rel_WP_subWP",
            Relation::SubWorkPackageItem => "rel_subWP_item",
        }
    }

    pub fn parent(self) -> EntityKind {
        match self {
            Relation::ProjectWorkPackage => EntityKind::Project,
            Relation::WorkPackageSubWorkPackage => EntityKind::WorkPackage,
            Relation::SubWorkPackageItem => EntityKind::SubWorkPackage,
        }
    }

    pub fn child(self) -> EntityKind {
        match self {
            Relation::ProjectWorkPackage => EntityKind::WorkPackage,
            Relation::WorkPackageSubWorkPackage => EntityKind::SubWorkPackage,
            Relation::SubWorkPackageItem => EntityKind::Item,
        }
    }

    /// Resolve the relation a drag of `source` onto `target` updates.
    ///
    /// Only drops onto the level directly above are accepted.
    pub fn for_move(source: EntityKind, target: EntityKind) -> Result<Relation, CoreError> {
        Relation::ALL
            .into_iter()
            .find(|rel| rel.child() == source && rel.parent() == target)
            .ok_or_else(|| {
                CoreError::Validation(format!("Cannot move a '{source}' into a '{target}'"))
            })
    }
}
