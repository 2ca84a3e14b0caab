//! Composition of flat table rows into the nested board shown on `/`.
//!
//! Each entity is placed under its linked parent; entities without a parent
//! link, or whose parent row is missing, are listed as unassigned at their
//! own level.

use std::collections::HashMap;

use planboard_core::types::DbId;
use planboard_db::models::hierarchy::RelationLink;
use planboard_db::models::item::Item;
use planboard_db::models::project::Project;
use planboard_db::models::sub_work_package::SubWorkPackage;
use planboard_db::models::work_package::WorkPackage;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SubWorkPackageNode {
    pub sub_work_package: SubWorkPackage,
    pub items: Vec<Item>,
}

#[derive(Debug, Serialize)]
pub struct WorkPackageNode {
    pub work_package: WorkPackage,
    pub sub_work_packages: Vec<SubWorkPackageNode>,
}

#[derive(Debug, Serialize)]
pub struct ProjectNode {
    pub project: Project,
    pub work_packages: Vec<WorkPackageNode>,
}

#[derive(Debug, Default, Serialize)]
pub struct Board {
    pub projects: Vec<ProjectNode>,
    pub unassigned_work_packages: Vec<WorkPackageNode>,
    pub unassigned_sub_work_packages: Vec<SubWorkPackageNode>,
    pub unassigned_items: Vec<Item>,
}

/// Flat rows and links as loaded from the database.
#[derive(Debug, Default)]
pub struct BoardRows {
    pub projects: Vec<Project>,
    pub work_packages: Vec<WorkPackage>,
    pub sub_work_packages: Vec<SubWorkPackage>,
    pub items: Vec<Item>,
    pub project_wp: Vec<RelationLink>,
    pub wp_subwp: Vec<RelationLink>,
    pub subwp_item: Vec<RelationLink>,
}

/// Split `children` into per-parent groups (keyed by parent id, order kept)
/// and those without a known parent.
fn group_by_parent<T>(
    children: Vec<T>,
    child_id: impl Fn(&T) -> DbId,
    links: &[RelationLink],
    parents: &[DbId],
) -> (HashMap<DbId, Vec<T>>, Vec<T>) {
    let parent_of: HashMap<DbId, DbId> = links.iter().map(|l| (l.child_id, l.parent_id)).collect();

    let mut grouped: HashMap<DbId, Vec<T>> = HashMap::new();
    let mut orphans = Vec::new();
    for child in children {
        match parent_of.get(&child_id(&child)) {
            Some(parent) if parents.contains(parent) => {
                grouped.entry(*parent).or_default().push(child)
            }
            _ => orphans.push(child),
        }
    }
    (grouped, orphans)
}

pub fn compose(rows: BoardRows) -> Board {
    let sub_ids: Vec<DbId> = rows.sub_work_packages.iter().map(|s| s.id).collect();
    let (mut items_by_sub, unassigned_items) =
        group_by_parent(rows.items, |i| i.id, &rows.subwp_item, &sub_ids);

    let sub_nodes: Vec<SubWorkPackageNode> = rows
        .sub_work_packages
        .into_iter()
        .map(|sub| SubWorkPackageNode {
            items: items_by_sub.remove(&sub.id).unwrap_or_default(),
            sub_work_package: sub,
        })
        .collect();

    let wp_ids: Vec<DbId> = rows.work_packages.iter().map(|w| w.id).collect();
    let (mut subs_by_wp, unassigned_sub_work_packages) = group_by_parent(
        sub_nodes,
        |n| n.sub_work_package.id,
        &rows.wp_subwp,
        &wp_ids,
    );

    let wp_nodes: Vec<WorkPackageNode> = rows
        .work_packages
        .into_iter()
        .map(|wp| WorkPackageNode {
            sub_work_packages: subs_by_wp.remove(&wp.id).unwrap_or_default(),
            work_package: wp,
        })
        .collect();

    let project_ids: Vec<DbId> = rows.projects.iter().map(|p| p.id).collect();
    let (mut wps_by_project, unassigned_work_packages) = group_by_parent(
        wp_nodes,
        |n| n.work_package.id,
        &rows.project_wp,
        &project_ids,
    );

    let projects = rows
        .projects
        .into_iter()
        .map(|project| ProjectNode {
            work_packages: wps_by_project.remove(&project.id).unwrap_or_default(),
            project,
        })
        .collect();

    Board {
        projects,
        unassigned_work_packages,
        unassigned_sub_work_packages,
        unassigned_items,
    }
}
