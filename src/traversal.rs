//! # Group Traversal
//!
//! Walks the group hierarchy below a root group and collects every record the
//! API exposes for it: each group's own detail record, the projects directly
//! under each group, and each group's container registry repositories.
//!
//! ## Ordering
//!
//! For every group the contribution is, in order:
//!
//! 1.  the group's own detail record;
//! 2.  the contributions of its subgroups, in listing order;
//! 3.  its direct projects;
//! 4.  its registry repositories.
//!
//! The concatenation is then deduplicated by structural equality, keeping the
//! first occurrence.
//!
//! ## Failure containment
//!
//! Only the root group's detail fetch can fail the whole walk. A subgroup whose
//! detail fetch fails is logged and contributes nothing; listing failures are
//! contained by the [`GroupApi`] listing helpers.
//!
//! ## Cycle guard
//!
//! The walk is driven by an explicit stack instead of recursion, and tracks the
//! ids of the groups it has entered. A group reached a second time is logged
//! and skipped, so malformed hierarchies cannot loop forever.

use std::collections::HashSet;

use log::{info, warn};

use crate::client::GroupApi;
use crate::error::Result;
use crate::item::{dedup_items, GroupId, Item};

/// Summary of what a traversal reached and what it had to skip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalReport {
    /// Groups whose detail record was fetched, root included.
    pub groups_visited: usize,
    /// Subgroups whose detail fetch failed; their subtrees are missing.
    pub unreachable_groups: Vec<GroupId>,
    /// Groups reached more than once and skipped on the later visits.
    pub revisited_groups: Vec<GroupId>,
    /// Number of records in the deduplicated result.
    pub items: usize,
}

impl TraversalReport {
    /// Whether any part of the hierarchy had to be skipped.
    pub fn is_complete(&self) -> bool {
        self.unreachable_groups.is_empty()
    }
}

/// Enumerates every record reachable under `root`.
///
/// Fails only when the root group's own detail record cannot be fetched.
pub fn enumerate<A: GroupApi + ?Sized>(api: &A, root: GroupId) -> Result<Vec<Item>> {
    enumerate_with_report(api, root).map(|(items, _)| items)
}

/// Like [`enumerate`], also returning a [`TraversalReport`].
pub fn enumerate_with_report<A: GroupApi + ?Sized>(
    api: &A,
    root: GroupId,
) -> Result<(Vec<Item>, TraversalReport)> {
    let root_item = api.fetch_group(root)?;

    let mut walk = Walk::new(api);
    walk.visited.insert(root);
    walk.enter(root, root_item);

    while let Some(task) = walk.stack.pop() {
        match task {
            Task::Visit(id) => walk.visit(id),
            Task::Finish(id) => walk.finish(id),
        }
    }

    let items = dedup_items(walk.items);
    let mut report = walk.report;
    report.items = items.len();

    info!(
        "Found {} items in {} groups under group {}",
        report.items, report.groups_visited, root
    );
    if !report.is_complete() {
        warn!(
            "{} subgroup(s) could not be read; results are partial",
            report.unreachable_groups.len()
        );
    }

    Ok((items, report))
}

enum Task {
    /// Fetch a subgroup's detail record and expand it.
    Visit(GroupId),
    /// Collect a group's projects and registry repositories once all of its
    /// subgroups have been walked.
    Finish(GroupId),
}

struct Walk<'a, A: GroupApi + ?Sized> {
    api: &'a A,
    stack: Vec<Task>,
    visited: HashSet<GroupId>,
    items: Vec<Item>,
    report: TraversalReport,
}

impl<'a, A: GroupApi + ?Sized> Walk<'a, A> {
    fn new(api: &'a A) -> Self {
        Self {
            api,
            stack: Vec::new(),
            visited: HashSet::new(),
            items: Vec::new(),
            report: TraversalReport::default(),
        }
    }

    fn visit(&mut self, id: GroupId) {
        if !self.visited.insert(id) {
            warn!("Group {} was already visited, skipping it", id);
            self.report.revisited_groups.push(id);
            return;
        }

        match self.api.fetch_group(id) {
            Ok(item) => self.enter(id, item),
            Err(e) => {
                warn!("Could not fetch group {}, skipping its subtree: {}", id, e);
                self.report.unreachable_groups.push(id);
            }
        }
    }

    fn enter(&mut self, id: GroupId, item: Item) {
        self.items.push(item);
        self.report.groups_visited += 1;

        let subgroups = self.api.subgroups(id);

        // Stack is LIFO: Finish runs after every subgroup pushed above it.
        self.stack.push(Task::Finish(id));
        for subgroup in subgroups.iter().rev() {
            self.stack.push(Task::Visit(subgroup.group_id()));
        }
    }

    fn finish(&mut self, id: GroupId) {
        let projects = self.api.projects(id);
        self.items.extend(projects);
        let repositories = self.api.registry_repositories(id);
        self.items.extend(repositories);
    }
}
