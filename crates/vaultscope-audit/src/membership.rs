//! The membership index: who is in which group, transitively.
//!
//! Group membership forms a directed graph (an edge from member group
//! to containing group) because groups can nest. The index answers the
//! two queries aggregation needs: every group a user belongs to, and
//! every user a group ultimately contains. Both walk the graph
//! breadth-first behind a visited set, so diamonds are counted once
//! and cycles cannot loop.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use vaultscope_core::{
    AuditWarning, EntityKind, Group, GroupId, MemberRef, Membership, User, UserId,
};

/// Transitive membership lookups over one snapshot's groups.
pub struct MembershipIndex {
    /// Edge member → container: "is a member of".
    graph: DiGraph<GroupId, ()>,
    /// Lookup table: group ID → petgraph NodeIndex.
    node_indices: HashMap<GroupId, NodeIndex>,
    /// Users sitting directly inside each group.
    direct_users: HashMap<GroupId, BTreeSet<UserId>>,
    /// Groups each user sits directly inside.
    direct_groups: HashMap<UserId, BTreeSet<GroupId>>,
}

impl MembershipIndex {
    /// Builds the index from membership edges.
    ///
    /// Edges referencing users or groups the directory never listed
    /// are kept (they still resolve transitively) and reported once
    /// per distinct id as dangling-reference warnings. Cycles among
    /// groups are reported as well; traversal is unaffected by them.
    pub fn build(
        memberships: &[Membership],
        users: &[User],
        groups: &[Group],
    ) -> (Self, Vec<AuditWarning>) {
        let known_users: HashSet<&str> = users.iter().map(|user| user.id.as_str()).collect();
        let known_groups: HashSet<&str> = groups.iter().map(|group| group.id.as_str()).collect();

        let mut index = Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            direct_users: HashMap::new(),
            direct_groups: HashMap::new(),
        };
        let mut warnings = Vec::new();
        let mut seen: HashSet<(EntityKind, String)> = HashSet::new();

        for membership in memberships {
            if !known_groups.contains(membership.group.as_str()) {
                report_dangling(
                    &mut warnings,
                    &mut seen,
                    EntityKind::Group,
                    membership.group.as_str(),
                    "membership container",
                );
            }
            match &membership.member {
                MemberRef::User(user_id) => {
                    if !known_users.contains(user_id.as_str()) {
                        report_dangling(
                            &mut warnings,
                            &mut seen,
                            EntityKind::User,
                            user_id.as_str(),
                            "group membership",
                        );
                    }
                    index
                        .direct_users
                        .entry(membership.group.clone())
                        .or_default()
                        .insert(user_id.clone());
                    index
                        .direct_groups
                        .entry(user_id.clone())
                        .or_default()
                        .insert(membership.group.clone());
                }
                MemberRef::Group(member_id) => {
                    if !known_groups.contains(member_id.as_str()) {
                        report_dangling(
                            &mut warnings,
                            &mut seen,
                            EntityKind::Group,
                            member_id.as_str(),
                            "group membership",
                        );
                    }
                    let member_idx = index.intern(member_id);
                    let container_idx = index.intern(&membership.group);
                    if index.graph.find_edge(member_idx, container_idx).is_none() {
                        index.graph.add_edge(member_idx, container_idx, ());
                    }
                }
            }
        }

        warnings.extend(index.detect_cycles());
        (index, warnings)
    }

    /// Every group the user belongs to, directly or through nesting.
    pub fn groups_of(&self, user: &UserId) -> BTreeSet<GroupId> {
        let mut result = BTreeSet::new();
        let Some(starts) = self.direct_groups.get(user) else {
            return result;
        };

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut queue: VecDeque<NodeIndex> = VecDeque::new();
        // Start groups are distinct, so each maps to a distinct node.
        for group in starts {
            result.insert(group.clone());
            if let Some(&idx) = self.node_indices.get(group) {
                visited.insert(idx);
                queue.push_back(idx);
            }
        }

        while let Some(current) = queue.pop_front() {
            for neighbor in self.graph.neighbors_directed(current, Direction::Outgoing) {
                if visited.insert(neighbor) {
                    result.insert(self.graph[neighbor].clone());
                    queue.push_back(neighbor);
                }
            }
        }
        result
    }

    /// Every user the group ultimately contains, walking nested
    /// member groups.
    pub fn users_of(&self, group: &GroupId) -> BTreeSet<UserId> {
        let mut reached: Vec<GroupId> = vec![group.clone()];

        if let Some(&start) = self.node_indices.get(group) {
            let mut visited: HashSet<NodeIndex> = HashSet::new();
            let mut queue: VecDeque<NodeIndex> = VecDeque::new();
            visited.insert(start);
            queue.push_back(start);

            while let Some(current) = queue.pop_front() {
                for neighbor in self.graph.neighbors_directed(current, Direction::Incoming) {
                    if visited.insert(neighbor) {
                        reached.push(self.graph[neighbor].clone());
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        let mut members = BTreeSet::new();
        for group_id in &reached {
            if let Some(users) = self.direct_users.get(group_id) {
                members.extend(users.iter().cloned());
            }
        }
        members
    }

    fn intern(&mut self, group: &GroupId) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(group) {
            return idx;
        }
        let idx = self.graph.add_node(group.clone());
        self.node_indices.insert(group.clone(), idx);
        idx
    }

    /// One warning per strongly connected component that actually
    /// loops: more than one group, or a group nested in itself.
    fn detect_cycles(&self) -> Vec<AuditWarning> {
        let mut warnings = Vec::new();
        for component in tarjan_scc(&self.graph) {
            let is_cycle = component.len() > 1
                || component
                    .first()
                    .is_some_and(|&idx| self.graph.find_edge(idx, idx).is_some());
            if is_cycle {
                let groups: Vec<GroupId> = component
                    .iter()
                    .map(|&idx| self.graph[idx].clone())
                    .collect();
                warnings.push(AuditWarning::membership_cycle(groups));
            }
        }
        warnings
    }
}

fn report_dangling(
    warnings: &mut Vec<AuditWarning>,
    seen: &mut HashSet<(EntityKind, String)>,
    kind: EntityKind,
    id: &str,
    context: &str,
) {
    if seen.insert((kind, id.to_string())) {
        warnings.push(AuditWarning::dangling(kind, id, context));
    }
}
