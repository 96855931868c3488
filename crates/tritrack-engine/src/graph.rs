//! The alias-resolved requirement graph and its topological order.
//!
//! Nodes are the identifiers that appear in at least one resolved edge —
//! the rest of the catalog never participates in propagation. The edge set
//! must form a DAG; a cycle is a fatal configuration error detected here,
//! before any user state is accepted.

use crate::config::Requirement;
use std::collections::BTreeMap;
use tritrack_kernel::VarId;

/// The requirement table contains a cycle.
///
/// Carries the sorted set of nodes that could not be topologically
/// ordered — every node on or downstream of a cycle.
#[derive(Debug, thiserror::Error)]
#[error(
    "requirement graph is not acyclic; unordered variables: {}",
    .unordered.iter().map(VarId::as_str).collect::<Vec<_>>().join(", ")
)]
pub struct CycleError {
    pub unordered: Vec<VarId>,
}

#[derive(Debug, Clone, Default)]
struct Node {
    incoming: Vec<VarId>,
    outgoing: Vec<VarId>,
}

/// Directed graph over alias-resolved requirement edges, with a
/// precomputed topological order (sources before sinks).
#[derive(Debug, Clone)]
pub struct RequirementGraph {
    nodes: BTreeMap<VarId, Node>,
    topo: Vec<VarId>,
    edge_count: usize,
}

impl RequirementGraph {
    /// Build the graph and verify acyclicity via Kahn's algorithm.
    pub fn build(edges: &[Requirement]) -> Result<Self, CycleError> {
        let mut nodes: BTreeMap<VarId, Node> = BTreeMap::new();
        for edge in edges {
            nodes
                .entry(edge.requirement.clone())
                .or_default()
                .outgoing
                .push(edge.dependent.clone());
            nodes
                .entry(edge.dependent.clone())
                .or_default()
                .incoming
                .push(edge.requirement.clone());
        }

        // Relax pending-predecessor counts from the sources down.
        let mut pending: BTreeMap<VarId, usize> = nodes
            .iter()
            .map(|(id, node)| (id.clone(), node.incoming.len()))
            .collect();
        let mut queue: Vec<VarId> = pending
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(id, _)| id.clone())
            .collect();
        let mut topo: Vec<VarId> = Vec::with_capacity(nodes.len());

        while let Some(id) = queue.pop() {
            if let Some(node) = nodes.get(&id) {
                for succ in &node.outgoing {
                    if let Some(count) = pending.get_mut(succ) {
                        *count -= 1;
                        if *count == 0 {
                            queue.push(succ.clone());
                        }
                    }
                }
            }
            topo.push(id);
        }

        if topo.len() != nodes.len() {
            let unordered: Vec<VarId> = pending
                .into_iter()
                .filter(|(_, count)| *count > 0)
                .map(|(id, _)| id)
                .collect();
            return Err(CycleError { unordered });
        }

        Ok(Self {
            nodes,
            topo,
            edge_count: edges.len(),
        })
    }

    /// Nodes in topological order: every requirement before its dependents.
    pub fn topo_order(&self) -> &[VarId] {
        &self.topo
    }

    /// Direct dependents of `id` (edges where `id` is the requirement).
    pub fn outgoing(&self, id: &VarId) -> &[VarId] {
        self.nodes
            .get(id)
            .map(|node| node.outgoing.as_slice())
            .unwrap_or(&[])
    }

    /// Direct requirements of `id` (edges where `id` is the dependent).
    pub fn incoming(&self, id: &VarId) -> &[VarId] {
        self.nodes
            .get(id)
            .map(|node| node.incoming.as_slice())
            .unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
