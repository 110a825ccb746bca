use super::definition::{NodeKind, NodeRole, PipelineEdge, PipelineNode};
use crate::error::MalformedDiagramError;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use std::collections::VecDeque;

/// Adjacency built once from validated node and edge lists.
///
/// All vectors are indexed by node position in the node list; the inner vectors hold
/// edge positions in declaration order.
#[derive(Debug, Clone, Default)]
pub(super) struct GraphIndex {
    pub(super) node_ids: AHashMap<String, usize>,
    pub(super) outgoing: Vec<Vec<usize>>,
    pub(super) incoming: Vec<Vec<usize>>,
    pub(super) entry: usize,
    pub(super) terminal: usize,
    pub(super) topological: Vec<usize>,
}

impl GraphIndex {
    pub(super) fn node(&self, id: &str) -> Option<usize> {
        self.node_ids.get(id).copied()
    }
}

/// Checks every structural invariant of a pipeline diagram and returns its index.
pub(super) fn validate(
    nodes: &[PipelineNode],
    edges: &[PipelineEdge],
) -> Result<GraphIndex, MalformedDiagramError> {
    if let Some(id) = nodes.iter().map(|n| n.id.as_str()).duplicates().next() {
        return Err(MalformedDiagramError::DuplicateNodeId(id.to_string()));
    }
    if let Some(id) = edges.iter().map(|e| e.id.as_str()).duplicates().next() {
        return Err(MalformedDiagramError::DuplicateEdgeId(id.to_string()));
    }

    let node_ids: AHashMap<String, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.clone(), i))
        .collect();

    let mut outgoing = vec![Vec::new(); nodes.len()];
    let mut incoming = vec![Vec::new(); nodes.len()];
    for (edge_index, edge) in edges.iter().enumerate() {
        let source = lookup(&node_ids, edge, &edge.source)?;
        let target = lookup(&node_ids, edge, &edge.target)?;
        outgoing[source].push(edge_index);
        incoming[target].push(edge_index);
    }

    let entry = single_with_role(nodes, NodeRole::Entry)
        .map_err(|found| MalformedDiagramError::EntryCount { found })?;
    let terminal = single_with_role(nodes, NodeRole::Terminal)
        .map_err(|found| MalformedDiagramError::TerminalCount { found })?;
    if !incoming[entry].is_empty() {
        return Err(MalformedDiagramError::EntryHasIncoming(nodes[entry].id.clone()));
    }
    if !outgoing[terminal].is_empty() {
        return Err(MalformedDiagramError::TerminalHasOutgoing(
            nodes[terminal].id.clone(),
        ));
    }

    let index = GraphIndex {
        node_ids,
        outgoing,
        incoming,
        entry,
        terminal,
        topological: Vec::new(),
    };

    let topological = topological_order(nodes, edges, &index)?;
    check_reachability(nodes, edges, &index)?;
    check_branches(nodes, edges, &index)?;

    Ok(GraphIndex {
        topological,
        ..index
    })
}

fn lookup(
    node_ids: &AHashMap<String, usize>,
    edge: &PipelineEdge,
    endpoint: &str,
) -> Result<usize, MalformedDiagramError> {
    node_ids
        .get(endpoint)
        .copied()
        .ok_or_else(|| MalformedDiagramError::DanglingEdge {
            edge_id: edge.id.clone(),
            missing_node_id: endpoint.to_string(),
        })
}

/// Position of the only node with `role`, or the ids of all matches if there is not
/// exactly one.
fn single_with_role(nodes: &[PipelineNode], role: NodeRole) -> Result<usize, Vec<String>> {
    let matches: Vec<usize> = nodes
        .iter()
        .positions(|n| n.role == role)
        .collect();
    match matches.as_slice() {
        [only] => Ok(*only),
        _ => Err(matches.iter().map(|&i| nodes[i].id.clone()).collect()),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Depth-first topological sort. Reports the first node found on a cycle.
fn topological_order(
    nodes: &[PipelineNode],
    edges: &[PipelineEdge],
    index: &GraphIndex,
) -> Result<Vec<usize>, MalformedDiagramError> {
    let mut marks = vec![Mark::Unvisited; nodes.len()];
    let mut postorder = Vec::with_capacity(nodes.len());

    // Start from the entry so its subtree is laid out first, then sweep the rest.
    let starts = std::iter::once(index.entry).chain(0..nodes.len());
    for start in starts {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        // Explicit stack of (node, next outgoing edge to look at).
        let mut stack = vec![(start, 0usize)];
        marks[start] = Mark::InProgress;
        while let Some((node, cursor)) = stack.pop() {
            match index.outgoing[node].get(cursor) {
                Some(&edge) => {
                    stack.push((node, cursor + 1));
                    let target = index.node_ids[edges[edge].target.as_str()];
                    match marks[target] {
                        Mark::InProgress => {
                            return Err(MalformedDiagramError::Cycle(nodes[target].id.clone()));
                        }
                        Mark::Unvisited => {
                            marks[target] = Mark::InProgress;
                            stack.push((target, 0));
                        }
                        Mark::Done => {}
                    }
                }
                None => {
                    marks[node] = Mark::Done;
                    postorder.push(node);
                }
            }
        }
    }

    postorder.reverse();
    Ok(postorder)
}

fn check_reachability(
    nodes: &[PipelineNode],
    edges: &[PipelineEdge],
    index: &GraphIndex,
) -> Result<(), MalformedDiagramError> {
    let forward = reachable(index.entry, &index.outgoing, |e| {
        index.node_ids[edges[e].target.as_str()]
    });
    if let Some(node) = nodes.iter().enumerate().find(|(i, _)| !forward.contains(i)) {
        return Err(MalformedDiagramError::Unreachable(node.1.id.clone()));
    }

    let backward = reachable(index.terminal, &index.incoming, |e| {
        index.node_ids[edges[e].source.as_str()]
    });
    if let Some(node) = nodes.iter().enumerate().find(|(i, _)| !backward.contains(i)) {
        return Err(MalformedDiagramError::DeadEnd(node.1.id.clone()));
    }
    Ok(())
}

/// Breadth-first search over one direction of the adjacency.
fn reachable(
    start: usize,
    adjacency: &[Vec<usize>],
    step: impl Fn(usize) -> usize,
) -> AHashSet<usize> {
    let mut seen = AHashSet::from_iter([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for &edge in &adjacency[node] {
            let next = step(edge);
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Decision nodes must label every branch, and any node whose branches are all
/// labeled must use each label once.
fn check_branches(
    nodes: &[PipelineNode],
    edges: &[PipelineEdge],
    index: &GraphIndex,
) -> Result<(), MalformedDiagramError> {
    for (node_index, node) in nodes.iter().enumerate() {
        let branches = &index.outgoing[node_index];
        let unlabeled = branches
            .iter()
            .map(|&e| &edges[e])
            .find(|edge| edge.branch_label().is_none());

        match unlabeled {
            Some(edge) if node.kind == NodeKind::Decision => {
                return Err(MalformedDiagramError::UnlabeledBranch {
                    node_id: node.id.clone(),
                    edge_id: edge.id.clone(),
                });
            }
            Some(_) => continue,
            None => {}
        }

        if let Some(label) = branches
            .iter()
            .filter_map(|&e| edges[e].branch_label())
            .duplicates()
            .next()
        {
            return Err(MalformedDiagramError::DuplicateBranchLabel {
                node_id: node.id.clone(),
                label: label.to_string(),
            });
        }
    }
    Ok(())
}
