//! Budget-limited breadth-first expansion along import edges.

use std::collections::{BTreeSet, VecDeque};

use stratum_core::types::{CodeGraph, FxHashMap};

/// Grow `visible` by up to `depth` hops along outgoing imports.
///
/// A node is re-enqueued only when reached with strictly more budget than
/// before, which bounds the walk on cyclic graphs. Ids missing from the graph
/// join the result but are never traversed.
pub fn expand(graph: &CodeGraph, visible: &BTreeSet<String>, depth: u32) -> BTreeSet<String> {
    if depth == 0 {
        return visible.clone();
    }

    let mut result = visible.clone();
    let mut best: FxHashMap<&str, u32> = FxHashMap::default();
    let mut queue: VecDeque<(&str, u32)> = VecDeque::new();

    for id in visible {
        best.insert(id.as_str(), depth);
        queue.push_back((id.as_str(), depth));
    }

    let mut visits = 0usize;
    while let Some((id, budget)) = queue.pop_front() {
        // Superseded by a later visit with more budget.
        if best.get(id).is_some_and(|&b| b > budget) {
            continue;
        }
        let Some(node) = graph.get(id) else {
            continue;
        };
        visits += 1;

        let remaining = budget - 1;
        for target in node.imports() {
            result.insert(target.clone());
            if remaining == 0 || !graph.contains(target) {
                continue;
            }
            if best.get(target.as_str()).is_some_and(|&b| b >= remaining) {
                continue;
            }
            best.insert(target.as_str(), remaining);
            queue.push_back((target.as_str(), remaining));
        }
    }

    tracing::debug!(
        seeds = visible.len(),
        added = result.len() - visible.len(),
        depth,
        visits,
        "expansion complete"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_core::types::CodeNode;

    fn graph(edges: &[(&str, &str)]) -> CodeGraph {
        let mut g = CodeGraph::new();
        for (from, to) in edges {
            for id in [from, to] {
                if !g.contains(id) {
                    g.insert(CodeNode::new(*id, format!("/src/{id}.py")));
                }
            }
        }
        for (from, to) in edges {
            g.get_mut(from).unwrap().add_import(*to);
        }
        g
    }

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn depth_zero_is_identity() {
        let g = graph(&[("a", "b")]);
        assert_eq!(expand(&g, &set(&["a"]), 0), set(&["a"]));
    }

    #[test]
    fn cycles_terminate() {
        let g = graph(&[("a", "b"), ("b", "a"), ("a", "c")]);
        for depth in 2..6 {
            assert_eq!(expand(&g, &set(&["a"]), depth), set(&["a", "b", "c"]));
        }
    }

    #[test]
    fn shorter_path_gets_full_budget() {
        // a → x → y → z and a → y: y reached with budget 2 via the short edge.
        let g = graph(&[("a", "x"), ("x", "y"), ("y", "z"), ("a", "y")]);
        assert_eq!(expand(&g, &set(&["a"]), 2), set(&["a", "x", "y", "z"]));
        assert_eq!(expand(&g, &set(&["a"]), 1), set(&["a", "x", "y"]));
    }

    #[test]
    fn dangling_targets_are_kept_not_followed() {
        let mut g = graph(&[("a", "b")]);
        g.get_mut("a").unwrap().add_import("ghost");
        assert_eq!(expand(&g, &set(&["a"]), 3), set(&["a", "b", "ghost"]));
    }
}
