//! Reference-graph cycle detection
//!
//! The variable table forms a directed graph: each variable points at the
//! variable(s) its light/dark expressions reference. Literal colors and
//! token strings are leaves. Detection runs at configure time so a cycle
//! is reported with its full path before the table commits; lookups keep a
//! per-call visited set as a second line of defense.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::normalize::canonicalize;
use crate::variable::ThemeVariable;

/// Adjacency-by-name over the reference edges of a variable table
pub struct ReferenceGraph {
    edges: IndexMap<String, Vec<String>>,
}

impl ReferenceGraph {
    /// Build the graph from a table keyed by dashless canonical names
    ///
    /// Reference targets are canonicalized so `var(--a)` and `a` land on
    /// the same node. Targets that do not name a table entry get no edge;
    /// unresolved references are a separate validation concern.
    pub fn from_table(table: &IndexMap<String, ThemeVariable>) -> Self {
        let mut edges: IndexMap<String, Vec<String>> = IndexMap::with_capacity(table.len());
        for (name, variable) in table {
            let targets = variable
                .reference_targets()
                .filter_map(|target| canonicalize(target))
                .filter(|canonical| table.contains_key(&canonical.key))
                .map(|canonical| canonical.key)
                .collect();
            edges.insert(name.clone(), targets);
        }
        Self { edges }
    }

    /// Find one reference cycle, if any exists
    ///
    /// Returns the cycle path with the closing node repeated at the end
    /// (`a -> b -> a`), which is what the error message prints. Iterative
    /// DFS with an explicit stack: the table is caller-controlled, so
    /// recursion depth must not be.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        // Ever-queued nodes; a node is explored at most once across starts
        let mut visited: FxHashSet<&str> = FxHashSet::default();

        for start in self.edges.keys() {
            if visited.contains(start.as_str()) {
                continue;
            }

            // (node, next child index) frames; `path` mirrors the frame stack
            let mut frames: Vec<(&str, usize)> = vec![(start.as_str(), 0)];
            let mut path: Vec<&str> = vec![start.as_str()];
            let mut on_stack: FxHashSet<&str> = FxHashSet::default();
            on_stack.insert(start.as_str());
            visited.insert(start.as_str());

            while !frames.is_empty() {
                let (node, child_idx) = {
                    let frame = frames.last_mut().unwrap();
                    let state = (frame.0, frame.1);
                    frame.1 += 1;
                    state
                };
                let children = &self.edges[node];

                if let Some(child) = children.get(child_idx).map(|c| c.as_str()) {
                    if on_stack.contains(child) {
                        // Back-edge: slice the stack path from the repeated
                        // node and close the loop visibly
                        let from = path.iter().position(|n| *n == child).unwrap_or(0);
                        let mut cycle: Vec<String> =
                            path[from..].iter().map(|n| n.to_string()).collect();
                        cycle.push(child.to_string());
                        return Some(cycle);
                    }
                    if visited.insert(child) {
                        on_stack.insert(child);
                        frames.push((child, 0));
                        path.push(child);
                    }
                } else {
                    on_stack.remove(node);
                    path.pop();
                    frames.pop();
                }
            }
        }
        None
    }
}
