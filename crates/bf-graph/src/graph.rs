//! The weighted stop graph and its builder.
//!
//! # Representation
//!
//! A symmetric nested map `stop id → stop id → weight`.  The graph has a few
//! dozen nodes at most, is built once per stop set, and is queried by string
//! id from several components, so a `BTreeMap` adjacency wins over a packed
//! index form: deterministic iteration order (the search's tie-breaking
//! depends on it) and no id-interning layer.
//!
//! # Edge rules
//!
//! [`StopGraphBuilder::build`] applies four rules in order; rules 2 and 3
//! only fill missing edges, rule 4 overrides:
//!
//! 1. consecutive stops: `euclidean × 0.8` (bias toward the natural route),
//! 2. every pair of main stops: `euclidean` if absent (express shortcuts),
//! 3. every remaining pair: `euclidean × 1.5` (closure — total connectivity),
//! 4. terminal approach: the intermediate before the terminal gets
//!    `euclidean × 0.7` to the terminal (guaranteed cheap final hop).
//!
//! After the closure pass no pair of stops is unreachable.

use std::collections::BTreeMap;

use crate::Line;

/// Weight multiplier for edges between consecutive stops on the line.
const CONSECUTIVE_FACTOR: f32 = 0.8;
/// Weight multiplier for the closure pass joining otherwise-unconnected pairs.
const CLOSURE_FACTOR: f32 = 1.5;
/// Weight multiplier for the terminal-approach override edge.
const TERMINAL_APPROACH_FACTOR: f32 = 0.7;

// ── StopGraph ─────────────────────────────────────────────────────────────────

/// Symmetric weighted adjacency over stop ids.
///
/// Read-only after construction; shared by all route calculations.
#[derive(Clone, Debug, Default)]
pub struct StopGraph {
    adj: BTreeMap<String, BTreeMap<String, f32>>,
}

impl StopGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node with no edges yet.
    pub fn add_node(&mut self, id: &str) {
        self.adj.entry(id.to_owned()).or_default();
    }

    /// Insert (or overwrite) the symmetric edge `a ↔ b` with `weight`.
    pub fn insert_edge(&mut self, a: &str, b: &str, weight: f32) {
        self.adj
            .entry(a.to_owned())
            .or_default()
            .insert(b.to_owned(), weight);
        self.adj
            .entry(b.to_owned())
            .or_default()
            .insert(a.to_owned(), weight);
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.weight(a, b).is_some()
    }

    /// Weight of the edge `a ↔ b`, if present.
    pub fn weight(&self, a: &str, b: &str) -> Option<f32> {
        self.adj.get(a)?.get(b).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adj.contains_key(id)
    }

    /// The graph's own key for `id` — lets the search borrow node names with
    /// the graph's lifetime instead of cloning per visit.
    pub(crate) fn key_of(&self, id: &str) -> Option<&str> {
        self.adj.get_key_value(id).map(|(k, _)| k.as_str())
    }

    /// Neighbors of `id` in deterministic (sorted id) order.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = (&str, f32)> {
        self.adj
            .get(id)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(k, &w)| (k.as_str(), w)))
    }

    /// All node ids in sorted order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.adj.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(BTreeMap::len).sum::<usize>() / 2
    }
}

// ── StopGraphBuilder ──────────────────────────────────────────────────────────

/// Builds the [`StopGraph`] for a [`Line`] by applying the edge rules.
///
/// Stops are immutable after load, so the simulation builds the graph once
/// at construction and shares it read-only from then on.
pub struct StopGraphBuilder;

impl StopGraphBuilder {
    pub fn build(line: &Line) -> StopGraph {
        let stops = line.stops();
        let mut graph = StopGraph::new();
        for stop in stops {
            graph.add_node(&stop.id);
        }

        // Rule 1: consecutive stops along the line.
        for pair in stops.windows(2) {
            let w = pair[0].position.euclidean(pair[1].position) * CONSECUTIVE_FACTOR;
            graph.insert_edge(&pair[0].id, &pair[1].id, w);
        }

        // Rule 2: direct shortcuts between main stops, gaps only.
        for i in 0..stops.len() {
            for j in i + 1..stops.len() {
                if stops[i].is_main_stop
                    && stops[j].is_main_stop
                    && !graph.has_edge(&stops[i].id, &stops[j].id)
                {
                    let w = stops[i].position.euclidean(stops[j].position);
                    graph.insert_edge(&stops[i].id, &stops[j].id, w);
                }
            }
        }

        // Rule 3: closure pass — every remaining pair, discouraged weight.
        for i in 0..stops.len() {
            for j in i + 1..stops.len() {
                if !graph.has_edge(&stops[i].id, &stops[j].id) {
                    let w = stops[i].position.euclidean(stops[j].position) * CLOSURE_FACTOR;
                    graph.insert_edge(&stops[i].id, &stops[j].id, w);
                }
            }
        }

        // Rule 4: discounted approach into the terminal (override).
        if let Some(approach) = line.terminal_approach_index() {
            let from = line.stop(approach);
            let terminal = line.terminal();
            let w = from.position.euclidean(terminal.position) * TERMINAL_APPROACH_FACTOR;
            graph.insert_edge(&from.id, &terminal.id, w);
        }

        graph
    }
}
