//! Shortest-path trait and the default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The simulation calls path search through the [`PathEngine`] trait so a
//! different algorithm can be swapped in without touching motion control.
//! [`DijkstraEngine`] is the default.
//!
//! # Never-empty contract
//!
//! `find_path` is infallible.  The graph's closure pass guarantees every
//! pair of known stops is connected; for unknown endpoints, or if no path
//! was recorded, the search degrades to the direct two-node path instead of
//! failing.  Callers always receive a non-empty path whose first element is
//! `start` and last is `end`.

use std::collections::{HashMap, HashSet};

use crate::StopGraph;

/// Pluggable shortest-path search.
///
/// Implementations must be `Send + Sync`; the graph itself is read-only and
/// shared by all route calculations.
pub trait PathEngine: Send + Sync {
    /// Ordered stop ids from `start` to `end`, inclusive.  Never empty.
    fn find_path(&self, graph: &StopGraph, start: &str, end: &str) -> Vec<String>;
}

// ── DijkstraEngine ────────────────────────────────────────────────────────────

/// Classic single-source Dijkstra over the stop graph.
///
/// The candidate set is a plain list scanned for the unvisited minimum, with
/// ties broken by first-encountered order — deterministic, and O(V²) in the
/// worst case, which is fine for a graph of dozens of stops.  `f32` weights
/// need no ordering wrapper this way.
pub struct DijkstraEngine;

impl PathEngine for DijkstraEngine {
    fn find_path(&self, graph: &StopGraph, start: &str, end: &str) -> Vec<String> {
        if start == end {
            return vec![start.to_owned()];
        }
        let (Some(start_key), Some(end_key)) = (graph.key_of(start), graph.key_of(end)) else {
            // Unknown endpoint: degrade to the direct hop.
            return vec![start.to_owned(), end.to_owned()];
        };

        let mut dist: HashMap<&str, f32> = HashMap::new();
        let mut prev: HashMap<&str, &str> = HashMap::new();
        let mut visited: HashSet<&str> = HashSet::new();
        // Discovery order doubles as the tie-break order.
        let mut candidates: Vec<&str> = vec![start_key];
        dist.insert(start_key, 0.0);

        loop {
            let mut current: Option<&str> = None;
            let mut best = f32::INFINITY;
            for &c in &candidates {
                if visited.contains(c) {
                    continue;
                }
                let d = dist[c];
                // Strict `<` keeps the first-encountered candidate on ties.
                if d < best {
                    best = d;
                    current = Some(c);
                }
            }
            let Some(current) = current else { break };
            if current == end_key {
                break; // early exit — the destination's distance is final
            }
            visited.insert(current);

            for (neighbor, weight) in graph.neighbors(current) {
                if visited.contains(&neighbor) {
                    continue;
                }
                let next = best + weight;
                if dist.get(neighbor).is_none_or(|&d| next < d) {
                    if !dist.contains_key(neighbor) {
                        candidates.push(neighbor);
                    }
                    dist.insert(neighbor, next);
                    prev.insert(neighbor, current);
                }
            }
        }

        // Reconstruct by walking `prev` back from the destination.
        let mut path = vec![end_key];
        let mut cur = end_key;
        while let Some(&p) = prev.get(cur) {
            path.push(p);
            cur = p;
        }
        path.reverse();

        if path.first() != Some(&start_key) {
            // No path recorded; the closure pass means a direct edge exists.
            return vec![start.to_owned(), end.to_owned()];
        }
        path.into_iter().map(str::to_owned).collect()
    }
}
