// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The shortest-path search.
//!
//! A standard binary-heap Dijkstra over anything implementing
//! `SeamGraph`, with the two usual refinements:
//!
//! * Lazy deletion.  `std::collections::BinaryHeap` has no
//!   decrease-key, so improved nodes are simply pushed again and stale
//!   entries are recognized and dropped when they surface.
//!
//! * Early termination.  All weights are non-negative, so the moment
//!   the sink is popped its distance is final and the rest of the
//!   queue is garbage.  This is a correctness-preserving shortcut, not
//!   just a fast one.
//!
//! Ties are settled by never settling them: a node's distance and
//! predecessor are updated only on strict improvement, so among
//! equal-cost parents the first one enumerated wins and is never
//! overwritten.  Combined with the fixed enumeration order in the
//! graph view, the whole search is a pure function of the grid.

use crate::error::SeamError;
use crate::seamgraph::SeamGraph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The result of one search: a distance and a predecessor per node,
/// forming a tree rooted at the source.  Mutated only while the search
/// runs; frozen once it returns.
#[derive(Debug)]
pub struct ShortestPaths {
    /// Minimal known cost from the source, `u64::max_value()` where
    /// the search never reached.
    pub distance: Vec<u64>,
    /// The node we arrived from, `None` at the source and anywhere
    /// unreached.
    pub predecessor: Vec<Option<usize>>,
}

/// Run one source-to-sink search.  The distance and predecessor
/// vectors are owned by this invocation alone, so independent searches
/// can share a read-only grid across threads without locking.
pub fn shortest_path<G: SeamGraph>(graph: &G) -> Result<ShortestPaths, SeamError> {
    let unreached = u64::max_value();
    let (source, sink) = (graph.source(), graph.sink());

    let mut distance = vec![unreached; graph.node_count()];
    let mut predecessor: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut queue = BinaryHeap::new();

    distance[source] = 0;
    queue.push(Reverse((0u64, source)));

    while let Some(Reverse((dist, u))) = queue.pop() {
        // A stale entry from before this node was improved.
        if dist > distance[u] {
            continue;
        }
        if u == sink {
            break;
        }
        for (v, weight) in graph.neighbors(u) {
            let candidate = dist + u64::from(weight);
            if candidate < distance[v] {
                distance[v] = candidate;
                predecessor[v] = Some(u);
                queue.push(Reverse((candidate, v)));
            }
        }
    }

    if distance[sink] == unreached {
        return Err(SeamError::PathNotFound);
    }

    Ok(ShortestPaths {
        distance,
        predecessor,
    })
}
