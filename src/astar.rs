//! Best-first search in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! with an explicit closed flag per node and a deterministic tie-break on discovery order.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Bookkeeping for a discovered node. Its position in the map is its discovery order.
struct SearchNode<C> {
    parent: usize,
    cost: C,
    heuristic: C,
    closed: bool,
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest estimate wins, and among equal
        // estimates the node discovered first.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.index.cmp(&self.index),
            s => s,
        }
    }
}

fn reverse_path<N, C>(parents: &FxIndexMap<N, SearchNode<C>>, end: usize) -> Vec<N>
where
    N: Clone,
{
    let mut path: Vec<N> = std::iter::successors(parents.get_index(end), |(_, node)| {
        parents.get_index(node.parent)
    })
    .map(|(node, _)| node.clone())
    .collect();
    path.reverse();
    path
}

/// Searches from `start` until `success` holds, returning the node sequence (start included)
/// and its total cost, or [None] once the frontier is exhausted.
///
/// The heuristic must be consistent: nodes are closed on their first expansion and never
/// reopened.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let start_h = heuristic(start);
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: start_h,
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    parents.insert(
        start.clone(),
        SearchNode {
            parent: usize::MAX,
            cost: Zero::zero(),
            heuristic: start_h,
            closed: false,
        },
    );
    let mut expanded = 0usize;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let node = {
            let Some((node, record)) = parents.get_index_mut(index) else {
                continue;
            };
            // A node may sit in the heap several times if a cheaper route to it was found
            // later. Only the first pop of the cheapest entry is expanded.
            if record.closed || cost > record.cost {
                continue;
            }
            record.closed = true;
            node.clone()
        };
        if success(&node) {
            debug!(
                "Search closed {} of {} discovered nodes",
                expanded + 1,
                parents.len()
            );
            let path = reverse_path(&parents, index);
            return Some((path, cost));
        }
        expanded += 1;
        for (successor, move_cost) in successors(&node) {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(SearchNode {
                        parent: index,
                        cost: new_cost,
                        heuristic: h,
                        closed: false,
                    });
                }
                Occupied(mut e) => {
                    n = e.index();
                    let record = e.get_mut();
                    if record.closed || record.cost <= new_cost {
                        continue;
                    }
                    h = record.heuristic;
                    record.parent = index;
                    record.cost = new_cost;
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!("Frontier exhausted after closing {} nodes", expanded);
    None
}
