//! BFS-based shortest path finding over the co-star relation.

use std::collections::{HashSet, VecDeque};

use costar_core::{MovieId, PersonId};

use super::{Frontier, NodeArena, NodeHandle, PathStep};
use crate::store::GraphStore;

/// Emit a trace event after this many created nodes.
const PROGRESS_INTERVAL: usize = 1000;

/// A chain of credits from a source person to a target person.
///
/// The number of steps is the degree of separation. The source person is
/// not part of any step; callers prepend it when rendering the full chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// The credit edges, in source-to-target order.
    pub steps: Vec<PathStep>,
    /// The degree of separation (number of steps).
    pub degrees: usize,
}

impl PathResult {
    /// Create a new path result.
    fn new(steps: Vec<PathStep>) -> Self {
        let degrees = steps.len();
        Self { steps, degrees }
    }

    /// Create the zero-degree path (source and target are the same person).
    fn same_person() -> Self {
        Self::new(Vec::new())
    }

    /// Check if the path is empty (source == target).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.degrees == 0
    }
}

/// BFS-based shortest path finder.
///
/// Finds the minimum-length chain of shared-movie credits between two
/// people. Edges are unweighted, discovery is strictly FIFO, and each
/// neighbor is tested against the goal before it is enqueued, so the
/// search stops at the first sighting of the target.
///
/// # Example
///
/// ```ignore
/// // Degrees of separation between two people
/// match ShortestPath::new(source, target).find(&store) {
///     Some(path) => println!("{} degrees", path.degrees),
///     None => println!("not connected"),
/// }
///
/// // Distance only, without materializing the path
/// let hops = ShortestPath::new(source, target).distance(&store);
/// ```
pub struct ShortestPath {
    /// Source person.
    source: PersonId,
    /// Target person.
    target: PersonId,
}

impl ShortestPath {
    /// Create a new shortest path finder.
    ///
    /// Both ids are expected to exist in the store the finder runs
    /// against; resolve names through the store's name index first.
    #[must_use]
    pub const fn new(source: PersonId, target: PersonId) -> Self {
        Self { source, target }
    }

    /// Find the shortest path.
    ///
    /// # Returns
    ///
    /// - `Some(PathResult)` with zero steps if source and target are the
    ///   same person
    /// - `Some(PathResult)` with the minimal credit chain if one exists
    /// - `None` if the two people are not connected - a normal result,
    ///   not an error
    #[must_use]
    pub fn find(self, store: &GraphStore) -> Option<PathResult> {
        if self.source == self.target {
            return Some(PathResult::same_person());
        }

        let mut arena = NodeArena::new();
        let mut frontier = Frontier::fifo();
        frontier.add(self.source, arena.root(self.source));

        // States already dequeued and expanded. A state is never in both
        // `explored` and the frontier, and never enqueued twice.
        let mut explored: HashSet<PersonId> = HashSet::new();

        while let Some((state, node)) = frontier.remove_next() {
            explored.insert(state);

            for (movie, person) in store.neighbors_of(state) {
                // Early goal test: check each neighbor before creating a
                // node for it. Any node that would discover the target at
                // a later layer cannot produce a shorter path.
                if person == self.target {
                    tracing::debug!(
                        nodes_created = arena.len(),
                        nodes_explored = explored.len(),
                        "target found"
                    );
                    return Some(self.reconstruct(&arena, node, movie));
                }

                if !explored.contains(&person) && !frontier.contains_state(person) {
                    let child = arena.child(node, PathStep::new(movie, person));
                    frontier.add(person, child);
                    if arena.len() % PROGRESS_INTERVAL == 0 {
                        tracing::trace!(
                            nodes_created = arena.len(),
                            nodes_explored = explored.len(),
                            "search in progress"
                        );
                    }
                }
            }
        }

        tracing::debug!(
            nodes_created = arena.len(),
            nodes_explored = explored.len(),
            "frontier exhausted, not connected"
        );
        None
    }

    /// Find the distance between the two people (path length in credits).
    ///
    /// Cheaper than [`find`](Self::find) when only the degree count is
    /// needed: no search tree is kept, so nothing is reconstructed.
    #[must_use]
    pub fn distance(self, store: &GraphStore) -> Option<usize> {
        if self.source == self.target {
            return Some(0);
        }

        let mut visited: HashSet<PersonId> = HashSet::new();
        let mut queue: VecDeque<(PersonId, usize)> = VecDeque::new();
        visited.insert(self.source);
        queue.push_back((self.source, 0));

        while let Some((current, depth)) = queue.pop_front() {
            for (_, person) in store.neighbors_of(current) {
                if person == self.target {
                    return Some(depth + 1);
                }
                if visited.insert(person) {
                    queue.push_back((person, depth + 1));
                }
            }
        }

        None
    }

    /// Check whether any chain connects the two people.
    #[must_use]
    pub fn exists(self, store: &GraphStore) -> bool {
        self.distance(store).is_some()
    }

    /// Convenience: find the shortest path between `source` and `target`.
    #[must_use]
    pub fn find_path(
        store: &GraphStore,
        source: PersonId,
        target: PersonId,
    ) -> Option<PathResult> {
        Self::new(source, target).find(store)
    }

    /// Walk parent handles from the node that sighted the target back to
    /// the root, collecting the edge each node was reached through, then
    /// reverse into source-to-target order. The final `(movie, target)`
    /// edge is seeded first since the target never got a node of its own.
    fn reconstruct(&self, arena: &NodeArena, from: NodeHandle, movie: MovieId) -> PathResult {
        let mut steps = vec![PathStep::new(movie, self.target)];
        let mut cursor = Some(from);
        while let Some(handle) = cursor {
            let node = arena.get(handle);
            if let Some(edge) = node.edge {
                steps.push(edge);
            }
            cursor = node.parent;
        }
        steps.reverse();
        PathResult::new(steps)
    }
}
