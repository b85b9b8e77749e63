use std::{collections::VecDeque, fmt, io};

use rustc_hash::FxHashSet;

use crate::graphs::{digraph::WeightedDigraph, error::GraphError, mark::Mark, matrix::NULL_EDGE};

impl<T: Ord> WeightedDigraph<T> {
    /// Current mark of the vertex carrying `payload`.
    pub fn mark(&self, payload: &T) -> Option<Mark> {
        self.index_of(payload).map(|index| self.vertices[index].mark)
    }

    pub fn try_mark_vertex(&mut self, payload: &T, mark: Mark) -> Result<(), GraphError> {
        let index = self.index_of(payload).ok_or(GraphError::MissingVertex)?;
        self.vertices[index].mark = mark;
        Ok(())
    }

    /// Sets the mark of the vertex carrying `payload`; does nothing when it
    /// is absent.
    pub fn mark_vertex(&mut self, payload: &T, mark: Mark) {
        if let Err(error) = self.try_mark_vertex(payload, mark) {
            tracing::debug!(%error, "mark_vertex ignored");
        }
    }

    /// Marks every vertex [`Mark::Unvisited`].
    pub fn reset_marks(&mut self) {
        for vertex in &mut self.vertices {
            vertex.mark = Mark::Unvisited;
        }
    }

    /// Moves every unvisited successor of `from` to [`Mark::Queued`] and
    /// appends it to `queue`, in insertion order.
    fn queue_successors(&mut self, from: usize, queue: &mut VecDeque<usize>) {
        let len = self.vertices.len();
        for to in 0..len {
            let vertex = &mut self.vertices[to];
            if self.edges.get(from, to) != NULL_EDGE && vertex.mark.is_unvisited() {
                vertex.mark = Mark::Queued;
                queue.push_back(to);
            }
        }
    }

    /// Breadth-first traversal from `start`, returning the visit order.
    ///
    /// Marks are reset first. Afterwards every vertex reachable from
    /// `start` is [`Mark::Visited`] and every other vertex is
    /// [`Mark::Unvisited`]. Successors are discovered in insertion order,
    /// so the result is deterministic for a given graph.
    pub fn try_breadth_first_traversal(&mut self, start: &T) -> Result<Vec<T>, GraphError>
    where
        T: Clone,
    {
        self.reset_marks();
        let start = self.index_of(start).ok_or(GraphError::MissingVertex)?;

        self.vertices[start].mark = Mark::Queued;
        let mut queue = VecDeque::from([start]);
        let mut order = Vec::new();

        while let Some(current) = queue.pop_front() {
            if self.vertices[current].mark.is_visited() {
                continue;
            }

            self.vertices[current].mark = Mark::Visited;
            tracing::trace!(visited = order.len() + 1, "visited");
            order.push(current);

            self.queue_successors(current, &mut queue);
        }

        // debug: every vertex visited once
        debug_assert!({
            let mut seen = FxHashSet::default();
            order.iter().all(|v| seen.insert(*v))
        });

        Ok(order
            .into_iter()
            .map(|index| self.vertices[index].payload.clone())
            .collect())
    }

    /// Like [`try_breadth_first_traversal`](Self::try_breadth_first_traversal)
    /// but visits nothing when `start` is absent.
    pub fn breadth_first_traversal(&mut self, start: &T) -> Vec<T>
    where
        T: Clone,
    {
        self.try_breadth_first_traversal(start)
            .unwrap_or_else(|error| {
                tracing::debug!(%error, "breadth_first_traversal visited nothing");
                Vec::new()
            })
    }

    /// Runs [`breadth_first_traversal`](Self::breadth_first_traversal) and
    /// writes the visit order to `out`, each payload followed by a space,
    /// then a newline.
    pub fn write_breadth_first_traversal<W>(&mut self, start: &T, mut out: W) -> io::Result<()>
    where
        T: Clone + fmt::Display,
        W: io::Write,
    {
        for payload in self.breadth_first_traversal(start) {
            write!(out, "{payload} ")?;
        }
        writeln!(out)
    }

    /// Unvisited successors of `payload`, in insertion order.
    ///
    /// This is not a pure query: every returned vertex is moved from
    /// [`Mark::Unvisited`] to [`Mark::Queued`], so a second call returns
    /// nothing until the marks are reset.
    pub fn neighbors(&mut self, payload: &T) -> Vec<T>
    where
        T: Clone,
    {
        let Some(from) = self.index_of(payload) else {
            return Vec::new();
        };

        let mut discovered = VecDeque::new();
        self.queue_successors(from, &mut discovered);
        discovered
            .into_iter()
            .map(|index| self.vertices[index].payload.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::graphs::vertices::Vertices;

    fn graph_with(
        capacity: usize,
        payloads: &[char],
        edges: &[(char, char, i32)],
    ) -> WeightedDigraph<char> {
        let mut graph = WeightedDigraph::new(capacity).unwrap();
        for &payload in payloads {
            graph.add_vertex(payload);
        }
        for &(from, to, weight) in edges {
            graph.add_edge(&from, &to, weight);
        }
        graph
    }

    fn diamond() -> WeightedDigraph<char> {
        graph_with(
            5,
            &['A', 'B', 'C', 'D'],
            &[('A', 'B', 1), ('A', 'C', 2), ('B', 'D', 3), ('C', 'D', 4)],
        )
    }

    #[test]
    fn diamond_traversal_visits_in_breadth_first_order() {
        let mut graph = diamond();
        assert_eq!(graph.breadth_first_traversal(&'A'), vec!['A', 'B', 'C', 'D']);
        for v in ['A', 'B', 'C', 'D'] {
            assert_eq!(graph.mark(&v), Some(Mark::Visited));
        }
    }

    #[test]
    fn disconnected_traversal_visits_only_start() {
        let mut graph = graph_with(5, &['A', 'B'], &[]);
        assert_eq!(graph.breadth_first_traversal(&'A'), vec!['A']);
        assert_eq!(graph.mark(&'A'), Some(Mark::Visited));
        assert_eq!(graph.mark(&'B'), Some(Mark::Unvisited));
    }

    #[test]
    fn traversal_is_deterministic_and_resets_marks() {
        let mut graph = graph_with(
            6,
            &['A', 'B', 'C', 'D', 'E'],
            &[
                ('A', 'D', 9),
                ('A', 'B', 1),
                ('D', 'A', 1),
                ('B', 'C', 1),
                ('D', 'C', 1),
                ('E', 'A', 1),
            ],
        );

        let first = graph.breadth_first_traversal(&'A');
        let second = graph.breadth_first_traversal(&'A');
        assert_eq!(first, vec!['A', 'B', 'D', 'C'], "insertion order, not weight order");
        assert_eq!(first, second);
        assert_eq!(graph.mark(&'E'), Some(Mark::Unvisited));

        // A second start overwrites the previous run's marks.
        assert_eq!(graph.breadth_first_traversal(&'C'), vec!['C']);
        assert_eq!(graph.mark(&'A'), Some(Mark::Unvisited));
    }

    #[test]
    fn traversal_from_absent_start_visits_nothing() {
        let mut graph = diamond();
        graph.breadth_first_traversal(&'A');

        assert!(graph.breadth_first_traversal(&'Z').is_empty());
        assert_eq!(
            graph.try_breadth_first_traversal(&'Z'),
            Err(GraphError::MissingVertex)
        );
        assert!(graph.vertices().all(|v| graph.mark(v) == Some(Mark::Unvisited)));
    }

    #[test]
    fn self_loops_and_cycles_terminate() {
        let mut graph = graph_with(
            4,
            &['A', 'B', 'C'],
            &[
                ('A', 'A', 1),
                ('A', 'B', 1),
                ('B', 'C', 1),
                ('C', 'B', 1),
                ('C', 'A', 1),
            ],
        );
        assert_eq!(graph.breadth_first_traversal(&'B'), vec!['B', 'C', 'A']);
    }

    #[test]
    fn neighbors_queue_unvisited_successors() {
        let mut graph = diamond();

        assert_eq!(graph.neighbors(&'A'), vec!['B', 'C']);
        assert_eq!(graph.mark(&'B'), Some(Mark::Queued));
        assert_eq!(graph.mark(&'C'), Some(Mark::Queued));
        assert_eq!(graph.mark(&'A'), Some(Mark::Unvisited));

        assert!(graph.neighbors(&'A').is_empty(), "already queued");

        graph.mark_vertex(&'D', Mark::Visited);
        assert!(graph.neighbors(&'B').is_empty());

        graph.reset_marks();
        assert_eq!(graph.neighbors(&'B'), vec!['D']);
        assert!(graph.neighbors(&'Z').is_empty());
    }

    #[test]
    fn mark_vertex_ignores_absent_payload() {
        let mut graph = diamond();
        graph.mark_vertex(&'Z', Mark::Visited);
        assert_eq!(graph.mark(&'Z'), None);
        assert_eq!(
            graph.try_mark_vertex(&'Z', Mark::Queued),
            Err(GraphError::MissingVertex)
        );

        graph.mark_vertex(&'C', Mark::Queued);
        assert_eq!(graph.mark(&'C'), Some(Mark::Queued));
    }

    #[test]
    fn write_traversal_to_buffer() {
        let mut graph = diamond();
        let mut out = Vec::<u8>::new();
        graph.write_breadth_first_traversal(&'A', &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A B C D \n");

        let mut out = Vec::<u8>::new();
        graph.write_breadth_first_traversal(&'Z', &mut out).unwrap();
        assert_eq!(out, b"\n");
    }

    /// Reference BFS distances over payloads `0..n`.
    fn reference_distances(n: u8, edges: &[(u8, u8)], start: u8) -> Vec<Option<usize>> {
        let mut dist = vec![None; n as usize];
        let mut queue = VecDeque::new();
        dist[start as usize] = Some(0);
        queue.push_back(start);

        while let Some(u) = queue.pop_front() {
            let du = dist[u as usize].unwrap();
            for &(from, to) in edges {
                if from == u && dist[to as usize].is_none() {
                    dist[to as usize] = Some(du + 1);
                    queue.push_back(to);
                }
            }
        }
        dist
    }

    fn build(n: u8, edges: &[(u8, u8)]) -> WeightedDigraph<u8> {
        let mut graph = WeightedDigraph::new(n as usize).unwrap();
        for v in 0..n {
            graph.add_vertex(v);
        }
        for &(from, to) in edges {
            graph.add_edge(&from, &to, i32::from(from) - i32::from(to));
        }
        graph
    }

    prop_compose! {
        fn random_graph()
            (n in 1u8..=12)
            (edges in prop::collection::vec((0..n, 0..n), 0..=48),
             start in 0..n,
             n in Just(n))
            -> (u8, Vec<(u8, u8)>, u8)
        {
            (n, edges, start)
        }
    }

    proptest! {
        // Each reachable vertex is visited once, in nondecreasing distance.
        #[test]
        fn prop_traversal_visits_reachable_in_layer_order((n, edges, start) in random_graph()) {
            let mut graph = build(n, &edges);
            let dist = reference_distances(n, &edges, start);

            let order = graph.breadth_first_traversal(&start);

            let reachable = dist.iter().filter(|d| d.is_some()).count();
            prop_assert_eq!(order.len(), reachable);
            prop_assert_eq!(order[0], start);

            let distances: Vec<usize> = order.iter().map(|&v| dist[v as usize].unwrap()).collect();
            prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]), "order {:?}", order);

            for v in 0..n {
                let expected = if dist[v as usize].is_some() { Mark::Visited } else { Mark::Unvisited };
                prop_assert_eq!(graph.mark(&v), Some(expected));
            }
        }
    }

    #[test]
    fn random_stress_traversal_after_deletions() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_4246_535F_5354_5245);

        for _case in 0..100 {
            let n: u8 = rng.random_range(2..=10);
            let edge_count = rng.random_range(0..=40usize);
            let mut edges = Vec::with_capacity(edge_count);
            for _ in 0..edge_count {
                edges.push((rng.random_range(0..n), rng.random_range(0..n)));
            }

            let mut graph = build(n, &edges);

            // Delete one vertex that is not the start; the reference simply
            // drops every edge touching it.
            let start = rng.random_range(0..n);
            let victim = (start + rng.random_range(1..n)) % n;
            graph.delete_vertex(&victim);
            let kept: Vec<(u8, u8)> = edges
                .iter()
                .copied()
                .filter(|&(f, t)| f != victim && t != victim)
                .collect();

            let dist = reference_distances(n, &kept, start);
            let mut visited = graph.breadth_first_traversal(&start);
            visited.sort_unstable();

            let mut expected: Vec<u8> = (0..n).filter(|&v| dist[v as usize].is_some()).collect();
            expected.sort_unstable();
            assert_eq!(visited, expected);
            assert!(!visited.contains(&victim));
        }
    }
}
