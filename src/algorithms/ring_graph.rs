use std::collections::{HashMap, HashSet};

use crate::XY;

/// The ring / intersection-point incidence graph used by the polygon
/// interior-connectedness check.
///
/// Vertices are integers: ring vertices first (one per ring), then one
/// vertex per distinct intersection point, allocated on demand. Edges join
/// an intersection point to each ring passing through it. The polygon
/// interior is connected iff this graph is acyclic.
pub(crate) struct RingGraph {
    next_vertex: usize,
    point_vertices: HashMap<(u64, u64), usize>,
    edges: HashSet<(usize, usize)>,
}

impl RingGraph {
    pub fn new(num_rings: usize) -> Self {
        RingGraph {
            next_vertex: num_rings,
            point_vertices: HashMap::new(),
            edges: HashSet::new(),
        }
    }

    /// Vertex for an intersection point, allocating on first sight.
    pub fn point_vertex(&mut self, point: XY) -> usize {
        let next = &mut self.next_vertex;
        *self.point_vertices.entry(point.key()).or_insert_with(|| {
            let vertex = *next;
            *next += 1;
            vertex
        })
    }

    pub fn add_edge(&mut self, a: usize, b: usize) {
        self.edges.insert((a.min(b), a.max(b)));
    }

    pub fn has_cycle(&self) -> bool {
        if self.edges.is_empty() {
            return false;
        }

        let mut adjacency: HashMap<usize, Vec<usize>> = HashMap::with_capacity(self.edges.len() * 2);
        for &(v1, v2) in &self.edges {
            adjacency.entry(v1).or_default().push(v2);
            adjacency.entry(v2).or_default().push(v1);
        }

        let mut seen: HashSet<usize> = HashSet::with_capacity(adjacency.len());
        // Vec<(node, parent)>
        let mut stack: Vec<(usize, usize)> = Vec::with_capacity(adjacency.len());

        for &base_node in adjacency.keys() {
            if seen.contains(&base_node) {
                continue;
            }
            stack.push((base_node, base_node));

            while let Some((node, parent)) = stack.pop() {
                seen.insert(node);
                for &next_node in &adjacency[&node] {
                    if !seen.contains(&next_node) {
                        stack.push((next_node, node));
                    } else if next_node != parent {
                        return true;
                    }
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_cycle() {
        let mut graph = RingGraph::new(3);
        assert!(!graph.has_cycle());
        let v = graph.point_vertex(XY::new(0., 0.));
        graph.add_edge(v, 0);
        graph.add_edge(v, 1);
        assert!(!graph.has_cycle());
        let w = graph.point_vertex(XY::new(1., 1.));
        graph.add_edge(w, 1);
        graph.add_edge(w, 2);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn test_cycle_through_shared_points() {
        // Rings 0 and 1 touch at two distinct points: the path
        // 0 - v - 1 - w - 0 closes a cycle.
        let mut graph = RingGraph::new(2);
        let v = graph.point_vertex(XY::new(0., 0.));
        graph.add_edge(v, 0);
        graph.add_edge(v, 1);
        let w = graph.point_vertex(XY::new(2., 0.));
        graph.add_edge(w, 0);
        graph.add_edge(w, 1);
        assert!(graph.has_cycle());
    }

    #[test]
    fn test_shared_point_dedupes() {
        let mut graph = RingGraph::new(3);
        let v = graph.point_vertex(XY::new(0., 0.));
        assert_eq!(graph.point_vertex(XY::new(0., 0.)), v);
        // Three rings through one point is a star, not a cycle.
        graph.add_edge(v, 0);
        graph.add_edge(v, 1);
        graph.add_edge(v, 2);
        graph.add_edge(v, 0);
        assert!(!graph.has_cycle());
    }
}
