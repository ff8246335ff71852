use std::ops::ControlFlow;

use crate::Envelope;

// Node cardinality bounds. The bulk loading splits are hardcoded around
// min 2 / max 4 children per node.
const MAX_CHILDREN: usize = 4;

/// One record to bulk load: a bounding box and an opaque record ID.
#[derive(Copy, Clone, Debug)]
pub struct BulkItem {
    pub envelope: Envelope,
    pub record: usize,
}

impl BulkItem {
    pub fn new(envelope: Envelope, record: usize) -> Self {
        BulkItem { envelope, record }
    }
}

#[derive(Debug)]
struct Node {
    envelope: Envelope,
    entries: Entries,
}

#[derive(Debug)]
enum Entries {
    Leaf(Vec<BulkItem>),
    // Child node indices into the arena.
    Inner(Vec<usize>),
}

/// A static R-tree over planar rectangles.
///
/// Built once by [`RTree::bulk_load`] and immutable afterwards. Nodes live in
/// an index-addressed arena rather than a pointer structure.
#[derive(Debug, Default)]
pub struct RTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl RTree {
    /// Bulk loads a new tree, optimised for minimal node overlap. The input
    /// order only matters for records whose sort keys tie.
    pub fn bulk_load(mut items: Vec<BulkItem>) -> RTree {
        if items.is_empty() {
            return RTree::default();
        }
        let mut tree = RTree {
            nodes: Vec::new(),
            root: None,
        };
        let levels = calculate_levels(items.len());
        let root = tree.bulk_insert(&mut items, levels);
        tree.root = Some(root);
        tree
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The bounding box of everything in the tree.
    pub fn envelope(&self) -> Envelope {
        match self.root {
            Some(root) => self.nodes[root].envelope,
            None => Envelope::new_empty(),
        }
    }

    /// Visits the record ID of every item whose box intersects the query
    /// box. The visitor may return `ControlFlow::Break(())` to halt the
    /// traversal early. Visit order is unspecified; each candidate is
    /// visited at most once.
    pub fn search<F>(&self, query: Envelope, mut visit: F) -> ControlFlow<()>
    where
        F: FnMut(usize) -> ControlFlow<()>,
    {
        let root = match self.root {
            Some(root) => root,
            None => return ControlFlow::Continue(()),
        };

        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if !node.envelope.intersects(query) {
                continue;
            }
            match &node.entries {
                Entries::Leaf(items) => {
                    for item in items {
                        if item.envelope.intersects(query) {
                            visit(item.record)?;
                        }
                    }
                }
                Entries::Inner(children) => stack.extend_from_slice(children),
            }
        }
        ControlFlow::Continue(())
    }

    /// Convenience form of [`RTree::search`] collecting every hit.
    pub fn search_collect(&self, query: Envelope) -> Vec<usize> {
        let mut records = Vec::new();
        let _ = self.search(query, |record| {
            records.push(record);
            ControlFlow::Continue(())
        });
        records
    }

    fn bulk_insert(&mut self, items: &mut [BulkItem], levels: usize) -> usize {
        if levels == 1 {
            let envelope = combined_envelope(items);
            return self.push_node(Node {
                envelope,
                entries: Entries::Leaf(items.to_vec()),
            });
        }

        // 6 is the fewest items splittable into 3 groups of >= 2, and 8 the
        // fewest splittable into 4 such groups. Below those thresholds fall
        // back to fewer groups.
        let n = items.len();
        if n < 6 {
            let (a, b) = split_2_ways(items);
            let children = vec![self.bulk_insert(a, levels - 1), self.bulk_insert(b, levels - 1)];
            return self.push_inner(children);
        }
        if n < 8 {
            let (a, b, c) = split_3_ways(items);
            let children = vec![
                self.bulk_insert(a, levels - 1),
                self.bulk_insert(b, levels - 1),
                self.bulk_insert(c, levels - 1),
            ];
            return self.push_inner(children);
        }

        let (first_half, second_half) = split_2_ways(items);
        let (a, b) = split_2_ways(first_half);
        let (c, d) = split_2_ways(second_half);
        let children = vec![
            self.bulk_insert(a, levels - 1),
            self.bulk_insert(b, levels - 1),
            self.bulk_insert(c, levels - 1),
            self.bulk_insert(d, levels - 1),
        ];
        self.push_inner(children)
    }

    fn push_inner(&mut self, children: Vec<usize>) -> usize {
        let envelope = children
            .iter()
            .fold(Envelope::new_empty(), |env, &c| env.merge(self.nodes[c].envelope));
        self.push_node(Node {
            envelope,
            entries: Entries::Inner(children),
        })
    }

    fn push_node(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

// Integer arithmetic only: float logarithms can be off by one near powers of
// the fanout.
fn calculate_levels(num_items: usize) -> usize {
    let mut levels = 1;
    let mut count = MAX_CHILDREN;
    while count < num_items {
        count *= MAX_CHILDREN;
        levels += 1;
    }
    levels
}

fn combined_envelope(items: &[BulkItem]) -> Envelope {
    items
        .iter()
        .fold(Envelope::new_empty(), |env, item| env.merge(item.envelope))
}

// Sorts the items by box midpoint along the longer axis of their combined
// envelope, so that each split groups spatially close boxes.
fn sort_items(items: &mut [BulkItem]) {
    let total = combined_envelope(items);
    let horizontal = total.x_max - total.x_min > total.y_max - total.y_min;
    items.sort_unstable_by(|a, b| {
        let (ka, kb) = if horizontal {
            (a.envelope.x_min + a.envelope.x_max, b.envelope.x_min + b.envelope.x_max)
        } else {
            (a.envelope.y_min + a.envelope.y_max, b.envelope.y_min + b.envelope.y_max)
        };
        ka.total_cmp(&kb)
    });
}

fn split_2_ways(items: &mut [BulkItem]) -> (&mut [BulkItem], &mut [BulkItem]) {
    sort_items(items);
    let split = items.len() / 2;
    items.split_at_mut(split)
}

fn split_3_ways(items: &mut [BulkItem]) -> (&mut [BulkItem], &mut [BulkItem], &mut [BulkItem]) {
    sort_items(items);
    let mut cut_a = items.len() / 3;
    let mut cut_b = cut_a;
    match items.len() - 3 * cut_a {
        1 => cut_a += 1,
        2 => {
            cut_a += 1;
            cut_b += 1;
        }
        _ => {}
    }
    let (a, rest) = items.split_at_mut(cut_a);
    let (b, c) = rest.split_at_mut(cut_b);
    (a, b, c)
}
