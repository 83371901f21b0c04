use rustc_hash::FxHashMap;
use sirenia_graph::NodeId;
use std::cmp::Ordering;

/// Positions of the nodes of the layer preceding the one being ordered.
#[derive(Debug, Clone, Default)]
pub(crate) struct PreviousLayer {
    positions: FxHashMap<NodeId, usize>,
}

impl PreviousLayer {
    pub(crate) fn new(nodes: &[NodeId]) -> Self {
        let mut positions: FxHashMap<NodeId, usize> = FxHashMap::default();
        for (ix, &node) in nodes.iter().enumerate() {
            positions.entry(node).or_insert(ix);
        }
        Self { positions }
    }

    /// Which of the two nodes comes first in the previous layer. A node that is not part of the
    /// layer loses against one that is; `None` if neither is part of it.
    pub(crate) fn compare(&self, a: NodeId, b: NodeId) -> Option<Ordering> {
        match (self.positions.get(&a), self.positions.get(&b)) {
            (Some(a), Some(b)) => Some(a.cmp(b)),
            (Some(_), None) => Some(Ordering::Less),
            (None, Some(_)) => Some(Ordering::Greater),
            (None, None) => None,
        }
    }
}
