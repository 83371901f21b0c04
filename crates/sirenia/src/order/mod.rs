//! Same-layer node and port ordering.
//!
//! Comparators that keep the input model order of nodes, ports and edges wherever the layer
//! structure allows it, plus the driver that applies them layer by layer.

use std::cmp::Ordering;

mod relation_cache;
pub use relation_cache::{Handle, RelationCache};

mod previous_layer;

mod port_order;
pub use port_order::PortOrderComparator;

mod node_order;
pub use node_order::NodeOrderComparator;

mod dummy;

mod sort_by_model_order;
pub use sort_by_model_order::{insertion_sort, sort_by_model_order};

/// `Greater` if `a > b`, otherwise `Less`: ties go to the first argument.
fn first_wins_ties(a: i32, b: i32) -> Ordering {
    if a > b {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}
