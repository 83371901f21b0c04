#![forbid(unsafe_code)]

//! Model-order aware same-layer ordering for layered graph layout.
//!
//! Given a graph whose nodes are already assigned to layers, `sirenia` orders the nodes within
//! each layer, and the ports within each node, so that the order elements had in the input model
//! is kept wherever the layer structure allows it.

pub use sirenia_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod options;
pub mod order;

pub use error::{Error, Result};
pub use options::{LongEdgeOrderingStrategy, ModelOrderOptions, OrderingStrategy};
pub use order::{
    Handle, NodeOrderComparator, PortOrderComparator, RelationCache, insertion_sort,
    sort_by_model_order,
};
