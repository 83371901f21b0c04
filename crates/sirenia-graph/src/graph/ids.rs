//! Arena handles.
//!
//! Handles are plain indices into the owning [`LayeredGraph`](super::LayeredGraph). They are only
//! meaningful for the graph that issued them.

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            pub(in crate::graph) fn from_index(ix: usize) -> Self {
                Self(ix as u32)
            }

            /// Dense index of this handle, suitable for side tables.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

handle!(
    /// Handle of a node in a [`LayeredGraph`](super::LayeredGraph).
    NodeId
);
handle!(
    /// Handle of a port in a [`LayeredGraph`](super::LayeredGraph).
    PortId
);
handle!(
    /// Handle of an edge in a [`LayeredGraph`](super::LayeredGraph).
    EdgeId
);
