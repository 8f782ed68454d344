/// This trait defines what the shortest-path solver needs from a
/// graph.  It's a primitive interface, just enough to let the solver
/// run over the implicit grid view, or over a test double when we want
/// to force conditions the grid can never produce.
pub trait SeamGraph {
    /// How many nodes the graph has, virtual endpoints included.
    fn node_count(&self) -> usize;

    /// The virtual node every search starts from.
    fn source(&self) -> usize;

    /// The virtual node every search is aimed at.
    fn sink(&self) -> usize;

    /// The out-edges of a node, as `(target, weight)` pairs, in a
    /// fixed, deterministic order.
    fn neighbors(&self, node: usize) -> Vec<(usize, u32)>;
}
