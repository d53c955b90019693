use crate::node::{NodeId, SearchNode};

/// The actions and cells of a path, ordered from the first step after the start up to and
/// including the goal. Both sequences have equal length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<S, A> {
    pub actions: Vec<A>,
    pub cells: Vec<S>,
}

impl<S, A> Solution<S, A>
where
    S: Clone,
    A: Clone,
{
    /// Follows parent links from `terminal` until the start node, which is not part of the
    /// result. `nodes` is the arena the [NodeId]s index into.
    pub fn reconstruct(nodes: &[SearchNode<S, A>], terminal: NodeId) -> Solution<S, A> {
        let (mut actions, mut cells): (Vec<A>, Vec<S>) =
            std::iter::successors(nodes.get(terminal.0), |node| {
                node.parent.and_then(|id| nodes.get(id.0))
            })
            .take_while(|node| !node.is_root())
            .filter_map(|node| node.action.clone().map(|a| (a, node.state.clone())))
            .unzip();
        actions.reverse();
        cells.reverse();
        Solution { actions, cells }
    }
}

impl<S, A> Solution<S, A> {
    pub fn len(&self) -> usize {
        self.actions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
    /// The state reached at the end of the path, [None] if no move was needed.
    pub fn last_cell(&self) -> Option<&S> {
        self.cells.last()
    }
}
