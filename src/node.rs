/// Handle of a node in the arena of expanded nodes kept by a [Search](crate::search::Search).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// A state together with the node that discovered it and the action leading here. Following
/// `parent` links always ends at the start node, which is the only node without a parent and
/// without an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode<S, A> {
    pub state: S,
    pub parent: Option<NodeId>,
    pub action: Option<A>,
}

impl<S, A> SearchNode<S, A> {
    pub fn root(state: S) -> SearchNode<S, A> {
        SearchNode {
            state,
            parent: None,
            action: None,
        }
    }
    pub fn child(state: S, parent: NodeId, action: A) -> SearchNode<S, A> {
        SearchNode {
            state,
            parent: Some(parent),
            action: Some(action),
        }
    }
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
