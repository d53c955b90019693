//! The frontier holds nodes that have been discovered but not yet expanded. Which node comes out
//! next is decided by the [Strategy] it was created with.
use crate::error::SearchError;
use crate::node::SearchNode;
use core::fmt;
use fxhash::FxHashMap;
use log::warn;
use std::collections::VecDeque;
use std::hash::Hash;
use std::str::FromStr;

/// Removal order of a [Frontier].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Last in, first out (stack).
    #[default]
    DepthFirst,
    /// First in, first out (queue). Finds a path with the fewest steps.
    BreadthFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::DepthFirst, Strategy::BreadthFirst];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::DepthFirst => write!(f, "depth-first"),
            Strategy::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unknown strategy '{}', expected one of dfs, depth-first, stack, bfs, breadth-first, queue",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "stack" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" | "queue" => Ok(Strategy::BreadthFirst),
            _ => Err(UnknownStrategy(s.to_owned())),
        }
    }
}

/// Insertion-ordered container of [SearchNode]s. Both strategies share `add`, `is_empty` and
/// `contains_state`; only [remove](Self::remove) differs.
///
/// The frontier does not reject duplicate states, callers check
/// [contains_state](Self::contains_state) before adding.
#[derive(Clone, Debug)]
pub struct Frontier<S, A> {
    strategy: Strategy,
    nodes: VecDeque<SearchNode<S, A>>,
    // Number of held nodes per state.
    held: FxHashMap<S, usize>,
}

impl<S, A> Frontier<S, A>
where
    S: Eq + Hash + Clone,
{
    pub fn new(strategy: Strategy) -> Frontier<S, A> {
        Frontier {
            strategy,
            nodes: VecDeque::new(),
            held: FxHashMap::default(),
        }
    }
    pub fn stack() -> Frontier<S, A> {
        Frontier::new(Strategy::DepthFirst)
    }
    pub fn queue() -> Frontier<S, A> {
        Frontier::new(Strategy::BreadthFirst)
    }
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn add(&mut self, node: SearchNode<S, A>) {
        *self.held.entry(node.state.clone()).or_insert(0) += 1;
        self.nodes.push_back(node);
    }
    pub fn contains_state(&self, state: &S) -> bool {
        self.held.contains_key(state)
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    /// Removes the next node according to the strategy: the newest node for
    /// [DepthFirst](Strategy::DepthFirst), the oldest for [BreadthFirst](Strategy::BreadthFirst).
    pub fn remove(&mut self) -> Result<SearchNode<S, A>, SearchError> {
        let node = match self.strategy {
            Strategy::DepthFirst => self.nodes.pop_back(),
            Strategy::BreadthFirst => self.nodes.pop_front(),
        };
        let Some(node) = node else {
            warn!("Attempted to remove a node from an empty {} frontier", self.strategy);
            return Err(SearchError::EmptyFrontier);
        };
        if let Some(count) = self.held.get_mut(&node.state) {
            *count -= 1;
            if *count == 0 {
                self.held.remove(&node.state);
            }
        }
        Ok(node)
    }
}
