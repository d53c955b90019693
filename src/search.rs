//! Uninformed graph search over any [SearchProblem].
//!
//! A [Search] starts with the initial state in its frontier and repeatedly removes a node,
//! stops if it holds the goal and otherwise expands it. States that are already in the frontier
//! or have been explored are never scheduled again, so every state is expanded at most once and
//! the search terminates on any finite state space.
use crate::error::SearchError;
use crate::frontier::{Frontier, Strategy};
use crate::node::{NodeId, SearchNode};
use crate::solution::Solution;
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use log::{debug, info, trace};
use std::hash::Hash;

pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// A state space the engine can explore.
pub trait SearchProblem {
    type State: Eq + Hash + Clone;
    type Action: Clone;
    /// Container type for successors.
    type Successors: IntoIterator<Item = (Self::Action, Self::State)>;

    fn initial_state(&self) -> Self::State;
    fn is_goal(&self, state: &Self::State) -> bool;
    /// Successors in the order they should be added to the frontier.
    fn successors(&self, state: &Self::State) -> Self::Successors;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Only the start node is in the frontier.
    Initialized,
    Running,
    /// The goal was removed from the frontier; its node is the handle given.
    Solved(NodeId),
    Exhausted,
}

impl SearchStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchStatus::Solved(_) | SearchStatus::Exhausted)
    }
}

/// One search run. The engine owns its frontier, explored set and node arena; create a new one
/// to search again.
pub struct Search<'a, P: SearchProblem> {
    problem: &'a P,
    frontier: Frontier<P::State, P::Action>,
    explored: FxIndexSet<P::State>,
    // Nodes removed from the frontier, indexed by NodeId.
    nodes: Vec<SearchNode<P::State, P::Action>>,
    num_explored: usize,
    status: SearchStatus,
    solution: Option<Solution<P::State, P::Action>>,
}

impl<'a, P: SearchProblem> Search<'a, P> {
    pub fn new(problem: &'a P, strategy: Strategy) -> Search<'a, P> {
        let mut frontier = Frontier::new(strategy);
        frontier.add(SearchNode::root(problem.initial_state()));
        debug!("Initialized {} search", strategy);
        Search {
            problem,
            frontier,
            explored: FxIndexSet::default(),
            nodes: Vec::new(),
            num_explored: 0,
            status: SearchStatus::Initialized,
            solution: None,
        }
    }

    /// Performs a single iteration of the explore loop and returns the resulting status. Stepping
    /// a search that already finished does nothing.
    pub fn step(&mut self) -> Result<SearchStatus, SearchError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }
        if self.frontier.is_empty() {
            info!(
                "Frontier exhausted after exploring {} states, no solution",
                self.num_explored
            );
            self.status = SearchStatus::Exhausted;
            return Ok(self.status);
        }
        let node = self.frontier.remove()?;
        self.num_explored += 1;
        let id = NodeId(self.nodes.len());

        if self.problem.is_goal(&node.state) {
            self.nodes.push(node);
            let solution = Solution::reconstruct(&self.nodes, id);
            info!(
                "Solved with {} steps after exploring {} states",
                solution.len(),
                self.num_explored
            );
            self.solution = Some(solution);
            self.status = SearchStatus::Solved(id);
            return Ok(self.status);
        }

        self.explored.insert(node.state.clone());
        for (action, state) in self.problem.successors(&node.state) {
            if !self.frontier.contains_state(&state) && !self.explored.contains(&state) {
                self.frontier.add(SearchNode::child(state, id, action));
            }
        }
        trace!(
            "Expanded node {}, frontier holds {} nodes",
            id.0,
            self.frontier.len()
        );
        self.nodes.push(node);
        self.status = SearchStatus::Running;
        Ok(self.status)
    }

    /// Steps until the goal is found or the frontier runs dry.
    pub fn run(&mut self) -> Result<&Solution<P::State, P::Action>, SearchError> {
        while !self.step()?.is_terminal() {}
        self.solution.as_ref().ok_or(SearchError::NoSolution {
            num_explored: self.num_explored,
        })
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }
    pub fn strategy(&self) -> Strategy {
        self.frontier.strategy()
    }
    pub fn problem(&self) -> &P {
        self.problem
    }
    pub fn solution(&self) -> Option<&Solution<P::State, P::Action>> {
        self.solution.as_ref()
    }
    /// States that were expanded, in expansion order. The goal itself is never part of it.
    pub fn explored(&self) -> &FxIndexSet<P::State> {
        &self.explored
    }
    /// Number of nodes removed from the frontier, including the goal node.
    pub fn num_explored(&self) -> usize {
        self.num_explored
    }
    pub fn frontier(&self) -> &Frontier<P::State, P::Action> {
        &self.frontier
    }
}

/// Runs a fresh search to completion.
pub fn solve<P: SearchProblem>(
    problem: &P,
    strategy: Strategy,
) -> Result<(Solution<P::State, P::Action>, usize), SearchError> {
    let mut search = Search::new(problem, strategy);
    let solution = search.run()?.clone();
    Ok((solution, search.num_explored()))
}
