use crate::gameplay::Action;
use crate::gameplay::Game;
use crate::Position;
use crate::Utility;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;

/// Search statistics at one game state.
///
/// `value[0]` accumulates the searching player's reward and `value[1]`
/// everyone else's, so a node can be scored from either side.
#[derive(Debug, Clone)]
pub struct Leaf {
    game: Game,
    value: [Utility; 2],
    visits: usize,
}

impl From<Game> for Leaf {
    fn from(game: Game) -> Self {
        Self {
            game,
            value: [0.; 2],
            visits: 0,
        }
    }
}

impl Leaf {
    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn visits(&self) -> usize {
        self.visits
    }
    pub fn value(&self) -> [Utility; 2] {
        self.value
    }
    /// Mean reward from one side's perspective.
    pub fn mean(&self, side: usize) -> Utility {
        self.value[side] / self.visits.max(1) as Utility
    }
}

/// A Monte Carlo search tree rooted at index 0.
///
/// Vertices hold [`Leaf`] statistics; edges are labeled with the action
/// that led from parent to child. Children keep their insertion order.
#[derive(Debug)]
pub struct Tree {
    graph: DiGraph<Leaf, Action>,
    hero: Position,
}

impl Tree {
    pub fn new(root: Game, hero: Position) -> Self {
        let mut graph = DiGraph::default();
        graph.add_node(Leaf::from(root));
        Self { graph, hero }
    }
    pub fn root() -> NodeIndex {
        NodeIndex::new(0)
    }
    /// The player this tree searches on behalf of.
    pub fn hero(&self) -> Position {
        self.hero
    }
    /// Number of nodes in the tree.
    pub fn n(&self) -> usize {
        self.graph.node_count()
    }
    pub fn leaf(&self, index: NodeIndex) -> &Leaf {
        &self.graph[index]
    }
    pub fn game(&self, index: NodeIndex) -> &Game {
        &self.graph[index].game
    }
    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.graph.neighbors_directed(index, Incoming).next()
    }
    pub fn children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut children = self
            .graph
            .neighbors_directed(index, Outgoing)
            .collect::<Vec<NodeIndex>>();
        children.reverse();
        children
    }
    pub fn is_expanded(&self, index: NodeIndex) -> bool {
        self.graph.neighbors_directed(index, Outgoing).next().is_some()
    }
    /// Action on the edge into `index`.
    pub fn edge(&self, index: NodeIndex) -> Option<Action> {
        self.graph
            .edges_directed(index, Incoming)
            .next()
            .map(|e| *e.weight())
    }
    /// extend the tree under `parent` and return the new node
    pub fn grow(&mut self, parent: NodeIndex, action: Action, game: Game) -> NodeIndex {
        let child = self.graph.add_node(Leaf::from(game));
        self.graph.add_edge(parent, child, action);
        child
    }
    /// Adds one visit and `reward` to every node from `index` up to the root.
    pub fn backup(&mut self, index: NodeIndex, reward: [Utility; 2]) {
        let mut cursor = Some(index);
        while let Some(node) = cursor {
            let ref mut leaf = self.graph[node];
            leaf.visits += 1;
            leaf.value[0] += reward[0];
            leaf.value[1] += reward[1];
            cursor = self.parent(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_reaches_root() {
        let game = Game::arranged(3, 0).unwrap();
        let mut tree = Tree::new(game.clone(), 0);
        let actions = game.choices();
        let a = tree.grow(Tree::root(), actions[0], game.child(actions[0]).unwrap());
        let b = tree.grow(Tree::root(), actions[1], game.child(actions[1]).unwrap());
        let c = tree.grow(a, actions[0], game.clone());
        tree.backup(c, [1., 0.]);
        tree.backup(b, [0., 1.]);
        assert!(tree.n() == 4);
        assert!(tree.leaf(Tree::root()).visits() == 2);
        assert!(tree.leaf(Tree::root()).value() == [1., 1.]);
        assert!(tree.leaf(a).visits() == 1);
        assert!(tree.leaf(c).mean(0) == 1.);
        assert!(tree.children(Tree::root()) == vec![a, b]);
        assert!(tree.parent(c) == Some(a));
        assert!(tree.parent(Tree::root()).is_none());
        assert!(tree.edge(b) == Some(actions[1]));
    }
}
