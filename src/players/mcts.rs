use super::agent::Agent;
use super::config::MctsConfig;
use super::heuristic::Heuristic;
use super::tree::Tree;
use crate::gameplay::Action;
use crate::gameplay::Game;
use crate::Position;
use crate::Utility;
use petgraph::graph::NodeIndex;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;

/// Monte Carlo tree search over determinized games.
///
/// Each candidate action gets its own tree, rooted at a determinized copy
/// of the game with that action already applied. Trees grow by UCT, roll
/// out with the [`Heuristic`] policy, and the candidate whose root averages
/// the highest reward is played. Attacks inside the search are fought to
/// the end with [`Game::resolve`], so each ply is one engagement.
/// Candidates are independent and seeded up front, so the result does not
/// depend on how they are scheduled.
pub struct Mcts {
    config: MctsConfig,
    rng: SmallRng,
}

impl Mcts {
    pub fn new(config: MctsConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: SmallRng::from_os_rng(),
        })
    }
    pub fn seeded(config: MctsConfig, seed: u64) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
        })
    }
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Mean reward to the mover of playing `action`, by a search seeded
    /// with `seed`.
    pub fn evaluate(&self, game: &Game, action: Action, seed: u64) -> anyhow::Result<Utility> {
        let hero = game.actor();
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut root = game.determinize(rng);
        root.resolve(action)?;
        let tree = self.search(root, hero, rng)?;
        Ok(tree.leaf(Tree::root()).mean(0))
    }
    /// Runs the full simulation budget from `root` on behalf of `hero`.
    pub fn search<R: Rng>(&self, root: Game, hero: Position, rng: &mut R) -> anyhow::Result<Tree> {
        let mut tree = Tree::new(root, hero);
        for _ in 0..self.config.simulations {
            let node = self.select(&mut tree, rng)?;
            let reward = self.simulate(tree.game(node), hero, rng)?;
            tree.backup(node, reward);
        }
        Ok(tree)
    }

    /// Descends by UCT until reaching a terminal state or an unexpanded
    /// node, which gets expanded.
    fn select<R: Rng>(&self, tree: &mut Tree, rng: &mut R) -> anyhow::Result<NodeIndex> {
        let mut node = Tree::root();
        while !tree.game(node).is_terminal() {
            if tree.is_expanded(node) {
                node = self.best(tree, node);
            } else {
                return self.expand(tree, node, rng);
            }
        }
        Ok(node)
    }
    /// Adds one child per choice, each on its own determinized copy, and
    /// returns one of them at random.
    fn expand<R: Rng>(&self, tree: &mut Tree, node: NodeIndex, rng: &mut R) -> anyhow::Result<NodeIndex> {
        let ref game = tree.game(node).clone();
        let choices = game.choices();
        anyhow::ensure!(!choices.is_empty(), "nothing to expand during {}", game.phase());
        let mut children = Vec::with_capacity(choices.len());
        for action in choices {
            let mut child = game.determinize(rng);
            child.resolve(action)?;
            children.push(tree.grow(node, action, child));
        }
        children
            .choose(rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("expansion produced no children"))
    }
    /// UCT over children, scored from the side of whoever moves at `node`.
    /// Unvisited children are taken first, in order.
    fn best(&self, tree: &Tree, node: NodeIndex) -> NodeIndex {
        let side = if tree.game(node).actor() == tree.hero() { 0 } else { 1 };
        let ln = (tree.leaf(node).visits().max(1) as Utility).ln();
        let children = tree.children(node);
        if let Some(fresh) = children.iter().find(|c| tree.leaf(**c).visits() == 0) {
            return *fresh;
        }
        children
            .into_iter()
            .map(|c| {
                let leaf = tree.leaf(c);
                let n = leaf.visits() as Utility;
                (c, leaf.mean(side) + self.config.exploration * (2. * ln / n).sqrt())
            })
            .max_by(|(_, x), (_, y)| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(c, _)| c)
            .unwrap_or(node)
    }
    /// Heuristic rollout from a copy of `game`, scored for both sides.
    fn simulate<R: Rng>(&self, game: &Game, hero: Position, rng: &mut R) -> anyhow::Result<[Utility; 2]> {
        let mut game = game.determinize(rng);
        for _ in 0..self.config.steps {
            if game.is_terminal() {
                break;
            }
            let action = Heuristic::pick(&game, rng)?;
            game.resolve(action)?;
        }
        Ok(self.reward(&game, hero))
    }
    /// Win/loss when decided, else the projected army share.
    pub fn reward(&self, game: &Game, hero: Position) -> [Utility; 2] {
        match game.winner() {
            Some(w) if w == hero => [1., 0.],
            Some(_) => [0., 1.],
            None => {
                let share = Self::projection(game, hero, self.config.horizon);
                [share, 1. - share]
            }
        }
    }
    /// Share of projected armies held by `hero`, where each living player
    /// projects board armies plus `horizon` turns of income.
    pub fn projection(game: &Game, hero: Position, horizon: usize) -> Utility {
        let projected = |p: Position| -> Utility {
            if game.is_alive(p) {
                (game.armies_of(p) + horizon as crate::Armies * game.income(p)) as Utility
            } else {
                0.
            }
        };
        let total = (0..game.n()).map(|p| projected(p)).sum::<Utility>();
        if total > 0. {
            projected(hero) / total
        } else {
            0.
        }
    }

    #[cfg(feature = "server")]
    fn values(&self, game: &Game, candidates: &[Action], seeds: &[u64]) -> anyhow::Result<Vec<Utility>> {
        use rayon::prelude::*;
        candidates
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(action, seed)| self.evaluate(game, *action, *seed))
            .collect()
    }
    #[cfg(not(feature = "server"))]
    fn values(&self, game: &Game, candidates: &[Action], seeds: &[u64]) -> anyhow::Result<Vec<Utility>> {
        candidates
            .iter()
            .zip(seeds.iter())
            .map(|(action, seed)| self.evaluate(game, *action, *seed))
            .collect()
    }
}

impl Agent for Mcts {
    fn decide(&mut self, game: &Game) -> anyhow::Result<Action> {
        let candidates = game.choices();
        match candidates.as_slice() {
            [] => anyhow::bail!("mcts asked to move during {}", game.phase()),
            [only] => return Ok(*only),
            _ => {}
        }
        let seeds = candidates
            .iter()
            .map(|_| self.rng.random::<u64>())
            .collect::<Vec<u64>>();
        let values = self.values(game, &candidates, &seeds)?;
        let (best, value) = candidates
            .iter()
            .zip(values.iter())
            .fold((candidates[0], values[0]), |(a, x), (b, y)| {
                if *y > x { (*b, *y) } else { (a, x) }
            });
        log::debug!(
            "P{} mcts {} of {} candidates scores {:.3}",
            game.actor(),
            best,
            candidates.len(),
            value
        );
        Ok(best)
    }
    fn name(&self) -> &'static str {
        "mcts"
    }
}
