use super::action::Action;
use super::battle::Battle;
use super::conquest::Conquest;
use super::garrison::Garrison;
use super::phase::Phase;
use super::seat::Seat;
use super::turn::Turn;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Set;
use crate::map::Map;
use crate::map::Territory;
use crate::Arbitrary;
use crate::Armies;
use crate::Position;
use crate::ELIMINATION_HAND;
use crate::MANDATORY_HAND;
use crate::MAX_ATTACK_DICE;
use crate::MAX_DEFEND_DICE;
use crate::MAX_PLAYERS;
use crate::MIN_INCOME;
use crate::MIN_PLAYERS;
use crate::STARTING_ARMIES;
use crate::TERRITORIES_PER_ARMY;
use crate::TERRITORY_CARD_BONUS;
use colored::Colorize;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::sync::Arc;

/// Complete state of one game in between actions.
///
/// The map is shared read-only across every clone. Everything else is
/// owned, so cloning yields an independent game. Dice and card draws come
/// from the game's own RNG: a plain [`Clone`] continues the same random
/// stream, while [`Game::determinize`] reseeds it and resamples the hands
/// the mover cannot see.
#[derive(Debug, Clone)]
pub struct Game {
    map: Arc<Map>,
    garrisons: Vec<Garrison>,
    seats: Vec<Seat>,
    phase: Phase,
    ticker: Position,
    round: usize,
    traded: usize,
    conquest: Option<Conquest>,
    forced: bool,
    winner: Option<Position>,
    allotted: Armies,
    casualties: Armies,
    rng: SmallRng,
}

impl Game {
    /// A fresh game in setup, with entropy from the OS.
    pub fn new(n: usize, map: Arc<Map>) -> anyhow::Result<Self> {
        Self::validate(n, &map)?;
        Ok(Self::table(n, map, SmallRng::from_os_rng()))
    }
    /// A fresh game whose dice and draws are reproducible from `seed`.
    pub fn seeded(n: usize, map: Arc<Map>, seed: u64) -> anyhow::Result<Self> {
        Self::validate(n, &map)?;
        Ok(Self::table(n, map, SmallRng::seed_from_u64(seed)))
    }
    /// A fresh game on the classic board.
    pub fn classic(n: usize) -> anyhow::Result<Self> {
        Self::new(n, Map::classic())
    }
    fn validate(n: usize, map: &Map) -> anyhow::Result<()> {
        anyhow::ensure!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&n),
            "{} players is outside {}..={}",
            n,
            MIN_PLAYERS,
            MAX_PLAYERS
        );
        anyhow::ensure!(
            map.n() >= n,
            "{} territories cannot seat {} players",
            map.n(),
            n
        );
        anyhow::ensure!(
            map.n() <= n * STARTING_ARMIES[n] as usize,
            "{} territories exceed {} setup armies for {} players",
            map.n(),
            STARTING_ARMIES[n],
            n
        );
        Ok(())
    }
    fn table(n: usize, map: Arc<Map>, rng: SmallRng) -> Self {
        let reserve = STARTING_ARMIES[n];
        Self {
            garrisons: vec![Garrison::default(); map.n()],
            seats: (0..n).map(|_| Seat::from(reserve)).collect(),
            phase: Phase::Setup,
            ticker: 0,
            round: 1,
            traded: 0,
            conquest: None,
            forced: false,
            winner: None,
            allotted: reserve * n as Armies,
            casualties: 0,
            rng,
            map,
        }
    }
}

// public state
impl Game {
    pub fn map(&self) -> &Arc<Map> {
        &self.map
    }
    pub fn n(&self) -> usize {
        self.seats.len()
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Player to act. Meaningless once the game has ended.
    pub fn actor(&self) -> Position {
        self.ticker
    }
    pub fn turn(&self) -> Turn {
        if self.is_terminal() {
            Turn::Terminal
        } else {
            Turn::Choice(self.ticker)
        }
    }
    /// Turn counter, starting at 1 and advancing whenever play wraps around
    /// the table.
    pub fn round(&self) -> usize {
        self.round
    }
    /// Sets traded in so far, game-wide.
    pub fn traded(&self) -> usize {
        self.traded
    }
    pub fn winner(&self) -> Option<Position> {
        self.winner
    }
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }
    pub fn conquest(&self) -> Option<Conquest> {
        self.conquest
    }
    pub fn seat(&self, player: Position) -> &Seat {
        &self.seats[player]
    }
    pub fn hand(&self, player: Position) -> &Hand {
        self.seats[player].hand()
    }
    pub fn is_alive(&self, player: Position) -> bool {
        self.seats[player].is_alive()
    }
    pub fn alive(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.n()).filter(move |p| self.is_alive(*p))
    }
    /// Armies the mover still has to place this phase.
    pub fn deployable(&self) -> Armies {
        match self.phase {
            Phase::Setup | Phase::SetupDeployment => self.seats[self.ticker].reserve(),
            Phase::Reinforcement => self.seats[self.ticker].deploy(),
            _ => 0,
        }
    }
    /// Whether the mover conquered a territory this turn.
    pub fn has_conquered(&self) -> bool {
        self.seats[self.ticker].has_conquered()
    }
    /// A trade is mandatory while the mover holds five or more cards.
    pub fn is_mandatory(&self) -> bool {
        self.phase == Phase::Trading && self.hand(self.ticker).len() >= MANDATORY_HAND
    }
    /// Cards not held by anyone.
    pub fn deck(&self) -> Deck {
        Deck::without(&self.map, self.seats.iter().map(Seat::hand))
    }
}

// board queries
impl Game {
    fn garrison(&self, territory: Territory) -> Option<&Garrison> {
        self.garrisons.get(territory.index())
    }
    pub fn owner(&self, territory: Territory) -> Option<Position> {
        self.garrison(territory).and_then(Garrison::owner)
    }
    pub fn armies(&self, territory: Territory) -> Armies {
        self.garrison(territory).map(Garrison::armies).unwrap_or(0)
    }
    pub fn owns(&self, player: Position, territory: Territory) -> bool {
        self.owner(territory) == Some(player)
    }
    fn is_enemy(&self, player: Position, territory: Territory) -> bool {
        self.owner(territory).is_some_and(|owner| owner != player)
    }
    pub fn territories_of(&self, player: Position) -> impl Iterator<Item = Territory> + '_ {
        self.map.territories().filter(move |t| self.owns(player, *t))
    }
    pub fn count_territories(&self, player: Position) -> usize {
        self.garrisons.iter().filter(|g| g.is_owned_by(player)).count()
    }
    /// Armies a player has on the board.
    pub fn armies_of(&self, player: Position) -> Armies {
        self.garrisons
            .iter()
            .filter(|g| g.is_owned_by(player))
            .map(Garrison::armies)
            .sum()
    }
    pub fn on_board(&self) -> Armies {
        self.garrisons.iter().map(Garrison::armies).sum()
    }
    /// Neighbors held by someone other than the territory's owner.
    pub fn hostile_neighbors(&self, territory: Territory) -> impl Iterator<Item = Territory> + '_ {
        let owner = self.owner(territory);
        self.map
            .neighbors(territory)
            .iter()
            .copied()
            .filter(move |n| self.owner(*n) != owner)
    }
    pub fn is_border(&self, territory: Territory) -> bool {
        self.hostile_neighbors(territory).next().is_some()
    }
    /// Reinforcement income: territories / 3 with a floor of 3, plus the
    /// bonus of every continent held whole.
    pub fn income(&self, player: Position) -> Armies {
        let held = self.count_territories(player) as Armies;
        let base = (held / TERRITORIES_PER_ARMY).max(MIN_INCOME);
        let bonus = self
            .map
            .continents()
            .iter()
            .filter(|c| c.territories().iter().all(|t| self.owns(player, *t)))
            .map(|c| c.bonus())
            .sum::<Armies>();
        base + bonus
    }
    /// Territories reachable from `source` through its owner's territories,
    /// excluding `source` itself.
    pub fn reach(&self, source: Territory) -> Vec<Territory> {
        let Some(owner) = self.owner(source) else {
            return Vec::new();
        };
        let mut seen = vec![false; self.map.n()];
        let mut queue = VecDeque::from([source]);
        let mut reach = Vec::new();
        seen[source.index()] = true;
        while let Some(t) = queue.pop_front() {
            for &n in self.map.neighbors(t) {
                if !seen[n.index()] && self.owns(owner, n) {
                    seen[n.index()] = true;
                    reach.push(n);
                    queue.push_back(n);
                }
            }
        }
        reach
    }
    /// Armies on the board, pending in seats, and lost in combat always sum
    /// to everything ever allotted.
    pub fn is_balanced(&self) -> bool {
        let pending = self.seats.iter().map(Seat::pending).sum::<Armies>();
        self.on_board() + pending + self.casualties == self.allotted
    }
}

// legality
impl Game {
    /// Every legal action for the mover. Empty once the game has ended.
    pub fn legal(&self) -> Vec<Action> {
        let me = self.ticker;
        match self.phase {
            Phase::GameEnd => Vec::new(),
            Phase::Setup => self
                .map
                .territories()
                .filter(|t| self.owner(*t).is_none())
                .map(Action::Claim)
                .collect(),
            Phase::SetupDeployment | Phase::Reinforcement => {
                self.territories_of(me).map(Action::Deploy).collect()
            }
            Phase::Attack => {
                let mut options = Vec::new();
                for source in self.territories_of(me) {
                    let dice = self.dice(source);
                    for target in self.hostile_neighbors(source) {
                        for n in 1..=dice {
                            options.push(Action::Attack(source, target, n));
                        }
                    }
                }
                options.push(Action::Pass);
                options
            }
            Phase::Occupation => self
                .conquest
                .map(|c| (c.dice..self.armies(c.source)).map(Action::Occupy).collect())
                .unwrap_or_default(),
            Phase::Fortify => {
                let mut options = Vec::new();
                for source in self.territories_of(me).filter(|t| self.armies(*t) > 1) {
                    for target in self.reach(source) {
                        for n in 1..self.armies(source) {
                            options.push(Action::Fortify(source, target, n));
                        }
                    }
                }
                options.push(Action::Pass);
                options
            }
            Phase::Trading => {
                let sets = self.hand(me).sets();
                let keep = !self.is_mandatory() || sets.is_empty();
                sets.into_iter()
                    .map(Action::Trade)
                    .chain(keep.then_some(Action::Keep))
                    .collect()
            }
        }
    }
    /// Membership test against [`Game::legal`] without enumerating it.
    pub fn is_legal(&self, action: &Action) -> bool {
        let me = self.ticker;
        match (*action, self.phase) {
            (Action::Claim(t), Phase::Setup) => self.garrison(t).is_some_and(|g| !g.is_claimed()),
            (Action::Deploy(t), phase) if phase.is_placement() => self.owns(me, t),
            (Action::Attack(source, target, n), Phase::Attack) => {
                self.owns(me, source)
                    && self.is_enemy(me, target)
                    && self.map.is_adjacent(source, target)
                    && n >= 1
                    && n <= self.dice(source)
            }
            (Action::Occupy(n), Phase::Occupation) => self
                .conquest
                .is_some_and(|c| n >= c.dice && n < self.armies(c.source)),
            (Action::Fortify(source, target, n), Phase::Fortify) => {
                source != target
                    && self.owns(me, source)
                    && self.owns(me, target)
                    && n >= 1
                    && n < self.armies(source)
                    && self.reach(source).contains(&target)
            }
            (Action::Pass, Phase::Attack | Phase::Fortify) => true,
            (Action::Trade(set), Phase::Trading) => self.hand(me).sets().contains(&set),
            (Action::Keep, Phase::Trading) => !self.is_mandatory() || !self.hand(me).has_set(),
            _ => false,
        }
    }
    /// Most dice an attack from `source` may roll.
    fn dice(&self, source: Territory) -> Armies {
        self.armies(source).saturating_sub(1).min(MAX_ATTACK_DICE)
    }
}

// transitions
impl Game {
    /// Applies a legal action in place. Illegal actions are rejected and
    /// leave the game untouched.
    pub fn apply(&mut self, action: Action) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.is_legal(&action),
            "P{} cannot {} during {}",
            self.ticker,
            action,
            self.phase
        );
        log::trace!("P{} {:<16} {}", self.ticker, self.phase, action);
        match action {
            Action::Claim(t) => self.claim(t),
            Action::Deploy(t) => self.deploy(t),
            Action::Attack(source, target, n) => self.attack(source, target, n),
            Action::Occupy(n) => self.occupy(n),
            Action::Fortify(source, target, n) => self.fortify(source, target, n),
            Action::Pass => self.pass(),
            Action::Trade(set) => self.trade(set)?,
            Action::Keep => self.reinforce(),
        }
        debug_assert!(self.is_balanced(), "armies out of balance after {}", action);
        Ok(())
    }
    /// Clone-and-apply. The child continues this game's random stream.
    pub fn child(&self, action: Action) -> anyhow::Result<Self> {
        let mut child = self.clone();
        child.apply(action)?;
        Ok(child)
    }
    /// Independent copy. A determinized copy draws its dice from a fresh
    /// seed and reshuffles the hands the mover cannot see.
    pub fn fork(&self, determinized: bool) -> Self {
        if determinized {
            self.determinize(&mut rand::rng())
        } else {
            self.clone()
        }
    }
    /// Determinized copy drawing its reseed and hidden hands from `rng`.
    ///
    /// The mover's hand and every hand size are preserved. Other hands are
    /// redrawn from the cards the mover has not seen.
    pub fn determinize<R: Rng>(&self, rng: &mut R) -> Self {
        let mut child = self.clone();
        child.rng = SmallRng::seed_from_u64(rng.random::<u64>());
        if self.is_terminal() {
            return child;
        }
        let observer = self.ticker;
        let mut unseen = Deck::without(&self.map, std::iter::once(self.hand(observer)));
        for (_, seat) in child
            .seats
            .iter_mut()
            .enumerate()
            .filter(|(p, _)| *p != observer)
        {
            let cards = (0..seat.hand().len())
                .filter_map(|_| unseen.draw(rng))
                .collect::<Vec<Card>>();
            seat.set_hand(Hand::from(cards));
        }
        child
    }

    fn claim(&mut self, territory: Territory) {
        let ref mut garrison = self.garrisons[territory.index()];
        garrison.claim(self.ticker);
        garrison.reinforce(1);
        self.seats[self.ticker].place_reserve();
        if self.garrisons.iter().all(Garrison::is_claimed) {
            self.phase = Phase::SetupDeployment;
            self.handoff();
        } else {
            self.ticker = self.successor(self.ticker);
        }
    }
    fn deploy(&mut self, territory: Territory) {
        self.garrisons[territory.index()].reinforce(1);
        let ref mut seat = self.seats[self.ticker];
        if self.phase == Phase::SetupDeployment {
            seat.place_reserve();
            if seat.reserve() == 0 {
                self.handoff();
            }
        } else {
            seat.place_deploy();
            if seat.deploy() == 0 {
                self.phase = Phase::Attack;
            }
        }
    }
    /// Setup deployment is contiguous: the next player with armies in
    /// reserve places all of them. When none remain, play begins.
    fn handoff(&mut self) {
        let n = self.n();
        match (1..=n)
            .map(|i| (self.ticker + i) % n)
            .find(|p| self.seats[*p].reserve() > 0)
        {
            Some(next) => self.ticker = next,
            None => {
                log::debug!("setup complete with {} armies on board", self.on_board());
                self.round = 1;
                self.commence(0);
            }
        }
    }
    fn attack(&mut self, source: Territory, target: Territory, dice: Armies) {
        let defend = self.armies(target).min(MAX_DEFEND_DICE);
        let losses = Battle::new(dice, defend).roll(&mut self.rng);
        self.garrisons[source.index()].withdraw(losses.attacker);
        self.garrisons[target.index()].withdraw(losses.defender);
        self.casualties += losses.total();
        if self.armies(target) == 0 {
            self.conquer(Conquest {
                source,
                target,
                dice,
            });
        }
    }
    fn conquer(&mut self, conquest: Conquest) {
        let me = self.ticker;
        let loser = self.owner(conquest.target);
        self.garrisons[conquest.target.index()].claim(me);
        self.seats[me].set_conquered(true);
        if let Some(loser) = loser.filter(|p| self.count_territories(*p) == 0) {
            self.eliminate(loser);
        }
        if self.alive().count() == 1 {
            self.garrisons[conquest.source.index()].withdraw(conquest.dice);
            self.garrisons[conquest.target.index()].reinforce(conquest.dice);
            self.winner = Some(me);
            self.phase = Phase::GameEnd;
            log::debug!("P{} wins in round {}", me, self.round);
        } else {
            self.conquest = Some(conquest);
            self.phase = Phase::Occupation;
        }
    }
    fn eliminate(&mut self, loser: Position) {
        let me = self.ticker;
        let mut spoils = self.seats[loser].eliminate();
        log::debug!("P{} eliminates P{} taking {} cards", me, loser, spoils.len());
        self.seats[me].hand_mut().absorb(&mut spoils);
        if self.hand(me).len() >= ELIMINATION_HAND {
            self.forced = true;
        }
    }
    fn occupy(&mut self, n: Armies) {
        if let Some(conquest) = self.conquest.take() {
            self.garrisons[conquest.source.index()].withdraw(n);
            self.garrisons[conquest.target.index()].reinforce(n);
        }
        self.phase = if self.forced {
            Phase::Trading
        } else {
            Phase::Attack
        };
    }
    fn fortify(&mut self, source: Territory, target: Territory, n: Armies) {
        self.garrisons[source.index()].withdraw(n);
        self.garrisons[target.index()].reinforce(n);
        self.rotate();
    }
    fn pass(&mut self) {
        match self.phase {
            Phase::Attack => self.phase = Phase::Fortify,
            _ => self.rotate(),
        }
    }
    fn trade(&mut self, set: Set) -> anyhow::Result<()> {
        let me = self.ticker;
        self.seats[me].hand_mut().remove(&set)?;
        self.traded += 1;
        let award = crate::cards::award(self.traded);
        self.seats[me].award(award);
        self.allotted += award;
        let owned = set
            .cards()
            .iter()
            .filter_map(Card::territory)
            .filter(|t| self.owns(me, *t))
            .collect::<Vec<Territory>>();
        for territory in owned {
            self.garrisons[territory.index()].reinforce(TERRITORY_CARD_BONUS);
            self.allotted += TERRITORY_CARD_BONUS;
        }
        log::trace!("P{} trades set #{} for {}", me, self.traded, award);
        if self.hand(me).len() < MANDATORY_HAND {
            self.reinforce();
        }
        Ok(())
    }
    /// Enters reinforcement. A forced mid-turn trade grants only the trade
    /// bonus, not another round of income.
    fn reinforce(&mut self) {
        let me = self.ticker;
        let income = if self.forced { 0 } else { self.income(me) };
        self.forced = false;
        self.allotted += income;
        self.seats[me].muster(income);
        self.phase = if self.seats[me].deploy() > 0 {
            Phase::Reinforcement
        } else {
            Phase::Attack
        };
    }
    /// Ends the mover's turn: draw a card if they conquered, then hand play
    /// to the next living player.
    fn rotate(&mut self) {
        let me = self.ticker;
        if self.seats[me].has_conquered() {
            let mut deck = self.deck();
            match deck.draw(&mut self.rng) {
                Some(card) => self.seats[me].hand_mut().add(card),
                None => log::warn!("P{} conquered but the deck is empty", me),
            }
            self.seats[me].set_conquered(false);
        }
        let next = self.successor(me);
        if next <= me {
            self.round += 1;
        }
        self.commence(next);
    }
    fn commence(&mut self, player: Position) {
        self.ticker = player;
        self.forced = false;
        if self.hand(player).has_set() {
            self.phase = Phase::Trading;
        } else {
            self.reinforce();
        }
    }
    fn successor(&self, player: Position) -> Position {
        let n = self.n();
        (1..=n)
            .map(|i| (player + i) % n)
            .find(|p| self.seats[*p].is_alive())
            .unwrap_or(player)
    }
}

/// Direct state mutation for building scenarios. Army edits are booked
/// against the allotment so the game stays balanced.
#[cfg(any(test, feature = "debug"))]
impl Game {
    pub fn set_armies(&mut self, territory: Territory, armies: Armies) {
        let ref mut garrison = self.garrisons[territory.index()];
        self.allotted = self.allotted + armies - garrison.armies();
        garrison.reset(armies);
    }
    /// Reassigns a territory. Outside setup, players left with no
    /// territory are marked eliminated.
    pub fn set_owner(&mut self, territory: Territory, player: Position) {
        self.garrisons[territory.index()].claim(player);
        if !self.phase.is_setup() {
            for p in 0..self.n() {
                let alive = self.count_territories(p) > 0;
                self.seats[p].set_alive(alive);
            }
        }
    }
    pub fn set_hand(&mut self, player: Position, hand: Hand) {
        self.seats[player].set_hand(hand);
    }
    pub fn set_traded(&mut self, traded: usize) {
        self.traded = traded;
    }
    pub fn set_conquered(&mut self, conquered: bool) {
        self.seats[self.ticker].set_conquered(conquered);
    }
    /// Abandons the mover's pending deployment and starts `player`'s turn.
    pub fn restart(&mut self, player: Position) {
        let dropped = self.seats[self.ticker].disband();
        self.allotted -= dropped;
        self.conquest = None;
        self.forced = false;
        self.commence(player);
    }
    /// Plays through setup with uniformly random claims and placements.
    pub fn arranged(n: usize, seed: u64) -> anyhow::Result<Self> {
        use rand::seq::IndexedRandom;
        let mut game = Self::seeded(n, Map::classic(), seed)?;
        let ref mut rng = SmallRng::seed_from_u64(seed);
        while game.phase.is_setup() {
            let action = *game
                .legal()
                .choose(rng)
                .ok_or_else(|| anyhow::anyhow!("no legal action during setup"))?;
            game.apply(action)?;
        }
        Ok(game)
    }
}

impl Arbitrary for Game {
    fn random() -> Self {
        let n = rand::random_range(MIN_PLAYERS..=MAX_PLAYERS);
        Self::table(n, Map::classic(), SmallRng::from_os_rng())
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{} {} {} {}",
            format!("round {:>3}", self.round).bright_white(),
            self.turn().to_string().cyan(),
            self.phase.to_string().yellow(),
            self.winner
                .map(|w| format!("winner P{}", w).green().to_string())
                .unwrap_or_default(),
        )?;
        for (p, seat) in self.seats.iter().enumerate() {
            let status = if seat.is_alive() {
                "alive".green()
            } else {
                "dead ".red()
            };
            writeln!(
                f,
                "P{} {} {:>3} territories {:>4} armies {}",
                p,
                status,
                self.count_territories(p),
                self.armies_of(p),
                seat.hand()
            )?;
        }
        Ok(())
    }
}
