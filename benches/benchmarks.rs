criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        rolling_dice_three_against_two,
        enumerating_legal_attacks,
        determinizing_midgame,
        playing_heuristic_game,
        deciding_mcts_action,
        sampling_planner_plan,
}

use rand::SeedableRng;
use rand::rngs::SmallRng;
use riskbot::gameplay::*;
use riskbot::players::*;

/// A game early in player 0's first attack phase.
fn midgame() -> Game {
    let mut game = Game::arranged(4, 0).expect("setup");
    let ref mut agent = Heuristic::seeded(0);
    while game.phase() != Phase::Attack {
        let action = agent.decide(&game).expect("decision");
        game.apply(action).expect("legal");
    }
    game
}

fn rolling_dice_three_against_two(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("roll a 3v2 Battle", |b| {
        b.iter(|| Battle::new(3, 2).roll(rng))
    });
}

fn enumerating_legal_attacks(c: &mut criterion::Criterion) {
    let game = midgame();
    c.bench_function("enumerate legal attacks", |b| b.iter(|| game.legal()));
}

fn determinizing_midgame(c: &mut criterion::Criterion) {
    let game = midgame();
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("determinize a midgame state", |b| {
        b.iter(|| game.determinize(rng))
    });
}

fn playing_heuristic_game(c: &mut criterion::Criterion) {
    c.bench_function("play a 3-player Heuristic game", |b| {
        b.iter(|| {
            let mut game = Game::arranged(3, 1).expect("setup");
            let ref mut agent = Heuristic::seeded(1);
            while !game.is_terminal() {
                let action = agent.decide(&game).expect("decision");
                game.apply(action).expect("legal");
            }
            game.winner()
        })
    });
}

fn deciding_mcts_action(c: &mut criterion::Criterion) {
    let game = midgame();
    let config = MctsConfig {
        simulations: 10,
        ..MctsConfig::default()
    };
    let ref mut mcts = Mcts::seeded(config, 0).expect("config");
    c.bench_function("decide an MCTS attack", |b| {
        b.iter(|| mcts.decide(&game).expect("decision"))
    });
}

fn sampling_planner_plan(c: &mut criterion::Criterion) {
    let game = midgame();
    let planner = Planner::seeded(PlanConfig::default(), 0).expect("config");
    c.bench_function("sample one Planner plan", |b| {
        b.iter(|| planner.sample(&game, 0).expect("plan"))
    });
}
