use rand::rngs::StdRng;
use rand::SeedableRng;

use octagon_stats::api::models::{Fighter, Tattoo};
use octagon_stats::quiz::engine::{
    build_fixed_rounds, build_random_round, build_rounds, Progress, QuizSession,
};
use octagon_stats::quiz::pool::{
    nickname_pool, random_quiz_pool, tattoo_pool, DISTRACTOR_COUNT, NICKNAME_QUESTION_COUNT,
    TATTOO_DISTRACTORS, TATTOO_QUESTION_COUNT,
};

fn fighter(name: &str, nickname: &str, category: &str) -> Fighter {
    let value = serde_json::json!({
        "name": name,
        "nickname": nickname,
        "category": category,
        "wins": "10",
        "losses": "2",
        "draws": "0",
    });
    serde_json::from_value(value).unwrap()
}

fn roster(size: usize) -> Vec<Fighter> {
    (0..size)
        .map(|i| {
            fighter(
                &format!("Fighter {i}"),
                &format!("Nickname {i}"),
                "Lightweight Division",
            )
        })
        .collect()
}

#[test]
fn nickname_quiz_runs_ten_rounds_end_to_end() {
    let fighters = roster(25);
    let mut rng = StdRng::seed_from_u64(99);

    let pool = nickname_pool(&fighters, &mut rng).unwrap();
    assert_eq!(pool.len(), NICKNAME_QUESTION_COUNT);

    let rounds = build_rounds(&pool, DISTRACTOR_COUNT, &mut rng);
    let mut session = QuizSession::new(rounds);

    let mut answered = 0;
    loop {
        let round = session.current_round().unwrap().clone();
        assert_eq!(round.options.len(), DISTRACTOR_COUNT + 1);
        assert!(round.options.contains(&round.item.correct_value));

        let result = session.submit(&round.item.correct_value).unwrap();
        assert!(result.is_correct);
        answered += 1;

        match session.advance() {
            Progress::Next => {}
            Progress::Complete(score) => {
                assert_eq!(answered, NICKNAME_QUESTION_COUNT);
                assert_eq!(score.correct, NICKNAME_QUESTION_COUNT);
                assert_eq!(score.total, NICKNAME_QUESTION_COUNT);
                break;
            }
            Progress::Pending => panic!("advance after submit cannot be pending"),
        }
    }
}

#[test]
fn womens_divisions_never_reach_the_nickname_pool() {
    let mut fighters = roster(12);
    fighters.push(fighter(
        "Carla Storm",
        "Hurricane",
        "Women's Strawweight Division",
    ));

    let mut rng = StdRng::seed_from_u64(5);
    let pool = nickname_pool(&fighters, &mut rng).unwrap();
    assert!(pool.iter().all(|item| item.prompt != "Carla Storm"));
}

#[test]
fn small_pools_still_produce_playable_sessions() {
    let fighters = roster(2);
    let mut rng = StdRng::seed_from_u64(3);

    let pool = nickname_pool(&fighters, &mut rng).unwrap();
    assert_eq!(pool.len(), 2);

    // Only one distinct alternative exists, so each round has 2 options.
    let rounds = build_rounds(&pool, DISTRACTOR_COUNT, &mut rng);
    for round in &rounds {
        assert_eq!(round.options.len(), 2);
        assert!(round.options.contains(&round.item.correct_value));
    }

    let mut session = QuizSession::new(rounds);
    session.submit("not it").unwrap();
    assert!(matches!(session.advance(), Progress::Next));
    let round = session.current_round().unwrap().clone();
    session.submit(&round.item.correct_value).unwrap();
    match session.advance() {
        Progress::Complete(score) => {
            assert_eq!(score.total, 2);
            assert_eq!(score.correct, 1);
        }
        _ => panic!("two-round session must complete after the second answer"),
    }
}

#[test]
fn tattoo_quiz_uses_the_fixed_distractor_table() {
    let tattoos: Vec<Tattoo> = (0..4)
        .map(|i| Tattoo {
            id: i,
            name: format!("Tattoo {i}"),
            kanji: format!("漢字{i}"),
            image_before: format!("before_{i}.png"),
            image_after: format!("after_{i}.png"),
        })
        .collect();

    let pool = tattoo_pool(&tattoos).unwrap();
    assert_eq!(pool.len(), TATTOO_QUESTION_COUNT);

    let mut rng = StdRng::seed_from_u64(11);
    let rounds = build_fixed_rounds(&pool, &TATTOO_DISTRACTORS, &mut rng);
    assert_eq!(rounds.len(), TATTOO_QUESTION_COUNT);

    for (idx, round) in rounds.iter().enumerate() {
        assert_eq!(round.options.len(), 4);
        assert!(round.options.contains(&round.item.correct_value));
        for wrong in TATTOO_DISTRACTORS[idx] {
            assert!(round.options.contains(&wrong.to_string()));
        }
    }
}

#[test]
fn endless_mode_keeps_drawing_valid_rounds_from_the_full_pool() {
    let mut fighters = roster(15);
    // A shared nickname must never make a round ambiguous.
    fighters.push(fighter("Copycat", "Nickname 0", "Heavyweight Division"));
    fighters.push(fighter(
        "Carla Storm",
        "Hurricane",
        "Women's Strawweight Division",
    ));

    let pool = random_quiz_pool(&fighters).unwrap();
    assert_eq!(pool.len(), 16);

    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..40 {
        let round = build_random_round(&pool, DISTRACTOR_COUNT, &mut rng).unwrap();
        assert_eq!(round.options.len(), DISTRACTOR_COUNT + 1);
        let correct = round
            .options
            .iter()
            .filter(|o| **o == round.item.correct_value)
            .count();
        assert_eq!(correct, 1);
        assert!(round.item.prompt != "Carla Storm");
        let mut unique = round.options.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), round.options.len());
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let fighters = roster(20);

    let build = || {
        let mut rng = StdRng::seed_from_u64(1234);
        let pool = nickname_pool(&fighters, &mut rng).unwrap();
        build_rounds(&pool, DISTRACTOR_COUNT, &mut rng)
    };

    let first = build();
    let second = build();
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.item.prompt, b.item.prompt);
        assert_eq!(a.options, b.options);
    }
}
