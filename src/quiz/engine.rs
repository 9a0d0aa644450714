use super::pool::QuizItem;
use rand::seq::SliceRandom;
use rand::Rng;

/// One question with its shuffled option set.
#[derive(Debug, Clone)]
pub struct QuizRound {
    pub item: QuizItem,
    pub options: Vec<String>,
}

/// What the player gets back after answering.
#[derive(Debug, Clone)]
pub struct Answered {
    pub is_correct: bool,
    pub correct_value: String,
}

/// Question label plus whether it was answered correctly.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub question: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    pub outcomes: Vec<RoundOutcome>,
}

#[derive(Debug)]
pub enum Progress {
    /// Moved on to the next round.
    Next,
    /// All rounds answered; the session is finished.
    Complete(QuizScore),
    /// The current round has not been answered yet.
    Pending,
}

/// Builds one round per pool item. Distractors are the answer values of the
/// other pool items, minus anything equal to the target's own answer, drawn
/// without replacement. When the pool holds fewer distinct alternatives
/// than asked for, the option set degrades to what exists rather than
/// erroring out.
pub fn build_rounds<R: Rng + ?Sized>(
    pool: &[QuizItem],
    distractor_count: usize,
    rng: &mut R,
) -> Vec<QuizRound> {
    (0..pool.len())
        .map(|index| QuizRound {
            item: pool[index].clone(),
            options: build_options(pool, index, distractor_count, rng),
        })
        .collect()
}

/// Draws one fresh question for the endless quiz mode: a random target
/// (with replacement across calls) plus random distractors from the rest
/// of the pool. Returns None on an empty pool.
pub fn build_random_round<R: Rng + ?Sized>(
    pool: &[QuizItem],
    distractor_count: usize,
    rng: &mut R,
) -> Option<QuizRound> {
    if pool.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..pool.len());
    Some(QuizRound {
        item: pool[index].clone(),
        options: build_options(pool, index, distractor_count, rng),
    })
}

fn build_options<R: Rng + ?Sized>(
    pool: &[QuizItem],
    index: usize,
    distractor_count: usize,
    rng: &mut R,
) -> Vec<String> {
    let target = &pool[index];
    let mut alternatives: Vec<&str> = pool
        .iter()
        .enumerate()
        .filter(|(i, item)| *i != index && item.correct_value != target.correct_value)
        .map(|(_, item)| item.correct_value.as_str())
        .collect();
    alternatives.sort_unstable();
    alternatives.dedup();
    alternatives.shuffle(rng);
    alternatives.truncate(distractor_count);

    let mut options: Vec<String> = Vec::with_capacity(alternatives.len() + 1);
    options.push(target.correct_value.clone());
    options.extend(alternatives.into_iter().map(String::from));
    options.shuffle(rng);
    options
}

/// Builds rounds from a hand-authored distractor table, one triple per
/// question index, as the tattoo quiz does. Only the option order is
/// random.
pub fn build_fixed_rounds<R: Rng + ?Sized>(
    pool: &[QuizItem],
    distractors: &[[&str; 3]],
    rng: &mut R,
) -> Vec<QuizRound> {
    pool.iter()
        .zip(distractors.iter())
        .map(|(item, wrong)| {
            let mut options: Vec<String> = Vec::with_capacity(4);
            options.push(item.correct_value.clone());
            options.extend(wrong.iter().map(|s| s.to_string()));
            options.shuffle(rng);

            QuizRound {
                item: item.clone(),
                options,
            }
        })
        .collect()
}

/// A linear run through a fixed set of rounds. One answer per round, no
/// backtracking; the session completes once the last round is answered.
pub struct QuizSession {
    rounds: Vec<QuizRound>,
    current: usize,
    outcomes: Vec<RoundOutcome>,
}

impl QuizSession {
    pub fn new(rounds: Vec<QuizRound>) -> Self {
        QuizSession {
            rounds,
            current: 0,
            outcomes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Zero-based index of the round currently on screen.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn current_round(&self) -> Option<&QuizRound> {
        self.rounds.get(self.current)
    }

    fn is_answered(&self) -> bool {
        self.outcomes.len() > self.current
    }

    /// Records the answer for the current round, or None when there is no
    /// round to answer. A round takes exactly one answer; submitting again
    /// returns the already-recorded outcome.
    pub fn submit(&mut self, selected: &str) -> Option<Answered> {
        let round = self.rounds.get(self.current)?;
        if !self.is_answered() {
            self.outcomes.push(RoundOutcome {
                question: round.item.prompt.clone(),
                is_correct: selected == round.item.correct_value,
            });
        }
        Some(Answered {
            is_correct: self.outcomes[self.current].is_correct,
            correct_value: round.item.correct_value.clone(),
        })
    }

    /// Moves to the next round once the current one is answered; finishes
    /// the session after the last one.
    pub fn advance(&mut self) -> Progress {
        if !self.is_answered() {
            return Progress::Pending;
        }
        if self.current + 1 < self.rounds.len() {
            self.current += 1;
            Progress::Next
        } else {
            Progress::Complete(self.score())
        }
    }

    fn score(&self) -> QuizScore {
        QuizScore {
            correct: self.outcomes.iter().filter(|o| o.is_correct).count(),
            total: self.outcomes.len(),
            outcomes: self.outcomes.clone(),
        }
    }
}
