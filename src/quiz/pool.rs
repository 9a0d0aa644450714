use crate::api::models::{Fighter, Tattoo};
use crate::error::AppError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// The nickname quiz always runs 10 questions when the pool allows it.
pub const NICKNAME_QUESTION_COUNT: usize = 10;
/// Wrong options offered next to the correct one.
pub const DISTRACTOR_COUNT: usize = 3;
/// The tattoo quiz is a fixed 3-question set.
pub const TATTOO_QUESTION_COUNT: usize = 3;

/// Hand-authored wrong answers for the tattoo quiz, one triple per question.
pub const TATTOO_DISTRACTORS: [[&str; 3]; TATTOO_QUESTION_COUNT] = [
    ["貯蓄", "家族", "侍"],
    ["義理", "礼儀", "信念"],
    ["素丁不澪四地", "米国合衆国", "基督教信者"],
];

/// One addressable trivia subject: the question label, the answer string,
/// and an image to show alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizItem {
    pub prompt: String,
    pub correct_value: String,
    pub image_url: String,
}

fn quiz_item(fighter: &Fighter) -> QuizItem {
    QuizItem {
        prompt: fighter.name.clone(),
        correct_value: fighter.nickname.trim().to_string(),
        image_url: fighter.img_url.clone(),
    }
}

/// Fighters a nickname question can be asked about: non-blank nickname,
/// category not a women's division.
fn eligible_fighters(fighters: &[Fighter]) -> Vec<&Fighter> {
    fighters
        .iter()
        .filter(|f| {
            !f.nickname.trim().is_empty() && !f.category.to_lowercase().contains("women")
        })
        .collect()
}

/// Builds the nickname-quiz pool: fighters with a non-blank nickname whose
/// category is not a women's division, shuffled and cut to the question
/// count. Fighters repeating an already-drawn nickname are dropped so no
/// question can end up with two indistinguishable right answers.
pub fn nickname_pool<R: Rng + ?Sized>(
    fighters: &[Fighter],
    rng: &mut R,
) -> Result<Vec<QuizItem>, AppError> {
    let mut eligible = eligible_fighters(fighters);

    if eligible.is_empty() {
        return Err(AppError::NoEligibleFighters);
    }

    eligible.shuffle(rng);

    let mut seen = HashSet::new();
    let pool: Vec<QuizItem> = eligible
        .into_iter()
        .filter(|f| seen.insert(f.nickname.trim().to_string()))
        .take(NICKNAME_QUESTION_COUNT)
        .map(quiz_item)
        .collect();

    Ok(pool)
}

/// Builds the endless-quiz pool: every eligible fighter, uncapped, in
/// roster order. Duplicate nicknames can stay because the round builder
/// excludes distractors by value, so the right answer is unique per round.
pub fn random_quiz_pool(fighters: &[Fighter]) -> Result<Vec<QuizItem>, AppError> {
    let eligible = eligible_fighters(fighters);

    if eligible.is_empty() {
        return Err(AppError::NoEligibleFighters);
    }

    Ok(eligible.into_iter().map(quiz_item).collect())
}

/// Builds the tattoo-quiz pool from the first entries of the dataset, in
/// dataset order so each question lines up with its distractor triple.
pub fn tattoo_pool(tattoos: &[Tattoo]) -> Result<Vec<QuizItem>, AppError> {
    if tattoos.is_empty() {
        return Err(AppError::NoTattoos);
    }

    Ok(tattoos
        .iter()
        .take(TATTOO_QUESTION_COUNT)
        .map(|t| QuizItem {
            prompt: t.name.clone(),
            correct_value: t.kanji.clone(),
            image_url: t.image_before.clone(),
        })
        .collect())
}
