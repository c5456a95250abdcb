//! Formatting utilities shared by the console and TUI presenters

use crate::core::GuessOutcome;

/// Gallows drawings from empty scaffold to the full figure
const GALLOWS_FRAMES: [&str; 7] = [
    "  _______\n |/      |\n |\n |\n |\n |\n |______",
    "  _______\n |/      |\n |      O\n |\n |\n |\n |______",
    "  _______\n |/      |\n |      O\n |      |\n |\n |\n |______",
    "  _______\n |/      |\n |      O\n |     /|\n |\n |\n |______",
    "  _______\n |/      |\n |      O\n |     /|\\\n |\n |\n |______",
    "  _______\n |/      |\n |      O\n |     /|\\\n |     /\n |\n |______",
    "  _______\n |/      |\n |      O\n |     /|\\\n |     / \\\n |\n |______",
];

/// Pick the gallows drawing for a stage
///
/// Stages are scaled onto the seven frames (rounding up), so the first miss
/// always shows something and the last attempt always shows the full figure
/// whatever the budget.
#[must_use]
pub fn gallows(stage: u32, attempt_budget: u32) -> &'static str {
    let last = GALLOWS_FRAMES.len() - 1;
    if attempt_budget == 0 {
        return GALLOWS_FRAMES[last];
    }

    let stage = u64::from(stage.min(attempt_budget));
    let budget = u64::from(attempt_budget);
    let frame = (stage * last as u64).div_ceil(budget) as usize;
    GALLOWS_FRAMES[frame.min(last)]
}

/// Player-facing message for a guess outcome
#[must_use]
pub fn feedback_message(outcome: &GuessOutcome) -> String {
    match outcome {
        GuessOutcome::Hit(letter) => format!("Good job! The letter '{letter}' is in the word."),
        GuessOutcome::Miss(letter) => format!("The letter '{letter}' is not in the word."),
        GuessOutcome::AlreadyGuessed(letter) => {
            format!("You have already guessed the letter '{letter}'. Try again.")
        }
        GuessOutcome::InvalidFormat(_) => "Invalid input! Please enter a single letter.".to_string(),
    }
}

/// Letters separated by spaces, e.g. `"X Q"`
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
