use std::str::FromStr;

use rocket::serde::{Deserialize, Serialize};

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guess {
    digits: Digits,
}

impl Guess {
    /// Scores the guess against the secret.
    /// A digit that is not in its place counts as a minus whenever the secret
    /// contains it anywhere, without excluding positions already matched exactly.
    pub fn evaluate(&self, secret: &Secret) -> Feedback {
        let mut feedback = Feedback::default();
        for (guessed, actual) in self.digits.iter().zip(secret.digits()) {
            if guessed == actual {
                feedback.plus += 1;
            } else if secret.contains(*guessed) {
                feedback.minus += 1;
            }
        }
        feedback
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_unique_digits(s).map(|digits| Self { digits })
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_digits(&self.digits, f)
    }
}

/// Digits in the right place (`plus`) and digits in the wrong place (`minus`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Feedback {
    pub plus: u8,
    pub minus: u8,
}

impl Feedback {
    pub fn is_win(&self) -> bool {
        self.plus as usize == DIGIT_COUNT
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.plus {
            write!(f, "+")?;
        }
        for _ in 0..self.minus {
            write!(f, "-")?;
        }
        Ok(())
    }
}
