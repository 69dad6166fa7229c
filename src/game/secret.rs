use std::str::FromStr;

use rand::{thread_rng, Rng};

use super::*;

/// The number the player has to guess: four pairwise distinct digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secret {
    digits: Digits,
}

impl Secret {
    /// Draws digits uniformly until four distinct ones are collected.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0; DIGIT_COUNT];
        let mut len = 0;
        while len < DIGIT_COUNT {
            let digit = rng.gen_range(0..10);
            if !digits[..len].contains(&digit) {
                digits[len] = digit;
                len += 1;
            }
        }
        Self { digits }
    }

    pub fn random() -> Self {
        Self::generate(&mut thread_rng())
    }

    pub fn digits(&self) -> &Digits {
        &self.digits
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }
}

impl FromStr for Secret {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_unique_digits(s).map(|digits| Self { digits })
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_digits(&self.digits, f)
    }
}
