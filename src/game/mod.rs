mod guess;
mod guess_error;
mod secret;
mod session;

pub use guess::{Feedback, Guess};
pub use guess_error::GuessError;
pub use secret::Secret;
pub use session::{GameSession, GuessOutcome};

/// Number of digits in both the secret and every guess.
pub const DIGIT_COUNT: usize = 4;

pub type Digits = [u8; DIGIT_COUNT];

/// Parses exactly `DIGIT_COUNT` pairwise distinct decimal digits.
fn parse_unique_digits(text: &str) -> Result<Digits, GuessError> {
    let invalid = || GuessError::InvalidFormat {
        input: text.to_owned(),
    };

    let mut digits = [0; DIGIT_COUNT];
    let mut len = 0;
    for c in text.chars() {
        let digit = c.to_digit(10).ok_or_else(invalid)? as u8;
        if len == DIGIT_COUNT || digits[..len].contains(&digit) {
            return Err(invalid());
        }
        digits[len] = digit;
        len += 1;
    }

    if len != DIGIT_COUNT {
        return Err(invalid());
    }
    Ok(digits)
}

fn format_digits(digits: &Digits, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for digit in digits {
        write!(f, "{}", digit)?;
    }
    Ok(())
}
