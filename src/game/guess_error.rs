use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("please enter a valid 4-digit number with unique digits")]
    InvalidFormat { input: String },
    #[error("the game is already over, start a new one")]
    GameOver,
}
