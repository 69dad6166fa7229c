use rand::{
    distributions::{Alphanumeric, DistString},
    thread_rng,
};
use rocket::serde::{Deserialize, Serialize};

mod guard;

pub use guard::*;

/// Identifies a game session across requests.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", transparent)]
pub struct SessionKey {
    key: String,
}

impl SessionKey {
    /// A random alphanumeric key of `length` characters.
    pub fn generate(length: usize) -> Self {
        Self {
            key: Alphanumeric.sample_string(&mut thread_rng(), length),
        }
    }

    #[allow(dead_code)]
    pub fn inner(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl std::borrow::Borrow<str> for SessionKey {
    fn borrow(&self) -> &str {
        &self.key
    }
}
