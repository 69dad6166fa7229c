/// Unordered collection of results, ranked on demand.
/// The smallest item is considered the best one.
#[derive(Debug)]
pub struct Leaderboard<T: LeaderboardItem> {
    collection: Vec<T>,
}

impl<T: LeaderboardItem> Leaderboard<T> {
    pub fn new(collection: Vec<T>) -> Self {
        Self { collection }
    }

    pub fn add(&mut self, item: T) {
        self.collection.push(item);
    }

    pub fn best(&self) -> Option<&T> {
        self.collection.iter().min()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }
}

impl<T: LeaderboardItem> Default for Leaderboard<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

pub trait LeaderboardItem: Ord {}

impl<T: Ord> LeaderboardItem for T {}
