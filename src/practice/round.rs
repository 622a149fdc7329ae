use super::Outcome;

/// A run through a shuffled set of challenges with a running score.
#[derive(Debug, Clone, PartialEq)]
pub struct Round<T> {
    items: Vec<T>,
    index: usize,
    score: u32,
    points: u32,
    outcome: Option<Outcome>,
    scored_current: bool,
}

impl<T> Round<T> {
    pub fn new(items: Vec<T>, points: u32) -> Self {
        Self {
            items,
            index: 0,
            score: 0,
            points,
            outcome: None,
            scored_current: false,
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.items.len()
    }

    /// Records a verdict for the current challenge. Points are awarded at
    /// most once per challenge.
    pub fn submit(&mut self, outcome: Outcome) {
        if outcome.is_correct() && !self.scored_current {
            self.score += self.points;
            self.scored_current = true;
        }
        self.outcome = Some(outcome);
    }

    /// Hides the last verdict, e.g. when the student edits the answer.
    pub fn clear_outcome(&mut self) {
        self.outcome = None;
    }

    /// Moves to the next challenge. Returns `false` when the round is over.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        self.outcome = None;
        self.scored_current = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::BalanceReport;

    #[test]
    fn scores_once_per_challenge() {
        let mut round = Round::new(vec!["a", "b"], 10);
        round.submit(Outcome::Correct);
        round.submit(Outcome::Correct);
        assert_eq!(round.score(), 10);
        assert!(round.advance());
        round.submit(Outcome::Incorrect(BalanceReport::default()));
        assert_eq!(round.score(), 10);
        round.submit(Outcome::Correct);
        assert_eq!(round.score(), 20);
        assert!(!round.advance());
        assert_eq!(round.current(), Some(&"b"));
    }

    #[test]
    fn advance_clears_outcome() {
        let mut round = Round::new(vec![1, 2, 3], 10);
        round.submit(Outcome::NotSimplest);
        assert_eq!(round.outcome(), Some(&Outcome::NotSimplest));
        round.advance();
        assert_eq!(round.outcome(), None);
        assert_eq!(round.index(), 1);
    }

    #[test]
    fn empty_round() {
        let mut round: Round<u8> = Round::new(Vec::new(), 10);
        assert!(round.is_empty());
        assert!(round.current().is_none());
        assert!(!round.advance());
    }
}
