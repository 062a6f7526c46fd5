//! Text-to-score collaborators.
//!
//! The classifier never scores text itself. It is handed a [`Scorer`], which
//! can be the bundled [`LexiconScorer`] or any `Fn(&str) -> Score`.

mod heuristics;
mod lexicon;
mod lexicon_scorer;

pub use lexicon::{Lexicon, LexiconError};
pub use lexicon_scorer::LexiconScorer;

use crate::domain::Score;

/// Produces one compound polarity score per text unit.
///
/// Implementations are expected to return finite values in `[-1.0, 1.0]`.
pub trait Scorer {
    fn polarity(&self, text: &str) -> Score;

    /// Score a batch of inputs, returning one score per item in input order.
    fn polarity_batch(&self, texts: &[&str]) -> Vec<Score> {
        texts.iter().map(|text| self.polarity(text)).collect()
    }
}

impl<F> Scorer for F
where
    F: Fn(&str) -> Score,
{
    fn polarity(&self, text: &str) -> Score {
        self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_scorer_batch_keeps_order() {
        let scorer = |text: &str| text.len() as Score / 10.0;
        let scores = scorer.polarity_batch(&["a", "abc", "ab"]);
        assert_eq!(scores, vec![0.1, 0.3, 0.2]);
    }

    #[test]
    fn test_scorer_is_object_safe() {
        let boxed: Box<dyn Scorer> = Box::new(|_: &str| -0.25);
        assert_eq!(boxed.polarity("whatever"), -0.25);
        assert_eq!(boxed.polarity_batch(&["x", "y"]).len(), 2);
    }
}
