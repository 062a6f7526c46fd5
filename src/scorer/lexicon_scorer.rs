use super::Scorer;
use super::heuristics::{
    BUT_AFTER_WEIGHT, BUT_BEFORE_WEIGHT, CAPS_EMPHASIS, EXCLAMATION_INCREMENT, LOOKBACK,
    LOOKBACK_DECAY, MAX_EXCLAMATIONS, NEGATION_SCALAR, booster_scalar, is_negator, normalize,
};
use super::lexicon::{Lexicon, LexiconError};
use crate::domain::Score;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{trace, warn};

const WORD_PATTERN: &str = r"[\p{L}\p{N}][\p{L}\p{N}'\-]*";

static WORD_REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

#[derive(Debug, Clone)]
struct Token<'a> {
    raw: &'a str,
    lower: String,
}

impl Token<'_> {
    fn is_shouting(&self) -> bool {
        self.raw.chars().any(char::is_alphabetic)
            && !self.raw.chars().any(char::is_lowercase)
    }
}

/// Rule-based compound scorer over a valence [`Lexicon`].
///
/// Sums per-word valences adjusted for negation, intensifiers, ALL-CAPS
/// emphasis, a contrastive "but" and trailing exclamation marks, then squashes
/// the sum into `[-1.0, 1.0]`. Text without any lexicon word scores `0.0`.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Lexicon,
}

impl LexiconScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Scorer over the lexicon embedded in the binary.
    pub fn builtin() -> Result<Self, LexiconError> {
        Lexicon::builtin().map(Self::new)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        Lexicon::from_path(path).map(Self::new)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn tokenize(text: &str) -> Vec<Token<'_>> {
        let words: Vec<&str> = match WORD_REGEX.get_or_init(|| Regex::new(WORD_PATTERN)) {
            Ok(regex) => regex.find_iter(text).map(|m| m.as_str()).collect(),
            Err(e) => {
                warn!("Word pattern failed to compile, splitting on whitespace: {e}");
                text.split_whitespace()
                    .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
                    .filter(|w| !w.is_empty())
                    .collect()
            }
        };

        words
            .into_iter()
            .map(|raw| Token {
                raw,
                lower: raw.to_lowercase(),
            })
            .collect()
    }

    fn token_valence(&self, tokens: &[Token<'_>], index: usize, mixed_case: bool) -> f64 {
        let token = &tokens[index];
        if booster_scalar(&token.lower).is_some() {
            return 0.0;
        }
        let Some(mut valence) = self.lexicon.valence(&token.lower) else {
            return 0.0;
        };

        if mixed_case && token.is_shouting() {
            valence += CAPS_EMPHASIS.copysign(valence);
        }

        for distance in 1..=LOOKBACK.min(index) {
            let previous = &tokens[index - distance];
            if let Some(mut scalar) = booster_scalar(&previous.lower) {
                if mixed_case && previous.is_shouting() {
                    scalar += CAPS_EMPHASIS.copysign(scalar);
                }
                // Boosters push away from zero in whichever direction the word already leans.
                let direction = if valence < 0.0 { -1.0 } else { 1.0 };
                valence += scalar * direction * LOOKBACK_DECAY[distance - 1];
            }
            if is_negator(&previous.lower) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }

    fn raw_sum(&self, text: &str) -> f64 {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let shouting = tokens.iter().filter(|t| t.is_shouting()).count();
        let mixed_case = shouting > 0 && shouting < tokens.len();

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|index| self.token_valence(&tokens, index, mixed_case))
            .collect();

        if let Some(but) = tokens.iter().position(|t| t.lower == "but") {
            for (index, valence) in valences.iter_mut().enumerate() {
                if index < but {
                    *valence *= BUT_BEFORE_WEIGHT;
                } else if index > but {
                    *valence *= BUT_AFTER_WEIGHT;
                }
            }
        }

        let sum: f64 = valences.iter().sum();
        if sum == 0.0 {
            return 0.0;
        }

        let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
        let emphasis = exclamations as f64 * EXCLAMATION_INCREMENT;
        sum + emphasis.copysign(sum)
    }
}

impl Scorer for LexiconScorer {
    fn polarity(&self, text: &str) -> Score {
        let sum = self.raw_sum(text);
        let compound = normalize(sum);
        trace!(sum, compound, "Scored text");
        compound
    }
}
