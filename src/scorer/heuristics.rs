// Word lists and scalars for the lexicon scorer's rule pass.

/// Empirically derived increment for intensifiers ("very good").
pub const BOOSTER_INCREMENT: f64 = 0.293;
/// Decrement for dampeners ("slightly good").
pub const DAMPENER_DECREMENT: f64 = -0.293;
/// Extra weight for an ALL-CAPS sentiment word in mixed-case text.
pub const CAPS_EMPHASIS: f64 = 0.733;
/// Valence multiplier applied when a negator precedes a sentiment word.
pub const NEGATION_SCALAR: f64 = -0.74;
/// Amplification per exclamation mark.
pub const EXCLAMATION_INCREMENT: f64 = 0.292;
pub const MAX_EXCLAMATIONS: usize = 4;
/// Normalization constant approximating the max expected raw sum.
pub const NORMALIZATION_ALPHA: f64 = 15.0;

/// How many preceding tokens are inspected for boosters and negators.
pub const LOOKBACK: usize = 3;
/// Booster influence fades with distance from the sentiment word.
pub const LOOKBACK_DECAY: [f64; LOOKBACK] = [1.0, 0.95, 0.9];

pub const BUT_BEFORE_WEIGHT: f64 = 0.5;
pub const BUT_AFTER_WEIGHT: f64 = 1.5;

const NEGATORS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neednt", "neither", "never", "no", "none",
    "nope", "nor", "not", "nothing", "nowhere", "oughtnt", "rarely", "seldom", "shant",
    "shouldnt", "uhuh", "wasnt", "werent", "without", "wont", "wouldnt", "despite",
];

const BOOSTERS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly", "deeply",
    "enormously", "entirely", "especially", "exceptionally", "extremely", "fabulously",
    "greatly", "highly", "hugely", "incredibly", "intensely", "majorly", "more", "most",
    "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
    "thoroughly", "totally", "tremendously", "truly", "unbelievably", "utterly", "very",
];

const DAMPENERS: &[&str] = &[
    "almost", "barely", "hardly", "less", "little", "marginally", "occasionally", "partly",
    "scarcely", "slightly", "somewhat",
];

/// True for negators, including any `n't` contraction.
pub fn is_negator(word: &str) -> bool {
    word.contains("n't") || NEGATORS.contains(&word)
}

/// Signed scalar for an intensifier or dampener, `None` for ordinary words.
pub fn booster_scalar(word: &str) -> Option<f64> {
    if BOOSTERS.contains(&word) {
        Some(BOOSTER_INCREMENT)
    } else if DAMPENERS.contains(&word) {
        Some(DAMPENER_DECREMENT)
    } else {
        None
    }
}

/// Maps an unbounded valence sum into `[-1.0, 1.0]`.
pub fn normalize(sum: f64) -> f64 {
    let normalized = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}
