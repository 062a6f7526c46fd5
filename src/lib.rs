#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::cast_precision_loss,      // Token counts fit comfortably in f64
    clippy::missing_errors_doc,       // Internal API
    clippy::missing_panics_doc,       // Internal API
    clippy::module_name_repetitions,  // e.g. TableError in table module
    clippy::must_use_candidate,       // Annotated selectively on critical APIs
    clippy::doc_markdown              // Internal API
)]

pub mod app;
pub mod classifier;
pub mod domain;
pub mod scorer;
pub mod table;

// Re-export main types for easy access
pub use app::{App, Config};
pub use classifier::{Summary, classify, classify_all, label, summarize};
pub use domain::{Label, Row, Score};
pub use scorer::{Lexicon, LexiconScorer, Scorer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
