mod abbreviations;
mod layout;
mod numbers;
mod pipeline;
mod stage;
mod tokenizer;

pub use abbreviations::{AbbreviationExpansion, PossessiveExpansion};
pub use layout::{CompoundSplit, DashStrip, LineJoin, Uppercase, WhitespaceCollapse};
pub use numbers::{number_to_words, NumberExpansion};
pub use pipeline::TranscriptPipeline;
pub use stage::TransformStage;
pub use tokenizer::PunctuationFilter;
