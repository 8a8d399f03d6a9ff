//! Word frequency counting: tokenize a text file, count tokens, rank them.

mod counter;
mod ranker;
mod tokenizer;

pub use counter::{WordFrequencies, count_file, count_reader};
pub use ranker::rank;
pub use tokenizer::Tokenizer;
