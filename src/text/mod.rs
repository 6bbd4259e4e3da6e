//! Text processing: tokenization, frequency counting and dump extraction

pub mod tokenizer;
pub mod wiki;

pub use tokenizer::{count_word_frequencies, tokenize, FrequencyMap};
pub use wiki::extract_text;
