// Text collaborators — tokenization, part-of-speech tagging, stopword lists.

pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
pub mod traits;
