// Similarity ranking: tokenize → TF-IDF → cosine → stable sort.
// Everything here is request-scoped; no state survives between rankings.

pub mod handlers;
pub mod pipeline;
pub mod scorer;
pub mod tfidf;
pub mod tokenizer;
