//! TF-IDF vectorization and cosine similarity over a small in-memory corpus.
//!
//! Weighting: raw term count × smoothed IDF, `idf(t) = ln((1 + n) / (1 + df(t))) + 1`,
//! where `n` is the number of texts in the corpus. Each row is L2-normalized.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use thiserror::Error;

use crate::ranking::tokenizer::tokenize;

/// Sparse row: vocabulary index → weight. Absent terms are zero.
pub type SparseVector = BTreeMap<usize, f64>;

#[derive(Debug, Error, PartialEq)]
pub enum TfidfError {
    #[error("empty vocabulary; the texts contain no comparable terms")]
    EmptyVocabulary,
}

/// Sorted, de-duplicated terms across every tokenized text. A term's
/// position is its vocabulary index.
fn build_vocabulary(tokenized: &[Vec<String>]) -> Vec<String> {
    tokenized
        .iter()
        .flatten()
        .map(String::as_str)
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// `ln((1 + n) / (1 + df)) + 1`
fn smoothed_idf(document_frequency: usize, corpus_size: usize) -> f64 {
    ((1.0 + corpus_size as f64) / (1.0 + document_frequency as f64)).ln() + 1.0
}

/// Builds a shared vocabulary over `corpus` and returns one normalized
/// TF-IDF row per text, in input order.
pub fn fit_transform<S: AsRef<str>>(corpus: &[S]) -> Result<Vec<SparseVector>, TfidfError> {
    let tokenized: Vec<Vec<String>> = corpus.iter().map(|text| tokenize(text.as_ref())).collect();

    let vocabulary = build_vocabulary(&tokenized);
    if vocabulary.is_empty() {
        return Err(TfidfError::EmptyVocabulary);
    }

    let counts: Vec<HashMap<usize, f64>> = {
        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        tokenized
            .iter()
            .map(|tokens| {
                let mut tf: HashMap<usize, f64> = HashMap::new();
                for token in tokens {
                    if let Some(&id) = index.get(token.as_str()) {
                        *tf.entry(id).or_insert(0.0) += 1.0;
                    }
                }
                tf
            })
            .collect()
    };

    let mut df = vec![0usize; vocabulary.len()];
    for row in &counts {
        for &id in row.keys() {
            df[id] += 1;
        }
    }

    let idf: Vec<f64> = df.iter().map(|&d| smoothed_idf(d, corpus.len())).collect();

    Ok(counts
        .into_iter()
        .map(|tf| {
            let mut row: SparseVector = tf
                .into_iter()
                .map(|(id, count)| (id, count * idf[id]))
                .collect();
            l2_normalize(&mut row);
            row
        })
        .collect())
}

fn norm(v: &SparseVector) -> f64 {
    v.values().map(|w| w * w).sum::<f64>().sqrt()
}

fn l2_normalize(v: &mut SparseVector) {
    let n = norm(v);
    if n > 0.0 {
        for w in v.values_mut() {
            *w /= n;
        }
    }
}

/// Cosine similarity of two sparse vectors. Zero vectors and vectors with no
/// shared terms give `+0.0`.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(id, w)| large.get(id).map(|other| w * other))
        .sum();

    // Summing an empty iterator yields -0.0; weights are never negative, so
    // any non-positive dot product is a plain zero.
    let denom = norm(a) * norm(b);
    if denom == 0.0 || dot <= 0.0 {
        0.0
    } else {
        dot / denom
    }
}
