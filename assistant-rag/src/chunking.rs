//! Document chunking.
//!
//! This module provides the [`Chunker`] trait and [`RecursiveChunker`],
//! which splits hierarchically by paragraphs, lines, sentences, and words,
//! falling back to raw characters only when nothing smaller fits.

use crate::document::{Chunk, Document};

/// Separator hierarchy, largest first. The final fallback is a raw
/// character split when no separator produces small enough pieces.
const SEPARATORS: [&str; 5] = ["\n\n", "\n", ". ", "! ", "? "];

/// A strategy for splitting documents into chunks.
///
/// Implementations produce [`Chunk`]s with text and offsets but no
/// embeddings. Embeddings are attached later by the index.
pub trait Chunker: Send + Sync {
    /// Split a document into chunks.
    ///
    /// Returns an empty `Vec` if the document has empty text — callers
    /// treat this as "nothing to index", not an error.
    fn chunk(&self, document: &Document) -> Vec<Chunk>;
}

/// Splits text hierarchically: paragraphs → lines → sentences → words → characters.
///
/// Each produced chunk is a contiguous slice of the source document, at most
/// `chunk_size` characters long. Every chunk after the first begins with the
/// trailing `chunk_overlap` characters of its predecessor, so no boundary is
/// cut with zero shared context. Splitting tries the largest separator first
/// and falls back to smaller ones only for pieces that still exceed the
/// budget.
///
/// Chunk IDs are generated as `{document_id}_{chunk_index}`. Each chunk
/// inherits the parent document's metadata plus a `chunk_index` field.
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl RecursiveChunker {
    /// Create a new `RecursiveChunker`.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` — maximum number of characters per chunk
    /// * `chunk_overlap` — number of characters repeated from the previous chunk
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self { chunk_size, chunk_overlap }
    }
}

/// Byte offset within `s` where its last `n` characters begin.
fn tail_start(s: &str, n: usize) -> usize {
    if n == 0 {
        return s.len();
    }
    let count = s.chars().count();
    if count <= n {
        return 0;
    }
    s.char_indices().nth(count - n).map(|(i, _)| i).unwrap_or(0)
}

/// Split `text` at `separator`, keeping the separator attached to the
/// preceding segment. Returns byte ranges relative to `text`.
fn split_keeping_separator(text: &str, separator: &str) -> Vec<(usize, usize)> {
    let mut result = Vec::new();
    let mut start = 0;

    while let Some(pos) = text[start..].find(separator) {
        let end = start + pos + separator.len();
        result.push((start, end));
        start = end;
    }

    if start < text.len() {
        result.push((start, text.len()));
    }

    result
}

/// Word-level split: break after each space, keeping the space attached
/// to the preceding word so concatenation reconstructs the text.
fn split_after_spaces(text: &str) -> Vec<(usize, usize)> {
    split_keeping_separator(text, " ")
}

/// Raw character split into windows of at most `budget` characters.
fn split_by_chars(text: &str, base: usize, budget: usize, out: &mut Vec<(usize, usize)>) {
    let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    boundaries.push(text.len());

    let mut cursor = 0;
    while cursor < boundaries.len() - 1 {
        let end = (cursor + budget).min(boundaries.len() - 1);
        out.push((base + boundaries[cursor], base + boundaries[end]));
        cursor = end;
    }
}

/// Recursively split `text` into contiguous pieces of at most `budget`
/// characters, preferring the largest separator available. Emitted ranges
/// are absolute (offset by `base`) and concatenate back to `text` exactly.
fn split_ranges(
    text: &str,
    base: usize,
    budget: usize,
    separators: &[&str],
    out: &mut Vec<(usize, usize)>,
) {
    if text.is_empty() {
        return;
    }
    if text.chars().count() <= budget {
        out.push((base, base + text.len()));
        return;
    }

    let (segments, remaining): (Vec<(usize, usize)>, &[&str]) = match separators.first() {
        Some(separator) => (split_keeping_separator(text, separator), &separators[1..]),
        None => {
            // One level below sentences: words, then raw characters.
            let words = split_after_spaces(text);
            if words.len() > 1 {
                (words, &[])
            } else {
                split_by_chars(text, base, budget, out);
                return;
            }
        }
    };

    // Greedily merge adjacent segments while they fit the budget; any
    // merged piece that still exceeds it recurses one separator level down.
    let flush = |range: (usize, usize), out: &mut Vec<(usize, usize)>| {
        let piece = &text[range.0..range.1];
        if piece.chars().count() > budget {
            split_ranges(piece, base + range.0, budget, remaining, out);
        } else {
            out.push((base + range.0, base + range.1));
        }
    };

    let mut current: Option<(usize, usize)> = None;
    let mut current_chars = 0;

    for (seg_start, seg_end) in segments {
        let seg_chars = text[seg_start..seg_end].chars().count();
        match current {
            None => {
                current = Some((seg_start, seg_end));
                current_chars = seg_chars;
            }
            Some((cur_start, _)) if current_chars + seg_chars <= budget => {
                current = Some((cur_start, seg_end));
                current_chars += seg_chars;
            }
            Some(range) => {
                flush(range, out);
                current = Some((seg_start, seg_end));
                current_chars = seg_chars;
            }
        }
    }

    if let Some(range) = current {
        flush(range, out);
    }
}

impl Chunker for RecursiveChunker {
    fn chunk(&self, document: &Document) -> Vec<Chunk> {
        let text = &document.text;
        if text.is_empty() {
            return Vec::new();
        }

        // Pieces are budgeted to chunk_size - chunk_overlap so that adding
        // the overlap prefix never pushes a chunk past chunk_size.
        let budget = self.chunk_size.saturating_sub(self.chunk_overlap).max(1);
        let mut ranges = Vec::new();
        split_ranges(text, 0, budget, &SEPARATORS, &mut ranges);

        let mut chunks = Vec::with_capacity(ranges.len());
        let mut prev_start = 0;

        for (i, &(piece_start, piece_end)) in ranges.iter().enumerate() {
            // The previous chunk is the contiguous slice prev_start..piece_start,
            // so its trailing overlap characters are also contiguous source text.
            let start = if i == 0 {
                piece_start
            } else {
                prev_start + tail_start(&text[prev_start..piece_start], self.chunk_overlap)
            };

            let mut metadata = document.metadata.clone();
            metadata.insert("chunk_index".to_string(), i.to_string());

            chunks.push(Chunk {
                id: format!("{}_{i}", document.id),
                text: text[start..piece_end].to_string(),
                start,
                end: piece_end,
                embedding: Vec::new(),
                metadata,
                document_id: document.id.clone(),
            });

            prev_start = start;
        }

        chunks
    }
}
