//!
//! Greedy two-level packing of rendered text into thread-sized chunks.
//!
//! Paragraphs are packed first; a paragraph that cannot fit on its own is
//! split on sentence boundaries. Splitting is deterministic and preserves
//! reading order, and every chunk stays within the limit except the one
//! documented case of a single sentence longer than the limit, which is
//! passed through as-is.

/// Hard per-tweet limit, counted in Unicode code points.
pub const TWITTER_MAX_CHARS: usize = 280;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split `text` into an ordered sequence of chunks of at most `limit`
/// code points each.
///
/// Text at or under the limit is returned as the sole chunk. Otherwise
/// paragraphs (blank-line separated) are greedily packed, joined with
/// `\n\n`; a paragraph longer than the limit falls back to sentence
/// splitting via [`split_long`].
pub fn split_thread(text: &str, limit: usize) -> Vec<String> {
    if char_len(text) <= limit {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for para in text.split("\n\n") {
        let para = para.trim();
        if para.is_empty() {
            continue;
        }

        if current.is_empty() {
            if char_len(para) > limit {
                chunks.extend(split_long(para, limit));
                continue;
            }
            current.push_str(para);
            continue;
        }

        if char_len(&current) + 2 + char_len(para) <= limit {
            current.push_str("\n\n");
            current.push_str(para);
        } else {
            chunks.push(std::mem::take(&mut current));
            if char_len(para) > limit {
                chunks.extend(split_long(para, limit));
            } else {
                current.push_str(para);
            }
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Sentence-split an oversized paragraph on `". "` boundaries, keeping the
/// separator attached to the preceding sentence.
///
/// A single sentence longer than the limit is emitted unchanged as one
/// oversized chunk; with no sentence boundaries at all the whole paragraph
/// comes back as a single chunk.
fn split_long(text: &str, limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in text.split_inclusive(". ") {
        if current.is_empty() {
            current.push_str(sentence);
            continue;
        }
        if char_len(&current) + char_len(sentence) <= limit {
            current.push_str(sentence);
        } else {
            chunks.push(current.trim().to_string());
            current.clear();
            current.push_str(sentence);
        }
    }

    if !current.is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}
