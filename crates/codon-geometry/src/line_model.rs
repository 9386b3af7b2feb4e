// ABOUTME: Per-line coordinate model built from measured character widths
// ABOUTME: Flattens a row's styled-run tree into ordered pixel ranges

use codon_types::{CharacterRange, Row, RowNode, TokenRange};

use crate::measure::WidthCache;

/// Ordered pixel ranges for every character slot on the row.
///
/// Walks the row's text runs in document order, concatenating their UTF-16
/// code units; the structural nesting the highlighter produced is irrelevant
/// here. The result is recomputed on every call rather than cached: the walk
/// is O(row characters) and the width cache makes each character O(1)
/// amortized, which keeps hover latency bounded by row length, not document
/// length.
pub fn character_ranges(cache: &mut WidthCache, row: &Row) -> Vec<CharacterRange> {
    let mut ranges = Vec::new();

    let mut left = 0.0;
    for run in row.runs() {
        for code in run.encode_utf16() {
            let width = cache.width_of(code);
            ranges.push(CharacterRange::new(left, left + width));
            left += width;
        }
    }

    ranges
}

/// Character-index extent of the token at `character`.
///
/// A token is the innermost highlighting span containing the character; a
/// character sitting in bare text outside any span falls back to its text
/// leaf. Returns `None` when `character` is past the end of the row.
pub fn token_span_at(row: &Row, character: usize) -> Option<TokenRange> {
    let mut span_hit = None;
    let mut leaf_hit = None;
    walk(row.nodes(), character, 0, &mut span_hit, &mut leaf_hit);
    span_hit.or(leaf_hit)
}

/// Walks `nodes`, returning their total UTF-16 length starting at `base`.
///
/// The recursion unwinds inner-to-outer, so the innermost span containing the
/// character records its extent first; outer spans must not overwrite it.
fn walk(
    nodes: &[RowNode],
    character: usize,
    base: usize,
    span_hit: &mut Option<TokenRange>,
    leaf_hit: &mut Option<TokenRange>,
) -> usize {
    let mut offset = base;

    for node in nodes {
        match node {
            RowNode::Text(text) => {
                let start = offset;
                offset += text.encode_utf16().count();
                if character >= start && character < offset {
                    *leaf_hit = Some(TokenRange::new(start, offset));
                }
            }
            RowNode::Span(children) => {
                let start = offset;
                offset = start + walk(children, character, start, span_hit, leaf_hit);
                if span_hit.is_none() && character >= start && character < offset {
                    *span_hit = Some(TokenRange::new(start, offset));
                }
            }
        }
    }

    offset - base
}
