//! Similarity math and the similarity → rank curves.

use crate::constants::{
    EXACT_MATCH_RANK, EXACT_SIMILARITY_THRESHOLD, LIST_SIMILARITY_CEILING, LIST_SIMILARITY_FLOOR,
    LIST_SIMILARITY_STEP, RANK_CURVE_STEEPNESS,
};

/// Cosine similarity of two vectors. Returns `0.0` for empty, mismatched, or zero vectors.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f64, 0.0f64, 0.0f64), |(dot, na, nb), (&av, &bv)| {
                let av = av as f64;
                let bv = bv as f64;
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Maps a cosine similarity onto the steep fallback pseudo-rank curve.
///
/// `floor(exp(17 * (1 - similarity)))`, with anything at or above 0.999 pinned to 1.
/// Steep on purpose: 0.8 lands at 29, 0.5 near 4,900, -1.0 near 5.8e14.
#[inline]
pub fn similarity_to_base_rank(similarity: f64) -> u64 {
    if similarity >= EXACT_SIMILARITY_THRESHOLD {
        return EXACT_MATCH_RANK;
    }

    let similarity = similarity.clamp(-1.0, 1.0);
    let rank = (RANK_CURVE_STEEPNESS * (1.0 - similarity)).exp().floor();
    (rank as u64).max(EXACT_MATCH_RANK)
}

/// Offsets a base rank past every list rank: `base + list_size + 1`.
#[inline]
pub fn fallback_rank(base_rank: u64, list_size: usize) -> u64 {
    base_rank
        .saturating_add(list_size as u64)
        .saturating_add(1)
}

/// Synthetic display similarity for list position `index`: `max(0.4, 0.99 - index * 0.001)`.
#[inline]
pub fn list_similarity(index: usize) -> f64 {
    (LIST_SIMILARITY_CEILING - index as f64 * LIST_SIMILARITY_STEP).max(LIST_SIMILARITY_FLOOR)
}
