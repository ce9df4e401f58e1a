// Dialogue selection — the one non-deterministic step in the pipeline.
//
// Each category has a fixed pool of pre-authored lines; selection is a
// uniform draw over the pool. The random source is injected so tests can
// seed it and verify pool membership without flakiness.

use rand::Rng;

use crate::models::Category;
use crate::vocab;

/// The dialogue pool backing a category.
///
/// `medium` doubles as the fallback arm: the aggregator's output is
/// exhaustive, so the fallback is unreachable in practice, but the mapping
/// stays total by construction.
pub fn pool_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Low => vocab::LOW_DIALOGUES,
        Category::High => vocab::HIGH_DIALOGUES,
        _ => vocab::MEDIUM_DIALOGUES,
    }
}

/// Draw one line uniformly at random from the category's pool.
pub fn choose<R: Rng + ?Sized>(category: Category, rng: &mut R) -> String {
    let pool = pool_for(category);
    // Pools are non-empty constants (asserted in vocab tests), so the
    // index is always in range.
    pool[rng.random_range(0..pool.len())].to_string()
}
