//! Categorical ranking with deterministic tie-breaking.

use gauge_core::types::collections::FxHashMap;
use serde::Serialize;

/// One ranked category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u32,
}

/// Count categories and keep the top `top_n`.
///
/// Descending by count; ties keep first-seen order (stable sort over a
/// first-seen-ordered accumulator). Consumers wanting the highest bar
/// nearest a fixed edge reverse the slice themselves — that is a
/// presentation detail, not a ranking one.
pub fn rank_categories<I, S>(categories: I, top_n: usize) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut order: Vec<CategoryCount> = Vec::new();
    let mut slots: FxHashMap<String, usize> = FxHashMap::default();

    for category in categories {
        let category = category.as_ref();
        match slots.get(category) {
            Some(&slot) => order[slot].count += 1,
            None => {
                slots.insert(category.to_string(), order.len());
                order.push(CategoryCount {
                    category: category.to_string(),
                    count: 1,
                });
            }
        }
    }

    order.sort_by(|a, b| b.count.cmp(&a.count));
    order.truncate(top_n);
    order
}
