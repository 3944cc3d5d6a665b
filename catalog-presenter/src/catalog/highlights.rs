//! Highlights - producer-recommended dishes shown above the sections

use shared::models::Dish;

use super::ranker::sort_dishes;

/// Split dishes into the highlights strip and the rest
///
/// Every `is_top` dish is withheld from the rest, even those beyond
/// `limit`: the cap trims the strip, it does not send dishes back to
/// the sections.
pub fn partition_highlights<'a, I>(dishes: I, limit: usize) -> (Vec<&'a Dish>, Vec<&'a Dish>)
where
    I: IntoIterator<Item = &'a Dish>,
{
    let (mut highlights, rest): (Vec<&Dish>, Vec<&Dish>) =
        dishes.into_iter().partition(|dish| dish.is_top);

    sort_dishes(&mut highlights);
    highlights.truncate(limit);

    (highlights, rest)
}

/// Alphabetically first `limit` recommended dishes
pub fn select_highlights<'a, I>(dishes: I, limit: usize) -> Vec<&'a Dish>
where
    I: IntoIterator<Item = &'a Dish>,
{
    partition_highlights(dishes, limit).0
}
