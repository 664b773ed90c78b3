/// Shuffling and random selection.
use rand::RngExt;

/// Shuffle `items` in place (Fisher–Yates) and hand the same slice back.
pub fn shuffle_array<T>(items: &mut [T]) -> &mut [T] {
    shuffle_array_with(items, &mut rand::rng())
}

pub fn shuffle_array_with<'a, T, R: RngExt>(items: &'a mut [T], rng: &mut R) -> &'a mut [T] {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
    items
}

/// Pick one element uniformly from all `items`, flattened one level.
///
/// Every argument is itself iterable: pass `[a, b, c]` for plain values, `[vec![a, b], vec![c]]`
/// for groups, or mix both with [`Pick`](crate::types::Pick). Returns `None` when there is
/// nothing to pick from.
pub fn pick_random<I>(items: I) -> Option<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    pick_random_with(items, &mut rand::rng())
}

pub fn pick_random_with<I, R>(items: I, rng: &mut R) -> Option<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
    R: RngExt,
{
    let mut flat: Vec<_> = items.into_iter().flatten().collect();
    if flat.is_empty() {
        return None;
    }
    let index = rng.random_range(0..flat.len());
    Some(flat.swap_remove(index))
}
