//! Shared utility functions

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Clamp `val` so it is not less than `min` and not more than `max`.
///
/// Works for any `PartialOrd` type. If `val` compares as neither below nor
/// above the bounds (NaN for floats) it is returned unchanged.
///
/// # Examples
///
/// ```
/// use gamekit::util::clamp;
///
/// assert_eq!(clamp(15, 0, 10), 10);
/// assert_eq!(clamp(-3.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp("m", "a", "z"), "m");
/// ```
pub fn clamp<T: PartialOrd>(val: T, min: T, max: T) -> T {
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

/// Linear interpolation from `from` to `to`, with `perc` clamped to `[0, 1]`.
pub fn lerp(from: f64, to: f64, perc: f64) -> f64 {
    let perc = clamp(perc, 0.0, 1.0);
    from + (to - from) * perc
}

/// Insert-only map access
pub trait InsertIfAbsent<K, V> {
    /// Insert `value` under `key` only if the key is missing.
    /// Returns true when the value was inserted; an existing entry is never
    /// overwritten.
    fn try_add(&mut self, key: K, value: V) -> bool;
}

impl<K, V, S> InsertIfAbsent<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn try_add(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }
}

/// Overwrite every field of `target` with the values from `source`.
///
/// `target` keeps its identity (same place in memory, same owner), so any
/// code holding `&mut` to it sees the new values. Types that should only
/// take some of the fields expose their own update method instead.
pub fn replace_with<T: Clone>(target: &mut T, source: &T) {
    target.clone_from(source);
}
