//! Single-entry caches keyed by the inputs of a derived computation.
//!
//! Each resolver layer keeps one [`Memo`]: the value is recomputed only when
//! the inputs differ from the previous call. Inputs compare by value, or by
//! allocation through [`ByPtr`] when the input is itself a cached `Rc`.

use std::fmt;
use std::rc::Rc;

use crate::theme::{same_theme, Theme};

/// Cached result of the last computation plus the inputs it was made from.
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
    computations: usize,
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            slot: None,
            computations: 0,
        }
    }

    /// Return the cached value when `inputs` match the previous call,
    /// otherwise run `compute` and cache its result.
    pub fn get(&mut self, inputs: K, compute: impl FnOnce(&K) -> V) -> V {
        if let Some((cached, value)) = &self.slot {
            if *cached == inputs {
                return value.clone();
            }
        }
        let value = compute(&inputs);
        self.computations += 1;
        self.slot = Some((inputs, value.clone()));
        value
    }

    /// How many times `compute` has run.
    pub fn computations(&self) -> usize {
        self.computations
    }
}

impl<K: PartialEq, V: Clone> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Memo<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("cached", &self.slot.is_some())
            .field("computations", &self.computations)
            .finish()
    }
}

/// An `Rc` compared by allocation instead of by value.
pub struct ByPtr<T>(pub Rc<T>);

impl<T> PartialEq for ByPtr<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A theme handle compared by allocation, falling back to value equality.
pub struct ThemeKey(pub Rc<Theme>);

impl PartialEq for ThemeKey {
    fn eq(&self, other: &Self) -> bool {
        same_theme(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn computes_once_for_equal_inputs() {
        let mut memo: Memo<(i32, i32), i32> = Memo::new();
        let runs = Cell::new(0);
        let add = |k: &(i32, i32)| {
            runs.set(runs.get() + 1);
            k.0 + k.1
        };
        assert_eq!(memo.get((1, 2), add), 3);
        assert_eq!(memo.get((1, 2), add), 3);
        assert_eq!(runs.get(), 1);
        assert_eq!(memo.computations(), 1);
    }

    #[test]
    fn recomputes_on_change_and_back() {
        let mut memo: Memo<&str, String> = Memo::new();
        memo.get("a", |k| k.to_uppercase());
        memo.get("b", |k| k.to_uppercase());
        assert_eq!(memo.get("a", |k| k.to_uppercase()), "A");
        assert_eq!(memo.computations(), 3);
    }

    #[test]
    fn by_ptr_ignores_equal_values() {
        let a = Rc::new(5);
        let b = Rc::new(5);
        assert!(ByPtr(a.clone()) == ByPtr(a.clone()));
        assert!(ByPtr(a) != ByPtr(b));
    }

    #[test]
    fn theme_key_matches_equal_themes() {
        let a = Theme::new().shared();
        let b = Theme::new().shared();
        assert!(ThemeKey(a.clone()) == ThemeKey(b));
        assert!(ThemeKey(a) != ThemeKey(Theme::new().with_brand("#abc").shared()));
    }
}
