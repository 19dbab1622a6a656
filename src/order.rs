use std::cmp::Ordering;

/// Total-order oracle over keys.
///
/// A single three-way comparison also decides equality: two keys are equal
/// when neither orders before the other. The relation must be a strict weak
/// ordering (irreflexive, asymmetric, transitive); the map's structure is
/// undefined if it is not. Implementations must be side-effect-free, they
/// are invoked while the map's lock is held.
pub trait Order<K> {
    fn cmp(&self, a: &K, b: &K) -> Ordering;
}

/// The natural ordering of keys that are already `Ord`.
#[derive(Clone, Copy, Default)]
pub struct Natural;

impl<K: Ord> Order<K> for Natural {
    #[inline]
    fn cmp(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Adapter turning a comparison closure into an [`Order`].
pub struct OrderFn<F>(pub F);

impl<K, F> Order<K> for OrderFn<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn cmp(&self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b)
    }
}
