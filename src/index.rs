//! Dense integer handles for graph entities.
//!
//! Nodes are referred to by small `Copy` newtypes rather than by name or by
//! reference, so edges never alias the node registry.

/// A dense index into one of the graph's arenas.
pub trait EntityIndex: Copy + Eq + Default {
    /// Creates an index from its position in the arena.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit the backing integer type.
    fn new(index: usize) -> Self {
        match Self::try_new(index) {
            Some(entity) => entity,
            None => panic!("index {index} exceeds the range of the backing integer"),
        }
    }

    /// Creates an index from its position in the arena, or `None` if it does
    /// not fit the backing integer type.
    fn try_new(index: usize) -> Option<Self>;

    /// The position in the arena.
    fn index(self) -> usize;
}

/// Macro which provides the common implementation of an n-bit entity reference
///
/// Based on [`cranelift_entity`'s `entity_impl!`](https://docs.rs/cranelift-entity/0.89.2/cranelift_entity/macro.entity_impl.html)
#[macro_export]
macro_rules! entity_impl {
    ($entity:ident, $backing:ty) => {
        impl $crate::index::EntityIndex for $entity {
            #[inline(always)]
            fn try_new(ix: usize) -> Option<Self> {
                if ix <= (<$backing>::MAX as usize) || (<$backing>::BITS) > usize::BITS {
                    Some($entity(ix as $backing))
                } else {
                    None
                }
            }

            #[inline(always)]
            fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<$entity> for usize {
            #[inline(always)]
            fn from(entity: $entity) -> usize {
                $crate::index::EntityIndex::index(entity)
            }
        }

        impl ::std::fmt::Display for $entity {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod test {
    use super::EntityIndex;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Tiny(u8);
    entity_impl!(Tiny, u8);

    #[test]
    fn try_new_respects_backing_range() {
        assert_eq!(Tiny::try_new(0), Some(Tiny(0)));
        assert_eq!(Tiny::try_new(255), Some(Tiny(255)));
        assert_eq!(Tiny::try_new(256), None);
    }

    #[test]
    fn index_round_trips() {
        let tiny = Tiny::new(42);
        assert_eq!(tiny.index(), 42);
        assert_eq!(usize::from(tiny), 42);
        assert_eq!(tiny.to_string(), "42");
    }

    #[test]
    #[should_panic]
    fn new_panics_on_overflow() {
        let _ = Tiny::new(1000);
    }
}
