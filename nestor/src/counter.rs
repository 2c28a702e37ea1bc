//! The loop counter abstraction.

/// A value that can drive one loop dimension.
///
/// [`successor`](Counter::successor) is the increment operation and is all the
/// sequential expander needs. [`steps_between`](Counter::steps_between) and
/// [`forward`](Counter::forward) exist so the parallel expander can bisect an
/// index block at its midpoint; they never produce the values handed to the
/// operation.
pub trait Counter: Copy + PartialOrd + Send + Sync {
    /// The next counter value.
    fn successor(self) -> Self;

    /// Number of successor steps from `self` to `end`, saturating to zero
    /// when `end` is not ahead of `self`.
    fn steps_between(self, end: Self) -> usize;

    /// `self` advanced by `n` successor steps.
    fn forward(self, n: usize) -> Self;
}

macro_rules! impl_counter {
    (unsigned: $($t:ty),* $(,)?) => {
        $(
            impl Counter for $t {
                #[inline(always)]
                fn successor(self) -> Self {
                    self + 1
                }

                #[inline(always)]
                fn steps_between(self, end: Self) -> usize {
                    if end > self { (end - self) as usize } else { 0 }
                }

                #[inline(always)]
                fn forward(self, n: usize) -> Self {
                    self + n as $t
                }
            }
        )*
    };
    (signed: $($t:ty),* $(,)?) => {
        $(
            impl Counter for $t {
                #[inline(always)]
                fn successor(self) -> Self {
                    self + 1
                }

                #[inline(always)]
                fn steps_between(self, end: Self) -> usize {
                    // Widen first: the span of a small signed type can
                    // exceed the type's own positive half.
                    if end > self { (end as i128 - self as i128) as usize } else { 0 }
                }

                #[inline(always)]
                fn forward(self, n: usize) -> Self {
                    (self as i128 + n as i128) as $t
                }
            }
        )*
    };
}

impl_counter!(unsigned: u8, u16, u32, u64, usize);
impl_counter!(signed: i8, i16, i32, i64, isize);
