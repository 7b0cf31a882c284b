//! Closed type sets and the case-selection key.
//!
//! A type set is written as a tuple of distinct types, `(T0, T1, .., Tn-1)`.
//! At the value level it becomes a nested sum of references,
//!
//! ```text
//! Coprod<&'a T0, Coprod<&'a T1, .. Coprod<&'a Tn-1, CNil>>>
//! ```
//!
//! where the position of the populated variant is the tag. The empty tail
//! [`CNil`] has no values, so a tag outside `0..n` cannot be built.
//!
//! Membership is resolved at compile time by [`Inject`]. The index witness
//! (`Here`, `There<Here>`, ..) is inferred by the compiler: a type that is not
//! a member has no witness and fails to compile, and a type listed twice has
//! two witnesses and is rejected as ambiguous.

use std::marker::PhantomData;

/// One level of a closed sum: the head `H`, or something further down `T`.
#[derive(Debug, Clone, Copy)]
pub enum Coprod<H, T> {
    /// The value is of the head type.
    Here(H),
    /// The value is in the tail.
    There(T),
}

/// The empty sum that terminates every [`Coprod`] chain.
#[derive(Debug, Clone, Copy)]
pub enum CNil {}

/// Index witness: the type is the head of the sum.
#[derive(Debug, Clone, Copy)]
pub struct Here;

/// Index witness: the type is in the tail, at position `I` of the tail.
#[derive(Debug, Clone, Copy)]
pub struct There<I>(PhantomData<I>);

/// Runtime view of a sum of references: which slot is held and where it points.
pub trait Tagged: Copy {
    /// Number of slots in the sum.
    const LEN: usize;

    /// Position of the populated slot, in `0..LEN`.
    fn tag(&self) -> usize;

    /// Address of the referent, without its type.
    fn addr(&self) -> *const ();
}

impl<'a, H: 'a, T: Tagged> Tagged for Coprod<&'a H, T> {
    const LEN: usize = 1 + T::LEN;

    fn tag(&self) -> usize {
        match self {
            Coprod::Here(_) => 0,
            Coprod::There(rest) => 1 + rest.tag(),
        }
    }

    fn addr(&self) -> *const () {
        match self {
            Coprod::Here(value) => (*value as *const H).cast(),
            Coprod::There(rest) => rest.addr(),
        }
    }
}

impl Tagged for CNil {
    const LEN: usize = 0;

    fn tag(&self) -> usize {
        match *self {}
    }

    fn addr(&self) -> *const () {
        match *self {}
    }
}

/// Case-selection key: places a `T` into the sum at the slot named by `I`.
pub trait Inject<T, I>: Sized {
    /// The tag a value of type `T` receives.
    const TAG: usize;

    /// Wrap `value` in the slot for `T`.
    fn inject(value: T) -> Self;

    /// Take the value back out if the slot for `T` is the populated one.
    fn project(self) -> Option<T>;
}

impl<H, Tail> Inject<H, Here> for Coprod<H, Tail> {
    const TAG: usize = 0;

    fn inject(value: H) -> Self {
        Coprod::Here(value)
    }

    fn project(self) -> Option<H> {
        match self {
            Coprod::Here(value) => Some(value),
            Coprod::There(_) => None,
        }
    }
}

impl<H, Tail, T, I> Inject<T, There<I>> for Coprod<H, Tail>
where
    Tail: Inject<T, I>,
{
    const TAG: usize = 1 + Tail::TAG;

    fn inject(value: T) -> Self {
        Coprod::There(Tail::inject(value))
    }

    fn project(self) -> Option<T> {
        match self {
            Coprod::Here(_) => None,
            Coprod::There(rest) => rest.project(),
        }
    }
}

/// An ordered, closed set of types that a [`VariantRef`](crate::VariantRef)
/// may refer to.
///
/// Implemented for tuples of one to twelve types. The empty tuple is not a
/// type set.
pub trait TypeSet {
    /// The sum of references to each member, borrowed for `'a`.
    type Refs<'a>: Tagged
    where
        Self: 'a;

    /// Number of member types.
    const LEN: usize;
}

macro_rules! coprod_of_refs {
    ($lt:lifetime;) => { CNil };
    ($lt:lifetime; $head:ident $(, $tail:ident)*) => {
        Coprod<&$lt $head, coprod_of_refs!($lt; $($tail),*)>
    };
}

macro_rules! impl_type_set {
    ($($ty:ident),+) => {
        impl<$($ty),+> TypeSet for ($($ty,)+) {
            type Refs<'a> = coprod_of_refs!('a; $($ty),+) where Self: 'a;

            const LEN: usize = [$(stringify!($ty)),+].len();
        }
    };
}

impl_type_set!(T0);
impl_type_set!(T0, T1);
impl_type_set!(T0, T1, T2);
impl_type_set!(T0, T1, T2, T3);
impl_type_set!(T0, T1, T2, T3, T4);
impl_type_set!(T0, T1, T2, T3, T4, T5);
impl_type_set!(T0, T1, T2, T3, T4, T5, T6);
impl_type_set!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_type_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_type_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_type_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_type_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);

#[cfg(test)]
mod tests {
    use super::*;

    struct A;
    struct B;
    struct C;

    type Abc<'a> = <(A, B, C) as TypeSet>::Refs<'a>;

    #[test]
    fn test_type_set_len() {
        assert_eq!(<(A,) as TypeSet>::LEN, 1);
        assert_eq!(<(A, B, C) as TypeSet>::LEN, 3);
        assert_eq!(<Abc<'static> as Tagged>::LEN, 3);
    }

    #[test]
    fn test_keys_follow_declaration_order() {
        assert_eq!(<Abc<'static> as Inject<&'static A, Here>>::TAG, 0);
        assert_eq!(<Abc<'static> as Inject<&'static B, There<Here>>>::TAG, 1);
        assert_eq!(<Abc<'static> as Inject<&'static C, There<There<Here>>>>::TAG, 2);
    }

    #[test]
    fn test_inject_sets_tag() {
        let (a, b, c) = (A, B, C);
        assert_eq!(<Abc<'_> as Inject<_, _>>::inject(&a).tag(), 0);
        assert_eq!(<Abc<'_> as Inject<_, _>>::inject(&b).tag(), 1);
        assert_eq!(<Abc<'_> as Inject<_, _>>::inject(&c).tag(), 2);
    }

    #[test]
    fn test_project_only_matching_slot() {
        let b = B;
        let sum: Abc<'_> = Inject::inject(&b);

        let as_b: Option<&B> = sum.project();
        let as_a: Option<&A> = sum.project();
        let as_c: Option<&C> = sum.project();

        assert!(as_b.is_some_and(|r| std::ptr::eq(r, &b)));
        assert!(as_a.is_none());
        assert!(as_c.is_none());
    }

    #[test]
    fn test_addr_points_at_referent() {
        let c = C;
        let sum: Abc<'_> = Inject::inject(&c);
        assert_eq!(sum.addr(), (&c as *const C).cast());
    }
}
