//! Multiple dispatch over several tagged references at once.
//!
//! A multi-visitor handles tuples of references, one element per
//! participating [`VariantRef`](crate::VariantRef), in argument order:
//!
//! ```
//! use variant_ref::{dispatch2, VariantRef, Visit, Visitor};
//!
//! struct Cat;
//! struct Dog;
//! type PetRef<'a> = VariantRef<'a, (Cat, Dog)>;
//!
//! struct Chases;
//!
//! impl Visitor for Chases {
//!     type Output = bool;
//! }
//!
//! impl Visit<(&Dog, &Cat)> for Chases {
//!     fn visit(&mut self, _: (&Dog, &Cat)) -> bool {
//!         true
//!     }
//! }
//!
//! impl Visit<(&Cat, &Dog)> for Chases {
//!     fn visit(&mut self, _: (&Cat, &Dog)) -> bool {
//!         false
//!     }
//! }
//!
//! impl Visit<(&Cat, &Cat)> for Chases {
//!     fn visit(&mut self, _: (&Cat, &Cat)) -> bool {
//!         false
//!     }
//! }
//!
//! impl Visit<(&Dog, &Dog)> for Chases {
//!     fn visit(&mut self, _: (&Dog, &Dog)) -> bool {
//!         false
//!     }
//! }
//!
//! let (cat, dog) = (Cat, Dog);
//! assert!(dispatch2(&mut Chases, PetRef::new(&dog), PetRef::new(&cat)));
//! assert!(!dispatch2(&mut Chases, PetRef::new(&cat), PetRef::new(&dog)));
//! ```
//!
//! # Peeling
//!
//! A K-ary dispatch is reduced to K nested single dispatches. The first
//! reference dispatches into a [`Bound`] adapter that carries the visitor, the
//! values resolved so far and the references still to resolve. Its case for
//! a resolved value appends that value to the bound tuple and dispatches the
//! next reference into a fresh `Bound`. Once no references remain, the visitor
//! runs with the complete tuple and the extra value.
//!
//! The arity is part of the reference tuple's type. [`apply_multi_dispatch`]
//! additionally takes it as a const parameter and rejects a mismatch when the
//! call is compiled.

use crate::visitor::{Case, Dispatch, VisitWith, Visitor};


/// A multi-visitor with its leading arguments already resolved.
///
/// `B` is the tuple of resolved values, `R` the tuple of references still to
/// be dispatched. Only built inside a multi-dispatch call.
pub struct Bound<'v, V: ?Sized, B, R> {
    visitor: &'v mut V,
    bound: B,
    rest: R,
}

impl<'v, V: Visitor + ?Sized, B, R> Visitor for Bound<'v, V, B, R> {
    type Output = V::Output;
}

impl<'v, V, B, R, T, X> Case<T, X> for Bound<'v, V, B, R>
where
    V: Visitor + ?Sized,
    B: Append<T>,
    R: MultiDispatch<'v, V, B::Output, X>,
{
    fn call(self, value: T, extra: X) -> V::Output {
        self.rest
            .multi_dispatch(self.visitor, self.bound.append(value), extra)
    }
}

/// Tuples that can grow by one element at the end.
pub trait Append<T> {
    /// The tuple with `T` added.
    type Output;

    /// Add `value` as the last element.
    fn append(self, value: T) -> Self::Output;
}

impl<T> Append<T> for () {
    type Output = (T,);

    fn append(self, value: T) -> (T,) {
        (value,)
    }
}

macro_rules! impl_append {
    ($($a:ident),+) => {
        impl<$($a,)+ T> Append<T> for ($($a,)+) {
            type Output = ($($a,)+ T);

            #[allow(non_snake_case)]
            fn append(self, value: T) -> Self::Output {
                let ($($a,)+) = self;
                ($($a,)+ value)
            }
        }
    };
}

impl_append!(A0);
impl_append!(A0, A1);
impl_append!(A0, A1, A2);
impl_append!(A0, A1, A2, A3);
impl_append!(A0, A1, A2, A3, A4);
impl_append!(A0, A1, A2, A3, A4, A5);
impl_append!(A0, A1, A2, A3, A4, A5, A6);

/// Dispatch a tuple of remaining references, given the values `B` bound so far.
///
/// The empty tuple is the end of the recursion: it calls the visitor with the
/// full bound tuple. A non-empty tuple dispatches its head into a [`Bound`]
/// over its tail.
pub trait MultiDispatch<'v, V: Visitor + ?Sized + 'v, B, X> {
    /// Resolve the remaining references and call the visitor.
    fn multi_dispatch(self, visitor: &'v mut V, bound: B, extra: X) -> V::Output;
}

impl<'v, V, B, X> MultiDispatch<'v, V, B, X> for ()
where
    V: VisitWith<B, X> + ?Sized + 'v,
{
    fn multi_dispatch(self, visitor: &'v mut V, bound: B, extra: X) -> V::Output {
        visitor.visit_with(bound, extra)
    }
}

macro_rules! impl_multi_dispatch {
    ($head:ident $(, $tail:ident)*) => {
        impl<'v, V, B, X, $head, $($tail,)*> MultiDispatch<'v, V, B, X> for ($head, $($tail,)*)
        where
            V: Visitor + ?Sized + 'v,
            $head: Dispatch<Bound<'v, V, B, ($($tail,)*)>, X>,
        {
            #[allow(non_snake_case)]
            fn multi_dispatch(self, visitor: &'v mut V, bound: B, extra: X) -> V::Output {
                let ($head, $($tail,)*) = self;
                let adapter = Bound {
                    visitor,
                    bound,
                    rest: ($($tail,)*),
                };
                $head.dispatch(adapter, extra)
            }
        }
    };
}

impl_multi_dispatch!(R0);
impl_multi_dispatch!(R0, R1);
impl_multi_dispatch!(R0, R1, R2);
impl_multi_dispatch!(R0, R1, R2, R3);
impl_multi_dispatch!(R0, R1, R2, R3, R4);
impl_multi_dispatch!(R0, R1, R2, R3, R4, R5);
impl_multi_dispatch!(R0, R1, R2, R3, R4, R5, R6);
impl_multi_dispatch!(R0, R1, R2, R3, R4, R5, R6, R7);

/// A tuple of one to eight references that can be dispatched together.
///
/// A single reference is dispatched directly, so its visitor sees `&T`.
/// Two or more go through [`MultiDispatch`] and the visitor sees a tuple.
pub trait RefPack<'v, V: Visitor + ?Sized + 'v, X> {
    /// Number of references in the pack.
    const ARITY: usize;

    /// Dispatch every reference and call the visitor once.
    fn apply(self, visitor: &'v mut V, extra: X) -> V::Output;
}

impl<'v, V, X, R0> RefPack<'v, V, X> for (R0,)
where
    V: Visitor + ?Sized + 'v,
    R0: Dispatch<&'v mut V, X>,
{
    const ARITY: usize = 1;

    fn apply(self, visitor: &'v mut V, extra: X) -> V::Output {
        self.0.dispatch(visitor, extra)
    }
}

macro_rules! impl_ref_pack {
    ($($r:ident),+) => {
        impl<'v, V, X, $($r),+> RefPack<'v, V, X> for ($($r,)+)
        where
            V: Visitor + ?Sized + 'v,
            Self: MultiDispatch<'v, V, (), X>,
        {
            const ARITY: usize = [$(stringify!($r)),+].len();

            fn apply(self, visitor: &'v mut V, extra: X) -> V::Output {
                self.multi_dispatch(visitor, (), extra)
            }
        }
    };
}

impl_ref_pack!(R0, R1);
impl_ref_pack!(R0, R1, R2);
impl_ref_pack!(R0, R1, R2, R3);
impl_ref_pack!(R0, R1, R2, R3, R4);
impl_ref_pack!(R0, R1, R2, R3, R4, R5);
impl_ref_pack!(R0, R1, R2, R3, R4, R5, R6);
impl_ref_pack!(R0, R1, R2, R3, R4, R5, R6, R7);

/// Dispatch `K` references together and call the matching case of `visitor`.
///
/// `refs` is a tuple of exactly `K` references; any other length is a
/// compile-time error. `extra` is passed after the resolved values.
///
/// ```
/// use variant_ref::{apply_multi_dispatch, VariantRef, VisitWith, Visitor};
///
/// struct On;
/// struct Off;
/// type SwitchRef<'a> = VariantRef<'a, (On, Off)>;
///
/// struct Count;
///
/// impl Visitor for Count {
///     type Output = u32;
/// }
///
/// impl<A, B> VisitWith<(&A, &B), u32> for Count {
///     fn visit_with(&mut self, _: (&A, &B), base: u32) -> u32 {
///         base + 2
///     }
/// }
///
/// let (on, off) = (On, Off);
/// let total = apply_multi_dispatch::<2, _, _, _>(
///     &mut Count,
///     (SwitchRef::new(&on), SwitchRef::new(&off)),
///     40,
/// );
/// assert_eq!(total, 42);
/// ```
///
/// Stating an arity that differs from the number of references is rejected:
///
/// ```compile_fail
/// use variant_ref::{apply_multi_dispatch, VariantRef, Visit, Visitor};
///
/// struct On;
/// type SwitchRef<'a> = VariantRef<'a, (On,)>;
///
/// struct Both;
///
/// impl Visitor for Both {
///     type Output = ();
/// }
///
/// impl<A, B> Visit<(&A, &B)> for Both {
///     fn visit(&mut self, _: (&A, &B)) {}
/// }
///
/// let on = On;
/// apply_multi_dispatch::<3, _, _, _>(&mut Both, (SwitchRef::new(&on), SwitchRef::new(&on)), ());
/// ```
pub fn apply_multi_dispatch<'v, const K: usize, V, R, X>(
    visitor: &'v mut V,
    refs: R,
    extra: X,
) -> V::Output
where
    V: Visitor + ?Sized,
    R: RefPack<'v, V, X>,
{
    const {
        assert!(
            R::ARITY == K,
            "multi-dispatch arity does not match the number of references"
        )
    };
    refs.apply(visitor, extra)
}

/// Two-reference dispatch with no extra value.
pub fn dispatch2<'v, V, R0, R1>(visitor: &'v mut V, r0: R0, r1: R1) -> V::Output
where
    V: Visitor + ?Sized,
    (R0, R1): RefPack<'v, V, ()>,
{
    (r0, r1).apply(visitor, ())
}

/// Three-reference dispatch with no extra value.
pub fn dispatch3<'v, V, R0, R1, R2>(visitor: &'v mut V, r0: R0, r1: R1, r2: R2) -> V::Output
where
    V: Visitor + ?Sized,
    (R0, R1, R2): RefPack<'v, V, ()>,
{
    (r0, r1, r2).apply(visitor, ())
}
