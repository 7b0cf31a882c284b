//! The visitor protocol and case selection.
//!
//! A visitor is any type that names a result type through [`Visitor`] and
//! supplies one case-handler per argument shape through [`Visit`] (or
//! [`VisitWith`] when the handler also takes trailing extra arguments).
//!
//! ```
//! use variant_ref::{VariantRef, Visit, Visitor};
//!
//! struct Circle;
//! struct Square;
//!
//! struct Corners;
//!
//! impl Visitor for Corners {
//!     type Output = u32;
//! }
//!
//! impl Visit<&Circle> for Corners {
//!     fn visit(&mut self, _: &Circle) -> u32 {
//!         0
//!     }
//! }
//!
//! impl Visit<&Square> for Corners {
//!     fn visit(&mut self, _: &Square) -> u32 {
//!         4
//!     }
//! }
//!
//! let square = Square;
//! let shape = VariantRef::<(Circle, Square)>::new(&square);
//! assert_eq!(shape.visit(&mut Corners), 4);
//! ```
//!
//! For single dispatch the argument shape is `&T`. For multiple dispatch it
//! is a tuple of references in argument order, e.g. `(&A, &B)`; see
//! [`multi`](crate::multi).
//!
//! Every case of one visitor returns the same [`Visitor::Output`], so result
//! type consistency is checked when the visitor is written. A missing case
//! surfaces as an unsatisfied `Visit` bound at the dispatch call site.

use crate::registry::{CNil, Coprod};

/// Fixes the result type shared by every case-handler of a visitor.
pub trait Visitor {
    /// What each case-handler returns.
    type Output;
}

/// A case-handler for arguments of shape `Args`.
pub trait Visit<Args>: Visitor {
    /// Handle `args`.
    fn visit(&mut self, args: Args) -> Self::Output;
}

/// A case-handler for arguments of shape `Args` followed by an extra value.
///
/// Every [`Visit`] handler is also a `VisitWith<Args, ()>`, so visitors that
/// take no extras only implement [`Visit`]. Several extras are passed as a
/// tuple.
pub trait VisitWith<Args, X>: Visitor {
    /// Handle `args`, with `extra` forwarded unchanged from the call site.
    fn visit_with(&mut self, args: Args, extra: X) -> Self::Output;
}

impl<V, Args> VisitWith<Args, ()> for V
where
    V: Visit<Args> + ?Sized,
{
    fn visit_with(&mut self, args: Args, (): ()) -> Self::Output {
        self.visit(args)
    }
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    type Output = V::Output;
}

/// A one-shot case target, consumed by the branch that case selection picks.
///
/// Borrowed visitors (`&mut V`) are case targets for every shape they
/// [`VisitWith`]. The multi-dispatch adapter is the other implementor.
pub trait Case<Args, X>: Visitor {
    /// Run the selected case.
    fn call(self, args: Args, extra: X) -> Self::Output;
}

impl<'v, V, Args, X> Case<Args, X> for &'v mut V
where
    V: VisitWith<Args, X> + ?Sized,
{
    fn call(self, args: Args, extra: X) -> Self::Output {
        self.visit_with(args, extra)
    }
}

/// Case selection: route a sum of references to the case for its held slot.
///
/// Implemented by exhaustive matching over [`Coprod`]; the [`CNil`] arm is
/// empty because `CNil` has no values.
pub trait Dispatch<C: Visitor, X> {
    /// Invoke `case` with the held reference and `extra`.
    fn dispatch(self, case: C, extra: X) -> C::Output;
}

impl<H, T, C, X> Dispatch<C, X> for Coprod<H, T>
where
    C: Case<H, X>,
    T: Dispatch<C, X>,
{
    fn dispatch(self, case: C, extra: X) -> C::Output {
        match self {
            Coprod::Here(value) => case.call(value, extra),
            Coprod::There(rest) => rest.dispatch(case, extra),
        }
    }
}

impl<C: Visitor, X> Dispatch<C, X> for CNil {
    fn dispatch(self, _case: C, _extra: X) -> C::Output {
        match self {}
    }
}
