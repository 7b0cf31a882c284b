//! Non-owning references over a closed set of types, with single and
//! multiple dispatch.
//!
//! A [`VariantRef<'a, (T0, .., Tn-1)>`](VariantRef) borrows one value whose
//! type is one of `T0..Tn-1` and remembers which one. Behavior is selected by
//! the held type through a visitor: a value implementing [`Visitor`] and one
//! [`Visit`] case per member. The multi-dispatch layer in [`multi`] extends
//! this to several references at once, selecting the case by the tuple of
//! held types in argument order.
//!
//! ```
//! use variant_ref::{dispatch2, VariantRef, Visit, Visitor};
//!
//! struct Rock;
//! struct Paper;
//!
//! type HandRef<'a> = VariantRef<'a, (Rock, Paper)>;
//!
//! struct Describe;
//!
//! impl Visitor for Describe {
//!     type Output = &'static str;
//! }
//!
//! impl Visit<&Rock> for Describe {
//!     fn visit(&mut self, _: &Rock) -> &'static str {
//!         "solid"
//!     }
//! }
//!
//! impl Visit<&Paper> for Describe {
//!     fn visit(&mut self, _: &Paper) -> &'static str {
//!         "elusive"
//!     }
//! }
//!
//! struct Covers;
//!
//! impl Visitor for Covers {
//!     type Output = bool;
//! }
//!
//! impl<A, B> Visit<(&A, &B)> for Covers {
//!     fn visit(&mut self, _: (&A, &B)) -> bool {
//!         false
//!     }
//! }
//!
//! let (rock, paper) = (Rock, Paper);
//! let hand = HandRef::new(&paper);
//! assert_eq!(hand.visit(&mut Describe), "elusive");
//! assert!(!dispatch2(&mut Covers, hand, HandRef::new(&rock)));
//! ```
//!
//! # Module Structure
//!
//! - [`registry`] - Type sets and the case-selection key
//! - [`reference`] - The tagged reference itself
//! - [`visitor`] - Visitor traits and case selection
//! - [`multi`] - Multi-reference dispatch by recursive peeling
//!
//! # Compile-time checks
//!
//! Everything that can go wrong is rejected when the program is compiled:
//! referring to a value whose type is not in the set, a visitor missing the
//! case for a reachable type or type tuple, an arity that does not match the
//! number of references, and handlers that disagree on the result type.
//! A dispatch that compiles always runs exactly one case.
//!
//! Each check has a `compile_fail` example: see [`VariantRef`],
//! [`VariantRef::visit`] and [`apply_multi_dispatch`].

pub mod multi;
pub mod reference;
pub mod registry;
pub mod visitor;

pub use multi::{apply_multi_dispatch, dispatch2, dispatch3};
pub use reference::VariantRef;
pub use registry::TypeSet;
pub use visitor::{Visit, VisitWith, Visitor};
