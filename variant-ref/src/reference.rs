//! The tagged, non-owning reference.

use std::fmt;
use std::ptr;

use crate::registry::{Inject, Tagged, TypeSet};
use crate::visitor::{Dispatch, Visitor};

/// A borrowed reference to exactly one value whose type is a member of the
/// closed set `S`.
///
/// `S` is a tuple of distinct types. The reference records which member it
/// holds (its tag) and where the value lives, and never owns the value.
///
/// ```
/// use variant_ref::VariantRef;
///
/// struct Rock;
/// struct Paper;
///
/// type HandRef<'a> = VariantRef<'a, (Rock, Paper)>;
///
/// let (rock, paper) = (Rock, Paper);
/// let mut hand = HandRef::new(&rock);
/// assert!(hand.holds_exactly::<Rock, _>());
///
/// hand.reset_to(&paper);
/// assert_eq!(hand.tag(), 1);
/// assert!(hand.get::<Rock, _>().is_none());
/// ```
///
/// The second type argument of the generic methods is a membership witness
/// inferred by the compiler; pass `_`.
///
/// Referring to a value whose type is not in the set does not compile:
///
/// ```compile_fail
/// use variant_ref::VariantRef;
///
/// struct Rock;
/// struct Paper;
/// struct Lizard;
///
/// let lizard = Lizard;
/// let _ = VariantRef::<(Rock, Paper)>::new(&lizard);
/// ```
///
/// Neither does a set that lists the same type twice, since the tag would be
/// ambiguous:
///
/// ```compile_fail
/// use variant_ref::VariantRef;
///
/// struct Rock;
///
/// let rock = Rock;
/// let _ = VariantRef::<(Rock, Rock)>::new(&rock);
/// ```
pub struct VariantRef<'a, S: TypeSet + 'a> {
    repr: S::Refs<'a>,
}

impl<'a, S: TypeSet + 'a> VariantRef<'a, S> {
    /// Number of member types in `S`.
    pub const LEN: usize = S::LEN;

    /// Refer to `value`. `T` must be a member of `S`.
    pub fn new<T, I>(value: &'a T) -> Self
    where
        S::Refs<'a>: Inject<&'a T, I>,
    {
        Self {
            repr: Inject::inject(value),
        }
    }

    /// Re-point this reference at `value`, replacing both tag and address.
    pub fn reset_to<T, I>(&mut self, value: &'a T)
    where
        S::Refs<'a>: Inject<&'a T, I>,
    {
        *self = Self::new(value);
    }

    /// Position in `S` of the member currently held.
    pub fn tag(&self) -> usize {
        self.repr.tag()
    }

    /// Position in `S` of the member `T`.
    pub fn tag_of<T: 'a, I>() -> usize
    where
        S::Refs<'a>: Inject<&'a T, I>,
    {
        <S::Refs<'a> as Inject<&'a T, I>>::TAG
    }

    /// Whether the held value is exactly of type `T`.
    pub fn holds_exactly<T: 'a, I>(&self) -> bool
    where
        S::Refs<'a>: Inject<&'a T, I>,
    {
        self.tag() == Self::tag_of::<T, I>()
    }

    /// The held value as a `T`, if that is what is held.
    pub fn get<T, I>(&self) -> Option<&'a T>
    where
        S::Refs<'a>: Inject<&'a T, I>,
    {
        self.repr.project()
    }

    /// Whether both references hold the same member at the same address.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.tag() == other.tag() && ptr::eq(self.repr.addr(), other.repr.addr())
    }

    /// Single dispatch: run the case of `visitor` for the held type.
    ///
    /// `visitor` needs a case for every member of `S`, whichever one is held:
    ///
    /// ```compile_fail
    /// use variant_ref::{VariantRef, Visit, Visitor};
    ///
    /// struct Rock;
    /// struct Paper;
    ///
    /// struct OnlyRock;
    ///
    /// impl Visitor for OnlyRock {
    ///     type Output = u8;
    /// }
    ///
    /// impl Visit<&Rock> for OnlyRock {
    ///     fn visit(&mut self, _: &Rock) -> u8 {
    ///         0
    ///     }
    /// }
    ///
    /// let rock = Rock;
    /// let _ = VariantRef::<(Rock, Paper)>::new(&rock).visit(&mut OnlyRock);
    /// ```
    pub fn visit<'v, V>(self, visitor: &'v mut V) -> V::Output
    where
        V: Visitor + ?Sized,
        S::Refs<'a>: Dispatch<&'v mut V, ()>,
    {
        self.repr.dispatch(visitor, ())
    }

    /// Single dispatch with a trailing extra value forwarded to the case.
    pub fn visit_with<'v, V, X>(self, visitor: &'v mut V, extra: X) -> V::Output
    where
        V: Visitor + ?Sized,
        S::Refs<'a>: Dispatch<&'v mut V, X>,
    {
        self.repr.dispatch(visitor, extra)
    }
}

impl<'a, S, C, X> Dispatch<C, X> for VariantRef<'a, S>
where
    S: TypeSet + 'a,
    C: Visitor,
    S::Refs<'a>: Dispatch<C, X>,
{
    fn dispatch(self, case: C, extra: X) -> C::Output {
        self.repr.dispatch(case, extra)
    }
}

impl<'a, S: TypeSet + 'a> Clone for VariantRef<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: TypeSet + 'a> Copy for VariantRef<'a, S> {}

impl<'a, S: TypeSet + 'a> fmt::Debug for VariantRef<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantRef")
            .field("tag", &self.tag())
            .field("addr", &self.repr.addr())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::{Visit, VisitWith};

    #[derive(Debug)]
    struct Rock;
    #[derive(Debug)]
    struct Paper;
    #[derive(Debug)]
    struct Scissors;

    type HandRef<'a> = VariantRef<'a, (Rock, Paper, Scissors)>;

    struct Name;

    impl Visitor for Name {
        type Output = &'static str;
    }

    impl Visit<&Rock> for Name {
        fn visit(&mut self, _: &Rock) -> &'static str {
            "rock"
        }
    }

    impl Visit<&Paper> for Name {
        fn visit(&mut self, _: &Paper) -> &'static str {
            "paper"
        }
    }

    impl Visit<&Scissors> for Name {
        fn visit(&mut self, _: &Scissors) -> &'static str {
            "scissors"
        }
    }

    /// Counts how often each case runs, and adds the extra to the count.
    #[derive(Default)]
    struct Tally([u32; 3]);

    impl Visitor for Tally {
        type Output = u32;
    }

    impl VisitWith<&Rock, u32> for Tally {
        fn visit_with(&mut self, _: &Rock, by: u32) -> u32 {
            self.0[0] += by;
            self.0[0]
        }
    }

    impl VisitWith<&Paper, u32> for Tally {
        fn visit_with(&mut self, _: &Paper, by: u32) -> u32 {
            self.0[1] += by;
            self.0[1]
        }
    }

    impl VisitWith<&Scissors, u32> for Tally {
        fn visit_with(&mut self, _: &Scissors, by: u32) -> u32 {
            self.0[2] += by;
            self.0[2]
        }
    }

    #[test]
    fn test_len() {
        assert_eq!(HandRef::LEN, 3);
        assert_eq!(VariantRef::<'static, (Rock,)>::LEN, 1);
    }

    #[test]
    fn test_new_assigns_tag_by_position() {
        let (rock, paper, scissors) = (Rock, Paper, Scissors);
        assert_eq!(HandRef::new(&rock).tag(), 0);
        assert_eq!(HandRef::new(&paper).tag(), 1);
        assert_eq!(HandRef::new(&scissors).tag(), 2);

        assert_eq!(HandRef::tag_of::<Rock, _>(), 0);
        assert_eq!(HandRef::tag_of::<Paper, _>(), 1);
        assert_eq!(HandRef::tag_of::<Scissors, _>(), 2);
    }

    #[test]
    fn test_holds_exactly() {
        let paper = Paper;
        let hand = HandRef::new(&paper);
        assert!(hand.holds_exactly::<Paper, _>());
        assert!(!hand.holds_exactly::<Rock, _>());
        assert!(!hand.holds_exactly::<Scissors, _>());
    }

    /// A member that itself borrows, checked from a lifetime-generic context.
    struct Label<'s>(&'s str);

    fn count_labels<'a, 's: 'a>(refs: &[VariantRef<'a, (Label<'s>, u8)>]) -> usize {
        refs.iter()
            .filter(|r| r.holds_exactly::<Label<'s>, _>())
            .count()
    }

    #[test]
    fn test_holds_exactly_with_borrowing_member() {
        let text = String::from("north");
        let label = Label(&text);
        let byte = 7u8;
        let refs = [
            VariantRef::<(Label<'_>, u8)>::new(&label),
            VariantRef::new(&byte),
            VariantRef::new(&label),
        ];

        assert_eq!(count_labels(&refs), 2);
        assert_eq!(VariantRef::<(Label<'_>, u8)>::tag_of::<u8, _>(), 1);
        assert!(refs[0].get::<Label<'_>, _>().is_some_and(|l| l.0 == "north"));
    }

    #[test]
    fn test_reset_to_rebinds() {
        let (rock, scissors) = (Rock, Scissors);
        let mut hand = HandRef::new(&rock);
        hand.reset_to(&scissors);

        assert!(hand.holds_exactly::<Scissors, _>());
        assert!(hand.get::<Scissors, _>().is_some_and(|s| ptr::eq(s, &scissors)));
        assert!(hand.get::<Rock, _>().is_none());
    }

    #[test]
    fn test_reset_to_is_idempotent() {
        let (rock, paper) = (Rock, Paper);
        let mut once = HandRef::new(&rock);
        once.reset_to(&paper);

        let mut twice = HandRef::new(&rock);
        twice.reset_to(&paper);
        twice.reset_to(&paper);

        assert!(once.ptr_eq(&twice));
    }

    #[test]
    fn test_ptr_eq_distinguishes_referents() {
        let first = [1u8];
        let second = [2u8];
        let a = VariantRef::<([u8; 1], u16)>::new(&first);
        let b = VariantRef::<([u8; 1], u16)>::new(&second);
        let c = VariantRef::<([u8; 1], u16)>::new(&first);

        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&c));
    }

    #[test]
    fn test_visit_runs_held_case() {
        let (rock, paper, scissors) = (Rock, Paper, Scissors);
        assert_eq!(HandRef::new(&rock).visit(&mut Name), "rock");
        assert_eq!(HandRef::new(&paper).visit(&mut Name), "paper");
        assert_eq!(HandRef::new(&scissors).visit(&mut Name), "scissors");
    }

    #[test]
    fn test_visit_with_forwards_extra_and_keeps_state() {
        let (rock, scissors) = (Rock, Scissors);
        let mut tally = Tally::default();

        assert_eq!(HandRef::new(&rock).visit_with(&mut tally, 2), 2);
        assert_eq!(HandRef::new(&rock).visit_with(&mut tally, 3), 5);
        assert_eq!(HandRef::new(&scissors).visit_with(&mut tally, 1), 1);

        assert_eq!(tally.0, [5, 0, 1]);
    }

    #[test]
    fn test_copies_share_referent() {
        let paper = Paper;
        let hand = HandRef::new(&paper);
        let hands = vec![hand; 3];
        assert!(hands.iter().all(|h| h.ptr_eq(&hand)));
    }

    #[test]
    fn test_debug_shows_tag() {
        let scissors = Scissors;
        let rendered = format!("{:?}", HandRef::new(&scissors));
        assert!(rendered.starts_with("VariantRef { tag: 2,"));
    }
}
