use crate::chess::{Move, Role, Rules, Square};
use derive_more::Display;
use tracing::{debug, info, instrument};

#[cfg(test)]
use test_strategy::Arbitrary;

/// The square currently picked up by the player, if any.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Selection {
    #[default]
    #[display(fmt = "idle")]
    Idle,
    #[display(fmt = "selected {}", _0)]
    Selected(Square),
}

/// What a click did to the game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Transition {
    /// The click did not land on a piece of the side to move.
    #[display(fmt = "ignored")]
    Ignored,
    /// A piece of the side to move was picked up.
    #[display(fmt = "selected {}", _0)]
    Selected(Square),
    /// The move was accepted and played.
    #[display(fmt = "committed {}", _0)]
    Committed(Move),
    /// The move was rejected and the selection dropped.
    #[display(fmt = "discarded {}", _0)]
    Discarded(Move),
}

/// Turns pairs of clicks into moves.
///
/// The first click picks up a piece of the side to move, the second one
/// names its destination. Whatever the second click lands on, the selection
/// is dropped afterwards, even if the move turns out to be illegal.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Selector {
    selection: Selection,
}

impl Selector {
    /// The current [`Selection`].
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Reacts to a click on the given [`Square`].
    #[instrument(level = "trace", skip(self, rules), fields(selection = %self.selection), ret)]
    pub fn click<R: Rules + ?Sized>(&mut self, rules: &mut R, whither: Square) -> Transition {
        match self.selection {
            Selection::Idle => match rules.piece_at(whither) {
                Some(p) if p.color() == rules.side_to_move() => {
                    debug!(square = %whither, piece = %p, "picked up");
                    self.selection = Selection::Selected(whither);
                    Transition::Selected(whither)
                }

                _ => Transition::Ignored,
            },

            Selection::Selected(whence) => {
                self.selection = Selection::Idle;
                let m = Self::candidate(&*rules, whence, whither);
                match rules.try_apply(m) {
                    Ok(()) => {
                        info!(%m, "move played");
                        Transition::Committed(m)
                    }

                    Err(e) => {
                        debug!("{}", e);
                        Transition::Discarded(m)
                    }
                }
            }
        }
    }

    /// The [`Move`] from one square to another.
    ///
    /// Pawns reaching the last rank always promote to a queen.
    pub fn candidate<R: Rules + ?Sized>(rules: &R, whence: Square, whither: Square) -> Move {
        let promotion = match rules.piece_at(whence) {
            Some(p) if p.role() == Role::Pawn && whither.rank() == p.color().promotion_rank() => {
                Some(Role::Queen)
            }

            _ => None,
        };

        Move::new(whence, whither, promotion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Color, IllegalMove, MockRules, Piece, Position, Rank};
    use proptest::sample::Selector as Pick;
    use test_strategy::proptest;

    #[proptest]
    fn selector_starts_idle() {
        assert_eq!(Selector::default().selection(), Selection::Idle);
    }

    #[proptest]
    fn clicking_empty_square_while_idle_is_ignored(s: Square, c: Color) {
        let mut rules = MockRules::new();
        rules.expect_piece_at().return_const(None);
        rules.expect_side_to_move().return_const(c);
        rules.expect_try_apply().never();

        let mut selector = Selector::default();
        assert_eq!(selector.click(&mut rules, s), Transition::Ignored);
        assert_eq!(selector.selection(), Selection::Idle);
    }

    #[proptest]
    fn clicking_opponent_piece_while_idle_is_ignored(s: Square, p: Piece) {
        let mut rules = MockRules::new();
        rules.expect_piece_at().return_const(Some(p));
        rules.expect_side_to_move().return_const(!p.color());
        rules.expect_try_apply().never();

        let mut selector = Selector::default();
        assert_eq!(selector.click(&mut rules, s), Transition::Ignored);
        assert_eq!(selector.selection(), Selection::Idle);
    }

    #[proptest]
    fn clicking_own_piece_while_idle_selects_it(s: Square, p: Piece) {
        let mut rules = MockRules::new();
        rules.expect_piece_at().return_const(Some(p));
        rules.expect_side_to_move().return_const(p.color());
        rules.expect_try_apply().never();

        let mut selector = Selector::default();
        assert_eq!(selector.click(&mut rules, s), Transition::Selected(s));
        assert_eq!(selector.selection(), Selection::Selected(s));
    }

    #[proptest]
    fn accepted_move_is_committed_and_selection_dropped(
        whence: Square,
        #[filter(#whence != #whither)] whither: Square,
        p: Piece,
    ) {
        let mut rules = MockRules::new();
        rules.expect_piece_at().return_const(Some(p));
        rules.expect_side_to_move().return_const(p.color());

        let mut selector = Selector::default();
        selector.click(&mut rules, whence);

        let m = Selector::candidate(&rules, whence, whither);
        rules
            .expect_try_apply()
            .once()
            .withf(move |x| *x == m)
            .returning(|_| Ok(()));

        assert_eq!(selector.click(&mut rules, whither), Transition::Committed(m));
        assert_eq!(selector.selection(), Selection::Idle);
    }

    #[proptest]
    fn rejected_move_is_discarded_and_selection_dropped(
        whence: Square,
        #[filter(#whence != #whither)] whither: Square,
        p: Piece,
    ) {
        let mut rules = MockRules::new();
        rules.expect_piece_at().return_const(Some(p));
        rules.expect_side_to_move().return_const(p.color());
        rules.expect_try_apply().once().returning(|m| Err(IllegalMove(m)));

        let mut selector = Selector::default();
        selector.click(&mut rules, whence);

        let m = Selector::candidate(&rules, whence, whither);
        assert_eq!(selector.click(&mut rules, whither), Transition::Discarded(m));
        assert_eq!(selector.selection(), Selection::Idle);
    }

    #[proptest]
    fn second_click_on_own_piece_does_not_reselect(
        whence: Square,
        #[filter(#whence != #whither)] whither: Square,
        p: Piece,
    ) {
        let mut rules = MockRules::new();
        rules.expect_piece_at().return_const(Some(p));
        rules.expect_side_to_move().return_const(p.color());
        rules.expect_try_apply().returning(|m| Err(IllegalMove(m)));

        let mut selector = Selector::default();
        selector.click(&mut rules, whence);
        selector.click(&mut rules, whither);
        assert_eq!(selector.selection(), Selection::Idle);
    }

    #[proptest]
    fn pawn_reaching_the_last_rank_promotes_to_queen(whence: Square, whither: Square, c: Color) {
        let mut rules = MockRules::new();
        rules
            .expect_piece_at()
            .return_const(Some(Piece(c, Role::Pawn)));

        let m = Selector::candidate(&rules, whence, whither);
        if whither.rank() == c.promotion_rank() {
            assert_eq!(m.promotion(), Some(Role::Queen));
        } else {
            assert_eq!(m.promotion(), None);
        }
    }

    #[proptest]
    fn other_pieces_never_promote(
        whence: Square,
        whither: Square,
        c: Color,
        #[filter(#r != Role::Pawn)] r: Role,
    ) {
        let mut rules = MockRules::new();
        rules.expect_piece_at().return_const(Some(Piece(c, r)));
        assert_eq!(Selector::candidate(&rules, whence, whither).promotion(), None);
    }

    #[proptest]
    fn black_pawns_promote_on_the_first_rank() {
        let mut rules = MockRules::new();
        rules
            .expect_piece_at()
            .return_const(Some(Piece(Color::Black, Role::Pawn)));

        let whence = "e2".parse()?;
        let whither: Square = "e1".parse()?;
        assert_eq!(whither.rank(), Rank::First);
        assert_eq!(
            Selector::candidate(&rules, whence, whither).promotion(),
            Some(Role::Queen)
        );
    }

    #[proptest]
    fn every_legal_move_can_be_played_with_two_clicks(
        #[by_ref]
        #[filter(#pos.moves().len() > 0)]
        mut pos: Position,
        pick: Pick,
    ) {
        let m = pick.select(pos.moves());
        let turn = pos.turn();

        let mut expected = pos.clone();
        let promotion = m.promotion().map(|_| Role::Queen);
        expected.try_apply(Move::new(m.whence(), m.whither(), promotion))?;

        let mut selector = Selector::default();
        assert_eq!(
            selector.click(&mut pos, m.whence()),
            Transition::Selected(m.whence())
        );
        assert!(matches!(
            selector.click(&mut pos, m.whither()),
            Transition::Committed(_)
        ));

        assert_eq!(pos, expected);
        assert_eq!(pos.turn(), !turn);
        assert_eq!(selector.selection(), Selection::Idle);
    }
}
