use super::edge::Edge;
use super::info::Info;
use super::path::Path;
use super::turn::Turn;
use crate::ANTE;
use crate::BET;
use crate::RAISE;
use crate::Utility;
use crate::cards::Rank;

/// One hand of the extended Kuhn game: the two dealt cards plus the
/// betting line so far.
///
/// Copied by value down the recursion; `apply` derives the child state
/// and leaves the parent untouched. The hand lives for one training
/// epoch and is discarded once its terminal payoff is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    hand: [Rank; 2],
    path: Path,
}

impl Game {
    /// Starts a hand from two freshly dealt cards, seat 0 first.
    pub fn deal(hand: [Rank; 2]) -> Self {
        Self {
            hand,
            path: Path::default(),
        }
    }
    /// The seat to act, alternating with history length.
    pub fn turn(&self) -> Turn {
        Turn::from(self.path.len() % 2)
    }
    /// Derives the state reached by taking an action.
    pub fn apply(&self, edge: Edge) -> Self {
        Self {
            hand: self.hand,
            path: self.path.push(edge),
        }
    }
    /// Whether the hand has reached a terminal betting line.
    pub fn over(&self) -> bool {
        self.path.over()
    }
    /// Legal actions for the seat to act.
    pub fn choices(&self) -> Vec<Edge> {
        self.path.choices()
    }
    /// The information set of the seat to act: their private card plus
    /// the public betting line.
    pub fn info(&self) -> Info {
        Info::from((self.hand[usize::from(self.turn())], self.path))
    }
    /// Terminal payoff from `turn`'s perspective.
    ///
    /// Showdowns award the pot to the higher card; folds award it to the
    /// player left standing. A raiser folded to before the raise is called
    /// collects only the bet-sized wager ("pbrp"/"brp" pay ante+bet, not
    /// ante+raise).
    pub fn payoff(&self, turn: Turn) -> Utility {
        let hero = self.turn();
        let villain = hero.opponent();
        let higher = self.hand[usize::from(hero)] > self.hand[usize::from(villain)];
        let ante = Utility::from(ANTE);
        let bets = Utility::from(ANTE + BET);
        let full = Utility::from(ANTE + RAISE);
        let value = match self.path.edges() {
            [Edge::Pass, Edge::Pass] => {
                // checked-down showdown
                if higher { ante } else { -ante }
            }
            [.., Edge::Bet, Edge::Bet] => {
                // bet-call showdown
                if higher { bets } else { -bets }
            }
            [.., Edge::Raise, Edge::Bet] => {
                // raise-call showdown
                if higher { full } else { -full }
            }
            [Edge::Bet, Edge::Pass] => {
                // P1 folds to the bet
                if hero == Turn::P0 { ante } else { -ante }
            }
            [Edge::Pass, Edge::Bet, Edge::Pass] => {
                // P0 folds to the bet
                if hero == Turn::P1 { ante } else { -ante }
            }
            [Edge::Pass, Edge::Bet, Edge::Raise, Edge::Pass] => {
                // P1 folds to the raise
                if hero == Turn::P0 { bets } else { -bets }
            }
            [Edge::Bet, Edge::Raise, Edge::Pass] => {
                // P0 folds to the raise
                if hero == Turn::P1 { bets } else { -bets }
            }
            _ => unreachable!("payoff at non-terminal or malformed line '{}'", self.path),
        };
        if turn == hero { value } else { -value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(hero: u8, villain: u8, line: Vec<Edge>) -> Game {
        line.into_iter().fold(
            Game::deal([Rank::from(hero), Rank::from(villain)]),
            |game, edge| game.apply(edge),
        )
    }

    #[test]
    fn bet_call_showdown() {
        let ref game = play(7, 5, vec![Edge::Bet, Edge::Bet]);
        assert!(game.payoff(Turn::P0) == 3.0);
        assert!(game.payoff(Turn::P1) == -3.0);
    }

    #[test]
    fn raise_call_showdown() {
        let ref game = play(7, 5, vec![Edge::Bet, Edge::Raise, Edge::Bet]);
        assert!(game.payoff(Turn::P0) == 7.0);
        assert!(game.payoff(Turn::P1) == -7.0);
    }

    #[test]
    fn checked_down_showdown() {
        let ref game = play(9, 4, vec![Edge::Pass, Edge::Pass]);
        assert!(game.payoff(Turn::P0) == 1.0);
        assert!(game.payoff(Turn::P1) == -1.0);
    }

    #[test]
    fn fold_to_bet_ignores_ranks() {
        // P1 folds: P0 wins the antes even holding the lower card
        let ref game = play(2, 14, vec![Edge::Bet, Edge::Pass]);
        assert!(game.payoff(Turn::P0) == 1.0);
        let ref game = play(2, 14, vec![Edge::Pass, Edge::Bet, Edge::Pass]);
        assert!(game.payoff(Turn::P1) == 1.0);
    }

    #[test]
    fn fold_to_raise_pays_bet_not_raise() {
        // the folded-to raiser collects the bet-sized wager only
        let ref game = play(2, 14, vec![Edge::Pass, Edge::Bet, Edge::Raise, Edge::Pass]);
        assert!(game.payoff(Turn::P0) == 3.0);
        let ref game = play(2, 14, vec![Edge::Bet, Edge::Raise, Edge::Pass]);
        assert!(game.payoff(Turn::P1) == 3.0);
    }

    #[test]
    fn zero_sum_at_every_terminal() {
        for line in [
            vec![Edge::Pass, Edge::Pass],
            vec![Edge::Bet, Edge::Bet],
            vec![Edge::Bet, Edge::Pass],
            vec![Edge::Pass, Edge::Bet, Edge::Bet],
            vec![Edge::Pass, Edge::Bet, Edge::Pass],
            vec![Edge::Bet, Edge::Raise, Edge::Pass],
            vec![Edge::Bet, Edge::Raise, Edge::Bet],
            vec![Edge::Pass, Edge::Bet, Edge::Raise, Edge::Pass],
            vec![Edge::Pass, Edge::Bet, Edge::Raise, Edge::Bet],
        ] {
            let ref game = play(11, 6, line);
            assert!(game.over());
            assert!(game.payoff(Turn::P0) == -game.payoff(Turn::P1));
        }
    }

    #[test]
    #[should_panic]
    fn payoff_off_grammar_aborts() {
        let ref game = play(7, 5, vec![Edge::Pass, Edge::Bet]);
        game.payoff(Turn::P0);
    }
}
