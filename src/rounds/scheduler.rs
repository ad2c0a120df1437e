//! Round generation: shuffle, referee selection, pairing.
//!
//! One call produces the full seating plan for a round:
//!
//! 1. Shuffle a copy of the active set (fresh randomness per call).
//! 2. Select referees. Round 1 trims `floor(n / 3)` players off the tail of
//!    the shuffled sequence into the referee queue; later rounds arrive with
//!    the queue already seeded by the previous round's losers and top it up
//!    from the reserve to `floor(n / 2)`.
//! 3. Walk the remaining sequence two at a time, pairing consecutive players
//!    into tables. A trailing odd player gets a special table.
//! 4. Attach one referee per table in creation order until the queue is
//!    exhausted; later tables go refereed by an implicit proctor.
//!
//! Termination (a single active participant) is the controller's business
//! and is checked before this module is ever called; an empty active set
//! here is a caller bug and is reported, never ignored.

use tracing::info;

use crate::core::{ParticipantId, ShuffleRng, StateError};

use super::referee::RefereePool;
use super::table::Table;

/// Rounds are numbered from 1.
pub const FIRST_ROUND: u32 = 1;

/// Generate the tables for `round` from the active set.
///
/// `pool` is consumed and updated in place: round 1 installs the trimmed
/// players as referees, later rounds top the queue up from the reserve, and
/// every table created draws from the front of the queue.
///
/// # Errors
///
/// [`StateError::EmptyActiveSet`] if `active` is empty.
pub fn generate_round(
    active: &[ParticipantId],
    round: u32,
    pool: &mut RefereePool,
    rng: &mut ShuffleRng,
) -> Result<Vec<Table>, StateError> {
    if active.is_empty() {
        return Err(StateError::EmptyActiveSet);
    }

    let mut seats: Vec<ParticipantId> = active.to_vec();
    rng.shuffle(&mut seats);

    if round == FIRST_ROUND {
        // The tail of the shuffled sequence sits out and referees instead.
        let trim = seats.len() / 3;
        for _ in 0..trim {
            if let Some(id) = seats.pop() {
                pool.enlist(id);
            }
        }
    } else {
        pool.top_up(seats.len() / 2);
    }

    let mut tables = Vec::with_capacity(seats.len().div_ceil(2));
    let mut i = 0;
    while i + 1 < seats.len() {
        let referee = pool.draw();
        tables.push(Table::pair(tables.len(), seats[i], seats[i + 1], referee));
        i += 2;
    }
    if i < seats.len() {
        let referee = pool.draw();
        tables.push(Table::special(tables.len(), seats[i], referee));
    }

    info!(
        round,
        tables = tables.len(),
        refereed = tables.iter().filter(|t| t.referee.is_some()).count(),
        "generated round"
    );
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn ids(n: u32) -> Vec<ParticipantId> {
        (0..n).map(ParticipantId::new).collect()
    }

    #[test]
    fn test_empty_active_set_is_rejected() {
        let mut pool = RefereePool::new();
        let mut rng = ShuffleRng::new(0);
        let err = generate_round(&[], FIRST_ROUND, &mut pool, &mut rng).unwrap_err();
        assert!(matches!(err, StateError::EmptyActiveSet));
    }

    #[test]
    fn test_round_one_seven_players() {
        // floor(7/3) = 2 referees sit out, 5 players remain:
        // two pairs plus one special table.
        let mut pool = RefereePool::new();
        let mut rng = ShuffleRng::new(11);
        let tables = generate_round(&ids(7), FIRST_ROUND, &mut pool, &mut rng).unwrap();

        assert_eq!(tables.len(), 3);
        assert!(!tables[0].is_special());
        assert!(!tables[1].is_special());
        assert!(tables[2].is_special());

        // Two referees cover the first two tables in creation order.
        assert!(tables[0].referee.is_some());
        assert!(tables[1].referee.is_some());
        assert_eq!(tables[2].referee, None);
    }

    #[test]
    fn test_round_one_two_players() {
        // floor(2/3) = 0 referees; a single normal table.
        let mut pool = RefereePool::new();
        let mut rng = ShuffleRng::new(5);
        let tables = generate_round(&ids(2), FIRST_ROUND, &mut pool, &mut rng).unwrap();

        assert_eq!(tables.len(), 1);
        assert!(!tables[0].is_special());
        assert_eq!(tables[0].referee, None);
    }

    #[test]
    fn test_later_round_uses_seeded_losers() {
        let mut pool = RefereePool::new();
        pool.enlist_all([ParticipantId::new(100), ParticipantId::new(101)]);
        let mut rng = ShuffleRng::new(3);

        let tables = generate_round(&ids(4), 2, &mut pool, &mut rng).unwrap();
        assert_eq!(tables.len(), 2);
        let referees: Vec<_> = tables.iter().filter_map(|t| t.referee).collect();
        assert_eq!(
            referees,
            vec![ParticipantId::new(100), ParticipantId::new(101)]
        );
    }

    #[test]
    fn test_later_round_tops_up_from_reserve() {
        let mut pool = RefereePool::new();
        // Three retired referees, none current.
        pool.enlist_all(ids(3));
        for _ in 0..3 {
            pool.draw();
        }
        pool.retire_round();

        // Six active players: target is floor(6/2) = 3, all from reserve.
        let mut rng = ShuffleRng::new(8);
        let active: Vec<_> = (10..16).map(ParticipantId::new).collect();
        let tables = generate_round(&active, 2, &mut pool, &mut rng).unwrap();

        assert_eq!(tables.len(), 3);
        assert!(tables.iter().all(|t| t.referee.is_some()));
        assert_eq!(pool.reserved(), 0);
    }

    #[test]
    fn test_no_referees_available_is_legal() {
        let mut pool = RefereePool::new();
        let mut rng = ShuffleRng::new(21);
        let tables = generate_round(&ids(6), 2, &mut pool, &mut rng).unwrap();

        assert_eq!(tables.len(), 3);
        assert!(tables.iter().all(|t| t.referee.is_none()));
    }

    proptest! {
        /// Seating invariants over arbitrary roster sizes and seeds:
        /// table count, no double seating, players never referee their
        /// own round.
        #[test]
        fn prop_round_one_seating(n in 2u32..64, seed in any::<u64>()) {
            let mut pool = RefereePool::new();
            let mut rng = ShuffleRng::new(seed);
            let active = ids(n);
            let tables = generate_round(&active, FIRST_ROUND, &mut pool, &mut rng).unwrap();

            let remaining = n as usize - n as usize / 3;
            prop_assert_eq!(tables.len(), remaining.div_ceil(2));

            let mut seated = HashSet::new();
            let mut referees = HashSet::new();
            for table in &tables {
                for player in table.players() {
                    prop_assert!(seated.insert(player), "player seated twice");
                }
                if let Some(referee) = table.referee {
                    prop_assert!(referees.insert(referee), "referee at two tables");
                }
            }
            prop_assert!(seated.is_disjoint(&referees));
            prop_assert_eq!(seated.len(), remaining);
        }

        /// Later rounds seat everyone: the active set is never trimmed.
        #[test]
        fn prop_later_round_seats_everyone(n in 2u32..64, seed in any::<u64>()) {
            let mut pool = RefereePool::new();
            let mut rng = ShuffleRng::new(seed);
            let active = ids(n);
            let tables = generate_round(&active, 2, &mut pool, &mut rng).unwrap();

            prop_assert_eq!(tables.len(), (n as usize).div_ceil(2));
            let seated: HashSet<_> = tables.iter().flat_map(Table::players).collect();
            prop_assert_eq!(seated.len(), n as usize);
        }
    }
}
