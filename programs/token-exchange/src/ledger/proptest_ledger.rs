//! Property-based tests for ledger conservation.
//!
//! Random interleavings of locks, claims and block advances across a few
//! beneficiaries, checked against the accounting invariants after every step.

use std::collections::BTreeMap;

use proptest::prelude::*;

use super::transfer::mock::{MockReserve, MockWallet};
use super::*;

#[derive(Clone, Debug)]
enum Op {
    Lock { account: u8, amount: u64 },
    Claim { account: u8 },
    Advance { blocks: u64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..4, 1u64..1_000_000).prop_map(|(account, amount)| Op::Lock { account, amount }),
        (0u8..4).prop_map(|account| Op::Claim { account }),
        (0u64..12).prop_map(|blocks| Op::Advance { blocks }),
    ]
}

fn params_strategy() -> impl Strategy<Value = LedgerParams> {
    // Rates down to 0.01 so small locks exercise the dust rejection path.
    (1u64..20, RATE_PRECISION / 100..=3 * RATE_PRECISION).prop_map(
        |(release_cycle_blocks, exchange_rate)| LedgerParams {
            release_cycle_blocks,
            exchange_rate,
        },
    )
}

fn check_schedule(s: &VestingSchedule) -> Result<(), TestCaseError> {
    prop_assert!(s.debt <= s.locked_amount);
    prop_assert!(
        (s.acc_released_per_block as u128) * (s.release_cycle_blocks as u128)
            <= s.locked_amount as u128
    );
    Ok(())
}

proptest! {
    /// Property: outstanding across all positions == credited - paid, and
    /// the reserve drops by exactly what was paid.
    #[test]
    fn prop_ledger_conserves_value(
        params in params_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..60),
    ) {
        const RESERVE: u64 = u64::MAX / 2;
        let mut positions: BTreeMap<u8, VestingSchedule> = BTreeMap::new();
        let mut reserve = MockReserve::with_reserve(RESERVE);
        let mut block = 0u64;
        let mut credited = 0u64;

        for op in ops {
            match op {
                Op::Lock { account, amount } => {
                    let s = positions.entry(account).or_default();
                    let mut wallet = MockWallet { balance: amount, ..MockWallet::default() };
                    match lock(s, &params, block, amount, true, &mut wallet, &mut reserve) {
                        Ok(out) => {
                            prop_assert_eq!(wallet.deposited, amount);
                            credited += out.credited;
                        }
                        Err(e) => prop_assert!(matches!(e, ExchangeError::InvalidAmount)),
                    }
                }
                Op::Claim { account } => {
                    let s = positions.entry(account).or_default();
                    let expected = s.pending_amount(block).unwrap();
                    let paid = claim(s, block, &mut reserve).unwrap();
                    prop_assert_eq!(paid, expected);
                    prop_assert_eq!(claim(s, block, &mut reserve).unwrap(), 0);
                }
                Op::Advance { blocks } => block += blocks,
            }

            let mut outstanding = 0u64;
            for s in positions.values() {
                check_schedule(s)?;
                outstanding += s.outstanding().unwrap();
            }
            prop_assert_eq!(outstanding, credited - reserve.total_paid());
            prop_assert_eq!(RESERVE - reserve.reserve, reserve.total_paid());
        }
    }

    /// Property: once a cycle has elapsed, pending is exactly locked - debt
    /// and stays there.
    #[test]
    fn prop_pending_saturates(
        params in params_strategy(),
        amount in 1_000u64..1_000_000_000,
        claim_after in 0u64..40,
        extra in prop::collection::vec(0u64..1_000_000, 1..8),
    ) {
        let mut s = VestingSchedule::default();
        let mut reserve = MockReserve::with_reserve(u64::MAX);
        let mut wallet = MockWallet { balance: amount, ..MockWallet::default() };
        lock(&mut s, &params, 0, amount, true, &mut wallet, &mut reserve).unwrap();
        claim(&mut s, claim_after, &mut reserve).unwrap();

        let end = claim_after.max(params.release_cycle_blocks);
        let at_end = s.pending_amount(end).unwrap();
        prop_assert_eq!(at_end, s.locked_amount - s.debt);
        for e in extra {
            prop_assert_eq!(s.pending_amount(end + e).unwrap(), at_end);
        }
    }

    /// Property: relocking never changes the unreleased value except by the
    /// newly credited principal.
    #[test]
    fn prop_relock_conserves_remainder(
        params in params_strategy(),
        first in 1_000u64..1_000_000,
        second in 1_000u64..1_000_000,
        gap in 0u64..30,
    ) {
        let mut s = VestingSchedule::default();
        let mut reserve = MockReserve::with_reserve(u64::MAX);
        let mut wallet = MockWallet { balance: first + second, ..MockWallet::default() };
        lock(&mut s, &params, 0, first, true, &mut wallet, &mut reserve).unwrap();

        let remainder = s.unreleased(gap);
        let pending = s.pending_amount(gap).unwrap();
        let out = lock(&mut s, &params, gap, second, true, &mut wallet, &mut reserve).unwrap();

        prop_assert_eq!(out.settled, pending);
        prop_assert_eq!(s.locked_amount, remainder + out.credited);
        prop_assert_eq!(s.debt, 0);
        check_schedule(&s)?;
    }
}
