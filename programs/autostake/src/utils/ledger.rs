//! Fee-on-transfer balance movement with reward settlement.

use crate::error::AutostakeError;
use crate::state::{AutostakeToken, Holder};

/// Where the transfer fee lands. The collector may be one of the two parties,
/// in which case no separate collector account is involved.
pub enum FeeSink<'a> {
    Sender,
    Recipient,
    Collector(&'a mut Holder),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferOutcome {
    pub fee: u64,
    /// Amount credited to the recipient.
    pub net: u64,
}

/// Move `amount` from `sender` to `recipient`, skimming the token's fee.
///
/// Every affected holder is settled against the accumulator at `now` using
/// its pre-transfer balance before any balance moves. Total supply is
/// unchanged.
pub fn apply_transfer(
    token: &mut AutostakeToken,
    sender: &mut Holder,
    recipient: &mut Holder,
    mut fee_sink: FeeSink<'_>,
    amount: u64,
    now: i64,
) -> Result<TransferOutcome, AutostakeError> {
    if sender.balance < amount {
        return Err(AutostakeError::InsufficientBalance);
    }
    let fee = token.fee_for(amount)?;
    let net = amount.checked_sub(fee).ok_or(AutostakeError::MathOverflow)?;

    let reward_per_token = token.update_reward_per_token(now)?;
    sender.settle(reward_per_token)?;
    recipient.settle(reward_per_token)?;
    if let FeeSink::Collector(ref mut collector) = fee_sink {
        collector.settle(reward_per_token)?;
    }

    sender.debit(amount)?;
    match fee_sink {
        FeeSink::Sender => {
            sender.credit(fee)?;
            recipient.credit(net)?;
        }
        FeeSink::Recipient => {
            recipient.credit(amount)?;
        }
        FeeSink::Collector(collector) => {
            recipient.credit(net)?;
            collector.credit(fee)?;
        }
    }

    Ok(TransferOutcome { fee, net })
}

/// Settle `holder` at `now` and take everything it has accrued.
///
/// A wallet with no holder entry has nothing to claim. A zero claim succeeds
/// whether or not a reward asset is configured; a non-zero one needs it.
pub fn settle_claim(
    token: &mut AutostakeToken,
    holder: Option<&mut Holder>,
    now: i64,
) -> Result<u64, AutostakeError> {
    let reward_per_token = token.update_reward_per_token(now)?;
    let Some(holder) = holder else {
        return Ok(0);
    };
    holder.settle(reward_per_token)?;
    if holder.rewards_accrued > 0 && !token.has_rewards_token() {
        return Err(AutostakeError::RewardsTokenNotSet);
    }
    holder.take_rewards()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RewardSchedule;
    use anchor_lang::prelude::Pubkey;

    const T: i64 = 1_700_000_000;
    const DAY: i64 = 86_400;
    const UNIT: u64 = 1_000_000_000;
    const RATE: u64 = 1_000_000;

    fn token(supply: u64, fee_bps: u16) -> AutostakeToken {
        AutostakeToken {
            total_supply: supply,
            fee_bps,
            ..Default::default()
        }
    }

    fn holder(balance: u64) -> Holder {
        Holder {
            balance,
            ..Default::default()
        }
    }

    fn send(
        t: &mut AutostakeToken,
        from: &mut Holder,
        to: &mut Holder,
        collector: &mut Holder,
        amount: u64,
        now: i64,
    ) -> TransferOutcome {
        apply_transfer(t, from, to, FeeSink::Collector(collector), amount, now).unwrap()
    }

    #[test]
    fn fee_goes_to_collector_and_supply_is_conserved() {
        let mut t = token(10_000, 250);
        let mut a = holder(10_000);
        let mut b = holder(0);
        let mut c = holder(0);
        let out = send(&mut t, &mut a, &mut b, &mut c, 4_000, T);
        assert_eq!(out, TransferOutcome { fee: 100, net: 3_900 });
        assert_eq!((a.balance, b.balance, c.balance), (6_000, 3_900, 100));
        assert_eq!(a.balance + b.balance + c.balance, t.total_supply);

        let out = send(&mut t, &mut b, &mut a, &mut c, 3_900, T);
        assert_eq!(out.fee, 97);
        assert_eq!(a.balance + b.balance + c.balance, t.total_supply);
    }

    #[test]
    fn collector_as_party_keeps_supply() {
        let mut t = token(1_000, 1_000);
        let mut collector = holder(500);
        let mut other = holder(500);

        // Collector sends: pays the fee to itself.
        let out = apply_transfer(&mut t, &mut collector, &mut other, FeeSink::Sender, 100, T).unwrap();
        assert_eq!(out.fee, 10);
        assert_eq!((collector.balance, other.balance), (410, 590));

        // Collector receives: gets the full amount.
        apply_transfer(&mut t, &mut other, &mut collector, FeeSink::Recipient, 200, T).unwrap();
        assert_eq!((collector.balance, other.balance), (610, 390));
        assert_eq!(collector.balance + other.balance, t.total_supply);
    }

    #[test]
    fn insufficient_balance_leaves_state_untouched() {
        let mut t = token(100, 0);
        t.install_schedule(RewardSchedule::new(T, T + DAY, RATE).unwrap(), T).unwrap();
        let mut a = holder(100);
        let mut b = holder(0);
        let mut c = holder(0);
        let before = t.reward_per_token_stored;
        let r = apply_transfer(&mut t, &mut a, &mut b, FeeSink::Collector(&mut c), 101, T + 50);
        assert!(matches!(r, Err(AutostakeError::InsufficientBalance)));
        assert_eq!(a.balance, 100);
        assert_eq!(a.rewards_accrued, 0);
        assert_eq!(t.reward_per_token_stored, before);
        assert_eq!(t.last_update_time, T);
    }

    #[test]
    fn sender_without_entry_cannot_move_funds() {
        let mut t = token(100, 0);
        let mut missing = Holder::default();
        let mut b = holder(0);
        let mut c = holder(0);
        let r = apply_transfer(&mut t, &mut missing, &mut b, FeeSink::Collector(&mut c), 1, T);
        assert!(matches!(r, Err(AutostakeError::InsufficientBalance)));

        let out = send(&mut t, &mut missing, &mut b, &mut c, 0, T);
        assert_eq!(out, TransferOutcome { fee: 0, net: 0 });
        assert_eq!((missing.balance, b.balance, c.balance), (0, 0, 0));
    }

    #[test]
    fn zero_claim_needs_no_reward_asset() {
        let mut t = token(1_000, 0);
        let mut a = holder(1_000);
        assert!(!t.has_rewards_token());
        assert_eq!(settle_claim(&mut t, Some(&mut a), T).unwrap(), 0);
        assert_eq!(settle_claim(&mut t, None, T).unwrap(), 0);

        t.install_schedule(RewardSchedule::new(T, T + DAY, 1).unwrap(), T).unwrap();
        let r = settle_claim(&mut t, Some(&mut a), T + 10);
        assert!(matches!(r, Err(AutostakeError::RewardsTokenNotSet)));
        assert_eq!(a.total_claimed, 0);
        // No holder entry means nothing to pay, even with a live schedule.
        assert_eq!(settle_claim(&mut t, None, T + 20).unwrap(), 0);

        t.rewards_mint = Pubkey::new_from_array([4; 32]);
        assert_eq!(settle_claim(&mut t, Some(&mut a), T + 30).unwrap(), 30);
        assert_eq!(settle_claim(&mut t, Some(&mut a), T + 30).unwrap(), 0);
        assert_eq!(a.total_claimed, 30);
    }

    #[test]
    fn earnings_follow_balance_time() {
        // A holds 3x B for the first day; then A moves enough to B that B holds
        // 3x A for the second day. Both integrals are equal.
        let supply = 4_000 * UNIT;
        let mut t = token(supply, 0);
        let mut owner = holder(supply);
        let mut a = holder(0);
        let mut b = holder(0);
        let mut c = holder(0);
        t.install_schedule(RewardSchedule::new(T, T + 2 * DAY, RATE).unwrap(), T).unwrap();

        send(&mut t, &mut owner, &mut a, &mut c, 3_000 * UNIT, T);
        send(&mut t, &mut owner, &mut b, &mut c, 1_000 * UNIT, T);
        send(&mut t, &mut a, &mut b, &mut c, 2_000 * UNIT, T + DAY);

        let rpt = t.update_reward_per_token(T + 2 * DAY).unwrap();
        a.settle(rpt).unwrap();
        b.settle(rpt).unwrap();
        let total = RATE * 2 * DAY as u64;
        assert!(a.rewards_accrued.abs_diff(b.rewards_accrued) <= 2);
        assert!(a.rewards_accrued + b.rewards_accrued <= total);
        assert!(total - (a.rewards_accrued + b.rewards_accrued) <= 4);
    }

    #[test]
    fn ratio_matches_balance_ratio() {
        let supply = 10_000 * UNIT;
        let mut t = token(supply, 0);
        let mut owner = holder(supply);
        let mut a = holder(0);
        let mut b = holder(0);
        let mut c = holder(0);
        send(&mut t, &mut owner, &mut a, &mut c, 6_000 * UNIT, T - DAY);
        send(&mut t, &mut owner, &mut b, &mut c, 2_000 * UNIT, T - DAY);
        t.install_schedule(RewardSchedule::new(T, T + DAY, RATE).unwrap(), T - DAY).unwrap();

        let rpt = t.update_reward_per_token(T + DAY).unwrap();
        a.settle(rpt).unwrap();
        b.settle(rpt).unwrap();
        owner.settle(rpt).unwrap();
        // 60% / 20% / 20% of RATE * DAY.
        let total = RATE * DAY as u64;
        assert_eq!(a.rewards_accrued, total * 6 / 10);
        assert_eq!(b.rewards_accrued, total * 2 / 10);
        assert_eq!(owner.rewards_accrued, total * 2 / 10);
    }

    #[test]
    fn holders_joining_late_earn_nothing_for_the_past() {
        let mut t = token(1_000, 0);
        let mut owner = holder(1_000);
        let mut late = holder(0);
        let mut c = holder(0);
        t.install_schedule(RewardSchedule::new(T, T + DAY, 10).unwrap(), T).unwrap();

        send(&mut t, &mut owner, &mut late, &mut c, 500, T + DAY / 2);
        assert_eq!(late.rewards_accrued, 0);
        assert_eq!(owner.rewards_accrued, 10 * (DAY as u64) / 2);

        let rpt = t.update_reward_per_token(T + 3 * DAY).unwrap();
        late.settle(rpt).unwrap();
        owner.settle(rpt).unwrap();
        assert_eq!(late.rewards_accrued, 10 * (DAY as u64) / 4);
        assert_eq!(owner.rewards_accrued, 10 * (DAY as u64) * 3 / 4);
    }

    #[test]
    fn collector_earns_on_collected_fees() {
        let mut t = token(1_000, 5_000);
        let mut a = holder(1_000);
        let mut b = holder(0);
        let mut c = holder(0);
        t.install_schedule(RewardSchedule::new(T, T + 100, 10).unwrap(), T).unwrap();
        send(&mut t, &mut a, &mut b, &mut c, 400, T);
        // a: 600, b: 200, c: 200 for the whole window.
        let rpt = t.update_reward_per_token(T + 100).unwrap();
        for h in [&mut a, &mut b, &mut c] {
            h.settle(rpt).unwrap();
        }
        assert_eq!(a.rewards_accrued, 600);
        assert_eq!(b.rewards_accrued, 200);
        assert_eq!(c.rewards_accrued, 200);
    }

    #[test]
    fn second_claim_without_elapsed_time_is_zero() {
        let mut t = token(1_000, 0);
        let mut a = holder(1_000);
        t.install_schedule(RewardSchedule::new(T, T + DAY, 3).unwrap(), T).unwrap();

        let rpt = t.update_reward_per_token(T + 1_000).unwrap();
        a.settle(rpt).unwrap();
        assert_eq!(a.take_rewards().unwrap(), 3_000);

        let rpt = t.update_reward_per_token(T + 1_000).unwrap();
        a.settle(rpt).unwrap();
        assert_eq!(a.take_rewards().unwrap(), 0);
        assert_eq!(a.total_claimed, 3_000);
    }

    #[test]
    fn replacing_schedule_keeps_earned_rewards() {
        let mut t = token(2_000, 0);
        let mut owner = holder(2_000);
        let mut a = holder(0);
        let mut c = holder(0);
        t.install_schedule(RewardSchedule::new(T, T + 2 * DAY, 20).unwrap(), T).unwrap();
        send(&mut t, &mut owner, &mut a, &mut c, 1_000, T + 100);

        let now = T + DAY;
        let before = a.earned(t.reward_per_token_at(now).unwrap()).unwrap();
        assert!(before > 0);
        t.install_schedule(RewardSchedule::new(now, now + DAY, 1).unwrap(), now).unwrap();
        let after = a.earned(t.reward_per_token_at(now).unwrap()).unwrap();
        assert_eq!(before, after);

        // Accrual continues at the new rate.
        let later = a.earned(t.reward_per_token_at(now + 100).unwrap()).unwrap();
        assert_eq!(later - after, 100 / 2);
    }

    #[test]
    fn expired_schedule_stops_accrual_until_replaced() {
        let mut t = token(100, 0);
        let mut a = holder(100);
        t.install_schedule(RewardSchedule::new(T, T + 10, 1).unwrap(), T).unwrap();
        let rpt = t.update_reward_per_token(T + 1_000_000).unwrap();
        a.settle(rpt).unwrap();
        assert_eq!(a.rewards_accrued, 10);
        assert_eq!(t.last_update_time, T + 10);

        t.install_schedule(RewardSchedule::new(T + 2_000_000, T + 2_000_010, 1).unwrap(), T + 1_500_000)
            .unwrap();
        // Gap between the two windows earns nothing.
        assert_eq!(a.earned(t.reward_per_token_at(T + 2_000_000).unwrap()).unwrap(), 10);
        assert_eq!(a.earned(t.reward_per_token_at(T + 2_000_005).unwrap()).unwrap(), 15);
    }

    #[test]
    fn oversized_rate_is_refused_and_transfers_keep_working() {
        let mut t = token(1_000 * UNIT, 100);
        let mut a = holder(1_000 * UNIT);
        let mut b = holder(0);
        let mut c = holder(0);
        t.install_schedule(RewardSchedule::new(T, T + 14 * DAY, RATE).unwrap(), T).unwrap();
        let installed = t.schedule;

        let huge = RewardSchedule::new(T, T + 14 * DAY, 1_000_000_000_000_000);
        assert!(matches!(huge, Err(AutostakeError::InvalidSchedule)));
        assert_eq!(t.schedule, installed);

        let out = send(&mut t, &mut a, &mut b, &mut c, 10 * UNIT, T + 1_000_000);
        assert_eq!(out.net, 10 * UNIT - UNIT / 10);
        assert_eq!(a.rewards_accrued, RATE * 1_000_000);

        // Replacing the schedule still works afterwards.
        t.install_schedule(RewardSchedule::new(T + 1_000_000, T + 1_000_000 + DAY, 1).unwrap(), T + 1_000_000)
            .unwrap();
    }

    #[test]
    fn two_day_window_with_six_holders() {
        // Owner distributes to six holders, they shuffle one unit each after a
        // day, everyone claims after the window closes.
        let supply = 10_000 * UNIT;
        let mut t = token(supply, 100);
        let mut holders: Vec<Holder> = (0..7).map(|_| holder(0)).collect();
        holders[0].balance = supply;
        let mut collector = holder(0);
        t.install_schedule(RewardSchedule::new(T, T + 2 * DAY, RATE).unwrap(), T).unwrap();

        for i in 1..7 {
            let (left, right) = holders.split_at_mut(i);
            send(&mut t, &mut left[0], &mut right[0], &mut collector, 1_000 * UNIT, T);
        }
        for i in 1..7 {
            let (left, right) = holders.split_at_mut(i);
            send(&mut t, &mut right[0], &mut left[i - 1], &mut collector, UNIT, T + DAY);
        }

        let rpt = t.update_reward_per_token(T + 2 * DAY).unwrap();
        let mut claimed = 0u64;
        for h in holders.iter_mut().chain(core::iter::once(&mut collector)) {
            h.settle(rpt).unwrap();
            claimed += h.take_rewards().unwrap();
        }
        let balances: u64 = holders.iter().map(|h| h.balance).sum::<u64>() + collector.balance;
        assert_eq!(balances, supply);

        let emitted = RATE * 2 * DAY as u64;
        assert!(claimed <= emitted);
        assert!(emitted - claimed <= 8);

        // Holder 6 held 990 units on day one and 989 on day two (it only sent);
        // its payout matches the closed-form formula for each day.
        let h6 = 990 * UNIT;
        let first_day = (RATE as u128 * DAY as u128 * h6 as u128 / supply as u128) as u64;
        let second_day = (RATE as u128 * DAY as u128 * (h6 - UNIT) as u128 / supply as u128) as u64;
        assert!(holders[6].total_claimed.abs_diff(first_day + second_day) <= 2);
    }
}
