use anchor_lang::prelude::*;

use crate::error::LotteryError;

/// Lamports held by `lottery` above its rent-exempt minimum. This is the pot
/// a draw pays out.
pub fn pot_balance(lottery: &AccountInfo, rent: &Rent) -> Result<u64> {
    let rent_exempt = rent.minimum_balance(lottery.data_len());
    lottery
        .lamports()
        .checked_sub(rent_exempt)
        .ok_or_else(|| error!(LotteryError::InsufficientPot))
}

/// Moves `amount` lamports out of the program-owned lottery account.
///
/// The lottery PDA carries account data, so the system program cannot debit
/// it; the lamports are moved directly. Neither balance changes on failure.
pub fn transfer_from_pot(lottery: &AccountInfo, recipient: &AccountInfo, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let mut from = lottery.try_borrow_mut_lamports()?;
    let mut to = recipient.try_borrow_mut_lamports()?;
    let debited = (**from)
        .checked_sub(amount)
        .ok_or(LotteryError::InsufficientPot)?;
    let credited = (**to)
        .checked_add(amount)
        .ok_or(LotteryError::LamportOverflow)?;
    **from = debited;
    **to = credited;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    use crate::instructions::ensure_winner_account;
    use crate::state::Lottery;

    #[test]
    fn test_transfer_moves_exact_amount() {
        let owner = crate::ID;
        let (pot_key, winner_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut pot_lamports, mut winner_lamports) = (100u64, 5u64);
        let (mut pot_data, mut winner_data) = ([0u8; 8], [0u8; 0]);
        let pot = AccountInfo::new(&pot_key, false, true, &mut pot_lamports, &mut pot_data, &owner, false, 0);
        let winner = AccountInfo::new(&winner_key, false, true, &mut winner_lamports, &mut winner_data, &owner, false, 0);

        transfer_from_pot(&pot, &winner, 40).unwrap();

        assert_eq!(pot.lamports(), 60);
        assert_eq!(winner.lamports(), 45);
    }

    #[test]
    fn test_overdraw_leaves_balances_untouched() {
        let owner = crate::ID;
        let (pot_key, winner_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut pot_lamports, mut winner_lamports) = (60u64, 45u64);
        let (mut pot_data, mut winner_data) = ([0u8; 8], [0u8; 0]);
        let pot = AccountInfo::new(&pot_key, false, true, &mut pot_lamports, &mut pot_data, &owner, false, 0);
        let winner = AccountInfo::new(&winner_key, false, true, &mut winner_lamports, &mut winner_data, &owner, false, 0);

        let err = transfer_from_pot(&pot, &winner, 61).unwrap_err();

        assert_eq!(err, Error::from(LotteryError::InsufficientPot));
        assert_eq!(pot.lamports(), 60);
        assert_eq!(winner.lamports(), 45);
    }

    #[test]
    fn test_credit_overflow_leaves_balances_untouched() {
        let owner = crate::ID;
        let (pot_key, winner_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut pot_lamports, mut winner_lamports) = (10u64, u64::MAX - 1);
        let (mut pot_data, mut winner_data) = ([0u8; 8], [0u8; 0]);
        let pot = AccountInfo::new(&pot_key, false, true, &mut pot_lamports, &mut pot_data, &owner, false, 0);
        let winner = AccountInfo::new(&winner_key, false, true, &mut winner_lamports, &mut winner_data, &owner, false, 0);

        let err = transfer_from_pot(&pot, &winner, 2).unwrap_err();

        assert_eq!(err, Error::from(LotteryError::LamportOverflow));
        assert_eq!(pot.lamports(), 10);
        assert_eq!(winner.lamports(), u64::MAX - 1);
    }

    #[test]
    fn test_zero_transfer_is_noop() {
        let owner = crate::ID;
        let (pot_key, winner_key) = (Pubkey::new_unique(), Pubkey::new_unique());
        let (mut pot_lamports, mut winner_lamports) = (0u64, 7u64);
        let (mut pot_data, mut winner_data) = ([0u8; 8], [0u8; 0]);
        let pot = AccountInfo::new(&pot_key, false, true, &mut pot_lamports, &mut pot_data, &owner, false, 0);
        let winner = AccountInfo::new(&winner_key, false, true, &mut winner_lamports, &mut winner_data, &owner, false, 0);

        transfer_from_pot(&pot, &winner, 0).unwrap();

        assert_eq!(pot.lamports(), 0);
        assert_eq!(winner.lamports(), 7);
    }

    #[test]
    fn test_pot_excludes_rent_exempt_minimum() {
        let rent = Rent::default();
        let owner = crate::ID;
        let key = Pubkey::new_unique();
        let mut data = [0u8; 64];
        let mut lamports = rent.minimum_balance(data.len()) + 18;
        let pot = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert_eq!(pot_balance(&pot, &rent).unwrap(), 18);
    }

    #[test]
    fn test_pot_below_rent_exempt_is_rejected() {
        let rent = Rent::default();
        let owner = crate::ID;
        let key = Pubkey::new_unique();
        let mut data = [0u8; 64];
        let mut lamports = rent.minimum_balance(data.len()) - 1;
        let pot = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        let err = pot_balance(&pot, &rent).unwrap_err();
        assert_eq!(err, Error::from(LotteryError::InsufficientPot));
    }

    #[test]
    fn test_round_settles_whole_pot_to_winner() {
        let rent = Rent::default();
        let owner = crate::ID;
        let operator = Pubkey::new_unique();
        let (pot_key, alice_key, bob_key) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let mut pot_data = [0u8; 64];
        let rent_exempt = rent.minimum_balance(pot_data.len());
        let (mut pot_lamports, mut alice_lamports, mut bob_lamports) = (rent_exempt, 0u64, 0u64);
        let (mut alice_data, mut bob_data) = ([0u8; 0], [0u8; 0]);
        let pot = AccountInfo::new(&pot_key, false, true, &mut pot_lamports, &mut pot_data, &owner, false, 0);
        let alice = AccountInfo::new(&alice_key, true, true, &mut alice_lamports, &mut alice_data, &owner, false, 0);
        let bob = AccountInfo::new(&bob_key, true, true, &mut bob_lamports, &mut bob_data, &owner, false, 0);

        let mut lottery = Lottery::new(operator, 255);
        lottery.reconfigure(operator, 2, 2).unwrap();

        // Each buyer overpays; the attached amount lands in the pot first.
        for (buyer, amount) in [(&alice, 5u64), (&bob, 3u64)] {
            let receipt = lottery.purchase_tickets(buyer.key(), 1, amount).unwrap();
            **pot.try_borrow_mut_lamports().unwrap() += amount;
            transfer_from_pot(&pot, buyer, receipt.refund).unwrap();
        }
        assert_eq!(alice.lamports(), 3);
        assert_eq!(bob.lamports(), 1);
        assert_eq!(pot_balance(&pot, &rent).unwrap(), 4);

        let payout = lottery
            .draw_winner(operator, 1, pot_balance(&pot, &rent).unwrap())
            .unwrap();
        assert_eq!(
            ensure_winner_account(alice.key(), &payout).unwrap_err(),
            Error::from(LotteryError::WinnerAccountMismatch)
        );
        ensure_winner_account(bob.key(), &payout).unwrap();
        transfer_from_pot(&pot, &bob, payout.amount).unwrap();

        assert_eq!(bob.lamports(), 5);
        assert_eq!(pot.lamports(), rent_exempt);
        assert_eq!(pot_balance(&pot, &rent).unwrap(), 0);
    }
}
