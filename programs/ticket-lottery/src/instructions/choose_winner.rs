use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::events::WinnerDrawn;
use crate::instructions::{pot_balance, transfer_from_pot};
use crate::state::{Lottery, Payout};

/// Accounts required to draw the winner of a sold-out round.
///
/// This ensures that:
/// 1. Only the operator can draw.
/// 2. The round is sold out.
/// 3. The lamports go to the wallet of the drawn participant.
#[derive(Accounts)]
pub struct DrawWinner<'info> {
    pub operator: Signer<'info>,

    /// The main lottery state account, holding the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Wallet of the drawn participant.
    /// CHECK: Compared against the drawn participant within the handler.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Same as `DrawWinner`, with the seed taken from a committed Switchboard
/// randomness account.
#[derive(Accounts)]
pub struct DrawWinnerWithRandomness<'info> {
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// CHECK: Compared against the drawn participant within the handler.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_draw_winner(ctx: Context<DrawWinner>, random_seed: u64) -> Result<()> {
    settle_draw(
        &ctx.accounts.operator,
        &mut ctx.accounts.lottery,
        &ctx.accounts.winner,
        random_seed,
    )?;
    Ok(())
}

pub fn process_draw_winner_with_randomness(ctx: Context<DrawWinnerWithRandomness>) -> Result<()> {
    let clock = Clock::get()?;
    let lottery = &ctx.accounts.lottery;
    lottery.ensure_operator(ctx.accounts.operator.key())?;

    require!(
        lottery.randomness_account != Pubkey::default(),
        LotteryError::IncorrectRandomnessAccount
    );
    require_keys_eq!(
        ctx.accounts.randomness_account_data.key(),
        lottery.randomness_account,
        LotteryError::IncorrectRandomnessAccount
    );

    let random_seed = {
        let randomness_data =
            RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
                .map_err(|_| LotteryError::InvalidRandomnessAccount)?;
        let revealed_random_value = randomness_data
            .get_value(&clock)
            .map_err(|_| LotteryError::RandomnessNotResolved)?;
        seed_from_randomness(&revealed_random_value)
    };

    msg!("Randomness result: {}", random_seed);

    settle_draw(
        &ctx.accounts.operator,
        &mut ctx.accounts.lottery,
        &ctx.accounts.winner,
        random_seed,
    )?;
    Ok(())
}

/// Draws with `random_seed`, checks the supplied wallet against the drawn
/// participant and pays it the whole pot.
fn settle_draw<'info>(
    operator: &Signer<'info>,
    lottery: &mut Account<'info, Lottery>,
    winner: &UncheckedAccount<'info>,
    random_seed: u64,
) -> Result<Payout> {
    let lottery_info = lottery.to_account_info();
    let pot = pot_balance(&lottery_info, &Rent::get()?)?;

    let payout = lottery.draw_winner(operator.key(), random_seed, pot)?;
    ensure_winner_account(winner.key(), &payout)?;

    msg!("Winner: ticket {} ({})", payout.winner_index, payout.winner);
    msg!("Paying out {} lamports", payout.amount);

    transfer_from_pot(&lottery_info, &winner.to_account_info(), payout.amount)?;

    emit!(WinnerDrawn {
        round: lottery.rounds_completed,
        random_seed,
        winner_index: payout.winner_index,
        winner: payout.winner,
        payout: payout.amount,
    });

    Ok(payout)
}

/// The wallet supplied for the payout must be the drawn participant's.
pub fn ensure_winner_account(winner: Pubkey, payout: &Payout) -> Result<()> {
    require_keys_eq!(winner, payout.winner, LotteryError::WinnerAccountMismatch);
    Ok(())
}

/// Reads the first eight bytes of a revealed value as a little-endian seed.
pub fn seed_from_randomness(value: &[u8; 32]) -> u64 {
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&value[..8]);
    u64::from_le_bytes(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn test_winner_account_must_match_drawn_participant() {
        let drawn = Pubkey::new_unique();
        let payout = Payout {
            winner_index: 3,
            winner: drawn,
            amount: 18,
        };

        assert!(ensure_winner_account(drawn, &payout).is_ok());
        assert_eq!(
            ensure_winner_account(Pubkey::new_unique(), &payout).unwrap_err(),
            Error::from(LotteryError::WinnerAccountMismatch)
        );
    }

    #[test]
    fn test_seed_uses_leading_bytes() {
        let mut value = [0xffu8; 32];
        value[..8].copy_from_slice(&21u64.to_le_bytes());

        assert_eq!(seed_from_randomness(&value), 21);
    }

    #[test]
    fn test_seed_of_zero_value() {
        assert_eq!(seed_from_randomness(&[0u8; 32]), 0);
    }
}
