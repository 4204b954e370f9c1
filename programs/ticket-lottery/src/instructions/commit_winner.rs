use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::state::Lottery;

/// Accounts required to commit a randomness account for the next draw.
///
/// Ensures:
/// 1. Only the operator can commit the randomness.
/// 2. The randomness account is valid and has not been revealed previously.
#[derive(Accounts)]
pub struct CommitRandomness<'info> {
    pub operator: Signer<'info>,

    /// The main lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_commit_randomness(ctx: Context<CommitRandomness>) -> Result<()> {
    let clock = Clock::get()?;
    let lottery = &mut ctx.accounts.lottery;
    lottery.ensure_operator(ctx.accounts.operator.key())?;

    let seed_slot = RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
        .map_err(|_| LotteryError::InvalidRandomnessAccount)?
        .seed_slot;

    if seed_slot != clock.slot.saturating_sub(1) {
        msg!("Current slot: {}", clock.slot);
        msg!("Seed slot: {}", seed_slot);
        return err!(LotteryError::RandomnessAlreadyRevealed);
    }

    lottery.randomness_account = ctx.accounts.randomness_account_data.key();
    msg!("Committed randomness account {}", lottery.randomness_account);

    Ok(())
}
