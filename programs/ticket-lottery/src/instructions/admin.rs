use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::LotteryReconfigured;
use crate::state::Lottery;

/// Accounts required to deploy the lottery.
/// The payer becomes the operator of every future round.
#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Lottery state account that stores the round.
    #[account(
        init,
        payer = payer,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts required to change the ticket price and capacity.
#[derive(Accounts)]
pub struct Reconfigure<'info> {
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Creates the lottery with the default capacity and ticket cost.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeLottery accounts
pub fn process_initialize_lottery(ctx: Context<InitializeLottery>) -> Result<()> {
    let lottery = Lottery::new(ctx.accounts.payer.key(), ctx.bumps.lottery);

    msg!("Operator: {}", lottery.operator);
    msg!(
        "Round of {} tickets at {} lamports",
        lottery.max_tickets,
        lottery.ticket_cost
    );

    ctx.accounts.lottery.set_inner(lottery);
    Ok(())
}

/// Sets a new ticket cost and capacity. Any tickets sold in the running round
/// are voided; their lamports stay in the pot.
///
/// # Arguments
/// * `ctx` - Context holding the Reconfigure accounts
/// * `ticket_cost` - New price per ticket in lamports
/// * `max_tickets` - New round capacity
pub fn process_reconfigure(ctx: Context<Reconfigure>, ticket_cost: u64, max_tickets: u64) -> Result<()> {
    let operator = ctx.accounts.operator.key();
    let lottery = &mut ctx.accounts.lottery;

    let voided_tickets = lottery.reconfigure(operator, ticket_cost, max_tickets)?;

    if voided_tickets > 0 {
        msg!("Voided {} tickets of the open round", voided_tickets);
    }
    msg!("Round of {} tickets at {} lamports", max_tickets, ticket_cost);

    emit!(LotteryReconfigured {
        ticket_cost,
        max_tickets,
        voided_tickets,
    });

    Ok(())
}
