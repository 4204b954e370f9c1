use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::events::TicketsPurchased;
use crate::instructions::transfer_from_pot;
use crate::state::Lottery;

/// Accounts required to buy lottery tickets.
#[derive(Accounts)]
pub struct PurchaseTickets<'info> {
    /// The account paying for the tickets. Receives any surplus back.
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Lottery state account tracking the current round. Also holds the pot.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program interface
    pub system_program: Program<'info, System>,
}

/// Buys `count` tickets for the caller.
///
/// Steps performed:
/// 1. Record one participant entry per ticket (fails before any transfer
///    when the round is sold out, underpaid or oversold).
/// 2. Transfer the attached `amount` from the buyer into the lottery.
/// 3. Refund whatever exceeds `count * ticket_cost`.
///
/// # Arguments
/// * `ctx` - Context containing PurchaseTickets accounts
/// * `count` - Number of tickets to buy
/// * `amount` - Lamports attached to the purchase
pub fn process_purchase_tickets(ctx: Context<PurchaseTickets>, count: u64, amount: u64) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let receipt = ctx.accounts.lottery.purchase_tickets(buyer, count, amount)?;

    if amount > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.lottery.to_account_info(),
                },
            ),
            amount,
        )?;
    }

    if receipt.refund > 0 {
        msg!("Refunding {} lamports", receipt.refund);
        transfer_from_pot(
            &ctx.accounts.lottery.to_account_info(),
            &ctx.accounts.buyer.to_account_info(),
            receipt.refund,
        )?;
    }

    let tickets_available = ctx.accounts.lottery.tickets_available;
    msg!("Sold {} tickets to {}", receipt.count, buyer);
    msg!("Tickets available: {}", tickets_available);

    emit!(TicketsPurchased {
        buyer,
        count: receipt.count,
        cost: receipt.cost,
        refund: receipt.refund,
        tickets_available,
    });

    Ok(())
}
