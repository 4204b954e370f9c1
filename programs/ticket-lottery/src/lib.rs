#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

declare_id!("61kwpJ43KE9SrZJ1RrKaUCn4xaTPG8W2ju9ZvgtguaZK");

#[program]
pub mod ticket_lottery {
    use super::*;

    pub fn initialize(ctx: Context<InitializeLottery>) -> Result<()> {
        process_initialize_lottery(ctx)
    }

    /// Buys `count` tickets, attaching `amount` lamports. Surplus is refunded.
    pub fn purchase_tickets(ctx: Context<PurchaseTickets>, count: u64, amount: u64) -> Result<()> {
        process_purchase_tickets(ctx, count, amount)
    }

    /// Pays the pot to `participants[random_seed % max_tickets]` and resets the round.
    pub fn draw_winner(ctx: Context<DrawWinner>, random_seed: u64) -> Result<()> {
        process_draw_winner(ctx, random_seed)
    }

    pub fn commit_randomness(ctx: Context<CommitRandomness>) -> Result<()> {
        process_commit_randomness(ctx)
    }

    pub fn draw_winner_with_randomness(ctx: Context<DrawWinnerWithRandomness>) -> Result<()> {
        process_draw_winner_with_randomness(ctx)
    }

    pub fn reconfigure(ctx: Context<Reconfigure>, ticket_cost: u64, max_tickets: u64) -> Result<()> {
        process_reconfigure(ctx, ticket_cost, max_tickets)
    }

    pub fn fallback<'info>(
        _program_id: &Pubkey,
        accounts: &'info [AccountInfo<'info>],
        data: &[u8],
    ) -> Result<()> {
        process_reject_default(accounts, data)
    }
}
