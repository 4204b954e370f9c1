use anchor_lang::prelude::*;

#[event]
pub struct TicketsPurchased {
    pub buyer: Pubkey,
    pub count: u64,
    pub cost: u64,
    pub refund: u64,
    pub tickets_available: u64,
}

#[event]
pub struct WinnerDrawn {
    pub round: u64,
    pub random_seed: u64,
    pub winner_index: u64,
    pub winner: Pubkey,
    pub payout: u64,
}

#[event]
pub struct LotteryReconfigured {
    pub ticket_cost: u64,
    pub max_tickets: u64,
    pub voided_tickets: u64,
}
