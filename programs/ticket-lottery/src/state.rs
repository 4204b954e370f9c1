use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_MAX_TICKETS, DEFAULT_TICKET_COST, MAX_CAPACITY, MAX_PARTICIPANTS};
use crate::error::LotteryError;

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The only key allowed to draw a winner or change the round parameters.
    pub operator: Pubkey,

    /// The price (in lamports) of a single ticket.
    pub ticket_cost: u64,

    /// Number of tickets in a full round. Also the divisor used to pick the
    /// winning index, so it is never zero.
    pub max_tickets: u64,

    /// Tickets still for sale in the current round.
    pub tickets_available: u64,

    /// Buyer of each sold ticket, indexed by ticket number in purchase order.
    /// Always holds exactly `max_tickets - tickets_available` entries.
    #[max_len(MAX_PARTICIPANTS)]
    pub participants: Vec<Pubkey>,

    /// Number of rounds that ended in a payout.
    pub rounds_completed: u64,

    /// Switchboard randomness account committed for the next draw,
    /// `Pubkey::default()` when nothing is committed.
    pub randomness_account: Pubkey,
}

/// Outcome of a successful ticket purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketPurchase {
    pub count: u64,
    /// Amount kept by the lottery for the tickets.
    pub cost: u64,
    /// Surplus to hand back to the buyer.
    pub refund: u64,
}

/// Outcome of a successful draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub winner_index: u64,
    pub winner: Pubkey,
    pub amount: u64,
}

impl Lottery {
    /// A lottery as it looks right after deployment.
    pub fn new(operator: Pubkey, bump: u8) -> Self {
        Self {
            bump,
            operator,
            ticket_cost: DEFAULT_TICKET_COST,
            max_tickets: DEFAULT_MAX_TICKETS,
            tickets_available: DEFAULT_MAX_TICKETS,
            participants: Vec::new(),
            rounds_completed: 0,
            randomness_account: Pubkey::default(),
        }
    }

    pub fn tickets_sold(&self) -> u64 {
        self.participants.len() as u64
    }

    pub fn is_sold_out(&self) -> bool {
        self.tickets_available == 0
    }

    pub fn ensure_operator(&self, caller: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.operator, LotteryError::NotAuthorized);
        Ok(())
    }

    /// Records `count` tickets for `buyer`, who attached `attached_value`
    /// lamports. Returns how much of the attached value is kept and how much
    /// goes back to the buyer.
    pub fn purchase_tickets(
        &mut self,
        buyer: Pubkey,
        count: u64,
        attached_value: u64,
    ) -> Result<TicketPurchase> {
        require!(self.tickets_available > 0, LotteryError::NoTicketsAvailable);

        // An overflowing price can never be covered by a u64 payment.
        let cost = count
            .checked_mul(self.ticket_cost)
            .ok_or(LotteryError::InsufficientPayment)?;
        require!(attached_value >= cost, LotteryError::InsufficientPayment);
        require!(count <= self.tickets_available, LotteryError::InvalidCount);

        // count <= tickets_available <= MAX_CAPACITY
        self.participants
            .extend(std::iter::repeat(buyer).take(count as usize));
        self.tickets_available -= count;

        Ok(TicketPurchase {
            count,
            cost,
            refund: attached_value - cost,
        })
    }

    /// Picks `participants[random_seed % max_tickets]`, hands it the whole
    /// `balance` and starts a new round.
    pub fn draw_winner(
        &mut self,
        caller: Pubkey,
        random_seed: u64,
        balance: u64,
    ) -> Result<Payout> {
        self.ensure_operator(caller)?;
        require!(self.is_sold_out(), LotteryError::RoundNotComplete);

        let winner_index = random_seed
            .checked_rem(self.max_tickets)
            .ok_or(LotteryError::InvalidCapacity)?;
        let winner = usize::try_from(winner_index)
            .ok()
            .and_then(|index| self.participants.get(index))
            .copied()
            .ok_or(LotteryError::ParticipantMissing)?;

        self.reset_round();
        self.rounds_completed = self.rounds_completed.saturating_add(1);

        Ok(Payout {
            winner_index,
            winner,
            amount: balance,
        })
    }

    /// Replaces the ticket price and capacity and re-arms the round.
    ///
    /// Tickets already sold in the current round are voided so that the
    /// participant list keeps matching the availability counter. Lamports
    /// paid for them stay in the pot and go to the next winner. Returns the
    /// number of voided tickets.
    pub fn reconfigure(
        &mut self,
        caller: Pubkey,
        new_cost: u64,
        new_max_tickets: u64,
    ) -> Result<u64> {
        self.ensure_operator(caller)?;
        require!(
            (1..=MAX_CAPACITY).contains(&new_max_tickets),
            LotteryError::InvalidCapacity
        );

        let voided = self.tickets_sold();
        self.ticket_cost = new_cost;
        self.max_tickets = new_max_tickets;
        self.reset_round();

        Ok(voided)
    }

    fn reset_round(&mut self) {
        self.participants.clear();
        self.tickets_available = self.max_tickets;
        self.randomness_account = Pubkey::default();
    }
}

/// Deny-by-default answer for anything that is not a named instruction.
pub fn reject_default() -> Result<()> {
    err!(LotteryError::OperationNotAllowed)
}
