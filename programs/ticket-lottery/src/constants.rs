use solana_program::native_token::LAMPORTS_PER_SOL;

/// Seed of the single lottery PDA.
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Capacity of a freshly deployed lottery.
pub const DEFAULT_MAX_TICKETS: u64 = 5;

/// Ticket price of a freshly deployed lottery, one whole SOL.
pub const DEFAULT_TICKET_COST: u64 = LAMPORTS_PER_SOL;

/// Room reserved for `Lottery::participants`.
pub const MAX_PARTICIPANTS: usize = 100;

/// Upper bound for `max_tickets`.
pub const MAX_CAPACITY: u64 = MAX_PARTICIPANTS as u64;
