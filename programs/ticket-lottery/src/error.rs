use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("No tickets available in this round")]
    NoTicketsAvailable,

    #[msg("Attached amount does not cover the ticket cost")]
    InsufficientPayment,

    #[msg("Requested more tickets than remain in this round")]
    InvalidCount,

    #[msg("Only the operator can perform this action")]
    NotAuthorized,

    #[msg("Round is not sold out yet")]
    RoundNotComplete,

    #[msg("Operation not allowed")]
    OperationNotAllowed,

    #[msg("Ticket capacity must be between 1 and the account limit")]
    InvalidCapacity,

    #[msg("No participant recorded at the drawn index")]
    ParticipantMissing,

    #[msg("Winner account does not match the drawn participant")]
    WinnerAccountMismatch,

    #[msg("Lottery account holds less than required")]
    InsufficientPot,

    #[msg("Lamport balance overflow")]
    LamportOverflow,

    #[msg("Randomness account could not be parsed")]
    InvalidRandomnessAccount,

    #[msg("Randomness account does not match the committed one")]
    IncorrectRandomnessAccount,

    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,

    #[msg("Randomness not resolved yet")]
    RandomnessNotResolved,
}
