pub mod admin;
pub mod buy_ticket;
pub mod choose_winner;
pub mod commit_winner;
pub mod payout;
pub mod reject_default;

pub use admin::*;
pub use buy_ticket::*;
pub use choose_winner::*;
pub use commit_winner::*;
pub use payout::*;
pub use reject_default::*;
