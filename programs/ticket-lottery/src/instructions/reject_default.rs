use anchor_lang::prelude::*;

use crate::state::reject_default;

/// Handles every instruction that matches none of the program's entry points.
pub fn process_reject_default(accounts: &[AccountInfo], data: &[u8]) -> Result<()> {
    msg!(
        "Rejecting unknown instruction ({} accounts, {} bytes)",
        accounts.len(),
        data.len()
    );
    reject_default()
}
