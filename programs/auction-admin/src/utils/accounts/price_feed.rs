use anchor_lang::prelude::*;
use shared::check_condition;
use shared::errors::ErrorCode;

use crate::state::PriceFeed;

impl PriceFeed {
    /// Validate that the signer is the feed's publishing authority.
    ///
    /// # Arguments
    /// * `authority` - The signer to check.
    pub fn validate_authority(&self, authority: &Pubkey) -> Result<()> {
        check_condition!(self.authority == *authority, Unauthorized);

        Ok(())
    }

    /// Store a new answer as reported. Non-positive answers are kept: a broken
    /// oracle is a real state, and consumers reject it at read time.
    ///
    /// # Arguments
    /// * `answer` - The reported price.
    /// * `current_time` - The current on-chain time (seconds).
    pub fn record_answer(&mut self, answer: i64, current_time: u64) {
        self.latest_answer = answer;
        self.updated_at = current_time;
    }
}
