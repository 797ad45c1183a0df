use anchor_lang::prelude::*;

#[derive(
    AnchorSerialize, AnchorDeserialize, Default, Clone, Copy, PartialEq, Eq, Debug, InitSpace,
)]
pub enum AuctionStatus {
    #[default]
    /// Created, bids not admitted yet
    Scheduled = 0,
    /// Inside the bid window
    Open = 1,
    /// Past the bid window, awaiting settlement
    Expired = 2,
    /// Settled, terminal
    Closed = 3,
}
