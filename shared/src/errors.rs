//! Error codes for the auction suite.
//!
//! Custom errors for Anchor programs start at 6000. i.e. here Unauthorized error would be 6000 and
//! InvalidBump would be 6001.

use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Invalid bump")]
    InvalidBump,

    #[msg("Invalid PDA")]
    InvalidPda,

    #[msg("Math Overflow")]
    MathOverflow,

    #[msg("Invalid Auction Id")]
    InvalidAuctionId,

    #[msg("Invalid Start Time")]
    InvalidStartTime,

    #[msg("Invalid End Time")]
    InvalidEndTime,

    #[msg("Invalid Starting Price")]
    InvalidStartingPrice,

    #[msg("Starting Currency Not Accepted")]
    StartingCurrencyNotAccepted,

    #[msg("Empty Currency List")]
    EmptyCurrencyList,

    #[msg("Too Many Currencies")]
    TooManyCurrencies,

    #[msg("Duplicate Currency")]
    DuplicateCurrency,

    #[msg("Unsupported Currency")]
    UnsupportedCurrency,

    #[msg("Invalid Price Feed")]
    InvalidPriceFeed,

    #[msg("Invalid Price Feed Account")]
    InvalidPriceFeedAccount,

    #[msg("Auction Not Started")]
    AuctionNotStarted,

    #[msg("Auction Expired")]
    AuctionExpired,

    #[msg("Auction Already Ended")]
    AuctionAlreadyEnded,

    #[msg("Auction Not Over")]
    AuctionNotOver,

    #[msg("Bid Too Low")]
    BidTooLow,

    #[msg("Invalid Bid Amount")]
    InvalidBidAmount,

    #[msg("Invalid Currency Mint")]
    InvalidCurrencyMint,

    #[msg("Missing Currency Mint")]
    MissingCurrencyMint,

    #[msg("Missing Bidder Token Account")]
    MissingBidderTokenAccount,

    #[msg("Invalid Bidder Token Account")]
    InvalidBidderTokenAccount,

    #[msg("Missing Escrow Token Account")]
    MissingEscrowTokenAccount,

    #[msg("Invalid Escrow Token Account")]
    InvalidEscrowTokenAccount,

    #[msg("Missing Previous Bidder")]
    MissingPreviousBidder,

    #[msg("Invalid Previous Bidder")]
    InvalidPreviousBidder,

    #[msg("Missing Previous Bidder Token Account")]
    MissingPreviousBidderTokenAccount,

    #[msg("Invalid Previous Bidder Token Account")]
    InvalidPreviousBidderTokenAccount,

    #[msg("Unsupported SPL Token")]
    UnsupportedSPLToken,

    #[msg("Unsupported Asset")]
    UnsupportedAsset,

    #[msg("Insufficient Asset Balance")]
    InsufficientAssetBalance,

    #[msg("Invalid Asset Mint")]
    InvalidAssetMint,

    #[msg("Invalid Asset Recipient")]
    InvalidAssetRecipient,

    #[msg("Invalid Recipient Token Account")]
    InvalidRecipientTokenAccount,

    #[msg("Invalid Seller")]
    InvalidSeller,

    #[msg("Fee Exceeds Bid")]
    FeeExceedsBid,

    #[msg("Invalid Fee Numerator")]
    InvalidFeeNumerator,

    #[msg("Invalid Fee Recipient")]
    InvalidFeeRecipient,

    #[msg("Invalid Fee Vault")]
    InvalidFeeVault,

    #[msg("Insufficient Vault Balance")]
    InsufficientVaultBalance,

    #[msg("Invalid Token Amount")]
    InvalidTokenAmount,
}

/// Check a condition and return an error if it is not met.
///
/// # Arguments
/// * `condition` - The condition to check.
/// * `error` - The error to return if the condition is not met.
#[macro_export]
macro_rules! check_condition {
    ($condition:expr, $error:expr) => {
        if !$condition {
            return Err(error!(ErrorCode::$error));
        }
    };
}
