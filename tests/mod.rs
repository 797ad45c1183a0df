//! Test module for the auction house program as well as the auction admin program.
//! The unit tests only cover tests that don't require an Account<>, AccountLoader<> or AccountInfo<> as parameters,
//! to make it simpler when trying to mock data. Those different functions will be tested in the integration tests indirectly.
pub mod auction_admin;
pub mod auction_house;
pub mod fixtures;
