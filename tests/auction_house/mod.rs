pub mod test_auction;
pub mod test_fixed_size_string;
pub mod test_math_util;
pub mod test_price_normalizer;
