pub mod account;
pub mod match_v5;
