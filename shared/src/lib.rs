//! Data types shared between the listing store and its consumers.

pub mod account;
pub mod donation;
