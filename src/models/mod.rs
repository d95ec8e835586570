//! Data models for address-book entities.

pub mod contact;

pub use contact::Record;
