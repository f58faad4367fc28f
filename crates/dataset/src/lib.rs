//! # dataset
//!
//! Collection-level stages of the corpus cleaner:
//!
//! - Drop filters (non-Persian rows, ambiguous or barter listings, installment ads)
//! - Group-stratified balancing
//! - Noise vocabulary extraction and synthetic augmentation of small groups
//! - Price sanitation
//!
//! Every stage takes the collection by reference and returns a new one.
//! Random stages take the generator explicitly so runs can be seeded.

pub mod balance;
pub mod filter;
pub mod noise;
pub mod price;

pub use balance::{balance, resample};
pub use filter::{drop_foreign_only, is_foreign_only, is_valid_listing, ValidityFilter};
pub use noise::{
    generate_noisy_dataset, inject_noise, normalized_noisy_words, noisy_words, noisy_words_from,
    NoiseVocabulary,
};
pub use price::sanitize_price;
