#![no_std]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::mod_module_files,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

mod limb;
mod odd;
mod primitives;
mod word;

pub mod modular;
pub mod uint;

pub use crate::{
    limb::Limb,
    odd::Odd,
    uint::Uint,
    word::{WideWord, Word},
};
pub use subtle;

#[cfg(feature = "rand")]
pub use rand_core;
