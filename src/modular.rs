//! Modular arithmetic in the Montgomery domain.
//!
//! [`MontyParams`] captures the per-session configuration for one odd
//! modulus; [`MontyForm`] is a value living in the Montgomery domain. The
//! slice kernels ([`montgomery_mul`], [`mont_add`], [`mont_sub`]) are also
//! exported directly for callers managing their own buffers.

mod add;
mod monty_form;
mod monty_params;
mod reduction;
mod sub;

pub use self::{
    add::mont_add,
    monty_form::MontyForm,
    monty_params::MontyParams,
    reduction::{mod_neg_inv, montgomery_mul},
    sub::mont_sub,
};
