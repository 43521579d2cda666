//! Integers in Montgomery form.

use super::{MontyParams, reduction::montgomery_mul};
use crate::{Uint, uint::ct_lt};
use core::{fmt, ops::Mul};
use subtle::{Choice, ConstantTimeEq};

/// An integer in Montgomery form, carrying the [`MontyParams`] it was
/// created with.
///
/// Addition and subtraction are lazy: their results may exceed the modulus
/// (while staying under the sentinel bit), which is harmless because the
/// next [`mul`][`MontyForm::mul`] or [`retrieve`][`MontyForm::retrieve`]
/// passes through a full Montgomery reduction and canonicalizes.
#[derive(Clone)]
pub struct MontyForm {
    pub(super) montgomery_form: Uint,
    pub(super) params: MontyParams,
}

impl MontyForm {
    /// Converts `value` into Montgomery form, i.e. `value * R mod N`,
    /// via one Montgomery multiplication by `R^2 mod N`.
    ///
    /// Panics if `value` does not match the modulus width or is not below
    /// the modulus.
    pub fn new(value: &Uint, params: MontyParams) -> Self {
        assert_eq!(
            value.nlimbs(),
            params.nlimbs(),
            "operand width does not match the modulus"
        );
        assert!(
            bool::from(ct_lt(
                value.as_limbs(),
                params.modulus().as_ref().as_limbs()
            )),
            "value must be below the modulus"
        );

        let mut montgomery_form = Uint::zero(params.nlimbs());
        montgomery_mul(
            value.as_limbs(),
            params.r2().as_limbs(),
            params.modulus().as_ref().as_limbs(),
            params.mod_neg_inv(),
            montgomery_form.as_mut_limbs(),
        );
        Self {
            montgomery_form,
            params,
        }
    }

    /// `0` in Montgomery form.
    pub fn zero(params: MontyParams) -> Self {
        Self {
            montgomery_form: Uint::zero(params.nlimbs()),
            params,
        }
    }

    /// `1` in Montgomery form, i.e. `R mod N`.
    pub fn one(params: MontyParams) -> Self {
        Self {
            montgomery_form: params.one().clone(),
            params,
        }
    }

    /// Wraps a value that is already in Montgomery form.
    ///
    /// Panics if the width does not match the modulus.
    pub fn from_montgomery(montgomery_form: Uint, params: MontyParams) -> Self {
        assert_eq!(
            montgomery_form.nlimbs(),
            params.nlimbs(),
            "operand width does not match the modulus"
        );
        Self {
            montgomery_form,
            params,
        }
    }

    /// Converts back out of Montgomery form by multiplying by `1`, which
    /// strips the `R` factor and canonicalizes the result.
    pub fn retrieve(&self) -> Uint {
        let n = self.params.nlimbs();
        let mut out = Uint::zero(n);
        montgomery_mul(
            self.montgomery_form.as_limbs(),
            Uint::one(n).as_limbs(),
            self.params.modulus().as_ref().as_limbs(),
            self.params.mod_neg_inv(),
            out.as_mut_limbs(),
        );
        out
    }

    /// Multiplies in the Montgomery domain: `self * rhs * R^-1 mod N`.
    ///
    /// Panics if the operands were created with different parameters.
    pub fn mul(&self, rhs: &Self) -> Self {
        assert!(
            self.params == rhs.params,
            "mismatched Montgomery parameters"
        );
        let mut montgomery_form = Uint::zero(self.params.nlimbs());
        montgomery_mul(
            self.montgomery_form.as_limbs(),
            rhs.montgomery_form.as_limbs(),
            self.params.modulus().as_ref().as_limbs(),
            self.params.mod_neg_inv(),
            montgomery_form.as_mut_limbs(),
        );
        Self {
            montgomery_form,
            params: self.params.clone(),
        }
    }

    /// Borrows the raw Montgomery-form value.
    pub fn as_montgomery(&self) -> &Uint {
        &self.montgomery_form
    }

    /// Borrows the parameters this value was created with.
    pub fn params(&self) -> &MontyParams {
        &self.params
    }
}

impl Mul<&MontyForm> for &MontyForm {
    type Output = MontyForm;

    fn mul(self, rhs: &MontyForm) -> MontyForm {
        MontyForm::mul(self, rhs)
    }
}

impl Mul<MontyForm> for &MontyForm {
    type Output = MontyForm;

    #[allow(clippy::op_ref)]
    fn mul(self, rhs: MontyForm) -> MontyForm {
        self * &rhs
    }
}

impl Mul<&MontyForm> for MontyForm {
    type Output = MontyForm;

    #[allow(clippy::op_ref)]
    fn mul(self, rhs: &MontyForm) -> MontyForm {
        &self * rhs
    }
}

impl Mul for MontyForm {
    type Output = MontyForm;

    fn mul(self, rhs: MontyForm) -> MontyForm {
        &self * &rhs
    }
}

impl ConstantTimeEq for MontyForm {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.montgomery_form.ct_eq(&other.montgomery_form)
    }
}

impl Eq for MontyForm {}

impl PartialEq for MontyForm {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl fmt::Debug for MontyForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MontyForm")
            .field("montgomery_form", &self.montgomery_form)
            .finish()
    }
}
