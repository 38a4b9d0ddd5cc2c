//! Check-digit validation for Portuguese tax identification numbers (NIF).
//!
//! A NIF is nine ASCII digits. The first must be one of
//! [`ALLOWED_LEADING_DIGITS`] and the last is a mod-11 check digit over the
//! first eight, weighted 9 down to 2.
//!
//! Everything here is pure: no I/O and no mutable state, so the functions
//! can be called from any thread without coordination.

use lazy_static::lazy_static;
use regex::Regex;

use crate::fiscal_identity::domain::model::enums::nif_verdict::NifVerdict;

pub const NIF_LENGTH: usize = 9;

pub const ALLOWED_LEADING_DIGITS: [u8; 7] = [1, 2, 3, 5, 6, 8, 9];

const CHECK_DIGIT_WEIGHTS: [u32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

lazy_static! {
    // `\d` would also accept non-ASCII digits.
    static ref NIF_SHAPE_REGEX: Regex = Regex::new(r"^[0-9]{9}$").expect("valid regex");
}

/// Structural check only: exactly nine ASCII digits.
pub fn has_nif_shape(candidate: &str) -> bool {
    NIF_SHAPE_REGEX.is_match(candidate)
}

/// Check digit for the eight leading digit values (each `0..=9`).
pub fn expected_check_digit(prefix: &[u8; 8]) -> u8 {
    let sum: u32 = prefix
        .iter()
        .zip(CHECK_DIGIT_WEIGHTS)
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();

    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

pub fn check_nif(candidate: &str) -> NifVerdict {
    if !has_nif_shape(candidate) {
        return NifVerdict::BadFormat;
    }

    let mut digits = [0u8; NIF_LENGTH];
    for (slot, byte) in digits.iter_mut().zip(candidate.bytes()) {
        *slot = byte - b'0';
    }

    if !ALLOWED_LEADING_DIGITS.contains(&digits[0]) {
        return NifVerdict::BadLeadingDigit;
    }

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digits[..8]);

    if digits[8] == expected_check_digit(&prefix) {
        NifVerdict::Valid
    } else {
        NifVerdict::BadChecksum
    }
}

/// Boolean form of [`check_nif`]; never panics on malformed input.
pub fn is_valid_nif(candidate: &str) -> bool {
    check_nif(candidate).is_valid()
}
