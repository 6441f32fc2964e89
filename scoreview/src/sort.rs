use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{Record, SortKey, SortOrder};

/// Returns a new, sorted copy of `input`.
///
/// The sort is stable: records whose keys compare equal keep their relative
/// input order, so the output is deterministic for a given `(input, key,
/// order)` regardless of any prior ordering. `input` itself is never
/// mutated.
pub fn sort_records(input: &[Record], key: SortKey, order: SortOrder) -> Vec<Record> {
    scdebug!(len = input.len(), ?key, ?order, "sort_records");
    let mut out: Vec<Record> = input.to_vec();
    out.sort_by(|a, b| {
        let base = match key {
            SortKey::Score => a.score.total_cmp(&b.score),
            SortKey::Time => cmp_record_ids(&a.id, &b.id),
        };
        match order {
            SortOrder::Asc => base,
            SortOrder::Desc => base.reverse(),
        }
    });
    out
}

/// Compares two record ids as arbitrary-precision decimal integers.
///
/// Ids routinely exceed the 53-bit integer range a double can distinguish,
/// so they cannot be parsed into machine numbers. Ordering decimal strings
/// needs no bignum arithmetic: after sign and leading-zero normalization, a
/// longer digit run is the larger magnitude and equal-length runs compare
/// bytewise. If either operand is not a decimal integer string, the pair
/// falls back to plain lexicographic comparison instead of failing.
pub fn cmp_record_ids(a: &str, b: &str) -> Ordering {
    match (parse_decimal(a), parse_decimal(b)) {
        (Some(a), Some(b)) => cmp_decimal(a, b),
        _ => a.cmp(b),
    }
}

#[derive(Clone, Copy)]
struct Decimal<'a> {
    negative: bool,
    /// Digits with leading zeros stripped; empty means zero.
    digits: &'a [u8],
}

fn parse_decimal(s: &str) -> Option<Decimal<'_>> {
    let bytes = s.as_bytes();
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, bytes),
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let first_nonzero = digits.iter().position(|&d| d != b'0');
    let digits = match first_nonzero {
        Some(i) => &digits[i..],
        None => &[], // all zeros
    };
    // -0 == 0
    let negative = negative && !digits.is_empty();
    Some(Decimal { negative, digits })
}

fn cmp_decimal(a: Decimal<'_>, b: Decimal<'_>) -> Ordering {
    match (a.negative, b.negative) {
        (false, true) => return Ordering::Greater,
        (true, false) => return Ordering::Less,
        _ => {}
    }
    let magnitude = a
        .digits
        .len()
        .cmp(&b.digits.len())
        .then_with(|| a.digits.cmp(b.digits));
    if a.negative { magnitude.reverse() } else { magnitude }
}
