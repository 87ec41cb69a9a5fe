// 💵 Money - integer cents
// Receipt amounts arrive as text like "12.25"; we keep them as exact cents

/// A non-negative amount in cents.
///
/// Parsing goes straight from text to integer cents, so "0.35" is 35 and never
/// 34.999999... the way a float round trip can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(u64);

impl Cents {
    /// Parse an amount of the form `\d+\.\d{2}`.
    ///
    /// Returns `None` for anything else, and also for a well-formed amount too
    /// large for `u64` cents. Use `is_amount` to check the shape alone.
    pub fn parse(text: &str) -> Option<Self> {
        let (dollars, cents) = split_amount(text)?;

        let dollars: u64 = dollars.parse().ok()?;

        dollars.checked_mul(100)?.checked_add(cents).map(Cents)
    }

    /// `ceil(amount * 0.2)` in whole points, computed without floats.
    pub fn fifth_rounded_up(&self) -> u64 {
        // amount * 0.2 == cents / 500
        self.0.div_ceil(500)
    }
}

// ============================================================================
// AMOUNT TEXT
// ============================================================================

/// True if `text` has the shape `\d+\.\d{2}`, however many digits it has
pub fn is_amount(text: &str) -> bool {
    split_amount(text).is_some()
}

/// The cents digits of a well-formed amount ("35.25" -> 25), at any magnitude
pub fn fractional_cents(text: &str) -> Option<u64> {
    split_amount(text).map(|(_, cents)| cents)
}

/// Dollar digits and the two-digit cents value, or `None` if the shape is wrong.
/// Signs, whitespace, separators and a short or long fraction are all rejected.
fn split_amount(text: &str) -> Option<(&str, u64)> {
    let (dollars, cents) = text.split_once('.')?;

    if dollars.is_empty() || !dollars.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if cents.len() != 2 || !cents.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((dollars, cents.parse().ok()?))
}

// ============================================================================
// TESTS
// ============================================================================
