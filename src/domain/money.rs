/// Money is represented as integer cents to avoid floating-point drift in balances.
/// The wire format uses plain JSON numbers in currency units, so 50.25 = 5025 cents.
pub type Cents = i64;

/// Largest magnitude accepted for a single amount: 2^53 cents, the range where
/// every cent value converts to `f64` and back exactly.
pub const MAX_AMOUNT_CENTS: Cents = 1 << 53;

/// Format cents as a human-readable amount string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Convert a currency amount into cents, rounding to the nearest cent.
/// Returns `None` for NaN, infinities and values beyond `MAX_AMOUNT_CENTS`.
pub fn cents_from_amount(amount: f64) -> Option<Cents> {
    if !amount.is_finite() {
        return None;
    }

    let cents = (amount * 100.0).round();
    if cents.abs() > MAX_AMOUNT_CENTS as f64 {
        return None;
    }
    Some(cents as Cents)
}

/// Convert cents back into a currency amount for serialization.
pub fn cents_to_amount(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

/// Serde adapter rendering a `Cents` field as a JSON number in currency units.
pub mod as_amount {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{cents_from_amount, cents_to_amount, Cents};

    pub fn serialize<S: Serializer>(cents: &Cents, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(cents_to_amount(*cents))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Cents, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        cents_from_amount(amount)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", amount)))
    }
}
