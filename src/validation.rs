// 📐 Shape Layer - Receipt Validation
// All-or-nothing gate in front of the rule engine

use crate::money::is_amount;
use crate::receipt::IncomingReceipt;
use chrono::{NaiveDate, NaiveTime};

// ============================================================================
// PATTERNS
// ============================================================================

/// Every format check a receipt field can be held to.
///
/// `RetailerName` and `ItemDescription` differ only in `&`; keep them separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `[\w\s\-&]+`
    RetailerName,
    /// `[\w\s\-]+`
    ItemDescription,
    /// `\d+\.\d{2}`
    Amount,
    /// `\d{4}-\d{2}-\d{2}` naming a real calendar day
    CalendarDate,
    /// `\d{2}:\d{2}` naming a real 24-hour clock time
    ClockTime,
}

impl Pattern {
    pub fn name(&self) -> &str {
        match self {
            Pattern::RetailerName => "retailer name",
            Pattern::ItemDescription => "item description",
            Pattern::Amount => "amount",
            Pattern::CalendarDate => "date (YYYY-MM-DD)",
            Pattern::ClockTime => "time (HH:MM)",
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::RetailerName => {
                !text.is_empty() && text.chars().all(|c| is_word_char(c) || c == '&')
            }
            Pattern::ItemDescription => !text.is_empty() && text.chars().all(is_word_char),
            Pattern::Amount => is_amount(text),
            Pattern::CalendarDate => {
                has_digit_shape(text, "dddd-dd-dd")
                    && NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
            }
            Pattern::ClockTime => {
                has_digit_shape(text, "dd:dd") && NaiveTime::parse_from_str(text, "%H:%M").is_ok()
            }
        }
    }
}

/// `\w`, `\s` or `-`, with the ASCII meanings of `\w` and `\s`
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c.is_ascii_whitespace() || c == '-'
}

/// `d` in the template stands for one ASCII digit; anything else must match literally
fn has_digit_shape(text: &str, template: &str) -> bool {
    text.len() == template.len()
        && text.bytes().zip(template.bytes()).all(|(t, p)| match p {
            b'd' => t.is_ascii_digit(),
            _ => t == p,
        })
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// First check a receipt failed. Only ever logged; callers see a plain "invalid".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: String,
    pub message: String,
}

impl ValidationFailure {
    fn pattern(field: impl Into<String>, pattern: Pattern) -> Self {
        ValidationFailure {
            field: field.into(),
            message: format!("does not match {}", pattern.name()),
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationFailure {}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Returns true only if every field of the receipt is well-formed
pub fn validate(receipt: &IncomingReceipt) -> bool {
    validate_detailed(receipt).is_ok()
}

/// Same checks as `validate`, stopping at and reporting the first failure
pub fn validate_detailed(receipt: &IncomingReceipt) -> Result<(), ValidationFailure> {
    check("retailer", &receipt.retailer, Pattern::RetailerName)?;
    check("purchaseDate", &receipt.purchase_date, Pattern::CalendarDate)?;
    check("purchaseTime", &receipt.purchase_time, Pattern::ClockTime)?;

    if receipt.items.is_empty() {
        return Err(ValidationFailure {
            field: "items".to_string(),
            message: "at least one item is required".to_string(),
        });
    }

    for (i, item) in receipt.items.iter().enumerate() {
        check(
            format!("items[{}].shortDescription", i),
            &item.short_description,
            Pattern::ItemDescription,
        )?;
        check(format!("items[{}].price", i), &item.price, Pattern::Amount)?;
    }

    check("total", &receipt.total, Pattern::Amount)
}

fn check(field: impl Into<String>, value: &str, pattern: Pattern) -> Result<(), ValidationFailure> {
    if pattern.matches(value) {
        Ok(())
    } else {
        Err(ValidationFailure::pattern(field, pattern))
    }
}

// ============================================================================
// TESTS
// ============================================================================
