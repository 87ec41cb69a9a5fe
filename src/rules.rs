// 🏷️ Scoring Rules - Rules as Data
// Independent point rules over a validated receipt, summed into one score

use crate::money::{fractional_cents, Cents};
use crate::receipt::IncomingReceipt;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

// ============================================================================
// RULE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringRule {
    /// One point per letter or digit in the retailer name
    RetailerName,
    /// 50 points when the total has no cents
    RoundTotal,
    /// 25 points when the total is a multiple of 0.25
    QuarterTotal,
    /// 5 points for every two items
    ItemPairs,
    /// ceil(price * 0.2) for each item whose trimmed description length is a multiple of 3
    DescriptionLength,
    /// 6 points when the day of the purchase date is odd
    OddPurchaseDay,
    /// 10 points when the purchase hour is after 14 and before 16
    AfternoonWindow,
}

pub const ROUND_TOTAL_POINTS: u64 = 50;
pub const QUARTER_TOTAL_POINTS: u64 = 25;
pub const ITEM_PAIR_POINTS: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

impl ScoringRule {
    pub const ALL: [ScoringRule; 7] = [
        ScoringRule::RetailerName,
        ScoringRule::RoundTotal,
        ScoringRule::QuarterTotal,
        ScoringRule::ItemPairs,
        ScoringRule::DescriptionLength,
        ScoringRule::OddPurchaseDay,
        ScoringRule::AfternoonWindow,
    ];

    pub fn name(&self) -> &str {
        match self {
            ScoringRule::RetailerName => "retailer_name",
            ScoringRule::RoundTotal => "round_total",
            ScoringRule::QuarterTotal => "quarter_total",
            ScoringRule::ItemPairs => "item_pairs",
            ScoringRule::DescriptionLength => "description_length",
            ScoringRule::OddPurchaseDay => "odd_purchase_day",
            ScoringRule::AfternoonWindow => "afternoon_window",
        }
    }

    /// Points this rule awards. A value that fails to parse scores 0 here
    /// instead of failing the whole receipt.
    pub fn points(&self, receipt: &IncomingReceipt) -> u64 {
        match self {
            ScoringRule::RetailerName => receipt
                .retailer
                .chars()
                .filter(|c| c.is_alphanumeric())
                .count() as u64,

            // Whole dollars are multiples of 25 cents, so only the cents digits matter
            ScoringRule::RoundTotal => match fractional_cents(&receipt.total) {
                Some(0) => ROUND_TOTAL_POINTS,
                _ => 0,
            },

            // Stacks with RoundTotal: every whole dollar is also a multiple of 25 cents
            ScoringRule::QuarterTotal => match fractional_cents(&receipt.total) {
                Some(cents) if cents % 25 == 0 => QUARTER_TOTAL_POINTS,
                _ => 0,
            },

            ScoringRule::ItemPairs => (receipt.items.len() as u64 / 2) * ITEM_PAIR_POINTS,

            // Rounded up per item, before summing. An empty trimmed description
            // has length 0, which counts as a multiple of 3.
            ScoringRule::DescriptionLength => receipt
                .items
                .iter()
                .filter(|item| item.short_description.trim().len() % 3 == 0)
                .filter_map(|item| Cents::parse(&item.price))
                .map(|price| price.fifth_rounded_up())
                .fold(0, u64::saturating_add),

            ScoringRule::OddPurchaseDay => {
                match NaiveDate::parse_from_str(&receipt.purchase_date, "%Y-%m-%d") {
                    Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
                    _ => 0,
                }
            }

            ScoringRule::AfternoonWindow => {
                match NaiveTime::parse_from_str(&receipt.purchase_time, "%H:%M") {
                    Ok(time) if time.hour() > 14 && time.hour() < 16 => AFTERNOON_POINTS,
                    _ => 0,
                }
            }
        }
    }
}

// ============================================================================
// SCORING RESULT
// ============================================================================

/// Per-rule contributions for one receipt, in `ScoringRule::ALL` order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub contributions: Vec<(ScoringRule, u64)>,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        self.contributions
            .iter()
            .fold(0, |sum, (_, points)| sum.saturating_add(*points))
    }

    pub fn points_for(&self, rule: ScoringRule) -> u64 {
        self.contributions
            .iter()
            .find(|(r, _)| *r == rule)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }

    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .contributions
            .iter()
            .filter(|(_, points)| *points > 0)
            .map(|(rule, points)| format!("{}={}", rule.name(), points))
            .collect();

        format!("total={} [{}]", self.total(), parts.join(", "))
    }
}

// ============================================================================
// RULE ENGINE
// ============================================================================

pub struct RuleEngine {
    rules: Vec<ScoringRule>,
}

impl RuleEngine {
    /// Engine with every scoring rule enabled
    pub fn new() -> Self {
        RuleEngine {
            rules: ScoringRule::ALL.to_vec(),
        }
    }

    /// Engine restricted to the given rules
    pub fn from_rules(rules: Vec<ScoringRule>) -> Self {
        RuleEngine { rules }
    }

    pub fn breakdown(&self, receipt: &IncomingReceipt) -> PointsBreakdown {
        PointsBreakdown {
            contributions: self
                .rules
                .iter()
                .map(|rule| (*rule, rule.points(receipt)))
                .collect(),
        }
    }

    pub fn score(&self, receipt: &IncomingReceipt) -> u64 {
        self.breakdown(receipt).total()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Total points for a validated receipt under every rule
pub fn calculate_points(receipt: &IncomingReceipt) -> u64 {
    RuleEngine::new().score(receipt)
}

// ============================================================================
// TESTS
// ============================================================================
