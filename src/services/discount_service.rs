use crate::models::service::Money;

/// Commitment discount tiers as (minimum months, percentage off), highest first
pub const DISCOUNT_TIERS: [(u32, u8); 3] = [(12, 30), (6, 20), (3, 10)];

pub struct DiscountSchedule;

impl DiscountSchedule {
    /// Percentage off for committing to `duration` months (thresholds inclusive)
    pub fn discount_percentage(duration: u32) -> u8 {
        DISCOUNT_TIERS
            .iter()
            .find(|(months, _)| duration >= *months)
            .map(|(_, percentage)| *percentage)
            .unwrap_or(0)
    }

    /// Total saved over the whole commitment
    pub fn discount_amount(monthly_total: Money, duration: u32) -> Money {
        let percentage = Self::discount_percentage(duration) as f64;
        (Self::gross_total(monthly_total, duration) as f64 * percentage / 100.0).round() as Money
    }

    /// What the customer pays over the commitment before any discount
    pub fn gross_total(monthly_total: Money, duration: u32) -> Money {
        monthly_total.saturating_mul(duration as Money)
    }

    /// Clamped at 0; totals too large for `Money` saturate rather than wrap
    pub fn final_total(monthly_total: Money, duration: u32) -> Money {
        Self::gross_total(monthly_total, duration)
            .saturating_sub(Self::discount_amount(monthly_total, duration))
            .max(0)
    }

    /// The next tier the customer could reach by committing longer, if any
    pub fn next_tier(duration: u32) -> Option<(u32, u8)> {
        DISCOUNT_TIERS
            .iter()
            .rev()
            .find(|(months, _)| *months > duration)
            .copied()
    }
}
