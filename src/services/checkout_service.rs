use chrono::Utc;
use log::{debug, warn};

use crate::models::configuration::Frequency;
use crate::models::quote::{LineItem, SubscriptionSummary};
use crate::models::service::{Money, ServiceCategory};
use crate::models::subscription::{BillingCycle, ConfiguredService, PricingMode, Subscription};
use crate::services::discount_service::DiscountSchedule;
use crate::services::pricing_service::{PricingService, WEEKS_PER_MONTH};
use crate::services::validation_service::ValidationService;

pub struct CheckoutService;

impl CheckoutService {
    pub fn allowed_frequencies(category: ServiceCategory) -> &'static [Frequency] {
        category.allowed_frequencies()
    }

    /// Billing cycles the checkout page offers for the selected services
    pub fn available_billing_cycles(services: &[ConfiguredService]) -> Vec<BillingCycle> {
        if Self::is_pest_control_only(services) {
            vec![BillingCycle::Quarterly]
        } else {
            vec![BillingCycle::Weekly, BillingCycle::Monthly]
        }
    }

    /// The billing cycle the checkout page would actually submit.
    /// Quarterly falls back to monthly as soon as anything other than pest
    /// control is selected, and pest-control-only selections always bill quarterly.
    pub fn effective_billing_cycle(
        services: &[ConfiguredService],
        requested: BillingCycle,
    ) -> BillingCycle {
        if Self::is_pest_control_only(services) {
            if requested != BillingCycle::Quarterly {
                warn!("Switching {:?} billing to Quarterly for pest control", requested);
            }
            return BillingCycle::Quarterly;
        }

        let has_other = services
            .iter()
            .any(|entry| entry.category() != ServiceCategory::PestControl);
        if requested == BillingCycle::Quarterly && has_other {
            warn!("Quarterly billing requested with non pest control services, using Monthly");
            return BillingCycle::Monthly;
        }

        requested
    }

    /// Amount charged each billing period for a monthly total
    pub fn billing_amount(monthly_total: Money, cycle: BillingCycle) -> Money {
        match cycle {
            BillingCycle::Weekly => (monthly_total as f64 / WEEKS_PER_MONTH).round() as Money,
            BillingCycle::Monthly => monthly_total,
            BillingCycle::Quarterly => monthly_total.saturating_mul(3),
        }
    }

    /// Builds the checkout summary. Prices are recomputed here; whatever price
    /// the caller sent along with a configuration is ignored.
    pub fn summarize(subscription: &Subscription) -> SubscriptionSummary {
        let line_items: Vec<LineItem> = subscription
            .services
            .iter()
            .map(|entry| LineItem {
                service_id: entry.service.id.clone(),
                name: entry.service.name.clone(),
                category: entry.service.category,
                flat_rate: PricingService::is_flat_rate(entry.service.category),
                monthly_price: PricingService::compute_price(
                    &entry.service,
                    &entry.configuration,
                    PricingMode::Subscription,
                ),
            })
            .collect();

        let monthly_total = line_items
            .iter()
            .map(|item| item.monthly_price)
            .fold(0, Money::saturating_add);
        let duration = subscription.duration;

        let validation = ValidationService::validate_subscription(
            &subscription.services,
            subscription.billing_cycle,
            duration,
        );

        let summary = SubscriptionSummary {
            billing_cycle: subscription.billing_cycle,
            duration,
            line_items,
            monthly_total,
            billing_amount: Self::billing_amount(monthly_total, subscription.billing_cycle),
            discount_percentage: DiscountSchedule::discount_percentage(duration),
            discount_amount: DiscountSchedule::discount_amount(monthly_total, duration),
            gross_total: DiscountSchedule::gross_total(monthly_total, duration),
            final_total: DiscountSchedule::final_total(monthly_total, duration),
            next_tier: DiscountSchedule::next_tier(duration).map(Into::into),
            validation,
            generated_at: Utc::now(),
        };

        debug!(
            "Summarized subscription: {} per month, {} after discount over {} months",
            summary.monthly_total, summary.final_total, duration
        );
        summary
    }

    fn is_pest_control_only(services: &[ConfiguredService]) -> bool {
        !services.is_empty()
            && services
                .iter()
                .all(|entry| entry.category() == ServiceCategory::PestControl)
    }
}
