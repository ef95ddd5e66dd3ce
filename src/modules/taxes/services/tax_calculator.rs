use rust_decimal::Decimal;

use crate::core::error::AppError;
use crate::core::money::round_currency;
use crate::modules::taxes::models::{BillTotals, TaxMode, TaxPolicy, TaxableLine};

/// TaxCalculator turns bill lines into subtotal / GST / total
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxCalculator {
    policy: TaxPolicy,
}

impl TaxCalculator {
    pub fn new(policy: TaxPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> TaxPolicy {
        self.policy
    }

    /// Compute bill totals.
    ///
    /// subtotal = sum(line_total)
    /// Flat: tax = round(subtotal × rate)
    /// PerProduct: tax = round(sum(line_total × line rate))
    /// total = subtotal + tax
    ///
    /// Tax is rounded exactly once, half away from zero, to whole currency units.
    /// A bill whose amounts do not fit a Decimal is a validation error.
    pub fn calculate<I>(&self, lines: I) -> Result<BillTotals, AppError>
    where
        I: IntoIterator<Item = TaxableLine>,
    {
        let mut subtotal = Decimal::ZERO;
        let mut raw_tax = Decimal::ZERO;

        for line in lines {
            subtotal = subtotal.checked_add(line.line_total).ok_or_else(too_large)?;
            if self.policy.mode() == TaxMode::PerProduct {
                let line_tax = line
                    .line_total
                    .checked_mul(self.policy.rate_for(line.tax_rate))
                    .ok_or_else(too_large)?;
                raw_tax = raw_tax.checked_add(line_tax).ok_or_else(too_large)?;
            }
        }

        if self.policy.mode() == TaxMode::Flat {
            raw_tax = subtotal
                .checked_mul(self.policy.default_rate())
                .ok_or_else(too_large)?;
        }

        let tax = round_currency(raw_tax);
        let total = subtotal.checked_add(tax).ok_or_else(too_large)?;

        Ok(BillTotals {
            subtotal,
            tax,
            total,
        })
    }

    /// Validate tax rate is within acceptable range (0-1.0) with max 4 decimal places
    pub fn validate_tax_rate(tax_rate: Decimal) -> Result<(), AppError> {
        if tax_rate < Decimal::ZERO {
            return Err(AppError::Validation(
                "Tax rate cannot be negative".to_string()
            ));
        }

        if tax_rate > Decimal::ONE {
            return Err(AppError::Validation(
                "Tax rate cannot exceed 1.0 (100%)".to_string()
            ));
        }

        if tax_rate.normalize().scale() > 4 {
            return Err(AppError::Validation(
                "Tax rate cannot have more than 4 decimal places".to_string()
            ));
        }

        Ok(())
    }
}

fn too_large() -> AppError {
    AppError::validation("Bill amount is too large")
}
