mod tax_policy;

pub use tax_policy::{BillTotals, TaxMode, TaxPolicy, TaxableLine};
