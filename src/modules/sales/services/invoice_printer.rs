use std::fmt::Write;

use rust_decimal::Decimal;

use crate::core::money::format_amount;
use crate::core::ShopClock;
use crate::modules::sales::models::Invoice;

const WIDTH: usize = 48;
const NAME_WIDTH: usize = 22;

/// Renders invoices as fixed-width text for thermal receipt printers
#[derive(Debug, Clone)]
pub struct InvoicePrinter {
    shop_name: String,
    clock: ShopClock,
}

impl InvoicePrinter {
    pub fn new(shop_name: impl Into<String>, clock: ShopClock) -> Self {
        Self {
            shop_name: shop_name.into(),
            clock,
        }
    }

    pub fn render(&self, invoice: &Invoice) -> String {
        let rule = "-".repeat(WIDTH);
        let mut out = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(out, "{:^width$}", self.shop_name, width = WIDTH);
        let _ = writeln!(out, "Invoice: {}", invoice.invoice_number);
        let _ = writeln!(
            out,
            "Date:    {}",
            self.clock
                .local(invoice.created_at)
                .format("%d %b %Y, %I:%M %p")
        );
        let _ = writeln!(out, "Payment: {}", invoice.payment_mode.label());
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(
            out,
            "{:<name$} {:>5} {:>9} {:>9}",
            "Item",
            "Qty",
            "Price",
            "Total",
            name = NAME_WIDTH
        );
        let _ = writeln!(out, "{}", rule);

        for line in &invoice.items {
            let name: String = line.product_name.chars().take(NAME_WIDTH).collect();
            let _ = writeln!(
                out,
                "{:<name$} {:>5} {:>9} {:>9}",
                name,
                line.quantity,
                format_amount(line.unit_price),
                format_amount(line.line_total),
                name = NAME_WIDTH
            );
        }

        let _ = writeln!(out, "{}", rule);
        let total_row = |label: &str, amount: Decimal| {
            format!("{:<30}{:>18}", label, format_amount(amount))
        };
        let _ = writeln!(out, "{}", total_row("Subtotal", invoice.subtotal));
        let _ = writeln!(out, "{}", total_row(&gst_label(invoice), invoice.tax));
        let _ = writeln!(out, "{}", total_row("Total", invoice.total));
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "{:^width$}", "Thank you! Visit again", width = WIDTH);

        out
    }
}

/// `GST (5%)` when every line shares one rate, plain `GST` otherwise
fn gst_label(invoice: &Invoice) -> String {
    let mut rates = invoice.items.iter().map(|line| line.tax_rate);
    match rates.next() {
        Some(first) if rates.all(|rate| rate == first) => {
            format!("GST ({}%)", (first * Decimal::ONE_HUNDRED).normalize())
        }
        _ => "GST".to_string(),
    }
}
