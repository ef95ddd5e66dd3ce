/// Gapless invoice number sequence, e.g. `INV-2025-001`, `INV-2025-002`.
///
/// Numbers are only consumed by `next_for`, which the sale store calls while it
/// holds its write lock, so a number is never skipped or issued twice.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    year: i32,
    next_number: u64,
    zero_pad: usize,
}

impl InvoiceNumberSequence {
    pub fn new(prefix: impl Into<String>, year: i32) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            next_number: 1,
            zero_pad: 3,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Preview the next number without consuming it
    pub fn peek(&self) -> String {
        self.format(self.next_number)
    }

    /// Issue the next number for a sale made in `year` (shop-local).
    /// A later year restarts the counter at 1; an earlier one keeps the current year.
    pub fn next_for(&mut self, year: i32) -> String {
        if year > self.year {
            self.year = year;
            self.next_number = 1;
        }

        let number = self.format(self.next_number);
        self.next_number += 1;
        number
    }

    fn format(&self, number: u64) -> String {
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.year,
            number,
            width = self.zero_pad
        )
    }
}
