pub mod invoice_numbering;
pub mod invoice_printer;
pub mod sales_service;

pub use invoice_numbering::InvoiceNumberSequence;
pub use invoice_printer::InvoicePrinter;
pub use sales_service::SalesService;
