mod invoice;
mod sale_request;

pub use invoice::{BillSummary, Invoice, InvoiceDraft, InvoiceLine, SaleStatus};
pub use sale_request::{
    CreateSaleRequest, ListSalesQuery, PaymentMode, SaleItemRequest, SaleResponse,
    SalesListResponse,
};
