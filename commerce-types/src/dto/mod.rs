//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Response envelopes carry the resource plus an `errors` list; the API may
//! report errors alongside a partially successful result.

pub mod customers;
pub mod locations;
pub mod orders;
pub mod payments;
pub mod refunds;

pub use customers::{
    CreateCustomerRequest, CreateCustomerRequestBuilder, CreateCustomerResponse,
    DeleteCustomerResponse, ListCustomersResponse, RetrieveCustomerResponse,
    UpdateCustomerRequest, UpdateCustomerRequestBuilder, UpdateCustomerResponse,
};
pub use locations::{
    ListLocationsResponse, LocationUpdate, LocationUpdateBuilder, RetrieveLocationResponse,
    UpdateLocationRequest, UpdateLocationResponse,
};
pub use orders::{
    CreateOrderRequest, CreateOrderRequestBuilder, CreateOrderResponse, OrderUpdate,
    OrderUpdateBuilder, RetrieveOrderResponse, UpdateOrderRequest, UpdateOrderRequestBuilder,
    UpdateOrderResponse,
};
pub use payments::{
    CancelPaymentResponse, CompletePaymentRequest, CompletePaymentRequestBuilder,
    CompletePaymentResponse, CreatePaymentRequest, CreatePaymentRequestBuilder,
    CreatePaymentResponse, GetPaymentResponse, ListPaymentsResponse, PaymentUpdate,
    PaymentUpdateBuilder, UpdatePaymentRequest, UpdatePaymentRequestBuilder,
    UpdatePaymentResponse,
};
pub use refunds::{
    GetPaymentRefundResponse, ListPaymentRefundsResponse, RefundPaymentRequest,
    RefundPaymentRequestBuilder, RefundPaymentResponse,
};
