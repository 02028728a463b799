//! Resource models returned by the commerce API.

pub mod address;
pub mod api_error;
pub mod card;
pub mod customer;
pub mod idempotency;
pub mod location;
pub mod money;
pub mod order;
pub mod payment;
pub mod refund;

pub use address::{Address, AddressBuilder};
pub use api_error::{ApiError, ErrorCategory, ErrorResponse};
pub use card::{Card, CardBrand, CardBuilder, CardEntryMethod, CardPaymentDetails, CardType};
pub use customer::{Customer, CustomerBuilder, CustomerCreationSource, CustomerPreferences};
pub use idempotency::{IdempotencyKey, MAX_IDEMPOTENCY_KEY_LEN};
pub use location::{
    Coordinates, Location, LocationBuilder, LocationCapability, LocationStatus, LocationType,
};
pub use money::{Currency, Money};
pub use order::{
    DiscountType, FulfillmentState, FulfillmentType, Order, OrderBuilder, OrderFulfillment,
    OrderLineItem, OrderLineItemAppliedDiscount, OrderLineItemAppliedTax, OrderLineItemBuilder,
    OrderLineItemDiscount, OrderLineItemItemType, OrderLineItemTax, OrderState, Scope, TaxType,
};
pub use payment::{
    CashPaymentDetails, DelayAction, ExternalPaymentDetails, Payment, PaymentBuilder,
    PaymentStatus, ProcessingFee, SourceType,
};
pub use refund::{PaymentRefund, PaymentRefundBuilder, RefundStatus};
