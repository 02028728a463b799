//! # Commerce Types
//!
//! Typed models and request/response bodies for a payments and commerce
//! REST API. This crate does no IO: it only describes what goes over the
//! wire and how to build it.
//!
//! ## Layout
//!
//! - `domain/` - Resources returned by the API (Payment, Order, Customer, ...)
//! - `dto/` - Request and response bodies, grouped by API area
//! - `webhook/` - Notification envelope and signature check
//! - `builder` - Fluent builders; `build()` always hands back an independent copy
//! - `Nullable` - Tri-state field for partial updates (unset / null / value)
//! - `openapi` - Component schema document for every type above

pub mod builder;
pub mod domain;
pub mod dto;
pub mod error;
mod nullable;
pub mod openapi;
pub mod webhook;

// Re-export commonly used types
pub use builder::DtoBuilder;
pub use domain::{
    Address, ApiError, Currency, Customer, ErrorResponse, IdempotencyKey, Location, Money, Order,
    Payment, PaymentRefund,
};
pub use error::{ValidationError, WebhookError};
pub use nullable::Nullable;
pub use openapi::ApiDoc;
pub use webhook::WebhookEvent;
