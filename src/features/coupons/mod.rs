//! Coupon creation page. The form is filled from the product catalogue;
//! submitting it is handled by the client.

pub mod dtos;
pub mod handlers;
pub mod routes;
