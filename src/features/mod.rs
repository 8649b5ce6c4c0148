pub mod categories;
pub mod coupons;
pub mod gifts;
pub mod ledgers;
pub mod products;
pub mod schemas;
pub mod sliders;
pub mod storefront;
