use serde::Serialize;

use crate::shared::plain::PlainRecord;

/// Props for the coupon creation form
#[derive(Debug, Serialize)]
pub struct CouponFormProps {
    pub products: Vec<PlainRecord>,
}
