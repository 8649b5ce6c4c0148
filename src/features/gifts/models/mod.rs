mod gift;

pub use gift::GIFT_SCHEMA;
