mod gift_service;

pub use gift_service::GiftService;
