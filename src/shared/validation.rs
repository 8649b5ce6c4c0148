use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for collection names, which end up in index DDL
    /// Must be lowercase snake case starting with a letter
    /// - Valid: "cost_categories", "sliders", "spin_history2"
    /// - Invalid: "CostCategories", "_sliders", "gift-transactions", "orders;drop"
    pub static ref COLLECTION_NAME_REGEX: Regex = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();

    /// Regex for document field names
    /// Must start with letter or underscore and contain only alphanumeric characters and underscores
    /// - Valid: "name", "createdAt", "_secret", "image_url"
    /// - Invalid: "1name", "first-name", "body'->>", "first name"
    pub static ref FIELD_NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}
