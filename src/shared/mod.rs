pub mod constants;
pub mod plain;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;
pub mod views;
