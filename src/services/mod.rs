pub mod registration;
pub mod store;
pub mod validation;
