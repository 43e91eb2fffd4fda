pub mod convert;
pub mod mapping;
pub mod profile;
