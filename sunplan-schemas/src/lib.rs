//! Plain data types shared by the sizing engine and its callers.

pub mod assumptions;
pub mod file_formats;
pub mod input;
pub mod pricing;
pub mod resource;
pub mod result;
