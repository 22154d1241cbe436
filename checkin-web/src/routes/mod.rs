pub(crate) mod error;
pub(crate) mod pages;

pub(crate) use error::ApiError;
