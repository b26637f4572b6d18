mod client;
pub(crate) mod common;

pub use client::{ServiceQuotasClient, ServiceQuotasClientBuilder};
