mod client;

pub use client::{ServiceQuotasAsyncClient, ServiceQuotasAsyncClientBuilder};
