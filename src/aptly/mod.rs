//! Aptly API integration: repo creation, file upload, registration and republishing.

mod client;

pub use client::AptlyClient;
