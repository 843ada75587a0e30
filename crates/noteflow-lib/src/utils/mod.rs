// Utility Layer
// Shared helpers used across models, stores, and services

pub mod id;
