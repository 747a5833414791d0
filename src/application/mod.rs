/// Application layer - Use cases, lifecycle wiring and DTOs
///
/// This layer orchestrates the output normalization domain service and
/// coordinates with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod lifecycle;
pub mod use_cases;
