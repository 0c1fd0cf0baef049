/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain resolver and coordinates with the
/// dataset source through ports.
pub mod dto;
pub mod use_cases;
