/// Ports layer - Interface definitions
///
/// Inbound ports are implemented by the application layer; outbound ports are
/// implemented by adapters.
pub mod inbound;
pub mod outbound;
