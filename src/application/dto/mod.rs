/// Data Transfer Objects for application layer
///
/// DTOs carry caller input into the use cases, keeping the domain layer
/// free of request plumbing.
mod map_request;

pub use map_request::MapRequest;
