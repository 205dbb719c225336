/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: filesystem, console and
/// output formatters.
pub mod outbound;
