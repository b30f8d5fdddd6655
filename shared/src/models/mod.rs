//! Data models
//!
//! Wire types exchanged with the restaurant backend. Field names follow the
//! backend's camelCase JSON; all identifiers are opaque strings.

pub mod booking;
pub mod dish;
pub mod invoice;
pub mod order_item;
pub mod revenue;
pub mod review;
pub mod table;

// Re-exports
pub use booking::*;
pub use dish::*;
pub use invoice::*;
pub use order_item::*;
pub use revenue::*;
pub use review::*;
pub use table::*;
