//! Bàn Ăn POS - table, order and payment controller
//!
//! Drives the restaurant backend through `banan-client`: table selection,
//! cart assembly, dish status changes, the payment flow, plus the
//! back-office services (menu, invoices, revenue, reviews, bookings).

pub mod backoffice;
pub mod cart;
pub mod config;
pub mod controller;
pub mod error;
pub mod logger;
pub mod money;
pub mod notifications;
pub mod payment;
pub mod routes;
pub mod stats;
pub mod validation;
pub mod view;

pub use backoffice::{BackOffice, RevenueReport};
pub use cart::{Cart, CartItem};
pub use config::{ControllerOptions, PosConfig};
pub use controller::{TableController, ViewMode};
pub use error::{ErrorScope, PosError, PosResult};
pub use notifications::{Flash, Notification, NotificationFeed};
pub use payment::{PayMethod, PaymentDialog, QrMerchant};
pub use routes::{Role, Route};
pub use stats::{TableFilter, TableStats};
pub use validation::NewTable;
pub use view::{NavigationHandle, ViewTracker};

// Re-export the client crate for binaries and tests
pub use banan_client;
