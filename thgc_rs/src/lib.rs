//! # thgc
//!
//! Shared core of the T&H General Contractor site: the estimate-form
//! inquiry model, the mock contact desk that stores inquiries in a local
//! key-value store, and the business profile rendered by the landing page.
//!
//! ## Quick Start
//!
//! ```rust
//! use thgc::{ContactDesk, Immediate, InquiryDraft, MemoryStore, ServiceKind};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let desk = ContactDesk::new(MemoryStore::new(), Immediate);
//!
//! let draft = InquiryDraft::new("Jane Doe", "8325551234", "jane@example.com")
//!     .with_service(ServiceKind::Roofing)
//!     .with_message("Leak");
//!
//! let ack = desk.submit(draft).await.unwrap();
//! assert!(ack.success);
//! assert_eq!(desk.inquiries().unwrap().len(), 1);
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`inquiry`] - draft, stored record and acknowledgement types
//! - [`store`] - the [`KeyValueStore`] seam plus in-memory and file backends
//! - [`desk`] - [`ContactDesk`], the submission and retrieval entry points
//! - [`config`] - `site.toml` parsing
//! - [`profile`] - phone numbers, emails, services and portfolio content
//!
//! The browser adapters (`window.localStorage`, `setTimeout`) live in the
//! landing crate; nothing here depends on a DOM.

pub mod config;
pub mod desk;
pub mod error;
pub mod inquiry;
pub mod profile;
pub mod store;

pub use config::{DeskConfig, SiteConfig};
pub use desk::{ContactDesk, Immediate, Latency};
pub use error::{ConfigError, DeskError, DeskResult, StoreError, StoreResult};
pub use inquiry::{Acknowledgement, Inquiry, InquiryDraft, RequiredField, ServiceKind};
#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;
pub use store::{KeyValueStore, MemoryStore};
