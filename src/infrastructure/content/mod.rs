//! # Content-Addressed Storage
//!
//! Publishing of image bytes and metadata documents to a
//! content-addressed store.
//!
//! ## Available Components
//!
//! - [`ContentStore`]: Port for the opaque content-addressed store
//! - [`IpfsContentStore`]: Adapter for the IPFS HTTP API
//! - [`NftMetadata`]: Fixed metadata schema with deterministic serialization
//! - [`ContentPublisher`]: High-level publishing operations

pub mod ipfs;
pub mod metadata;
pub mod publisher;
pub mod traits;

pub use ipfs::IpfsContentStore;
pub use metadata::NftMetadata;
pub use publisher::ContentPublisher;
pub use traits::{ContentError, ContentResult, ContentStore};
