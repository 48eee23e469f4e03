//! Embedded ASL alphabet model data.
//!
//! Packages the pre-trained sign-language classifier as a statically linked,
//! read-only asset, so the inference runtime can locate and parse the model
//! without touching the file system or the network. The payload is a
//! serialized TFLite model and is opaque to this crate; parsing, tensor
//! execution, and anything done with the predictions live in the runtime
//! that consumes it.
//!
//! The two symbols the runtime's loading code links against are
//! [`ASL_MODEL_DATA`] and [`ASL_MODEL_DATA_LEN`]; [`ModelAsset`] wraps them
//! behind accessors.
//!
//! # Example
//!
//! ```
//! use asl_model_data::ModelAsset;
//!
//! let asset = ModelAsset::new();
//! assert_eq!(asset.len(), asset.bytes().len());
//! ```

mod asset;

// Re-export the asset handle and the raw bindings
pub use asset::{ModelAsset, ASL_MODEL_DATA, ASL_MODEL_DATA_LEN};
