//! # sentifactor
//!
//! A multifactor explanatory model of a stock index's daily returns built
//! from news-headline sentiment, lagged return and trading volume.
//!
//! This crate provides a unified interface to the sentifactor pipeline.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `math`: Standardization and least squares inference
//! - `news`: Headline loading, scoring and aggregation
//! - `market`: Reference-index market data retrieval
//! - `model`: Feature construction and regression fit
//! - `report`: Plot rendering and table export
//! - `cli`: Everything the `pipeline` binary needs
//!
//! ## Example
//!
//! ```rust,ignore
//! // With default features (all components):
//! use sentifactor::news;
//! use sentifactor::model;
//!
//! // Or with specific features only:
//! // [dependencies]
//! // sentifactor = { version = "0.1", default-features = false, features = ["model"] }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use sentifactor_primitives as primitives;

#[cfg(feature = "math")]
#[doc(inline)]
pub use sentifactor_math as math;

#[cfg(feature = "news")]
#[doc(inline)]
pub use sentifactor_news as news;

#[cfg(feature = "market")]
#[doc(inline)]
pub use sentifactor_market as market;

#[cfg(feature = "model")]
#[doc(inline)]
pub use sentifactor_model as model;

#[cfg(feature = "report")]
#[doc(inline)]
pub use sentifactor_report as report;
