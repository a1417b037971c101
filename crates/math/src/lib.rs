#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/sentifactor/sentifactor-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod scale;
pub use scale::{ZScore, zscore};

mod ols;
pub use ols::{OlsResult, ols};

mod error;
pub use error::MathError;
