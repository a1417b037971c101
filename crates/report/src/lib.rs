#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/sentifactor/sentifactor-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod glyphs;

mod scatter;
pub use scatter::{ScatterConfig, ScatterPlot, colors};

mod export;
pub use export::write_feature_csv;

mod error;
pub use error::ReportError;
