#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/sentifactor/sentifactor-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod features;
pub use features::{
    FeatureConfig, PREV_RETURN_COL, SENTIMENT_COL, TARGET_COL, VOLUME_SCALED_COL,
    build_feature_table,
};

mod regression;
pub use regression::{RegressionReport, fit_sentiment_model};

mod error;
pub use error::ModelError;
