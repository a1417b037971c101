#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/sentifactor/sentifactor-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod loader;
pub use loader::{headline_frame, load_headlines};

mod scorer;
pub use scorer::{SentimentScorer, VaderScorer};

mod daily;
pub use daily::{
    concat_sources, daily_mean_sentiment, daily_series, score_headlines, sentiment_date_range,
};

mod error;
pub use error::NewsError;
