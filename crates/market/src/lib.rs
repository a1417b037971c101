#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/sentifactor/sentifactor-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod fetch;
pub use fetch::{bars_frame, bars_from_quotes, fetch_daily_bars};

mod returns;
pub use returns::with_daily_return;

mod error;
pub use error::MarketError;
