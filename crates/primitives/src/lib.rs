#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/sentifactor/sentifactor-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod dates;
pub use dates::{date_from_days, days_from_epoch};

mod headline;
pub use headline::HeadlineRecord;

mod market;
pub use market::MarketBar;

mod sentiment;
pub use sentiment::DailySentiment;

mod symbol;
pub use symbol::Symbol;

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
