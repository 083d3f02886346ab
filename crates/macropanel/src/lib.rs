#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/macropanel/macropanel/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use macropanel_data as data;
pub use macropanel_model as model;

// Re-export the common pipeline surface
pub use macropanel_data::{DataError, PanelLoader, schema};
pub use macropanel_model::{
    PanelError, SplitConfig, TrainTestSplit, build_panel, derive_target, make_train_test,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
