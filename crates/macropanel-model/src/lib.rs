#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/macropanel/macropanel/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod features;
pub mod panel;
pub mod split;

#[cfg(test)]
pub(crate) mod test_frames;

pub use error::{PanelError, Result};
pub use features::derive_target;
pub use panel::build_panel;
pub use split::{SplitConfig, TrainTestSplit, make_train_test};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
