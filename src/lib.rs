pub mod logger;

pub mod app;
pub mod cli;
pub mod compress;
pub mod constants;
pub mod error;
pub mod folder;
pub mod naming;
pub mod processing;
pub mod prompt;
pub mod rename;
pub mod selection;
pub mod utils;

pub use app::{run, Outcome};
pub use cli::{Action, Args};
pub use compress::{compress_images, resize_image, CompressionRatio, CompressionSummary};
pub use error::{BatchError, Result};
pub use folder::allocate_unique_folder;
pub use naming::{parse_rule_list, ImageFacts, NamingRule, ParsedRules, RuleSet};
pub use prompt::{parse_action, Prompter};
pub use rename::rename_images;
pub use selection::{collect_image_files, is_image_file, pick_images, select_images};
