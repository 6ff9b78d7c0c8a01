use crate::cli::{Action, Args};
use crate::compress::{compress_images, CompressionRatio};
use crate::constants::{FINAL_FOLDER, RENAMED_FOLDER, SUCCESS_PREFIX};
use crate::error::{BatchError, Result};
use crate::naming::RuleSet;
use crate::prompt::Prompter;
use crate::rename::rename_images;
use crate::selection::select_images;
use crate::{info, verbose, warn};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// How a run ended when no fatal error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    InvalidChoice(String),
    NoImagesSelected,
    Completed {
        action: Action,
        compressed: Vec<PathBuf>,
        renamed: Vec<PathBuf>,
    },
}

/// Drives one run: action -> selection -> compression -> renaming.
///
/// Answers given as flags in `args` skip the matching question. Abort
/// conditions are reported through [`Outcome`]; filesystem and image errors
/// are returned as `Err`.
pub fn run<R: BufRead, W: Write>(args: &Args, prompter: &mut Prompter<R, W>) -> Result<Outcome> {
    let action = match args.action {
        Some(action) => action,
        None => match prompter.choose_action() {
            Ok(action) => action,
            Err(BatchError::InvalidChoice(choice)) => {
                warn!("Invalid choice {:?}, please run the program again.", choice);
                return Ok(Outcome::InvalidChoice(choice));
            }
            Err(e) => return Err(e),
        },
    };
    verbose!("Selected operation: {}", action);

    let images = select_images(&args.inputs)?;
    if images.is_empty() {
        warn!("{}", BatchError::NoImagesSelected);
        return Ok(Outcome::NoImagesSelected);
    }
    info!("📋 {} image(s) selected", images.len());

    let mut compressed = Vec::new();
    if action.compresses() {
        let ratio = match args.ratio {
            Some(percent) => CompressionRatio::from_percent(percent as i64)?,
            None => prompter.choose_ratio()?,
        };
        info!("🗜️  Compressing {} image(s) to {}", images.len(), ratio);
        compressed = compress_images(&images, ratio, &args.output_root)?;
    }

    let mut renamed = Vec::new();
    if action.renames() {
        let rules: RuleSet = match &args.rules {
            Some(rules) => rules.clone(),
            None => prompter.choose_rules()?,
        };
        let (sources, folder) = if action == Action::Both {
            (&compressed, FINAL_FOLDER)
        } else {
            (&images, RENAMED_FOLDER)
        };
        verbose!("Naming rules: {}", rules);
        renamed = rename_images(sources, &rules, &args.output_root, folder)?;
    }

    info!("{} Done.", SUCCESS_PREFIX);
    Ok(Outcome::Completed {
        action,
        compressed,
        renamed,
    })
}
