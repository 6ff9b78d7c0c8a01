use crate::naming::RuleSet;
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "img-batch",
    about = "Batch resize and rename images",
    long_about = "img-batch resizes a selection of images by a percentage and/or copies them \
                  into a new folder under names built from an ordered list of naming rules. \
                  Every question it asks interactively can be answered up front with a flag.",
    version = "0.1.0",
    after_help = "NAMING RULES:\n  \
    1 sequence number   2 name without extension   3 name with extension\n  \
    4 width             5 height                   6 modification date (UTC)\n  \
    7 current date      8 size (auto)              9 size (KB)   10 size (bytes)\n\n\
    EXAMPLES:\n  \
    img-batch\n  \
    img-batch ./photos --action compress --ratio 50\n  \
    img-batch \"./shots/*.png\" -a both -r 30 -R 1,4,5 -o ./out"
)]
pub struct Args {
    #[arg(
        value_name = "INPUTS",
        help = "Image files, directories or glob patterns (opens a file picker when omitted)",
        long_help = "Images to process. Directories contribute the images directly inside them, \
                     sorted by name. Inputs that are neither a file nor a directory are expanded \
                     as glob patterns. Only .jpg, .jpeg, .png and .bmp files are kept."
    )]
    pub inputs: Vec<String>,

    #[arg(
        short = 'a',
        long,
        value_enum,
        help = "Operation to run instead of asking"
    )]
    pub action: Option<Action>,

    #[arg(
        short = 'r',
        long,
        value_parser = clap::value_parser!(u8).range(5..=95),
        help = "Compression ratio in percent (5-95) instead of asking",
        long_help = "Both width and height are multiplied by this percentage and rounded down."
    )]
    pub ratio: Option<u8>,

    #[arg(
        short = 'R',
        long,
        value_name = "LIST",
        help = "Comma-separated naming rules (1-10) instead of asking",
        long_help = "Naming rules joined with '_' to build each new file name, for example 1,4,5. \
                     Unknown rule numbers are rejected."
    )]
    pub rules: Option<RuleSet>,

    #[arg(
        short = 'o',
        long,
        default_value = ".",
        help = "Directory in which the output folders are created"
    )]
    pub output_root: PathBuf,

    #[arg(short = 'q', long, help = "Only print prompts and errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print per-image details")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    Compress,
    Rename,
    Both,
}

impl Action {
    pub fn compresses(self) -> bool {
        matches!(self, Action::Compress | Action::Both)
    }

    pub fn renames(self) -> bool {
        matches!(self, Action::Rename | Action::Both)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Compress => "compress",
            Action::Rename => "rename",
            Action::Both => "compress and rename",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::NamingRule;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["img-batch"]).unwrap();
        assert!(args.inputs.is_empty());
        assert_eq!(args.action, None);
        assert_eq!(args.ratio, None);
        assert_eq!(args.rules, None);
        assert_eq!(args.output_root, PathBuf::from("."));
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "img-batch", "a.jpg", "dir", "-a", "both", "-r", "30", "-R", "1,4,5", "-o", "out",
        ])
        .unwrap();
        assert_eq!(args.inputs, vec!["a.jpg", "dir"]);
        assert_eq!(args.action, Some(Action::Both));
        assert_eq!(args.ratio, Some(30));
        assert_eq!(
            args.rules.unwrap().rules(),
            &[NamingRule::Index, NamingRule::Width, NamingRule::Height]
        );
        assert_eq!(args.output_root, PathBuf::from("out"));
    }

    #[test]
    fn test_ratio_range_is_enforced() {
        assert!(Args::try_parse_from(["img-batch", "--ratio", "5"]).is_ok());
        assert!(Args::try_parse_from(["img-batch", "--ratio", "95"]).is_ok());
        assert!(Args::try_parse_from(["img-batch", "--ratio", "4"]).is_err());
        assert!(Args::try_parse_from(["img-batch", "--ratio", "96"]).is_err());
    }

    #[test]
    fn test_unknown_rule_flag_is_rejected() {
        assert!(Args::try_parse_from(["img-batch", "--rules", "1,99"]).is_err());
        assert!(Args::try_parse_from(["img-batch", "--rules", ","]).is_err());
    }

    #[test]
    fn test_action_predicates() {
        assert!(Action::Compress.compresses() && !Action::Compress.renames());
        assert!(!Action::Rename.compresses() && Action::Rename.renames());
        assert!(Action::Both.compresses() && Action::Both.renames());
    }
}
