//! Interactive questions asked on the console.
//!
//! Validation is done by the `FromStr` impls of the answer types; this module
//! only owns the read / re-ask loop, so it works over any reader and writer.

use crate::cli::Action;
use crate::compress::CompressionRatio;
use crate::constants::{MAX_RATIO_PERCENT, MIN_RATIO_PERCENT};
use crate::error::{BatchError, Result};
use crate::naming::{parse_rule_list, NamingRule, RuleSet};
use std::io::{BufRead, Write};

/// Validates the answer to the top-level menu.
pub fn parse_action(answer: &str) -> Result<Action> {
    match answer.trim() {
        "1" => Ok(Action::Compress),
        "2" => Ok(Action::Rename),
        "3" => Ok(Action::Both),
        other => Err(BatchError::InvalidChoice(other.to_string())),
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(BatchError::InputClosed);
        }
        Ok(answer.trim().to_string())
    }

    /// Asks once; an invalid answer is returned as `BatchError::InvalidChoice`.
    pub fn choose_action(&mut self) -> Result<Action> {
        self.say("Choose an operation:")?;
        self.say("1. Compress images")?;
        self.say("2. Rename images")?;
        self.say("3. Both")?;
        let answer = self.ask("Enter a number (1, 2, 3): ")?;
        parse_action(&answer)
    }

    /// Asks until a whole number between 5 and 95 is given.
    pub fn choose_ratio(&mut self) -> Result<CompressionRatio> {
        let question = format!(
            "Enter the compression ratio ({}% ~ {}%, number only): ",
            MIN_RATIO_PERCENT, MAX_RATIO_PERCENT
        );
        loop {
            let answer = self.ask(&question)?;
            match answer.parse::<CompressionRatio>() {
                Ok(ratio) => return Ok(ratio),
                Err(BatchError::RatioOutOfRange(..)) => self.say(&format!(
                    "Please enter a number between {} and {}.",
                    MIN_RATIO_PERCENT, MAX_RATIO_PERCENT
                ))?,
                Err(BatchError::InvalidRatio(_)) => self.say("Please enter a valid number.")?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Asks until at least one known rule is given. Unknown entries are
    /// dropped and listed back to the user.
    pub fn choose_rules(&mut self) -> Result<RuleSet> {
        self.say("Choose naming rules (several allowed):")?;
        for rule in NamingRule::ALL {
            self.say(&format!("{}. {}", rule.id(), rule.label()))?;
        }

        loop {
            let answer = self.ask("Enter numbers separated by commas (e.g. 1,3,5): ")?;
            let parsed = parse_rule_list(&answer);
            if !parsed.rejected.is_empty() {
                self.say(&format!("Ignoring unknown rules: {}", parsed.rejected.join(", ")))?;
            }
            match RuleSet::new(parsed.rules) {
                Ok(rules) => return Ok(rules),
                Err(BatchError::EmptyRuleSet) => self.say("Please choose at least one rule.")?,
                Err(e) => return Err(e),
            }
        }
    }
}
