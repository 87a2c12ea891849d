//! Typed shell commands mapped to controller intents.

use anyhow::{anyhow, bail, Result};
use shared::CategoryFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Refresh,
    ToggleLanguage,
    SelectCategory(CategoryFilter),
    Help,
    Quit,
}

pub const HELP: &str = "commands: r|refresh, l|lang, c <all|tech|humanoid|embodied|research>, h|help, q|quit";

pub fn parse_intent(line: &str) -> Result<Intent> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        bail!("empty command; {HELP}");
    };

    let intent = match command.to_ascii_lowercase().as_str() {
        "r" | "refresh" => Intent::Refresh,
        "l" | "lang" | "language" => Intent::ToggleLanguage,
        "h" | "help" | "?" => Intent::Help,
        "q" | "quit" | "exit" => Intent::Quit,
        "c" | "cat" | "category" => {
            let name = words
                .next()
                .ok_or_else(|| anyhow!("missing category; {HELP}"))?;
            Intent::SelectCategory(parse_category(name)?)
        }
        other => bail!("unknown command '{other}'; {HELP}"),
    };
    Ok(intent)
}

fn parse_category(name: &str) -> Result<CategoryFilter> {
    let filter = match name.to_ascii_lowercase().as_str() {
        "all" | "0" => CategoryFilter::All,
        "tech" | "tech-giant" | "techgiant" | "1" => CategoryFilter::TechGiant,
        "humanoid" | "humanoid-robot" | "robot" | "2" => CategoryFilter::HumanoidRobot,
        "embodied" | "embodied-ai" | "3" => CategoryFilter::EmbodiedAi,
        "research" | "4" => CategoryFilter::Research,
        other => bail!("unknown category '{other}'"),
    };
    Ok(filter)
}
