//! Running-summary block and final summary rendering

use crate::classification::{ClassificationState, Tally};
use crate::tokens::Category;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

pub const RUNNING_SUMMARY_HEADER: &str = "---- SIMULATION SUMMARY ----";
pub const RUNNING_SUMMARY_FOOTER: &str = "-----------------------------";
pub const FINAL_SUMMARY_HEADER: &str =
    "--------------------------------- FINAL SUMMARY ---------------------------------";
pub const FINAL_SUMMARY_FOOTER: &str =
    "---------------------------------------------------------------------------------";

/// Seven-line snapshot of the running tally
pub fn write_running_summary<W: Write>(out: &mut W, tally: &Tally) -> io::Result<()> {
    writeln!(out, "{}", RUNNING_SUMMARY_HEADER)?;
    for (category, count) in tally.iter() {
        writeln!(out, "{}: {}", category.plural_name(), count)?;
    }
    writeln!(out, "{}", RUNNING_SUMMARY_FOOTER)
}

/// `[a, b, c]`, or `[]` when empty
pub fn render_set<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined: Vec<&str> = tokens.into_iter().collect();
    format!("[{}]", joined.join(", "))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
    /// Distinct lexemes in first-seen order
    pub unique: Vec<String>,
}

/// Per-category totals and unique sets after a full pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalReport {
    pub categories: Vec<CategorySummary>,
}

impl FinalReport {
    pub fn from_state(state: &ClassificationState) -> Self {
        let categories = Category::ALL
            .iter()
            .map(|&category| CategorySummary {
                category,
                count: state.tally().get(category),
                unique: state.unique(category).as_slice().to_vec(),
            })
            .collect();

        Self { categories }
    }

    pub fn get(&self, category: Category) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn count(&self, category: Category) -> usize {
        self.get(category).map(|c| c.count).unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.categories.iter().map(|c| c.count).sum()
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", FINAL_SUMMARY_HEADER)?;
        for summary in &self.categories {
            writeln!(out, "{}: {}", summary.category.plural_name(), summary.count)?;
            writeln!(
                out,
                "{}",
                render_set(summary.unique.iter().map(String::as_str))
            )?;
        }
        writeln!(out, "{}", FINAL_SUMMARY_FOOTER)
    }
}
