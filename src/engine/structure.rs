//! Resume structure extraction
//!
//! Segments resume text into logical sections and groups lines into
//! title + detail records. Section attribution is greedy: once a heading is
//! matched, every following line belongs to that section until the next
//! recognized heading. That can misattribute content after an unrecognized
//! heading in ambiguous documents; the behavior is a documented heuristic
//! limitation, kept as-is.

use regex::Regex;
use serde::{Deserialize, Serialize};

const MAX_SECTION_LINES: usize = 100;
const MAX_GROUPS: usize = 10;
const TITLE_MAX_LEN: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Experience,
    Projects,
    Summary,
}

/// Grouped experience and project highlights extracted from a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeContext {
    pub experience: Vec<String>,
    pub projects: Vec<String>,
}

/// Heading keyword tables per section. Injected configuration so the
/// analyzer stays independently testable; defaults mirror common resume
/// headings.
#[derive(Debug, Clone)]
pub struct SectionPatterns {
    entries: Vec<(Section, Vec<Regex>)>,
}

impl Default for SectionPatterns {
    fn default() -> Self {
        Self::from_keywords(&[
            (
                Section::Experience,
                &[
                    "experience",
                    "work history",
                    "employment",
                    "professional background",
                ][..],
            ),
            (
                Section::Projects,
                &[
                    "projects",
                    "personal projects",
                    "academic projects",
                    "technical projects",
                ][..],
            ),
            (
                Section::Summary,
                &["summary", "objective", "about me", "profile"][..],
            ),
        ])
    }
}

impl SectionPatterns {
    /// Compile heading patterns from keyword tables. A heading is the keyword
    /// alone on the line, optionally followed by a colon.
    pub fn from_keywords(tables: &[(Section, &[&str])]) -> Self {
        let entries = tables
            .iter()
            .map(|(section, keywords)| {
                let patterns = keywords
                    .iter()
                    .map(|k| {
                        let escaped = regex::escape(k);
                        Regex::new(&format!(r"^\s*{}\s*(:|$)", escaped))
                            .expect("heading keyword produced an invalid pattern")
                    })
                    .collect();
                (*section, patterns)
            })
            .collect();
        Self { entries }
    }

    fn match_heading(&self, line: &str) -> Option<Section> {
        self.entries
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(line)))
            .map(|(section, _)| *section)
    }
}

/// Line-scan structure analyzer.
pub struct StructureAnalyzer {
    patterns: SectionPatterns,
}

impl Default for StructureAnalyzer {
    fn default() -> Self {
        Self::new(SectionPatterns::default())
    }
}

enum Line {
    Title(String),
    Detail(String),
}

impl StructureAnalyzer {
    pub fn new(patterns: SectionPatterns) -> Self {
        Self { patterns }
    }

    /// Extract grouped experience and project entries from resume text.
    pub fn analyze(&self, text: &str) -> ResumeContext {
        let mut current_section: Option<Section> = None;
        let mut experience: Vec<Line> = Vec::new();
        let mut projects: Vec<Line> = Vec::new();
        let mut summary: Vec<Line> = Vec::new();

        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.len() < 3 {
                continue;
            }

            let lower = line.to_lowercase();
            if let Some(section) = self.patterns.match_heading(&lower) {
                // Heading lines are consumed, never captured as content.
                current_section = Some(section);
                continue;
            }

            let Some(section) = current_section else {
                continue;
            };
            let buffer = match section {
                Section::Experience => &mut experience,
                Section::Projects => &mut projects,
                Section::Summary => &mut summary,
            };
            if buffer.len() >= MAX_SECTION_LINES {
                continue;
            }

            // Bulleted lines are details; short non-bulleted lines are
            // likely titles and open a new logical group.
            let is_detail = line.starts_with('•')
                || line.starts_with('*')
                || line.starts_with('-')
                || line.chars().count() >= TITLE_MAX_LEN;
            if is_detail {
                buffer.push(Line::Detail(line.to_string()));
            } else {
                buffer.push(Line::Title(line.to_string()));
            }
        }

        ResumeContext {
            experience: fold_groups(experience),
            projects: fold_groups(projects),
        }
    }
}

/// Fold a section's line stream into title + detail groups, joined with
/// `" | "`, capped at the first `MAX_GROUPS` groups.
fn fold_groups(lines: Vec<Line>) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in lines {
        match line {
            Line::Title(text) => {
                if !current.is_empty() {
                    groups.push(current.join(" | "));
                    current.clear();
                }
                current.push(text);
            }
            Line::Detail(text) => current.push(text),
        }
    }
    if !current.is_empty() {
        groups.push(current.join(" | "));
    }

    groups.truncate(MAX_GROUPS);
    groups
}
