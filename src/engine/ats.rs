//! Heuristic ATS (applicant tracking system) scoring
//!
//! Deterministic point accumulation over presence, length, and formatting
//! signals. No randomness, no state.

use regex::Regex;

const SECTION_CHECKS: &[(&str, &[&str])] = &[
    ("contact", &["phone", "email", "address", "linkedin", "github"]),
    ("education", &["education", "degree", "university", "college", "school"]),
    ("experience", &["experience", "work", "history", "employment", "professional"]),
    ("skills", &["skills", "competencies", "tools", "technologies"]),
    ("projects", &["projects", "personal", "github", "portfolio"]),
];

const BULLET_GLYPHS: &[char] = &['•', '·', '-', '*'];

/// Rule-based resume quality scorer.
pub struct AtsScorer {
    year_pattern: Regex,
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl AtsScorer {
    pub fn new() -> Self {
        // Two distinct 4-digit years approximate a chronological history.
        let year_pattern =
            Regex::new(r"\b(19\d{2}|20\d{2})\b").expect("Invalid year pattern");
        Self { year_pattern }
    }

    /// Score resume text in `[0, 100]`.
    ///
    /// Weights: 10 per satisfied section category (max 50), up to 20 for
    /// length, 15 for bullet formatting, 15 for a year-based timeline.
    pub fn score(&self, text: &str) -> u32 {
        let mut score = 0;
        let lower = text.to_lowercase();

        // Section presence (50 points)
        for (_, keywords) in SECTION_CHECKS {
            if keywords.iter().any(|k| lower.contains(k)) {
                score += 10;
            }
        }

        // Length and detail (20 points)
        let word_count = text.split_whitespace().count();
        if word_count > 200 && word_count < 1500 {
            score += 20;
        } else if word_count > 100 {
            score += 10;
        }

        // Formatting consistency (15 points)
        if text.contains(BULLET_GLYPHS) {
            score += 15;
        }

        // Chronology (15 points): at least two distinct years
        let years: std::collections::HashSet<&str> = self
            .year_pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();
        if years.len() >= 2 {
            score += 15;
        }

        score.min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(AtsScorer::new().score(""), 0);
    }

    #[test]
    fn test_score_bounded() {
        let filler = "word ".repeat(300);
        let text = format!(
            "email phone\neducation degree\nexperience work\nskills tools\nprojects portfolio\n• 2019 - 2023\n{}",
            filler
        );
        let score = AtsScorer::new().score(&text);
        assert!(score <= 100);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_section_presence_monotonic() {
        let scorer = AtsScorer::new();
        let categories = ["email", "degree", "employment", "competencies", "portfolio"];

        let mut previous = scorer.score("");
        let mut text = String::new();
        for keyword in categories {
            text.push_str(keyword);
            text.push('\n');
            let current = scorer.score(&text);
            assert!(current >= previous);
            assert_eq!(current, previous + 10);
            previous = current;
        }
    }

    #[test]
    fn test_word_count_bands() {
        let scorer = AtsScorer::new();
        // Use a keyword-free filler word so only the length rule fires.
        assert_eq!(scorer.score(&"apple ".repeat(150)), 10);
        assert_eq!(scorer.score(&"apple ".repeat(500)), 20);
        assert_eq!(scorer.score(&"apple ".repeat(50)), 0);
        assert_eq!(scorer.score(&"apple ".repeat(2000)), 10);
    }

    #[test]
    fn test_bullet_points() {
        let scorer = AtsScorer::new();
        assert_eq!(scorer.score("• led a team"), 15);
        assert_eq!(scorer.score("led a team"), 0);
    }

    #[test]
    fn test_year_tokens() {
        let scorer = AtsScorer::new();
        assert_eq!(scorer.score("from 2019 to 2023"), 15);
        // A single year is not a timeline, even when repeated.
        assert_eq!(scorer.score("since 2019"), 0);
        assert_eq!(scorer.score("2019 2019 2019"), 0);
        // 5-digit numbers are not years.
        assert_eq!(scorer.score("20195 20231"), 0);
    }
}
