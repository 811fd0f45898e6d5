//! Console and JSON rendering of analysis reports

use crate::config::OutputFormat;
use crate::engine::analyzer::AnalysisReport;
use crate::engine::suitability::RoadmapStatus;
use crate::error::Result;
use colored::Colorize;

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render(&self, report: &AnalysisReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Console => Ok(self.render_console(report)),
        }
    }

    fn render_console(&self, report: &AnalysisReport) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", "Resume Analysis".bold().underline()));
        out.push_str(&format!(
            "ATS score: {}\n\n",
            score_colored(report.ats_score)
        ));

        out.push_str(&format!("{}\n", "Role matches".bold()));
        for (rank, m) in report.role_matches.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} ({:.0}%)\n     {}\n",
                rank + 1,
                m.role.cyan(),
                m.score * 100.0,
                m.reason.dimmed()
            ));
        }

        if let Some(corpus_matches) = &report.corpus_matches {
            out.push_str(&format!("\n{}\n", "Closest corpus roles".bold()));
            for m in corpus_matches {
                out.push_str(&format!(
                    "  - {} (similarity {:.2})\n",
                    m.role.cyan(),
                    m.score
                ));
            }
        }

        out.push_str(&format!("\n{}\n", "Detected skills".bold()));
        out.push_str(&format!("  {}\n", report.detected_skills.join(", ")));

        out.push_str(&format!(
            "\n{} (for {})\n",
            "Skill roadmap".bold(),
            report
                .role_matches
                .first()
                .map(|m| m.role.as_str())
                .unwrap_or("-")
        ));
        for entry in &report.skill_roadmap {
            let marker = match entry.status {
                RoadmapStatus::Learned => "✓".green(),
                RoadmapStatus::Missing => "✗".red(),
            };
            out.push_str(&format!("  {} {}\n", marker, entry.skill));
        }

        if !report.context.experience.is_empty() {
            out.push_str(&format!("\n{}\n", "Experience highlights".bold()));
            for group in &report.context.experience {
                out.push_str(&format!("  - {}\n", group));
            }
        }
        if !report.context.projects.is_empty() {
            out.push_str(&format!("\n{}\n", "Project highlights".bold()));
            for group in &report.context.projects {
                out.push_str(&format!("  - {}\n", group));
            }
        }

        out.push_str(&format!(
            "\n{} {}\n",
            "Suggested search:".bold(),
            report.search_query.yellow()
        ));

        out
    }
}

fn score_colored(score: u32) -> colored::ColoredString {
    let text = format!("{}/100", score);
    match score {
        70..=100 => text.green(),
        40..=69 => text.yellow(),
        _ => text.red(),
    }
}
