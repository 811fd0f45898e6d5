//! Suitability scoring, skill roadmaps, and search-query synthesis
//!
//! This is the keyword-density ranking path used for roles discovered
//! dynamically rather than drawn from the fixed corpus (see `ranker` for
//! the vector path).

use crate::engine::ranker::{RoleMatch, RoleScorer};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Suitability of one candidate role for a resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suitability {
    pub score: f32,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadmapStatus {
    Learned,
    Missing,
}

/// Gap-analysis item for the top matched role. Output order follows the
/// target-skill table, so the roadmap reads as a priority-ordered checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapEntry {
    pub skill: String,
    pub status: RoadmapStatus,
}

/// Keyword-density suitability synthesizer.
#[derive(Debug, Default, Clone)]
pub struct SuitabilitySynthesizer;

impl SuitabilitySynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Score how well a role name is reflected in the resume text.
    ///
    /// Score is `0.45 + density * 0.4` plus a small perturbation, capped at
    /// 0.99. The perturbation separates near-identical roles; it is a
    /// deterministic function of (role, resume) so identical inputs always
    /// produce identical scores.
    pub fn analyze_suitability(&self, role: &str, resume_text: &str) -> Suitability {
        let resume_lower = resume_text.to_lowercase();
        let role_lower = role.to_lowercase();

        let role_words: Vec<&str> = role_lower
            .split_whitespace()
            .filter(|w| w.len() > 2)
            .collect();
        let matched: Vec<&str> = role_words
            .iter()
            .copied()
            .filter(|w| resume_lower.contains(w))
            .collect();

        let density = if role_words.is_empty() {
            0.0
        } else {
            matched.len() as f32 / role_words.len() as f32
        };

        let reason = match matched.as_slice() {
            [] => "Identified as a growth path based on your overall technical competency."
                .to_string(),
            [only] => format!(
                "Strong alignment with {} core concepts like {} found in your profile.",
                role,
                capitalize(only)
            ),
            [first, second, ..] => format!(
                "Deep expertise match: Your background significantly aligns with {} ({}, {}).",
                role, first, second
            ),
        };

        let jitter = tie_break_jitter(role, resume_text);
        let score = (0.45 + density * 0.4 + jitter).min(0.99);

        Suitability { score, reason }
    }

    /// Build a learned/missing roadmap of trendy skills for a role.
    pub fn skill_roadmap(&self, role: &str, detected_skills: &[String]) -> Vec<RoadmapEntry> {
        let targets = trendy_skills_for(role);
        let detected_lower: Vec<String> =
            detected_skills.iter().map(|s| s.to_lowercase()).collect();

        targets
            .iter()
            .map(|target| {
                let target_lower = target.to_lowercase();
                let learned = detected_lower
                    .iter()
                    .any(|d| target_lower == *d || d.contains(&target_lower));
                RoadmapEntry {
                    skill: target.to_string(),
                    status: if learned {
                        RoadmapStatus::Learned
                    } else {
                        RoadmapStatus::Missing
                    },
                }
            })
            .collect()
    }

    /// Synthesize a search query from the ranked matches.
    ///
    /// Uses the absolute winner; when its score clears 0.6 the resume's most
    /// frequently occurring detected skill narrows the query.
    pub fn super_query(
        &self,
        sorted_matches: &[RoleMatch],
        detected_skills: &[String],
        resume_text: &str,
    ) -> String {
        let Some(winner) = sorted_matches.first() else {
            return "Job Postings".to_string();
        };

        let resume_lower = resume_text.to_lowercase();
        // First skill wins on tied occurrence counts.
        let mut top_skill: Option<(&str, usize)> = None;
        for skill in detected_skills {
            let count = resume_lower.matches(&skill.to_lowercase()).count();
            if top_skill.map_or(true, |(_, best)| count > best) {
                top_skill = Some((skill.as_str(), count));
            }
        }
        let top_skill = top_skill.map(|(skill, _)| skill);

        match top_skill {
            Some(skill) if winner.score > 0.6 => format!("{} {}", winner.role, skill).trim().to_string(),
            _ => winner.role.trim().to_string(),
        }
    }
}

/// Scores externally discovered candidate roles by keyword density.
pub struct KeywordDensityScorer {
    synthesizer: SuitabilitySynthesizer,
}

impl Default for KeywordDensityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordDensityScorer {
    pub fn new() -> Self {
        Self {
            synthesizer: SuitabilitySynthesizer::new(),
        }
    }
}

impl RoleScorer for KeywordDensityScorer {
    fn rank(
        &self,
        resume_text: &str,
        candidates: &[String],
        top_k: usize,
    ) -> Result<Vec<RoleMatch>> {
        let mut matches: Vec<RoleMatch> = candidates
            .iter()
            .map(|role| {
                let suitability = self.synthesizer.analyze_suitability(role, resume_text);
                RoleMatch {
                    role: role.clone(),
                    score: suitability.score,
                    reason: suitability.reason,
                }
            })
            .collect();

        // Stable sort: equal scores preserve discovery order.
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        matches.truncate(top_k.min(matches.len()));
        Ok(matches)
    }
}

/// Deterministic stand-in for random tie-breaking noise, mapped into
/// `[0.001, 0.005]` from an FNV-1a hash of the inputs.
fn tie_break_jitter(role: &str, resume_text: &str) -> f32 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for byte in role.bytes().chain([0u8]).chain(resume_text.bytes()) {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }

    0.001 + (hash % 10_000) as f32 / 10_000.0 * 0.004
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Trendy target skills per role, with a generic advanced list for roles
/// outside the table.
fn trendy_skills_for(role: &str) -> &'static [&'static str] {
    const DEFAULT: &[&str] = &[
        "Advanced Architecture",
        "System Design",
        "Cloud Optimization",
        "Team Leadership",
        "Global Deployment",
    ];

    match role {
        "Data Scientist" => &[
            "Machine Learning",
            "Deep Learning",
            "TensorFlow",
            "Pandas",
            "Statistics",
            "Data Visualization",
            "Big Data",
        ],
        "DevOps Engineer" => &[
            "Kubernetes",
            "Docker",
            "Terraform",
            "CI/CD",
            "AWS",
            "Prometheus",
            "Linux",
        ],
        "Cloud Architect" => &[
            "AWS",
            "Azure",
            "GCP",
            "Serverless",
            "Infrastructure as Code",
            "Networking",
            "Security",
        ],
        "Technical Lead" => &[
            "System Design",
            "Scalability",
            "Leadership",
            "Agile",
            "Microservices",
            "Cloud Native",
            "Mentorship",
        ],
        "Research Scientist" => &[
            "PyTorch",
            "NLP",
            "Deep Learning",
            "Publication Writing",
            "Mathematical Modeling",
            "Scientific Python",
        ],
        "Backend Developer" => &[
            "API Design",
            "Microservices",
            "PostgreSQL",
            "Redis",
            "Message Queues",
            "Caching Strategies",
            "GRPC",
        ],
        "Product Manager" => &[
            "Product Roadmap",
            "Stakeholder Management",
            "User Research",
            "Agile",
            "Market Analysis",
            "UX Design",
        ],
        "Solution Architect" => &[
            "System Architecture",
            "Security Compliance",
            "Cloud Migration",
            "Cost Optimization",
            "Integrations",
            "Technical Documentation",
        ],
        _ => DEFAULT,
    }
}
