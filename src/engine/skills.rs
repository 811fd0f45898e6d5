//! Dictionary-based skill detection with boundary disambiguation
//!
//! Works on the raw (unnormalized) resume text so that symbol-bearing skills
//! like `C++`, `C#`, and `Node.js` survive. Two strategies per vocabulary
//! entry: a boundary-anchored occurrence scan over a single Aho-Corasick pass,
//! and a token-set fallback that handles single-character skills (`C`, `R`)
//! which the boundary scan intentionally skips.

use crate::error::{Result, ResumeInsightError};
use aho_corasick::AhoCorasick;
use std::collections::HashSet;

/// Skill detector over a fixed vocabulary.
pub struct SkillDetector {
    vocabulary: Vec<String>,
    patterns: Vec<String>,
    matcher: AhoCorasick,
}

impl SkillDetector {
    /// Build a detector over the default industry vocabulary.
    pub fn new() -> Result<Self> {
        Self::with_vocabulary(default_vocabulary())
    }

    /// Build a detector over a caller-supplied vocabulary.
    /// Entries keep their original casing in the output.
    pub fn with_vocabulary(vocabulary: Vec<String>) -> Result<Self> {
        // Hyphen-agnostic matching: "Problem-Solving" and "problem solving"
        // are the same phrase.
        let patterns: Vec<String> = vocabulary
            .iter()
            .map(|s| s.to_lowercase().replace('-', " "))
            .collect();

        let matcher = AhoCorasick::new(&patterns).map_err(|e| {
            ResumeInsightError::Processing(format!("Failed to build skill matcher: {}", e))
        })?;

        Ok(Self {
            vocabulary,
            patterns,
            matcher,
        })
    }

    /// Detect vocabulary skills present in the text.
    /// Returns the matched vocabulary names, deduplicated and sorted.
    pub fn detect(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let prepared = prepare_text(text);
        let bytes = prepared.as_bytes();
        let tokens = token_set(&prepared);

        let mut detected: HashSet<usize> = HashSet::new();

        // Strategy A: boundary-anchored occurrence scan. One automaton pass
        // finds every overlapping occurrence of every phrase; a match counts
        // only when the characters immediately before and after it are not
        // alphanumeric. Single-character phrases are left to the token set
        // so "C" is never reported from "C++" alone.
        for mat in self.matcher.find_overlapping_iter(&prepared) {
            let id = mat.pattern().as_usize();
            if detected.contains(&id) {
                continue;
            }
            let pattern = &self.patterns[id];
            if pattern.chars().count() < 2 {
                continue;
            }

            // Padding guarantees a preceding byte.
            if bytes[mat.start() - 1].is_ascii_alphanumeric() {
                continue;
            }

            // Multi-word phrases tolerate a plural: "REST APIs" matches
            // "REST API". Single words stay strict so "JavaScript" can
            // never trigger "Java".
            let mut end = mat.end();
            if pattern.contains(' ') && bytes.get(end) == Some(&b's') {
                end += 1;
            }
            if bytes.get(end).is_some_and(|b| b.is_ascii_alphanumeric()) {
                continue;
            }

            detected.insert(id);
        }

        // Strategy B: exact token membership, for phrases the boundary scan
        // rejects or skips.
        for (id, pattern) in self.patterns.iter().enumerate() {
            if !detected.contains(&id) && tokens.contains(pattern.as_str()) {
                detected.insert(id);
            }
        }

        let mut skills: Vec<String> = detected
            .into_iter()
            .map(|id| self.vocabulary[id].clone())
            .collect();
        skills.sort();
        skills.dedup();
        skills
    }

    /// Number of entries in the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Lower-case the text, replace separator punctuation and hyphens with
/// spaces, and pad with a space on both ends to simplify boundary checks.
fn prepare_text(text: &str) -> String {
    let mut prepared = String::with_capacity(text.len() + 2);
    prepared.push(' ');
    for c in text.chars() {
        match c {
            ',' | ';' | '/' | '\\' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '-' => {
                prepared.push(' ')
            }
            _ => prepared.extend(c.to_lowercase()),
        }
    }
    prepared.push(' ');
    prepared
}

/// Extract maximal runs of letters, digits, and the symbols `+ # .`.
fn token_set(prepared: &str) -> HashSet<&str> {
    prepared
        .split(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '.')))
        .filter(|t| !t.is_empty())
        .collect()
}

/// The fixed industry skill vocabulary.
pub fn default_vocabulary() -> Vec<String> {
    [
        // Programming languages and DSA
        "Python", "JavaScript", "Java", "C++", "C#", "SQL", "Go", "Rust", "TypeScript", "PHP",
        "Ruby", "Swift", "Kotlin", "Scala", "R", "Dart", "Objective-C", "COBOL", "Fortran", "C",
        "DSA", "Data Structures", "Algorithms",
        // Frontend
        "React", "React.js", "Angular", "Vue", "HTML", "CSS", "Sass", "Tailwind", "Bootstrap",
        "Next.js", "Vite", "Redux", "Svelte", "jQuery", "WebAssembly", "Electron", "Three.js",
        // Backend
        "Node.js", "Express", "Django", "Flask", "FastAPI", "Spring Boot", "Laravel",
        "PostgreSQL", "MongoDB", "Redis", "Elasticsearch", "MySQL", "Oracle", "Firebase",
        "Supabase", "GraphQL", "REST API", "Microservices", "Apollo", "Prisma",
        // Cloud and DevOps
        "AWS", "Azure", "Google Cloud", "GCP", "Docker", "Kubernetes", "Jenkins", "Terraform",
        "CI/CD", "Git", "GitHub", "Linux", "Nginx", "Apache", "Prometheus", "Grafana", "Ansible",
        "Cloudflare",
        // Data and ML
        "Machine Learning", "Deep Learning", "DBMS", "Database Management", "TensorFlow",
        "PyTorch", "Pandas", "NumPy", "Scikit-Learn", "Spacy", "NLP", "Computer Vision",
        "Tableau", "PowerBI", "Large Language Models", "LLM", "OpenAI", "LangChain",
        "Vector Databases", "Spark", "Hadoop", "KAFKA",
        // Mobile
        "React Native", "Flutter", "Android SDK", "iOS Development", "SwiftUI",
        "Jetpack Compose", "Xamarin", "Cordova",
        // Tools and methodologies
        "Jira", "Agile", "Scrum", "Kanban", "Unit Testing", "TDD", "Postman", "Swagger",
        "Docker Compose", "Vagrant", "UML", "SDLC",
        // Soft skills
        "Collaboration", "Leadership", "Public Speaking", "Problem Solving", "Communication",
        "Critical Thinking", "Adaptability", "Teamwork",
        // Domain skills
        "Cybersecurity", "Blockchain", "Solidity", "Smart Contracts", "IoT", "Embedded Systems",
        "AR/VR", "Unity", "Unreal Engine",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Vec<String> {
        SkillDetector::new().unwrap().detect(text)
    }

    #[test]
    fn test_basic_detection() {
        let skills = detect("Built REST APIs using Node.js and PostgreSQL. React and Redux dashboard.");
        assert!(skills.contains(&"Node.js".to_string()));
        assert!(skills.contains(&"PostgreSQL".to_string()));
        assert!(skills.contains(&"React".to_string()));
        assert!(skills.contains(&"Redux".to_string()));
        assert!(skills.contains(&"REST API".to_string()));
    }

    #[test]
    fn test_java_not_detected_in_javascript() {
        let skills = detect("Expert in JavaScript development");
        assert!(skills.contains(&"JavaScript".to_string()));
        assert!(!skills.contains(&"Java".to_string()));
    }

    #[test]
    fn test_symbol_bearing_skills() {
        let skills = detect("Proficient in C++ and Python.");
        assert!(skills.contains(&"C++".to_string()));
        assert!(skills.contains(&"Python".to_string()));
        // "C" only appears inside "C++", never as an isolated token.
        assert!(!skills.contains(&"C".to_string()));
    }

    #[test]
    fn test_single_char_skill_as_token() {
        let skills = detect("Languages: C, R, Python");
        assert!(skills.contains(&"C".to_string()));
        assert!(skills.contains(&"R".to_string()));
    }

    #[test]
    fn test_hyphen_agnostic_matching() {
        let skills = detect("Known for problem-solving and team work");
        assert!(skills.contains(&"Problem Solving".to_string()));
    }

    #[test]
    fn test_separator_punctuation() {
        let skills = detect("Stack: (React|Vue), [Docker], {AWS}");
        assert!(skills.contains(&"React".to_string()));
        assert!(skills.contains(&"Vue".to_string()));
        assert!(skills.contains(&"Docker".to_string()));
        assert!(skills.contains(&"AWS".to_string()));
    }

    #[test]
    fn test_output_sorted_and_deduplicated() {
        let skills = detect("Python python PYTHON and Rust");
        assert_eq!(
            skills,
            vec!["Python".to_string(), "Rust".to_string()]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(detect("").is_empty());
        assert!(detect("   \n ").is_empty());
    }
}
