//! Document intelligence and matching engine
//! Text normalization, skill detection, structure extraction, role ranking,
//! and ATS scoring over extracted resume text.

pub mod analyzer;
pub mod ats;
pub mod normalizer;
pub mod ranker;
pub mod skills;
pub mod structure;
pub mod suitability;
pub mod vectorizer;
