//! Document decoding collaborator
//! Turns an uploaded resume file into a flat text blob for the engine.

pub mod file_detector;
pub mod manager;
pub mod text_extractor;
