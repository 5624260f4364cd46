//! shiftboard_engine - Weekly roster segmentation engine.

pub mod engine;
