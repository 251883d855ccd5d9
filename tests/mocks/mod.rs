pub mod completion;
pub mod transcript_source;
