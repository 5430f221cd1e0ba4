mod study;

pub use study::{ConfigError, RawStudyConfig, StudyConfig, SweepRange};
