pub mod corpus;
pub mod speaker;
pub mod locator;
pub mod record;
pub mod worker;
pub mod coordinator;
pub mod reader;
pub mod output;
pub mod stats;

// Re-export main types for convenient access
pub use corpus::{Corpus, Document, LineKind, SpeakerTag};
pub use speaker::{resolve, SpeakerMeta};
pub use locator::{locate, trim_sentence, Position};
pub use record::{AlignmentRecord, Bitext, MissingRecord, TaggedSentence};

// Re-export the batch entry points
pub use worker::{Outcome, ProgressObserver, ShardSummary, ShardWorker, WorkerConfig};
pub use coordinator::{align_bitext, partition, AlignConfig, AlignmentOutput, RunSummary};
pub use stats::{LanguageStats, RunStats};
