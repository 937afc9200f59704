// chromesweep maintenance procedure
// The four steps: locate (platform), backup, prune, compact.

pub mod backup;
pub mod pruner;
pub mod timestamp;

pub use backup::ensure_backup;
pub use pruner::{HistoryPruner, HistoryPrunerTrait};
