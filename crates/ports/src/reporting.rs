// crates/ports/src/reporting.rs
use std::path::Path;

use nfo_sweep_shared_kernel::InfrastructureError;

/// Sink for the operator-facing outcome of each inspected file.
pub trait SweepReporter {
    fn on_renamed(&self, from: &Path, to: &Path);
    fn on_would_rename(&self, from: &Path, to: &Path);
    fn on_read_error(&self, path: &Path, err: &InfrastructureError);
    fn on_rename_error(&self, path: &Path, err: &InfrastructureError);
}
