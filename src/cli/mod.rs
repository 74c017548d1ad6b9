mod args;
pub mod parsers;
mod value_enum;

pub use args::Args;
pub use value_enum::{CliDecodeMode, SummaryFormat};

use nfo_sweep_domain::{MarkerSet, SweepConfig};
use nfo_sweep_shared_kernel::{PresentationError, Result};

/// Assemble and validate the sweep configuration from parsed arguments.
///
/// # Errors
/// Returns an error when a marker is empty or the resulting configuration is invalid.
pub fn build_config(args: &Args) -> Result<SweepConfig> {
    let mut config = SweepConfig::new(args.root.clone(), args.date)
        .with_extensions(args.ext.as_str(), args.invalid_ext.as_str())
        .with_min_files(args.min_files)
        .with_decode(args.decode.into())
        .with_dry_run(args.dry_run);

    if !args.markers.is_empty() {
        if let Some(empty) = args.markers.iter().find(|m| m.is_empty()) {
            return Err(PresentationError::InvalidValue {
                flag: "--marker".to_string(),
                value: empty.clone(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        config = config.with_markers(MarkerSet::new(args.markers.iter().cloned()));
    }

    config.validate()?;
    Ok(config)
}
