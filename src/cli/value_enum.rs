use clap::ValueEnum;
use nfo_sweep_domain::DecodeMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliDecodeMode {
    Ignore,
    Replace,
    Strict,
}

impl From<CliDecodeMode> for DecodeMode {
    fn from(value: CliDecodeMode) -> Self {
        match value {
            CliDecodeMode::Ignore => DecodeMode::Ignore,
            CliDecodeMode::Replace => DecodeMode::Replace,
            CliDecodeMode::Strict => DecodeMode::Strict,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SummaryFormat {
    Text,
    Json,
}
