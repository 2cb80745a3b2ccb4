use std::fmt::{self, Display, Formatter};

/// Textual notation accepted by the parser and emitted by the formatter.
///
/// Kept as an enum rather than inlined even though it has a single
/// variant today: a second notation is a natural, low-risk future
/// addition and the CLI's `--format` flag is already structured around
/// it, matching how the source project structures this same config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Xsb,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Format::Xsb => write!(f, "xsb"),
        }
    }
}
