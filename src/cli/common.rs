//! Global output options

use clap::ValueEnum;

/// How listings and single records are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns (default)
    Table,
    /// RFC 4180 CSV with snake_case headers
    Csv,
    /// Pretty-printed JSON array
    Json,
    Yaml,
}

impl OutputFormat {
    /// True for formats meant for other programs rather than people
    pub fn is_machine_readable(self) -> bool {
        !matches!(self, OutputFormat::Table)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}
