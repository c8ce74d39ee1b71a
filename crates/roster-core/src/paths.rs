use std::path::{Path, PathBuf};

use crate::error::RosterError;

pub const DEFAULT_JSON_NAME: &str = "data.json";
pub const DEFAULT_XLSX_NAME: &str = "students.xlsx";

/// Name of the directory, next to the executable, holding inputs and outputs.
pub const IO_DIR_NAME: &str = "io";

/// Kind of output file, used for extension checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Json,
    Xlsx,
}

impl OutputKind {
    /// Required extension, including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputKind::Json => ".json",
            OutputKind::Xlsx => ".xlsx",
        }
    }

    pub fn default_name(self) -> &'static str {
        match self {
            OutputKind::Json => DEFAULT_JSON_NAME,
            OutputKind::Xlsx => DEFAULT_XLSX_NAME,
        }
    }
}

/// Check that an output file name carries the extension for its kind.
///
/// The comparison is case-sensitive: `DATA.JSON` is rejected.
pub fn validate_output_name(name: &str, kind: OutputKind) -> Result<(), RosterError> {
    let ext = name.rfind('.').map(|idx| &name[idx..]);
    if ext == Some(kind.extension()) {
        Ok(())
    } else {
        Err(RosterError::InvalidExtension {
            name: name.to_string(),
            expected: kind.extension(),
        })
    }
}

/// The directory all file names are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoDir {
    root: PathBuf,
}

impl IoDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        IoDir { root: root.into() }
    }

    /// `io/` next to the running executable.
    pub fn beside_executable() -> Result<Self, RosterError> {
        let exe = std::env::current_exe()?;
        let base = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(IoDir::new(base.join(IO_DIR_NAME)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the input PDF, failing if it is missing or not a `.pdf`.
    pub fn resolve_pdf(&self, name: &str) -> Result<PathBuf, RosterError> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Err(RosterError::NotFound { path });
        }

        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            return Err(RosterError::InvalidExtension {
                name: name.to_string(),
                expected: ".pdf",
            });
        }

        Ok(path)
    }

    /// Path of an output file. Does not validate the name.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
