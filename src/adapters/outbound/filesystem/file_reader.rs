use crate::adapters::outbound::dataset::MergedDataParser;
use crate::license_mapping::domain::LicenseRepository;
use crate::ports::outbound::LicenseMapReader;
use crate::shared::error::LynxError;
use crate::shared::security::{read_checked, MAX_DATASET_SIZE};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// FileSystemLicenseMapReader adapter for datasets stored on disk
///
/// The file is read with the same checks applied to any input file:
/// symbolic links are rejected, the path must be a regular file, and the
/// size is capped at [`MAX_DATASET_SIZE`].
pub struct FileSystemLicenseMapReader {
    path: PathBuf,
}

impl FileSystemLicenseMapReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LicenseMapReader for FileSystemLicenseMapReader {
    fn read_license_map(&self) -> Result<LicenseRepository> {
        if !self.path.exists() {
            return Err(LynxError::DatasetReadError {
                path: self.path.clone(),
                details: "file does not exist".to_string(),
            }
            .into());
        }

        let content = read_checked(&self.path, "license dataset", MAX_DATASET_SIZE).map_err(
            |e| LynxError::DatasetReadError {
                path: self.path.clone(),
                details: e.to_string(),
            },
        )?;

        MergedDataParser::parse(&content, &self.source_name())
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}
