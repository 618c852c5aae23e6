use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use thiserror::Error;

use crate::RequestPlan;

use self::params::{CryptoProvider, KeyLength};

pub mod inf;
pub mod params;
pub mod san;
mod validate;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("'{0}' is not a valid common name, expected dot separated labels like host.domain.org")]
    InvalidCommonName(String),
    #[error("'{0}' is not a valid alias list, aliases may only contain word characters, dots and spaces")]
    InvalidAliases(String),
    #[error("output directory {0:?} does not exist")]
    MissingOutputPath(PathBuf),
}

/// Everything the renderer needs to produce one request document.
/// Immutable once built; construction performs all input validation.
#[derive(Debug)]
pub struct RequestDescriptor {
    common_name: String,
    key_length: KeyLength,
    exportable: bool,
    provider: CryptoProvider,
    subject_alt_names: Vec<String>,
    output_file: PathBuf,
}

impl RequestDescriptor {
    pub fn new(
        common_name: &str,
        key_length: KeyLength,
        exportable: bool,
        provider: CryptoProvider,
        raw_aliases: Option<&str>,
        output_dir: &Path,
    ) -> Result<Self, ValidationError> {
        validate::common_name(common_name)?;
        validate::aliases(raw_aliases)?;
        validate::output_dir(output_dir)?;

        Ok(Self {
            common_name: common_name.to_owned(),
            key_length,
            exportable,
            provider,
            subject_alt_names: san::split_aliases(raw_aliases),
            output_file: resolve_output_file(output_dir, common_name),
        })
    }

    pub fn from_plan(plan: &RequestPlan) -> Result<Self, ValidationError> {
        Self::new(
            &plan.common_name,
            plan.key_length,
            plan.exportable,
            plan.provider,
            plan.aliases.as_deref(),
            &plan.output_dir,
        )
    }

    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    pub fn key_length(&self) -> KeyLength {
        self.key_length
    }

    pub fn exportable(&self) -> bool {
        self.exportable
    }

    pub fn provider(&self) -> CryptoProvider {
        self.provider
    }

    pub fn subject_alt_names(&self) -> &[String] {
        &self.subject_alt_names
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}

/// Appends `<common_name>.csr` to the output directory, inserting a
/// separator only when the directory doesn't already end with one. The
/// downstream utility overwrites an existing file at this path.
pub fn resolve_output_file(output_dir: &Path, common_name: &str) -> PathBuf {
    let dir = output_dir.to_string_lossy();
    if dir.ends_with(MAIN_SEPARATOR) {
        PathBuf::from(format!("{dir}{common_name}.csr"))
    } else {
        PathBuf::from(format!("{dir}{MAIN_SEPARATOR}{common_name}.csr"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(common_name: &str, aliases: Option<&str>, output_dir: &Path) -> RequestPlan {
        RequestPlan {
            common_name: common_name.to_owned(),
            key_length: KeyLength::default(),
            exportable: false,
            provider: CryptoProvider::default(),
            aliases: aliases.map(str::to_owned),
            output_dir: output_dir.to_owned(),
        }
    }

    #[test]
    fn resolver_inserts_exactly_one_separator() {
        let dir = format!("{MAIN_SEPARATOR}tmp");
        let resolved = resolve_output_file(Path::new(&dir), "host.domain.org");
        assert_eq!(
            resolved,
            PathBuf::from(format!("{dir}{MAIN_SEPARATOR}host.domain.org.csr"))
        );
    }

    #[test]
    fn resolver_keeps_a_trailing_separator_single() {
        let dir = format!("{MAIN_SEPARATOR}tmp{MAIN_SEPARATOR}");
        let resolved = resolve_output_file(Path::new(&dir), "host.domain.org");
        assert_eq!(resolved, PathBuf::from(format!("{dir}host.domain.org.csr")));
    }

    #[test]
    fn descriptor_keeps_aliases_in_splitter_order() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = RequestDescriptor::from_plan(&plan(
            "host.domain.org",
            Some("alias1,alias2"),
            dir.path(),
        ))
        .unwrap();

        assert_eq!(descriptor.subject_alt_names(), ["alias1", "alias2"]);
        assert!(descriptor
            .output_file()
            .to_string_lossy()
            .ends_with("host.domain.org.csr"));
    }

    #[test]
    fn common_name_is_checked_before_everything_else() {
        // Both the name and the directory are bad; the name wins.
        let missing = Path::new("definitely-not-a-directory");
        let err =
            RequestDescriptor::from_plan(&plan("nodots", Some(";;;"), missing)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCommonName(_)));
    }

    #[test]
    fn alias_argument_is_checked_as_a_whole_before_splitting() {
        let missing = Path::new("definitely-not-a-directory");
        let err = RequestDescriptor::from_plan(&plan(
            "host.domain.org",
            Some("good,bad;alias"),
            missing,
        ))
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidAliases(_)));
    }

    #[test]
    fn missing_output_directory_is_the_last_failure() {
        let missing = Path::new("definitely-not-a-directory");
        let err = RequestDescriptor::from_plan(&plan("host.domain.org", None, missing))
            .unwrap_err();
        assert!(matches!(err, ValidationError::MissingOutputPath(_)));
    }
}
