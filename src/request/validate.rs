use std::path::Path;

use regex::Regex;

use super::ValidationError;

pub fn common_name(name: &str) -> Result<(), ValidationError> {
    let pattern = Regex::new(r"\w+\.\w+(\.\w+)*").unwrap();
    if pattern.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCommonName(name.to_owned()))
    }
}

pub fn aliases(raw: Option<&str>) -> Result<(), ValidationError> {
    // An absent or empty alias argument means zero aliases, never an error.
    let pattern = Regex::new(r"^[\w.\s,]+$").unwrap();
    match raw {
        None | Some("") => Ok(()),
        Some(raw) if pattern.is_match(raw) => Ok(()),
        Some(raw) => Err(ValidationError::InvalidAliases(raw.to_owned())),
    }
}

pub fn output_dir(path: &Path) -> Result<(), ValidationError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ValidationError::MissingOutputPath(path.to_owned()))
    }
}
