use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("can't run {program:?}")]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{program:?} exited with {status}")]
    Failed {
        program: PathBuf,
        status: ExitStatus,
    },
}

/// Narrow seam around the external utility that turns a request document
/// into the finished request file.
pub trait Signer {
    fn sign(&self, request_document: &Path, output_file: &Path) -> Result<(), SigningError>;
}

/// The OS certificate-request utility, run synchronously with the request
/// document and the destination file as its two positional arguments.
pub struct CertReq {
    program: PathBuf,
}

impl CertReq {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }
}

impl Signer for CertReq {
    fn sign(&self, request_document: &Path, output_file: &Path) -> Result<(), SigningError> {
        let status = Command::new(&self.program)
            .arg(request_document)
            .arg(output_file)
            .status()
            .map_err(|source| SigningError::Launch {
                program: self.program.clone(),
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(SigningError::Failed {
                program: self.program.clone(),
                status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_utility_surfaces_as_a_launch_error() {
        let signer = CertReq::new(PathBuf::from("no-such-signing-utility"));
        let err = signer
            .sign(Path::new("request.inf"), Path::new("request.csr"))
            .unwrap_err();
        assert!(matches!(err, SigningError::Launch { .. }));
    }
}
