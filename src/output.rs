//! JSON output for `--json` mode.
//!
//! One envelope per processed path, printed as a single line so batches
//! stream cleanly.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use fnorm::rename::Outcome;
use fnorm::Error;

#[derive(Debug, Serialize)]
pub struct CliResponse<'a> {
    pub success: bool,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
}

impl<'a> CliResponse<'a> {
    fn from_result(path: &Path, result: &'a Result<Outcome, Error>) -> Self {
        match result {
            Ok(outcome) => Self {
                success: true,
                path: path.display().to_string(),
                data: Some(outcome),
                error: None,
            },
            Err(err) => Self {
                success: false,
                path: path.display().to_string(),
                data: None,
                error: Some(CliError {
                    code: err.code().to_string(),
                    message: err.to_string(),
                }),
            },
        }
    }
}

pub fn print_result(path: &Path, result: &Result<Outcome, Error>) {
    let response = CliResponse::from_result(path, result);
    let payload = match serde_json::to_string(&response) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Error serializing response for {}: {}", path.display(), e);
            return;
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        // BrokenPipe is expected when piping into `head`; everything else
        // gets reported.
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("Error writing response for {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_carries_outcome() {
        let result = Ok(Outcome::Renamed {
            old: "My File.txt".to_string(),
            new: "my-file.txt".to_string(),
        });
        let response = CliResponse::from_result(Path::new("dir/My File.txt"), &result);
        let json = serde_json::to_string(&response).expect("serialize envelope");

        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"outcome\":\"renamed\""));
        assert!(json.contains("my-file.txt"));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn error_envelope_carries_code_and_message() {
        let result = Err(Error::TargetExists("my-file.txt".to_string()));
        let response = CliResponse::from_result(Path::new("dir/My File.txt"), &result);
        let json = serde_json::to_string(&response).expect("serialize envelope");

        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"code\":\"TARGET_EXISTS\""));
        assert!(json.contains("target already exists"));
        assert!(!json.contains("\"data\""));
    }
}
