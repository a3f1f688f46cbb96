use crate::error::Result;
use crate::method::{CipherRequest, CipherResponse};
use std::io::Read;
use std::path::Path;

/// Answer a JSON [`CipherRequest`] read from `path` (`-` reads stdin)
pub fn run_request(path: &Path) -> Result<CipherResponse> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    answer_json(&raw)
}

pub fn answer_json(raw: &str) -> Result<CipherResponse> {
    let request: CipherRequest = serde_json::from_str(raw)?;
    Ok(request.respond())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;
    use crate::method::{Method, Operation};
    use tempfile::tempdir;

    #[test]
    fn test_run_request_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(
            &path,
            r#"{"text": "пиервт", "key": "2", "method": "rail-fence", "operation": "decrypt"}"#,
        )
        .unwrap();

        let response = run_request(&path).unwrap();
        assert_eq!(response.method, Method::RailFence);
        assert_eq!(response.operation, Operation::Decrypt);
        assert_eq!(response.result, "привет");
    }

    #[test]
    fn test_malformed_request() {
        assert!(matches!(answer_json("{"), Err(CipherError::Json(_))));
        assert!(matches!(
            answer_json(r#"{"text": "а", "method": "caesar"}"#),
            Err(CipherError::Json(_))
        ));
    }
}
