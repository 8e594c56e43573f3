use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::io::Read;
use std::path::Path;

/// Reads a JSON request body.
///
/// `None` yields an empty object and `-` reads standard input.
pub fn read_payload(source: Option<&Path>) -> Result<Value> {
    match source {
        None => Ok(json!({})),
        Some(path) if path == Path::new("-") => parse_payload(std::io::stdin().lock(), "stdin"),
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open payload file {:?}", path))?;
            parse_payload(file, &path.display().to_string())
        }
    }
}

fn parse_payload(mut reader: impl Read, origin: &str) -> Result<Value> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .with_context(|| format!("Failed to read payload from {}", origin))?;
    serde_json::from_str(&contents).with_context(|| format!("Invalid JSON payload in {}", origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_source_is_empty_object() {
        assert_eq!(read_payload(None).unwrap(), json!({}));
    }

    #[test]
    fn test_read_payload_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"text": "ótimo atendimento"}}"#).unwrap();

        let payload = read_payload(Some(file.path())).unwrap();
        assert_eq!(payload, json!({"text": "ótimo atendimento"}));
    }

    #[test]
    fn test_parse_payload_rejects_invalid_json() {
        let err = parse_payload("{not json".as_bytes(), "stdin").unwrap_err();
        assert!(err.to_string().contains("Invalid JSON payload in stdin"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_payload(Some(Path::new("/no/such/payload.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to open payload file"));
    }
}
