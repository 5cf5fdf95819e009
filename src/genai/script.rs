//! Loader-script generation for library files.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use super::wire::GenerateContentRequest;
use super::GenAiClient;

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:python)?").expect("Invalid code fence regex pattern"));

pub fn build_script_prompt(file_name: &str, mime_type: &str, hex_preview: &str) -> String {
    format!(
        "I have a file named \"{file_name}\" with MIME type \"{mime_type}\".\n\
         Here is a hex preview of the beginning of the file:\n\
         {hex_preview}\n\
         Please write a robust, professional Python script to:\n\
         1. Load this file.\n\
         2. Identify what library would be best to parse it.\n\
         3. Provide a code snippet that opens the file and prints basic metadata.\n\
         If the file type is generic binary, use the 'struct' module.\n\
         Return ONLY the Python code block."
    )
}

/// Remove every ```` ```python ```` and ```` ``` ```` marker, then trim.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

/// Text shown in place of a script when generation fails.
pub fn script_error_placeholder(details: &str) -> String {
    format!("# Error generating smart script.\n# Details: {}", details)
}

/// Ask the model for a Python loader for the described file.
///
/// Never fails: errors come back as a commented placeholder script.
pub async fn generate_loader_script(
    client: &GenAiClient,
    file_name: &str,
    mime_type: &str,
    hex_preview: &str,
) -> String {
    let prompt = build_script_prompt(file_name, mime_type, hex_preview);
    let request = GenerateContentRequest::prompt(prompt);

    match client.generate_content(client.model(), &request).await {
        Ok(text) => {
            info!(file_name, "loader script generated");
            strip_code_fences(&text)
        }
        Err(err) => {
            warn!(file_name, error = %err, "loader script generation failed");
            script_error_placeholder(&err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;

    #[test]
    fn test_prompt_contents() {
        let prompt = build_script_prompt("a.png", "image/png", "89 50 4E 47");
        assert!(prompt.starts_with("I have a file named \"a.png\" with MIME type \"image/png\".\n"));
        assert!(prompt.contains("\n89 50 4E 47\n"));
        assert!(prompt.contains("use the 'struct' module."));
        assert!(prompt.ends_with("Return ONLY the Python code block."));
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```python\nprint(1)\n```"), "print(1)");
        assert_eq!(strip_code_fences("  ```\nx = 2\n```  \n"), "x = 2");
        assert_eq!(strip_code_fences("no fences"), "no fences");
    }

    #[test]
    fn test_strip_removes_inner_fences() {
        let text = "```python\na = 1\n```\nnote\n```python\nb = 2\n```";
        assert_eq!(strip_code_fences(text), "a = 1\n\nnote\n\nb = 2");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(
            script_error_placeholder("boom"),
            "# Error generating smart script.\n# Details: boom"
        );
    }

    #[tokio::test]
    async fn test_generate_success_strips_fences() {
        let mock = MockHttpClient::new();
        mock.set_default_response(reply("```python\nimport struct\n```"));
        let client = client_with(&mock);

        let script = generate_loader_script(&client, "blob.bin", "application/octet-stream", "00 01").await;
        assert_eq!(script, "import struct");

        let body = mock.get_requests()[0].json();
        assert!(body.get("systemInstruction").is_none());
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("\"blob.bin\""));
    }

    #[tokio::test]
    async fn test_generate_failure_yields_placeholder() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let client = client_with(&mock);

        let script = generate_loader_script(&client, "x", "y", "z").await;
        assert!(script.starts_with("# Error generating smart script.\n# Details: "));
        assert!(script.contains("refused"));
    }
}
