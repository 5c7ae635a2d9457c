//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use textcloud::TextCloudError;
    use textcloud::io::error::{file_system, invalid_argument};

    // Tests file system errors chain their I/O source
    // Verified by breaking the source chain
    #[test]
    fn test_file_system_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system("/tmp/notes.txt", "read source", io_error);

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read source"));
        assert!(message.contains("/tmp/notes.txt"));
        assert!(message.contains("file not found"));
    }

    // Tests invalid arguments name the parameter, value and reason
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_argument_message() {
        let error = invalid_argument("ngrams", &0, &"n-gram size must be >= 1");
        let message = error.to_string();

        assert!(message.contains("ngrams"));
        assert!(message.contains("'0'"));
        assert!(message.contains("n-gram size must be >= 1"));
        assert!(error.source().is_none());
    }

    // Tests invalid paths carry the standard reason
    // Verified by dropping the reason from the message
    #[test]
    fn test_invalid_path_message() {
        let error = TextCloudError::InvalidPath {
            path: "missing/dir".into(),
            reason: "not a valid file or directory path".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("missing/dir"));
        assert!(message.contains("not a valid file or directory path"));
    }

    // Tests exhausted layouts list the affected words
    // Verified by printing only the count
    #[test]
    fn test_layout_exhausted_message() {
        let error = TextCloudError::LayoutExhausted {
            words: vec!["alpha".to_string(), "beta".to_string()],
        };
        let message = error.to_string();
        assert!(message.contains("2 label(s)"));
        assert!(message.contains("alpha, beta"));
    }

    // Tests only decode failures are scoped to one document
    // Verified by marking every error as per-document
    #[test]
    fn test_is_per_document() {
        let decode = std::str::from_utf8(&[0xff]).unwrap_err();
        let error = TextCloudError::DecodeFailure {
            identifier: "bad.txt".to_string(),
            source: decode,
        };
        assert!(error.is_per_document());
        assert!(error.source().is_some());
        assert!(error.to_string().contains("bad.txt"));

        assert!(!invalid_argument("words", &0, &"empty").is_per_document());
        assert!(!TextCloudError::LayoutExhausted { words: Vec::new() }.is_per_document());
    }
}
