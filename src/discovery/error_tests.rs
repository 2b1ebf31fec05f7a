//! Unit tests for snapshot error types

#[cfg(test)]
mod tests {
    use crate::FaqError;
    use crate::discovery::error::SnapshotError;
    use std::error::Error;

    #[test]
    fn test_duplicate_id_error() {
        let error = SnapshotError::DuplicateId("faq-1".to_string());
        assert_eq!(error.to_string(), "Duplicate entry id: faq-1");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let error = SnapshotError::from(json_error);

        match &error {
            SnapshotError::Json(_) => {}
            SnapshotError::DuplicateId(_) => panic!("Expected Json variant"),
        }
        assert!(error.to_string().starts_with("Invalid snapshot JSON"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_faq_error_wraps_snapshot_error() {
        let error: FaqError = SnapshotError::DuplicateId("x".to_string()).into();
        let message = error.to_string();
        assert!(message.contains("Snapshot error"));
        assert!(message.contains("Duplicate entry id: x"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SnapshotError>();
        assert_send_sync::<FaqError>();
    }
}
