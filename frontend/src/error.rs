#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("No global window")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Failed to listen for {event}: {reason}")]
    Listener { event: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_error_message() {
        let err = InitError::Listener {
            event: "scroll",
            reason: "TypeError".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to listen for scroll: TypeError");
    }
}
