//! Lifecycle of one fetched payload

use crate::error::ApiError;

/// A fetched value: not requested yet, in flight, present, or failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Load<T> {
    Idle,
    Loading,
    Loaded(T),
    /// Error text shown in place of the value
    Failed(String),
}

impl<T> Default for Load<T> {
    fn default() -> Self {
        Load::Idle
    }
}

impl<T> Load<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Load::Loaded(value),
            Err(e) => Load::Failed(e.to_string()),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Load::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Load::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Load::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Load::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: Load<u32> = Load::from_result(Ok(3));
        assert_eq!(ok.loaded(), Some(&3));

        let failed: Load<u32> = Load::from_result(Err(ApiError::Status {
            status: 500,
            detail: None,
        }));
        assert_eq!(failed.error(), Some("Status 500"));
        assert!(failed.loaded().is_none());
    }

    #[test]
    fn test_default_is_idle() {
        let load: Load<Vec<String>> = Load::default();
        assert!(load.is_idle());
        assert!(!load.is_loading());
    }
}
