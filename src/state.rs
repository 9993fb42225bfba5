use std::{ops::Deref, sync::Arc};

use crate::{error::ErrorVerbosity, traits::StateProvider};

/// Shared state of the router. Cheap to clone, every clone sees the same settings.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(error_verbosity: ErrorVerbosity) -> Self {
        Self {
            inner: Arc::new(ApiStateInner { error_verbosity }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug)]
pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
}

impl StateProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_settings() {
        let state = ApiState::new(ErrorVerbosity::Message);
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.inner, &cloned.inner));
        assert_eq!(cloned.error_verbosity(), ErrorVerbosity::Message);
    }
}
