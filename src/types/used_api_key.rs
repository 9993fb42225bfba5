use derivative::Derivative;
use serde::{Deserialize, Serialize};

/// A struct to hold the used API key.
///
/// The key is masked in [`Debug`] output so it never ends up in traces.
#[derive(Derivative, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[derivative(Debug)]
#[serde(transparent)]
pub struct UsedApiKey {
    #[derivative(Debug(format_with = "crate::utils::mask_fmt"))]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_masks_the_key() {
        let used_api_key = UsedApiKey {
            value: "my-secret-key".to_string(),
        };

        let debug = format!("{used_api_key:?}");

        assert!(!debug.contains("my-secret-key"));
        assert!(debug.contains("..."));
    }
}
