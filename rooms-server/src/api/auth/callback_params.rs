use serde::Deserialize;

/// Query parameters the provider appends to the callback redirect
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: Option<String>,

    /// Anti-forgery state token, echoed back unchanged by the provider
    #[serde(default)]
    pub state: Option<String>,

    /// Set instead of `code` when the provider reports a failure
    #[serde(default)]
    pub error: Option<String>,
}
