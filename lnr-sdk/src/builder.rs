// ABOUTME: Builder pattern implementation for LnrClient configuration
// ABOUTME: Credential, timeout, and endpoint override are fixed at construction

use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;

use crate::LnrClient;
use crate::constants::timeouts;
use crate::error::LnrError;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<LnrClient, LnrError>))]
pub struct LnrClientConfig {
    pub auth_token: SecretString,

    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    /// Endpoint base override, used by tests pointing at a mock server.
    #[builder(default = None)]
    pub base_url: Option<String>,
}

impl From<LnrClientConfig> for Result<LnrClient, LnrError> {
    fn from(config: LnrClientConfig) -> Self {
        LnrClient::from_config(config)
    }
}

impl LnrClient {
    pub fn builder() -> LnrClientConfigBuilder<((), (), ())> {
        LnrClientConfig::builder()
    }
}
