//! AWS configuration loading for Bedrock invocation.

/// Load the ambient AWS SDK configuration (region, credentials provider
/// chain). Called once at startup; the resulting config is cloned into the
/// application state and per-request clients are built from it.
pub async fn build_config() -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await
}
