use anyhow::Context;
use async_trait::async_trait;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;
use aws_sdk_lambda::Client;

use super::{Invocation, Notifier};

pub struct LambdaNotifier {
    function_name: String,
    client: Client,
}

impl LambdaNotifier {
    pub fn new(sdk_config: &aws_config::SdkConfig, function_name: String) -> Self {
        Self {
            function_name,
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl Notifier for LambdaNotifier {
    async fn invoke(&self, payload: Vec<u8>) -> anyhow::Result<Invocation> {
        let output = self
            .client
            .invoke()
            .function_name(&self.function_name)
            .invocation_type(InvocationType::RequestResponse)
            .payload(Blob::new(payload))
            .send()
            .await
            .with_context(|| format!("failed to invoke Lambda function {}", self.function_name))?;

        Ok(Invocation {
            status_code: output.status_code,
            payload: output.payload.map(Blob::into_inner).unwrap_or_default(),
            function_error: output.function_error,
        })
    }
}
