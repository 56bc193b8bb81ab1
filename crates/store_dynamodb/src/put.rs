use crate::error::StoreError;
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::types::AttributeValue;
use serde::Serialize;
use std::collections::HashMap;

/// Label attached to every failed put.
pub const PUT_ERROR_NAME: &str = "An error occurred putting an item in Dynamo";

pub type PutCallError = StoreError<PutRequest, SdkError<PutItemError, HttpResponse>>;
pub type PutCallResult = Result<PutItemOutput, PutCallError>;

/// Parameters for a single-item write.
#[derive(Debug, Clone, PartialEq)]
pub struct PutRequest {
    pub table_name: String,
    pub item: HashMap<String, AttributeValue>,

    pub condition_expression: Option<String>,
}

impl PutRequest {
    pub fn new(table_name: String, item: HashMap<String, AttributeValue>) -> Self {
        PutRequest {
            table_name,
            item,
            condition_expression: None,
        }
    }

    /// Build a request from any serializable value via `serde_dynamo`.
    pub fn from_serializable<T: Serialize>(
        table_name: String,
        value: &T,
    ) -> Result<Self, serde_dynamo::Error> {
        let item: HashMap<String, AttributeValue> = serde_dynamo::to_item(value)?;

        Ok(PutRequest::new(table_name, item))
    }
}

/// A put which has been built but not yet sent.
///
/// Building it performs no I/O. Running it writes (or overwrites) the item
/// remotely and resolves to exactly one `Ok` or `Err`.
pub struct PutCall {
    dynamodb_client: aws_sdk_dynamodb::Client,
    request: PutRequest,
}

/// Typesafe wrapper for `put`.
pub fn put(client: &aws_sdk_dynamodb::Client, request: PutRequest) -> PutCall {
    PutCall {
        dynamodb_client: client.clone(),
        request,
    }
}

impl PutCall {
    pub fn request(&self) -> &PutRequest {
        &self.request
    }

    pub async fn run(&self) -> PutCallResult {
        tracing::debug!(table = self.request.table_name.as_str(), "Put call");

        self.dynamodb_client
            .put_item()
            .table_name(&self.request.table_name)
            .set_item(Some(self.request.item.clone()))
            .set_condition_expression(self.request.condition_expression.clone())
            .send()
            .await
            .map_err(|err| StoreError::new(PUT_ERROR_NAME, self.request.clone(), err))
    }
}

#[cfg(test)]
mod tests {
    use crate::put::{put, PutCall, PutCallResult, PutRequest, PUT_ERROR_NAME};
    use crate::scan::SCAN_ERROR_NAME;
    use aws_smithy_mocks::Rule;
    use serde::Serialize;
    use test_utils::{item, mock_dynamodb_client, put_rejects, put_succeeds, TEST_TABLE};

    #[tokio::test]
    async fn put_returns_acknowledgment() {
        let put_rule: Rule = put_succeeds();
        let client = mock_dynamodb_client(&[&put_rule]);

        let request: PutRequest =
            PutRequest::new(TEST_TABLE.to_string(), item(&[("id", "1"), ("name", "one")]));
        let result: PutCallResult = put(&client, request).run().await;

        let output = result.expect("Put should succeed");
        assert!(output.attributes.is_none());
    }

    #[tokio::test]
    async fn put_rejection_becomes_store_error() {
        let put_rule: Rule = put_rejects();
        let client = mock_dynamodb_client(&[&put_rule]);

        let request: PutRequest =
            PutRequest::new(TEST_TABLE.to_string(), item(&[("id", "1"), ("name", "one")]));
        let result: PutCallResult = put(&client, request.clone()).run().await;

        let err = result.expect_err("Put should fail");
        assert_eq!(PUT_ERROR_NAME, err.name);
        assert_eq!(request, err.body);
        assert!(!format!("{}", err).is_empty());
    }

    #[tokio::test]
    async fn put_runs_only_when_asked() {
        let put_rule: Rule = put_succeeds();
        let client = mock_dynamodb_client(&[&put_rule]);

        let call: PutCall = put(
            &client,
            PutRequest::new(TEST_TABLE.to_string(), item(&[("id", "1"), ("name", "one")])),
        );
        assert_eq!(0, put_rule.num_calls());

        call.run().await.expect("Put should succeed");
        assert_eq!(1, put_rule.num_calls());
    }

    #[test]
    fn labels_are_distinct() {
        assert_ne!(SCAN_ERROR_NAME, PUT_ERROR_NAME);
    }

    #[test]
    fn request_from_serializable_value() {
        #[derive(Serialize)]
        struct Fixture {
            id: String,
            name: String,
        }

        let fixture = Fixture {
            id: "1".to_string(),
            name: "one".to_string(),
        };

        let request: PutRequest =
            PutRequest::from_serializable(TEST_TABLE.to_string(), &fixture)
                .expect("Fixture should serialize to an item");

        assert_eq!(item(&[("id", "1"), ("name", "one")]), request.item);
    }
}
