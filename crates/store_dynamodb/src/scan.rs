use crate::error::StoreError;
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::scan::{ScanError, ScanOutput};
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

/// Label attached to every failed scan.
pub const SCAN_ERROR_NAME: &str = "Error";

pub type ScanCallError = StoreError<ScanRequest, SdkError<ScanError, HttpResponse>>;
pub type ScanCallResult = Result<ScanOutput, ScanCallError>;

/// Parameters for a table scan.
///
/// Only the table name is required. Set fields are forwarded to the store
/// as-is; unset fields are omitted from the request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRequest {
    pub table_name: String,

    pub filter_expression: Option<String>,
    pub expression_attribute_names: Option<HashMap<String, String>>,
    pub expression_attribute_values: Option<HashMap<String, AttributeValue>>,
    pub limit: Option<i32>,
    pub exclusive_start_key: Option<HashMap<String, AttributeValue>>,
    pub consistent_read: Option<bool>,
}

impl ScanRequest {
    pub fn new(table_name: String) -> Self {
        ScanRequest {
            table_name,
            filter_expression: None,
            expression_attribute_names: None,
            expression_attribute_values: None,
            limit: None,
            exclusive_start_key: None,
            consistent_read: None,
        }
    }
}

/// A scan which has been built but not yet sent.
///
/// Building it performs no I/O. Each call to [`ScanCall::run`] issues the
/// request anew and resolves to exactly one `Ok` or `Err`.
pub struct ScanCall {
    dynamodb_client: aws_sdk_dynamodb::Client,
    request: ScanRequest,
}

/// Typesafe wrapper for `scan`.
///
/// Returns a deferred call which, once run, yields either the raw scan
/// output or a [`StoreError`] carrying the request and the rejection.
pub fn scan(client: &aws_sdk_dynamodb::Client, request: ScanRequest) -> ScanCall {
    ScanCall {
        dynamodb_client: client.clone(),
        request,
    }
}

impl ScanCall {
    pub fn request(&self) -> &ScanRequest {
        &self.request
    }

    pub async fn run(&self) -> ScanCallResult {
        tracing::debug!(table = self.request.table_name.as_str(), "Scan call");

        self.dynamodb_client
            .scan()
            .table_name(&self.request.table_name)
            .set_filter_expression(self.request.filter_expression.clone())
            .set_expression_attribute_names(self.request.expression_attribute_names.clone())
            .set_expression_attribute_values(self.request.expression_attribute_values.clone())
            .set_limit(self.request.limit)
            .set_exclusive_start_key(self.request.exclusive_start_key.clone())
            .set_consistent_read(self.request.consistent_read)
            .send()
            .await
            .map_err(|err| StoreError::new(SCAN_ERROR_NAME, self.request.clone(), err))
    }
}
