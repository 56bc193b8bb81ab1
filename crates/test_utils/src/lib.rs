use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::operation::scan::{ScanError, ScanOutput};
use aws_sdk_dynamodb::types::error::ResourceNotFoundException;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_smithy_mocks::{mock, mock_client, Rule, RuleMode};
use std::collections::HashMap;

/// Table name used across test fixtures
pub const TEST_TABLE: &str = "dyno_cool_table";

/// Build an item of string attributes from name/value pairs
pub fn item(attributes: &[(&str, &str)]) -> HashMap<String, AttributeValue> {
    attributes
        .iter()
        .map(|&(name, value)| (name.to_string(), AttributeValue::S(value.to_string())))
        .collect()
}

/// A mock DynamoDB client answering from the supplied rules, in any order
pub fn mock_dynamodb_client(rules: &[&Rule]) -> aws_sdk_dynamodb::Client {
    mock_client!(aws_sdk_dynamodb, RuleMode::MatchAny, rules)
}

/// Rule answering every scan with the given items
pub fn scan_returns(items: Vec<HashMap<String, AttributeValue>>) -> Rule {
    mock!(aws_sdk_dynamodb::Client::scan)
        .match_requests(|_| true)
        .sequence()
        .output(move || {
            ScanOutput::builder()
                .set_items(Some(items.clone()))
                .count(items.len() as i32)
                .build()
        })
        .repeatedly()
        .build()
}

/// Rule rejecting every scan as if the table did not exist
pub fn scan_rejects() -> Rule {
    mock!(aws_sdk_dynamodb::Client::scan).then_error(|| {
        ScanError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Requested resource not found")
                .build(),
        )
    })
}

/// Rule acknowledging every put with an empty output
pub fn put_succeeds() -> Rule {
    mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|_| true)
        .sequence()
        .output(|| PutItemOutput::builder().build())
        .repeatedly()
        .build()
}

/// Rule rejecting every put as if the table did not exist
pub fn put_rejects() -> Rule {
    mock!(aws_sdk_dynamodb::Client::put_item).then_error(|| {
        PutItemError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Requested resource not found")
                .build(),
        )
    })
}
