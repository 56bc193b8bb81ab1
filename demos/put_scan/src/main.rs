use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
};
use serde_json::json;
use store_dynamodb::{put, scan, PutRequest, ScanRequest};
use tracing::{info, warn};

type Error = Box<dyn std::error::Error + Send + Sync>;

const TABLE_NAME: &str = "dyno_cool_table";

/// Write an item through the wrapper and scan it back.
///
/// Points at whatever endpoint the ambient AWS configuration resolves;
/// set `AWS_ENDPOINT_URL` to exercise a local DynamoDB.
#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let client: aws_sdk_dynamodb::Client = aws_sdk_dynamodb::Client::new(&config);

    if let Err(err) = create_table(&client).await {
        warn!("Failed to create table: {}", err);
    }

    let request: PutRequest = PutRequest::from_serializable(
        TABLE_NAME.to_string(),
        &json!({ "id": "1091", "name": "one thousand and ninety one" }),
    )?;

    match put(&client, request).run().await {
        Ok(_) => info!("Item written to {}", TABLE_NAME),
        Err(err) => warn!(name = err.name, "Put failed: {}", err.error),
    }

    match scan(&client, ScanRequest::new(TABLE_NAME.to_string())).run().await {
        Ok(output) => info!("Scanned {} items from {}", output.count, TABLE_NAME),
        Err(err) => warn!(name = err.name, "Scan failed: {}", err.error),
    }

    if let Err(err) = delete_table(&client).await {
        warn!("Failed to delete table: {}", err);
    }

    Ok(())
}

async fn create_table(client: &aws_sdk_dynamodb::Client) -> Result<(), Error> {
    client
        .create_table()
        .table_name(TABLE_NAME)
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name("id")
                .attribute_type(ScalarAttributeType::S)
                .build()?,
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name("id")
                .key_type(KeyType::Hash)
                .build()?,
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(3)
                .write_capacity_units(10)
                .build()?,
        )
        .send()
        .await?;

    Ok(())
}

async fn delete_table(client: &aws_sdk_dynamodb::Client) -> Result<(), Error> {
    client.delete_table().table_name(TABLE_NAME).send().await?;

    Ok(())
}
