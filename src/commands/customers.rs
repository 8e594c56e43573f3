use anyhow::{Context, Result};
use log::info;
use serde_json::{Value, json};
use std::path::Path;

use super::payload::read_payload;
use crate::{
    EchoIntelClient,
    http::Execute,
    types::{CreateCustomerRequest, UpdateCustomerRequest},
};

#[tracing::instrument(skip(client))]
pub async fn list<E: Execute>(client: &EchoIntelClient<E>, include_disabled: bool) -> Result<Value> {
    let customers = client.list_customers(include_disabled).await?;
    Ok(serde_json::to_value(customers)?)
}

#[tracing::instrument(skip(client))]
pub async fn get<E: Execute>(client: &EchoIntelClient<E>, customer_id: &str) -> Result<Value> {
    let customer = client
        .get_customer(customer_id)
        .await
        .with_context(|| format!("Failed to fetch customer '{}'", customer_id))?;
    Ok(serde_json::to_value(customer)?)
}

#[tracing::instrument(skip(client))]
pub async fn create<E: Execute>(client: &EchoIntelClient<E>, data: Option<&Path>) -> Result<Value> {
    let request: CreateCustomerRequest = serde_json::from_value(read_payload(data)?)
        .context("Payload is not a valid customer definition")?;
    let customer = client.create_customer(&request).await?;
    info!("Created customer {}", customer.customer_api_id);
    Ok(serde_json::to_value(customer)?)
}

#[tracing::instrument(skip(client))]
pub async fn update<E: Execute>(
    client: &EchoIntelClient<E>,
    customer_id: &str,
    data: Option<&Path>,
) -> Result<Value> {
    let request: UpdateCustomerRequest = serde_json::from_value(read_payload(data)?)
        .context("Payload is not a valid customer update")?;
    let customer = client
        .update_customer(customer_id, &request)
        .await
        .with_context(|| format!("Failed to update customer '{}'", customer_id))?;
    Ok(serde_json::to_value(customer)?)
}

#[tracing::instrument(skip(client))]
pub async fn delete<E: Execute>(client: &EchoIntelClient<E>, customer_id: &str) -> Result<Value> {
    client
        .delete_customer(customer_id)
        .await
        .with_context(|| format!("Failed to delete customer '{}'", customer_id))?;
    info!("Deleted customer {}", customer_id);
    Ok(json!({"deleted": customer_id}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use mockito::Matcher;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn customer_body(id: &str, enabled: bool) -> String {
        json!({
            "customerApiId": id,
            "secret": "generated",
            "enabled": enabled,
            "tsCreate": "2025-03-01T10:00:00Z",
            "tsUpdate": "2025-03-02T10:00:00Z",
            "allowedRoutes": ["/api/nps"]
        })
        .to_string()
    }

    fn client(url: String) -> EchoIntelClient {
        EchoIntelClient::new(
            ClientConfig::new("ops", "s")
                .with_api_url(url)
                .with_admin_secret("root")
                .with_retry(1, 0),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let mut server = mockito::Server::new_async().await;
        let list_mock = server
            .mock("GET", "/admin/customers")
            .match_query(Matcher::UrlEncoded("include_disabled".into(), "true".into()))
            .match_header("x-admin-secret", "root")
            .with_status(200)
            .with_body(format!(r#"{{"customers": [{}]}}"#, customer_body("acme", false)))
            .create_async()
            .await;
        let get_mock = server
            .mock("GET", "/admin/customers/acme")
            .with_status(200)
            .with_body(customer_body("acme", false))
            .create_async()
            .await;

        let client = client(server.url());
        let listed = list(&client, true).await.unwrap();
        let fetched = get(&client, "acme").await.unwrap();

        list_mock.assert_async().await;
        get_mock.assert_async().await;
        assert_eq!(listed["customers"][0]["customerApiId"], "acme");
        assert_eq!(fetched["enabled"], false);
    }

    #[tokio::test]
    async fn test_create_from_payload_file() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/admin/customers")
            .match_body(Matcher::Json(json!({
                "customerApiId": "acme",
                "allowedRoutes": ["/api/nps"]
            })))
            .with_status(200)
            .with_body(customer_body("acme", true))
            .create_async()
            .await;

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"customerApiId": "acme", "allowedRoutes": ["/api/nps"]}}"#).unwrap();

        let created = create(&client(server.url()), Some(file.path())).await.unwrap();

        mock.assert_async().await;
        assert_eq!(created["secret"], "generated");
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/admin/customers/acme")
            .with_status(204)
            .create_async()
            .await;

        let result = delete(&client(server.url()), "acme").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result, json!({"deleted": "acme"}));
    }

    #[tokio::test]
    async fn test_update_reports_authentication_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("PUT", "/admin/customers/acme")
            .with_status(403)
            .with_body(r#"{"detail": "Admin secret required"}"#)
            .create_async()
            .await;

        let err = update(&client(server.url()), "acme", None)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to update customer 'acme'"));
        assert!(format!("{:#}", err).contains("Admin secret required"));
    }
}
