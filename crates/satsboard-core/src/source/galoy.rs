//! Galoy GraphQL client
//!
//! Fetches the merchant wallet's transaction list from a Galoy payments API
//! (https://galoy.io). Plain reqwest POSTs carrying the GraphQL document; no
//! GraphQL client library is needed for a single query.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Transaction;

use super::TransactionSource;

/// Page size for transaction list requests
const DEFAULT_PAGE_SIZE: usize = 1000;

/// Hard cap on pagination, in case the API misreports `hasNextPage`
const MAX_PAGES: usize = 200;

/// Request timeout for Galoy API calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const TRANSACTION_LIST_QUERY: &str = r#"
query transactionListForDefaultAccount($first: Int, $after: String) {
  me {
    defaultAccount {
      transactions(first: $first, after: $after) {
        pageInfo {
          hasNextPage
          endCursor
        }
        edges {
          node {
            id
            status
            direction
            memo
            createdAt
            settlementAmount
            settlementFee
            settlementCurrency
            settlementPrice {
              base
              offset
              currencyUnit
              formattedAmount
            }
          }
        }
      }
    }
  }
}
"#;

/// Client for the Galoy GraphQL payments API
#[derive(Clone)]
pub struct GaloyClient {
    http_client: Client,
    endpoint: String,
    auth_token: String,
}

impl GaloyClient {
    pub fn new(endpoint: &str, auth_token: &str) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            auth_token: auth_token.to_string(),
        }
    }

    /// Fetch one page of the transaction list
    async fn fetch_page(&self, after: Option<&str>) -> Result<TransactionConnection> {
        let body = GraphqlRequest {
            query: TRANSACTION_LIST_QUERY,
            variables: json!({ "first": DEFAULT_PAGE_SIZE, "after": after }),
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.auth_token)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(format!("HTTP {} from {}", status, self.endpoint)));
        }

        let envelope: GraphqlResponse = response.json().await?;
        envelope.into_connection()
    }
}

#[async_trait]
impl TransactionSource for GaloyClient {
    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let mut transactions = Vec::new();
        let mut after: Option<String> = None;

        for page in 0..MAX_PAGES {
            let connection = self.fetch_page(after.as_deref()).await?;
            let fetched = connection.edges.len();
            transactions.extend(connection.edges.into_iter().map(|edge| edge.node));

            debug!(page, fetched, total = transactions.len(), "Fetched transaction page");

            if !connection.page_info.has_next_page {
                return Ok(transactions);
            }
            after = connection.page_info.end_cursor;
            if after.is_none() {
                return Err(Error::Api(
                    "hasNextPage set but endCursor missing".to_string(),
                ));
            }
        }

        Err(Error::Api(format!(
            "Transaction list did not terminate within {} pages",
            MAX_PAGES
        )))
    }
}

#[derive(Debug, Serialize)]
struct GraphqlRequest {
    query: &'static str,
    variables: serde_json::Value,
}

/// Top-level GraphQL response envelope
#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

impl GraphqlResponse {
    fn into_connection(self) -> Result<TransactionConnection> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(Error::Api(err.message));
        }
        self.data
            .and_then(|d| d.me)
            .map(|me| me.default_account.transactions)
            .ok_or_else(|| Error::Api("Response missing me.defaultAccount".to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    me: Option<Me>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Me {
    default_account: DefaultAccount,
}

#[derive(Debug, Deserialize)]
struct DefaultAccount {
    transactions: TransactionConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionConnection {
    page_info: PageInfo,
    edges: Vec<TransactionEdge>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    #[serde(default)]
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TransactionEdge {
    node: Transaction,
}
