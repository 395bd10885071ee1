//! # Jira API Endpoints
//!
//! One service per resource type. Each service borrows the core
//! [`Client`] it was created with and returns the core error type.

pub mod components;
pub mod groups;
pub mod issues;
pub mod metadata;
pub mod projects;
pub mod users;

use jira_core::{CallContext, Client, Contract, CursorMeta, Error, Page, Query, Result, walk_pages};
use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// A page under the cursor contract. `isLast` is required, so a body in any
/// other shape fails to decode.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct CursorPage<T> {
  #[serde(default)]
  values: Vec<T>,
  #[serde(default)]
  start_at: u64,
  #[serde(default)]
  max_results: u64,
  #[serde(default)]
  total: u64,
  is_last: bool,
}

impl<T> CursorPage<T> {
  fn into_page(self) -> Page<T> {
    Page::cursor(
      self.values,
      CursorMeta {
        start_at: self.start_at,
        max_results: self.max_results,
        total: self.total,
        is_last: self.is_last,
      },
    )
  }
}

/// GET `path` with `query` and decode the body.
pub(crate) async fn get_json<T: DeserializeOwned>(
  client: &Client,
  ctx: &CallContext,
  path: &str,
  query: &Query,
) -> Result<T> {
  let request = client.request(ctx, Method::GET, path, query)?;
  let (value, _) = client.execute(request).await?;
  Ok(value)
}

/// Walk every page of a cursor-contract listing at `path`.
pub(crate) async fn walk_cursor<T: DeserializeOwned>(
  client: &Client,
  ctx: &CallContext,
  path: &str,
  query: &Query,
) -> Result<Vec<T>> {
  let walk = walk_pages(ctx, Contract::cursor(), 0, |offset| {
    let query = query.clone().with("startAt", offset);
    async move {
      let page: CursorPage<T> = get_json(client, ctx, path, &query).await?;
      Ok::<_, Error>(page.into_page())
    }
  })
  .await?;
  Ok(walk.items)
}
