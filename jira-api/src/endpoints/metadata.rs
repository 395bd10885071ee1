//! # Jira Metadata Endpoints
//!
//! Read-only listings of instance-wide configuration.

use jira_core::{CallContext, Client, Query, Result};

use super::get_json;
use crate::models::{Field, Resolution, StatusCategory};

/// Field listing
#[derive(Debug, Clone, Copy)]
pub struct FieldService<'a> {
  client: &'a Client,
}

impl<'a> FieldService<'a> {
  pub fn new(client: &'a Client) -> Self {
    Self { client }
  }

  /// All system and custom fields
  pub async fn list(&self, ctx: &CallContext) -> Result<Vec<Field>> {
    get_json(self.client, ctx, "rest/api/2/field", &Query::new()).await
  }
}

#[derive(Debug, Clone, Copy)]
pub struct ResolutionService<'a> {
  client: &'a Client,
}

impl<'a> ResolutionService<'a> {
  pub fn new(client: &'a Client) -> Self {
    Self { client }
  }

  pub async fn list(&self, ctx: &CallContext) -> Result<Vec<Resolution>> {
    get_json(self.client, ctx, "rest/api/2/resolution", &Query::new()).await
  }
}

#[derive(Debug, Clone, Copy)]
pub struct StatusCategoryService<'a> {
  client: &'a Client,
}

impl<'a> StatusCategoryService<'a> {
  pub fn new(client: &'a Client) -> Self {
    Self { client }
  }

  pub async fn list(&self, ctx: &CallContext) -> Result<Vec<StatusCategory>> {
    get_json(self.client, ctx, "rest/api/2/statuscategory", &Query::new()).await
  }
}
