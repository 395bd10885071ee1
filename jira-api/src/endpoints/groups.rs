//! # Jira Group Endpoints
//!
//! Group lookup and membership. Member listings exist under two server
//! generations: the paged `group/member` resource and the older
//! `group?expand=users[a:b]` window.

use jira_core::consts::DEFAULT_PAGE_STEP;
use jira_core::{CallContext, Client, Contract, Error, Page, Query, Response, Result, fetch_with_fallback, walk_pages};
use reqwest::Method;
use tracing::debug;

use super::{get_json, walk_cursor};
use crate::models::{
  ExpandedGroup, Group, GroupMember, GroupMembersPage, GroupMeta, GroupSearchOptions, GroupUserRequest, GroupsResult,
};

const GROUP_MEMBER_PATH: &str = "rest/api/2/group/member";
const GROUP_PATH: &str = "rest/api/2/group";
const GROUP_USER_PATH: &str = "rest/api/2/group/user";

/// Group operations against one client
#[derive(Debug, Clone, Copy)]
pub struct GroupService<'a> {
  client: &'a Client,
}

impl<'a> GroupService<'a> {
  pub fn new(client: &'a Client) -> Self {
    Self { client }
  }

  /// Get one page of members of `name` and its subgroups, ordered by user
  /// name. Only the requested page is fetched.
  pub async fn get(
    &self,
    ctx: &CallContext,
    name: &str,
    options: Option<&GroupSearchOptions>,
  ) -> Result<GroupMembersPage> {
    let mut query = Query::new().with("groupname", name);
    if let Some(options) = options {
      query.push("startAt", options.start_at);
      query.push("maxResults", options.max_results);
      query.push("includeInactiveUsers", options.include_inactive_users);
    }
    get_json(self.client, ctx, GROUP_MEMBER_PATH, &query).await
  }

  /// List every group through the group picker.
  pub async fn get_all(&self, ctx: &CallContext) -> Result<Vec<GroupMeta>> {
    let query = Query::new().with("maxResults", 1_000_000);
    let result: GroupsResult = get_json(self.client, ctx, "rest/api/2/groups/picker", &query).await?;
    Ok(result.groups)
  }

  /// All members of `name`, walked over the paged `group/member` resource.
  pub async fn get_members_v9(&self, ctx: &CallContext, name: &str) -> Result<Vec<GroupMember>> {
    let query = Query::new().with("groupname", name);
    walk_cursor(self.client, ctx, GROUP_MEMBER_PATH, &query).await
  }

  /// All members of `name`, walked over `group?expand=users[a:b]` windows.
  pub async fn get_members_legacy(&self, ctx: &CallContext, name: &str) -> Result<Vec<GroupMember>> {
    let client = self.client;
    let walk = walk_pages(ctx, Contract::legacy(), 0, |offset| async move {
      let end = offset + DEFAULT_PAGE_STEP - 1;
      let query = Query::new()
        .with("groupname", name)
        .with("expand", format!("users[{offset}:{end}]"));
      let group: ExpandedGroup = get_json(client, ctx, GROUP_PATH, &query).await?;
      Ok::<_, Error>(Page::legacy(group.users.members))
    })
    .await?;
    Ok(walk.items)
  }

  /// All members of `name`, trying the paged resource first and falling back
  /// to the expand window on servers that lack it.
  pub async fn get_members(&self, ctx: &CallContext, name: &str) -> Result<Vec<GroupMember>> {
    debug!(group = name, "Fetching group members");
    fetch_with_fallback(self.get_members_v9(ctx, name), self.get_members_legacy(ctx, name)).await
  }

  /// Add `username` to `groupname`.
  pub async fn add(&self, ctx: &CallContext, groupname: &str, username: &str) -> Result<Group> {
    let query = Query::new().with("groupname", groupname);
    let request = self.client.request_with_body(
      ctx,
      Method::POST,
      GROUP_USER_PATH,
      &query,
      &GroupUserRequest { name: username },
    )?;
    let (group, _) = self.client.execute(request).await?;
    Ok(group)
  }

  /// Remove `username` from `groupname`.
  pub async fn remove(&self, ctx: &CallContext, groupname: &str, username: &str) -> Result<Response> {
    let query = Query::new().with("groupname", groupname).with("username", username);
    let request = self.client.request(ctx, Method::DELETE, GROUP_USER_PATH, &query)?;
    self.client.execute_discard(request).await
  }
}
