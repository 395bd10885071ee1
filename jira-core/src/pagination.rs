//! # Pagination
//!
//! Walks a paged listing to completion under one of the two contracts Jira
//! exposes:
//!
//! - **Cursor** (newer endpoints): each page reports `startAt`, `maxResults`,
//!   `total` and `isLast`; the walk stops on `isLast`.
//! - **Legacy** (older endpoints): pages carry no metadata; the walk requests
//!   fixed-size windows and stops on an empty or short page.
//!
//! A walk is bound to one contract for its whole life, so pages from the two
//! contracts are never mixed.

use std::fmt;
use std::future::Future;

use tracing::{debug, warn};

use crate::consts::DEFAULT_PAGE_STEP;
use crate::context::CallContext;
use crate::error::Error;

/// Which pagination contract a walk follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contract {
  /// Cursor contract. `step` is the advance used when a page reports no
  /// usable `maxResults`.
  Cursor { step: u64 },
  /// Legacy contract with a fixed window size.
  Legacy { page_size: u64 },
}

impl Contract {
  pub fn cursor() -> Self {
    Contract::Cursor {
      step: DEFAULT_PAGE_STEP,
    }
  }

  pub fn legacy() -> Self {
    Contract::Legacy {
      page_size: DEFAULT_PAGE_STEP,
    }
  }

  fn name(&self) -> &'static str {
    match self {
      Contract::Cursor { .. } => "cursor",
      Contract::Legacy { .. } => "legacy",
    }
  }
}

/// Cursor metadata a page reports about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorMeta {
  pub start_at: u64,
  pub max_results: u64,
  pub total: u64,
  pub is_last: bool,
}

/// One fetched page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
  pub items: Vec<T>,
  /// Cursor metadata; `None` for legacy pages.
  pub cursor: Option<CursorMeta>,
}

impl<T> Page<T> {
  pub fn cursor(items: Vec<T>, meta: CursorMeta) -> Self {
    Self {
      items,
      cursor: Some(meta),
    }
  }

  pub fn legacy(items: Vec<T>) -> Self {
    Self { items, cursor: None }
  }
}

/// Result of a completed walk.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulated<T> {
  pub items: Vec<T>,
  /// Number of pages fetched.
  pub pages: usize,
}

/// A walk that stopped on an error. Items accumulated before the failing
/// page are kept.
#[derive(Debug)]
pub struct PartialWalk<T> {
  pub error: Error,
  pub partial: Vec<T>,
}

impl<T> fmt::Display for PartialWalk<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "pagination stopped after {} items: {}", self.partial.len(), self.error)
  }
}

impl<T: fmt::Debug> std::error::Error for PartialWalk<T> {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    Some(&self.error)
  }
}

impl<T> From<PartialWalk<T>> for Error {
  fn from(walk: PartialWalk<T>) -> Self {
    walk.error
  }
}

/// Fetch pages starting at offset `start` until the contract says the
/// listing is exhausted.
///
/// `fetch` receives the offset to request. The context is checked before every
/// page; a cancelled context stops the walk with no further requests.
pub async fn walk_pages<T, F, Fut>(
  ctx: &CallContext,
  contract: Contract,
  start: u64,
  mut fetch: F,
) -> Result<Accumulated<T>, PartialWalk<T>>
where
  F: FnMut(u64) -> Fut,
  Fut: Future<Output = Result<Page<T>, Error>>,
{
  let mut items = Vec::new();
  let mut pages = 0;
  let mut offset = start;
  let mut reported_total = None;

  loop {
    if let Some(reason) = ctx.done_reason() {
      return Err(PartialWalk {
        error: Error::cancelled(reason),
        partial: items,
      });
    }

    let page = match fetch(offset).await {
      Ok(page) => page,
      Err(error) => return Err(PartialWalk { error, partial: items }),
    };
    pages += 1;
    let received = page.items.len() as u64;
    debug!(contract = contract.name(), offset, received, "Fetched page");

    let next = match contract {
      Contract::Cursor { step } => {
        let Some(meta) = page.cursor else {
          warn!(offset, "Cursor page carried no pagination fields; ending walk");
          items.extend(page.items);
          break;
        };
        reported_total = Some(meta.total);
        items.extend(page.items);
        if meta.is_last {
          break;
        }
        if received == 0 {
          warn!(offset, "Empty cursor page without isLast; ending walk");
          break;
        }
        let advance = if meta.max_results == 0 { step.max(1) } else { meta.max_results };
        offset + advance
      }
      Contract::Legacy { page_size } => {
        items.extend(page.items);
        if received == 0 || received < page_size {
          break;
        }
        offset + page_size
      }
    };
    offset = next;
  }

  if let Some(total) = reported_total {
    let expected = total.saturating_sub(start);
    if items.len() as u64 != expected {
      warn!(
        total,
        start,
        accumulated = items.len(),
        "Accumulated item count differs from reported total"
      );
    }
  }

  Ok(Accumulated { items, pages })
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use super::*;
  use crate::error::{ErrorKind, Failure, normalize};
  use crate::transport::TransportError;

  fn cursor_page(start_at: u64, items: &[u32], max_results: u64, total: u64, is_last: bool) -> Page<u32> {
    Page::cursor(
      items.to_vec(),
      CursorMeta {
        start_at,
        max_results,
        total,
        is_last,
      },
    )
  }

  #[tokio::test]
  async fn test_cursor_walk_stops_on_is_last() {
    let offsets = Mutex::new(Vec::new());
    let result = walk_pages(&CallContext::new(), Contract::cursor(), 0, |offset| {
      offsets.lock().unwrap().push(offset);
      async move {
        Ok(match offset {
          0 => cursor_page(0, &[1, 2], 2, 4, false),
          2 => cursor_page(2, &[3, 4], 2, 4, true),
          other => panic!("unexpected offset {other}"),
        })
      }
    })
    .await
    .unwrap();

    assert_eq!(result.items, vec![1, 2, 3, 4]);
    assert_eq!(result.pages, 2);
    assert_eq!(*offsets.lock().unwrap(), vec![0, 2]);
  }

  #[tokio::test]
  async fn test_cursor_walk_uses_step_without_max_results() {
    let offsets = Mutex::new(Vec::new());
    let result = walk_pages(&CallContext::new(), Contract::Cursor { step: 3 }, 0, |offset| {
      offsets.lock().unwrap().push(offset);
      async move {
        Ok(match offset {
          0 => cursor_page(0, &[1, 2, 3], 0, 5, false),
          3 => cursor_page(3, &[4, 5], 0, 5, true),
          other => panic!("unexpected offset {other}"),
        })
      }
    })
    .await
    .unwrap();

    assert_eq!(result.items.len(), 5);
    assert_eq!(*offsets.lock().unwrap(), vec![0, 3]);
  }

  #[tokio::test]
  async fn test_cursor_walk_ends_on_empty_page() {
    let result = walk_pages(&CallContext::new(), Contract::cursor(), 0, |offset| async move {
      Ok(match offset {
        0 => cursor_page(0, &[1], 1, 3, false),
        _ => cursor_page(offset, &[], 1, 3, false),
      })
    })
    .await
    .unwrap();

    assert_eq!(result.items, vec![1]);
    assert_eq!(result.pages, 2);
  }

  #[tokio::test]
  async fn test_cursor_walk_ends_without_metadata() {
    let result = walk_pages(&CallContext::new(), Contract::cursor(), 0, |_| async {
      Ok(Page::legacy(vec![7, 8]))
    })
    .await
    .unwrap();

    assert_eq!(result.items, vec![7, 8]);
    assert_eq!(result.pages, 1);
  }

  #[tokio::test]
  async fn test_legacy_walk_stops_on_short_page() {
    let offsets = Mutex::new(Vec::new());
    let result = walk_pages(&CallContext::new(), Contract::Legacy { page_size: 2 }, 0, |offset| {
      offsets.lock().unwrap().push(offset);
      async move {
        Ok(match offset {
          0 => Page::legacy(vec![1, 2]),
          2 => Page::legacy(vec![3]),
          other => panic!("unexpected offset {other}"),
        })
      }
    })
    .await
    .unwrap();

    assert_eq!(result.items, vec![1, 2, 3]);
    assert_eq!(*offsets.lock().unwrap(), vec![0, 2]);
  }

  #[tokio::test]
  async fn test_legacy_walk_stops_on_empty_page() {
    let result = walk_pages(&CallContext::new(), Contract::Legacy { page_size: 2 }, 0, |offset| async move {
      Ok(match offset {
        0 => Page::legacy(vec![1, 2]),
        _ => Page::legacy(Vec::new()),
      })
    })
    .await
    .unwrap();

    assert_eq!(result.items, vec![1, 2]);
    assert_eq!(result.pages, 2);
  }

  #[tokio::test]
  async fn test_legacy_walk_ignores_cursor_fields() {
    // Metadata on a legacy page must not change the stop rule.
    let result = walk_pages(&CallContext::new(), Contract::Legacy { page_size: 2 }, 0, |offset| async move {
      Ok(match offset {
        0 => cursor_page(0, &[1, 2], 2, 2, true),
        _ => Page::legacy(vec![3]),
      })
    })
    .await
    .unwrap();

    assert_eq!(result.items, vec![1, 2, 3]);
  }

  #[tokio::test]
  async fn test_failure_keeps_partial_items() {
    let result = walk_pages(&CallContext::new(), Contract::cursor(), 0, |offset| async move {
      match offset {
        0 => Ok(cursor_page(0, &[1, 2], 2, 4, false)),
        _ => Err(normalize(Failure::Transport(TransportError::Other("reset".to_string())))),
      }
    })
    .await;

    let walk = result.unwrap_err();
    assert_eq!(walk.partial, vec![1, 2]);
    assert_eq!(walk.error.kind(), ErrorKind::Network);

    let error: Error = walk.into();
    assert_eq!(error.kind(), ErrorKind::Network);
  }

  #[tokio::test]
  async fn test_cancelled_context_stops_before_fetch() {
    let ctx = CallContext::new();
    ctx.cancel();
    let calls = Mutex::new(0);

    let result = walk_pages(&ctx, Contract::cursor(), 0, |_| {
      *calls.lock().unwrap() += 1;
      async { Ok(Page::<u32>::legacy(Vec::new())) }
    })
    .await;

    let walk = result.unwrap_err();
    assert_eq!(walk.error.kind(), ErrorKind::Cancelled);
    assert!(walk.partial.is_empty());
    assert_eq!(*calls.lock().unwrap(), 0);
  }

  #[tokio::test]
  async fn test_cancel_between_pages() {
    let ctx = CallContext::new();
    let result = walk_pages(&ctx, Contract::cursor(), 0, |offset| {
      let ctx = ctx.clone();
      async move {
        ctx.cancel();
        Ok(cursor_page(offset, &[1], 1, 10, false))
      }
    })
    .await;

    let walk = result.unwrap_err();
    assert!(walk.error.is_cancelled());
    assert_eq!(walk.partial, vec![1]);
  }

  #[tokio::test]
  async fn test_walk_from_nonzero_start() {
    let result = walk_pages(&CallContext::new(), Contract::cursor(), 10, |offset| async move {
      assert_eq!(offset, 10);
      Ok(cursor_page(10, &[11, 12], 2, 12, true))
    })
    .await
    .unwrap();

    assert_eq!(result.items, vec![11, 12]);
  }
}
