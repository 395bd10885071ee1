//! Version fallback for listings that exist under two server generations.

use std::future::Future;

use tracing::{debug, warn};

use crate::error::Error;

/// Run `primary` to completion and fall back to `secondary` if it fails.
///
/// Any primary failure, including one after some pages succeeded, discards
/// the primary's items before `secondary` runs from scratch. `secondary` is
/// never polled when `primary` succeeds. When both fail, the returned
/// [`Error::Fallback`] classifies as the secondary failure and keeps the
/// primary one in [`Error::primary_error`].
///
/// A cancelled primary is returned as is; there is no point in trying the
/// other contract under a done context.
pub async fn fetch_with_fallback<T, E1, E2, P, S>(primary: P, secondary: S) -> Result<T, Error>
where
  P: Future<Output = Result<T, E1>>,
  S: Future<Output = Result<T, E2>>,
  E1: Into<Error>,
  E2: Into<Error>,
{
  let primary_error = match primary.await {
    Ok(items) => return Ok(items),
    Err(error) => error.into(),
  };

  if primary_error.is_cancelled() {
    return Err(primary_error);
  }
  debug!(error = %primary_error, "Primary contract failed; trying fallback contract");

  match secondary.await {
    Ok(items) => Ok(items),
    Err(error) => {
      let secondary_error = error.into();
      warn!(primary = %primary_error, secondary = %secondary_error, "Both contracts failed");
      Err(Error::Fallback {
        secondary: Box::new(secondary_error),
        primary: Box::new(primary_error),
      })
    }
  }
}
