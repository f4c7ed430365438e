//! Generic list command handler
//!
//! List commands share one flow: build the context, fetch, print. Listing
//! reads never fail; an unreachable service shows up as an empty list with
//! a warning in the log.

use std::future::Future;

use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::output;
use komet::{KometClient, Result};

/// Run a list command with the common fetch → display → print pattern.
///
/// # Example
///
/// ```ignore
/// run_list_command::<Team, TeamDisplay, _, _>(opts, "teams", |client| async move {
///     client.list_teams().await
/// })
/// .await
/// ```
pub async fn run_list_command<T, D, Fut, F>(
    opts: &GlobalOptions,
    resource_name: &str,
    fetcher: F,
) -> Result<()>
where
    T: Serialize,
    D: Tabled + for<'a> From<&'a T>,
    Fut: Future<Output = Vec<T>>,
    F: FnOnce(KometClient) -> Fut,
{
    let ctx = CommandContext::new(opts)?;

    debug!("Fetching {}", resource_name);
    let items = fetcher(ctx.client.clone()).await;
    debug!("Fetched {} {}", items.len(), resource_name);

    output::print_list::<T, D>(&items, ctx.format)
}
