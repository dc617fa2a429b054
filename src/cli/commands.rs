//! Execution of parsed CLI commands against a marketplace.

use std::io::{self, Write};
use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::debug;

use super::{Command, LimitArgs, SearchArgs, listing_file};
use crate::Marketplace;
use crate::catalog::domain::{AgentListing, CatalogDomainError, SearchFilter};
use crate::server;

/// Result of running a command, mapped onto the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command completed.
    Success,
    /// The command reported a diagnostic on the error stream.
    Failure,
}

impl From<CommandOutcome> for ExitCode {
    fn from(outcome: CommandOutcome) -> Self {
        match outcome {
            CommandOutcome::Success => Self::SUCCESS,
            CommandOutcome::Failure => Self::FAILURE,
        }
    }
}

/// Runs `command` against `marketplace`, writing results to `out` and
/// diagnostics to `err`.
///
/// # Errors
///
/// Returns an error when writing to either stream fails, or when `serve`
/// cannot start or run the HTTP server.
pub fn execute<W, E>(
    command: Command,
    marketplace: &Marketplace,
    out: &mut W,
    err: &mut E,
) -> io::Result<CommandOutcome>
where
    W: Write,
    E: Write,
{
    match command {
        Command::Search(args) => search(marketplace, args, out, err),
        Command::Publish { config } => match listing_file::read_listing_draft(&config) {
            Ok(draft) => match marketplace.publish(draft) {
                Ok(listing) => {
                    writeln!(
                        out,
                        "Agent '{}' published successfully.",
                        listing.agent_id()
                    )?;
                    Ok(CommandOutcome::Success)
                }
                Err(error) => fail(err, format_args!("Validation error: {error}")),
            },
            Err(error) => fail(err, format_args!("{error}")),
        },
        Command::Serve { host, port } => {
            let addr = SocketAddr::new(host, port);
            writeln!(out, "Starting Agent Marketplace server on {addr} ...")?;
            out.flush()?;
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(server::serve(marketplace.clone(), addr))?;
            Ok(CommandOutcome::Success)
        }
        Command::TopRated(limit) => {
            let listings = marketplace.top_rated(limit_count(&limit));
            if listings.is_empty() {
                writeln!(out, "No agents registered.")?;
            }
            for listing in &listings {
                writeln!(
                    out,
                    "[{}] {}  Rating: {}/5.0",
                    listing.agent_id(),
                    listing.name(),
                    listing.rating()
                )?;
            }
            Ok(CommandOutcome::Success)
        }
        Command::Trending(limit) => {
            let listings = marketplace.trending(limit_count(&limit));
            if listings.is_empty() {
                writeln!(out, "No agents registered.")?;
            }
            for listing in &listings {
                writeln!(
                    out,
                    "[{}] {}  Downloads: {}",
                    listing.agent_id(),
                    listing.name(),
                    listing.downloads()
                )?;
            }
            Ok(CommandOutcome::Success)
        }
        Command::Get { agent_id } => match marketplace.get(&agent_id) {
            Ok(listing) => {
                let json = serde_json::to_string_pretty(&listing).map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
                Ok(CommandOutcome::Success)
            }
            Err(error) => fail(err, format_args!("Error: {error}")),
        },
        Command::Reviews { agent_id } => {
            let reviews = marketplace.reviews(&agent_id);
            if reviews.is_empty() {
                writeln!(out, "No reviews yet.")?;
            }
            for review in &reviews {
                writeln!(out, "{}  Rating: {}/5.0", review.reviewer(), review.rating())?;
                if !review.comment().is_empty() {
                    writeln!(out, "  {}", review.comment())?;
                }
            }
            Ok(CommandOutcome::Success)
        }
    }
}

fn search<W: Write, E: Write>(
    marketplace: &Marketplace,
    args: SearchArgs,
    out: &mut W,
    err: &mut E,
) -> io::Result<CommandOutcome> {
    let filter = match search_filter(args) {
        Ok(filter) => filter,
        Err(error) => return fail(err, format_args!("Error: {error}")),
    };
    let results = marketplace.search(&filter);
    debug!(matches = results.len(), "search complete");
    if results.is_empty() {
        writeln!(out, "No agents found matching the given criteria.")?;
        return Ok(CommandOutcome::Success);
    }
    for listing in &results {
        write_summary(out, listing)?;
    }
    Ok(CommandOutcome::Success)
}

fn search_filter(args: SearchArgs) -> Result<SearchFilter, CatalogDomainError> {
    let SearchArgs {
        query,
        min_rating,
        capabilities,
        tags,
    } = args;

    let mut filter = SearchFilter::new();
    if let Some(text) = query {
        filter = filter.with_query(text);
    }
    if !capabilities.is_empty() {
        filter = filter.with_capabilities(capabilities);
    }
    if !tags.is_empty() {
        filter = filter.with_tags(tags);
    }
    match min_rating {
        Some(threshold) => filter.with_min_rating(threshold),
        None => Ok(filter),
    }
}

fn write_summary<W: Write>(out: &mut W, listing: &AgentListing) -> io::Result<()> {
    writeln!(
        out,
        "[{}] {} v{} - Rating: {}/5.0  Downloads: {}",
        listing.agent_id(),
        listing.name(),
        listing.version(),
        listing.rating(),
        listing.downloads()
    )?;
    writeln!(out, "  {}", listing.description())?;
    writeln!(out, "  Install: {}", listing.install_command())?;
    writeln!(out)
}

fn limit_count(args: &LimitArgs) -> usize {
    usize::try_from(args.limit).unwrap_or(0)
}

fn fail<E: Write>(err: &mut E, message: std::fmt::Arguments<'_>) -> io::Result<CommandOutcome> {
    writeln!(err, "{message}")?;
    Ok(CommandOutcome::Failure)
}
