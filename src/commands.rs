// commands.rs
use crate::config::{OutputFormat, ScrapePagesArgs, ScrapeSessionArgs, ServeArgs};
use crate::prediction::AppState;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::scraper::{
    HttpSession, ListingSelectors, PageFetcher, PaginationDriver, RetryPolicy, SelectorConfig,
    StaticPages,
};
use crate::sinks::{CsvSink, ListingSink, MarkdownSink, SinkError, XlsxSink};
use anyhow::Context;
use astra::Server;
use std::path::Path;
use tracing::{debug, error, info};

pub fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let state = AppState::load(&args.artifacts)
        .with_context(|| format!("loading artifacts from {}", args.artifacts.display()))?;

    info!(addr = %args.addr, workers = args.workers, "starting home price server");
    let server = Server::bind(&args.addr).max_workers(args.workers);

    server
        .serve(move |req, _info| match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status() >= 500 {
                    error!(error = %err, "request failed");
                }
                error_to_response(err)
            }
        })
        .context("server ended with error")?;

    info!("server shut down cleanly");
    Ok(())
}

pub fn scrape_pages(args: ScrapePagesArgs) -> anyhow::Result<()> {
    let fetcher = PageFetcher::new(RetryPolicy::once())?;
    let selectors = ListingSelectors::compile(&SelectorConfig::default())?;
    let mut sink = open_sink(args.format, &args.output, false)?;

    let pages = StaticPages::new(
        &fetcher,
        &selectors,
        &args.url_template,
        args.pages,
        args.delay(),
    )?;

    let mut total = 0;
    for batch in pages {
        debug!(page = batch.page, url = %batch.url, count = batch.listings.len(), "writing batch");
        total += batch.listings.len();
        sink.write_page(&batch.listings)?;
    }
    sink.finish()?;

    info!(total, output = %args.output.display(), "scrape complete");
    Ok(())
}

pub fn scrape_session(args: ScrapeSessionArgs) -> anyhow::Result<()> {
    let fetcher = PageFetcher::new(args.retry_policy())?;
    let selectors = ListingSelectors::compile(&SelectorConfig::default())?;
    let mut sink = open_sink(args.format, &args.output, args.fresh)?;

    let mut session = HttpSession::open(&fetcher, &selectors, &args.start_url)
        .with_context(|| format!("opening {}", args.start_url))?;

    let report =
        PaginationDriver::new(&mut session, args.settle_policy(), args.max_pages).run(sink.as_mut())?;

    info!(
        pages = report.pages,
        records = report.records,
        reason = ?report.reason,
        output = %args.output.display(),
        "scrape complete"
    );
    Ok(())
}

fn open_sink(
    format: OutputFormat,
    output: &Path,
    fresh: bool,
) -> Result<Box<dyn ListingSink>, SinkError> {
    Ok(match format {
        OutputFormat::Csv => {
            if fresh {
                CsvSink::reset(output)?;
            }
            Box::new(CsvSink::open(output)?)
        }
        OutputFormat::Md => Box::new(MarkdownSink::new(output)),
        OutputFormat::Xlsx => Box::new(XlsxSink::new(output)),
    })
}
