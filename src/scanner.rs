//! Per-base-URL orchestration: prescreen, generate, dispatch, report.

use std::future::Future;

use log::{debug, warn};
use reqwest::Client;
use url::Url;

use crate::dispatch;
use crate::executor;
use crate::generate;
use crate::lists::CandidateLists;
use crate::probe::{ProbeRequest, ProbeResult};
use crate::report::Reporter;

pub struct Scanner {
    client: Client,
    lists: CandidateLists,
    threads: usize,
    silent: bool,
    force: bool,
}

impl Scanner {
    pub fn new(
        lists: CandidateLists,
        threads: usize,
        silent: bool,
        force: bool,
    ) -> Result<Scanner, reqwest::Error> {
        Ok(Scanner {
            client: executor::build_client()?,
            lists,
            threads,
            silent,
            force,
        })
    }

    /// Probes every base URL in turn. One URL's batch fully drains before
    /// the next URL's candidates start. Unparseable input lines are
    /// skipped, not fatal.
    pub async fn run(&self, urls: &[String]) {
        for raw in urls {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            match Url::parse(raw) {
                Ok(base) => self.scan(&base).await,
                Err(err) => warn!("skipping unparseable url {:?}: {}", raw, err),
            }
        }
    }

    async fn scan(&self, base: &Url) {
        let mut reporter = Reporter::new(self.silent);
        let client = self.client.clone();
        probe_base(
            base,
            &self.lists,
            self.threads,
            self.force,
            move |probe| {
                let client = client.clone();
                async move { executor::execute(&client, &probe).await }
            },
            &mut reporter,
        )
        .await;
    }
}

/// Runs one base URL's scan against an arbitrary executor: prescreen
/// unless forced, generate, dispatch, close out the report block. A URL
/// whose prescreen lands outside the interesting band gets a skip notice
/// and no candidates.
async fn probe_base<E, F>(
    base: &Url,
    lists: &CandidateLists,
    threads: usize,
    force: bool,
    execute: E,
    reporter: &mut Reporter,
) where
    E: Fn(ProbeRequest) -> F,
    F: Future<Output = i32>,
{
    // The premise is that only currently-blocked URLs warrant the full
    // variant budget.
    if !force {
        let status = execute(ProbeRequest::get(base.as_str())).await;
        if !executor::prescreen_band(status) {
            reporter.skip_notice(base.as_str(), status);
            return;
        }
    }

    let probes = generate::variants(base, lists);
    debug!("generated {} candidates for {}", probes.len(), base);

    dispatch::run(
        probes,
        threads,
        |probe| {
            let outcome = execute(probe.clone());
            async move {
                ProbeResult {
                    status: outcome.await,
                    request: probe,
                }
            }
        },
        |result| reporter.report(result),
    )
    .await;

    reporter.finish();
}
