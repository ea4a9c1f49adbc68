//! Result sink: line output, silent filtering, and the findings table.

use prettytable::{Cell, Row, Table};

use crate::probe::ProbeResult;

/// Inclusive band that counts as a hit: plausible success or redirect.
fn is_hit(status: i32) -> bool {
    (200..=303).contains(&status)
}

/// Consumes one base URL's classification decisions. Reporting happens on
/// the sequential consumer side of the dispatcher, so no locking is
/// needed here.
pub struct Reporter {
    silent: bool,
    findings: Vec<ProbeResult>,
}

impl Reporter {
    pub fn new(silent: bool) -> Reporter {
        Reporter {
            silent,
            findings: Vec::new(),
        }
    }

    /// Silent mode only surfaces the hit band; everything else, sentinel
    /// included, is dropped from output.
    pub fn should_report(&self, status: i32) -> bool {
        !self.silent || is_hit(status)
    }

    pub fn report(&mut self, result: ProbeResult) {
        if self.should_report(result.status) {
            println!("{}", render(&result));
        }
        if is_hit(result.status) {
            self.findings.push(result);
        }
    }

    /// Notice that a base URL was skipped because its current status falls
    /// outside the interesting band.
    pub fn skip_notice(&self, url: &str, status: i32) {
        println!(
            "{} returns {} and therefore doesn't match our criteria. We skip this one.",
            url, status
        );
    }

    /// Closes out a base URL's block: findings summary plus a blank
    /// separator line.
    pub fn finish(&self) {
        if self.silent {
            return;
        }
        if !self.findings.is_empty() {
            self.findings_table().printstd();
        }
        println!();
    }

    fn findings_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("STATUS"),
            Cell::new("VERB"),
            Cell::new("URL"),
            Cell::new("HEADERS"),
        ]));
        for finding in &self.findings {
            let headers = finding
                .request
                .headers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(Row::new(vec![
                Cell::new(&finding.status.to_string()),
                Cell::new(&finding.request.verb),
                Cell::new(&finding.request.url),
                Cell::new(&headers),
            ]));
        }
        table
    }
}

fn render(result: &ProbeResult) -> String {
    let mut line = format!(
        "[{}] {} {}",
        result.status, result.request.verb, result.request.url
    );
    for header in &result.request.headers {
        line.push_str(&format!(" [{}]", header));
    }
    line
}

pub fn banner() {
    println!("verboten - hammers 40x-guarded URLs until one of them gives in");
    println!();
}
