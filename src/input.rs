//! Gathers base URLs from the available input sources.
//!
//! Piped stdin wins so the tool slots into a command chain, then a file
//! argument, then the comma-separated flag value.

use std::fs;
use std::io::{self, BufRead};

pub fn read_urls(url_flag: Option<&str>, file_flag: Option<&str>) -> io::Result<Vec<String>> {
    if !atty::is(atty::Stream::Stdin) {
        return read_from_stdin();
    }

    if let Some(path) = file_flag {
        return read_from_file(path);
    }

    if let Some(value) = url_flag {
        return Ok(split_flag(value));
    }

    Ok(Vec::new())
}

fn read_from_stdin() -> io::Result<Vec<String>> {
    let stdin = io::stdin();
    let mut urls = Vec::new();
    for line in stdin.lock().lines() {
        push_trimmed(&mut urls, &line?);
    }
    Ok(urls)
}

fn read_from_file(path: &str) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    let mut urls = Vec::new();
    for line in contents.lines() {
        push_trimmed(&mut urls, line);
    }
    Ok(urls)
}

fn split_flag(value: &str) -> Vec<String> {
    let mut urls = Vec::new();
    for part in value.split(',') {
        push_trimmed(&mut urls, part);
    }
    urls
}

fn push_trimmed(urls: &mut Vec<String>, candidate: &str) {
    let candidate = candidate.trim();
    if !candidate.is_empty() {
        urls.push(candidate.to_string());
    }
}
