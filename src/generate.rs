//! Builds the full set of request variants for one base URL.
//!
//! Generation is pure: the same base URL and candidate lists always yield
//! the same candidates, which is what makes the counts testable.

use url::Url;

use crate::lists::CandidateLists;
use crate::probe::{Header, ProbeRequest};

/// Positional token in payload entries that stands for the base path.
const PATH_TOKEN: &str = "${path}";

/// Number of ad-hoc structural URL variants appended to every batch.
const STRUCTURAL_VARIANTS: usize = 25;

/// Splits a parsed URL into `scheme://host[:port]` and its path, with an
/// empty path normalized to `/`.
pub fn host_and_path(url: &Url) -> (String, String) {
    let origin = format!("{}://{}", url.scheme(), authority(url));
    // url::Url only guarantees a non-empty path for special schemes like
    // http(s); input URLs are not limited to those.
    let path = match url.path() {
        "" => "/".to_string(),
        p => p.to_string(),
    };
    (origin, path)
}

fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Closed-form size of the batch [`variants`] produces. Kept next to the
/// generator so the two cannot drift apart unnoticed.
pub fn candidate_count(lists: &CandidateLists) -> usize {
    lists.schemes.len()
        + lists.header_keys.len() * lists.header_values.len()
        + lists.header_keys.len() * 2
        + lists.url_payloads.len()
        + lists.verbs.len()
        + STRUCTURAL_VARIANTS
}

/// Produces every candidate for one base URL, in category order: scheme
/// swaps, composed spoof headers, URL-as-header, path-as-header, path
/// payloads, verb sweep, structural variants.
pub fn variants(base: &Url, lists: &CandidateLists) -> Vec<ProbeRequest> {
    let base_url = base.as_str().to_string();
    let (origin, path) = host_and_path(base);

    let mut probes: Vec<ProbeRequest> = Vec::with_capacity(candidate_count(lists));

    for scheme in lists.schemes {
        probes.push(ProbeRequest::get(format!(
            "{}://{}{}",
            scheme,
            authority(base),
            path
        )));
    }

    for key in lists.header_keys {
        for value in lists.header_values {
            probes.push(ProbeRequest::with_header(
                base_url.as_str(),
                Header::new(*key, *value),
            ));
        }
    }

    for key in lists.header_keys {
        probes.push(ProbeRequest::with_header(
            base_url.as_str(),
            Header::new(*key, base_url.as_str()),
        ));
    }

    for key in lists.header_keys {
        probes.push(ProbeRequest::with_header(
            base_url.as_str(),
            Header::new(*key, path.as_str()),
        ));
    }

    for payload in lists.url_payloads {
        let payload = payload.trim().replace(PATH_TOKEN, &path);
        probes.push(ProbeRequest::get(format!("{}{}{}", origin, path, payload)));
    }

    for verb in lists.verbs {
        probes.push(ProbeRequest::verb(*verb, base_url.as_str()));
    }

    probes.extend(structural_variants(&origin, &path));

    probes
}

fn structural_variants(origin: &str, path: &str) -> Vec<ProbeRequest> {
    let urls = vec![
        format!("{}/{}//", origin, path),
        format!("{}/.{}/..", origin, path),
        format!("{}/;{}", origin, path),
        format!("{}/.;{}", origin, path),
        format!("{}//;/{}", origin, path),
        format!("{}{}", origin, path.to_uppercase()),
        format!("{}/%2e/{}", origin, path),
        format!("{}/{}", origin, path),
        format!("{}/{}..;/", origin, path),
        format!("{}/{}/..;/", origin, path),
        format!("{}/{}%20", origin, path),
        format!("{}/{}%09", origin, path),
        format!("{}/{}%00", origin, path),
        format!("{}/{}.json", origin, path),
        format!("{}/{}.css", origin, path),
        format!("{}/{}.html", origin, path),
        format!("{}/{}?", origin, path),
        format!("{}/{}??", origin, path),
        format!("{}/{}???", origin, path),
        format!("{}/{}?testparam=bypass", origin, path),
        format!("{}/{}#", origin, path),
        format!("{}/{}#test", origin, path),
        format!("{}/{}/.", origin, path),
        format!("{}//{}//", origin, path),
        format!("{}/./{}/./", origin, path),
    ];
    urls.into_iter().map(ProbeRequest::get).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://target.example/admin").unwrap()
    }

    #[test]
    fn batch_size_matches_closed_form() {
        let lists = CandidateLists::builtin();
        let probes = variants(&base(), &lists);
        assert_eq!(probes.len(), candidate_count(&lists));
        // 2 schemes + 112*22 composed + 112 url-as-header + 112
        // path-as-header + 245 payloads + 9 verbs + 25 structural
        assert_eq!(probes.len(), 2969);
    }

    #[test]
    fn structural_variant_count_is_pinned() {
        assert_eq!(
            structural_variants("https://h", "/p").len(),
            STRUCTURAL_VARIANTS
        );
    }

    #[test]
    fn path_token_is_fully_resolved() {
        let probes = variants(&base(), &CandidateLists::builtin());
        for probe in &probes {
            assert!(
                !probe.url.contains(PATH_TOKEN),
                "unresolved token in url {}",
                probe.url
            );
            for header in &probe.headers {
                assert!(
                    !header.value.contains(PATH_TOKEN),
                    "unresolved token in header {}",
                    header
                );
            }
        }
    }

    #[test]
    fn empty_path_is_normalized_to_slash() {
        let bare = Url::parse("https://target.example").unwrap();
        let (origin, path) = host_and_path(&bare);
        assert_eq!(origin, "https://target.example");
        assert_eq!(path, "/");

        let probes = variants(&bare, &CandidateLists::builtin());
        assert!(probes.iter().any(|p| p.url == "http://target.example/"));
        assert!(probes.iter().any(|p| p.url == "https://target.example/"));
    }

    #[test]
    fn non_special_scheme_with_no_path_defaults_to_slash() {
        // Non-special schemes are the one case where url::Url hands back
        // an empty path.
        let url = Url::parse("ssh://target.example").unwrap();
        assert_eq!(url.path(), "");
        let (origin, path) = host_and_path(&url);
        assert_eq!(origin, "ssh://target.example");
        assert_eq!(path, "/");
    }

    #[test]
    fn explicit_port_is_kept_in_origin() {
        let url = Url::parse("https://target.example:8443/admin").unwrap();
        let (origin, path) = host_and_path(&url);
        assert_eq!(origin, "https://target.example:8443");
        assert_eq!(path, "/admin");
    }

    #[test]
    fn composed_candidates_carry_exactly_one_header() {
        let lists = CandidateLists::builtin();
        let probes = variants(&base(), &lists);
        let with_headers = probes.iter().filter(|p| !p.headers.is_empty()).count();
        // composed cross product + url-as-header + path-as-header
        assert_eq!(
            with_headers,
            lists.header_keys.len() * lists.header_values.len() + lists.header_keys.len() * 2
        );
        for probe in probes.iter().filter(|p| !p.headers.is_empty()) {
            assert_eq!(probe.headers.len(), 1);
            assert_eq!(probe.verb, "GET");
        }
    }

    #[test]
    fn generation_is_idempotent() {
        let lists = CandidateLists::builtin();
        let mut first = variants(&base(), &lists);
        let mut second = variants(&base(), &lists);
        first.sort();
        second.sort();
        assert_eq!(first, second);
    }

    #[test]
    fn verb_sweep_covers_every_verb() {
        let lists = CandidateLists::builtin();
        let probes = variants(&base(), &lists);
        for verb in lists.verbs {
            assert!(
                probes
                    .iter()
                    .any(|p| p.verb == *verb && p.headers.is_empty()),
                "missing bare candidate for verb {}",
                verb
            );
        }
    }
}
