use std::fmt;

/// Status value reported when no HTTP response was obtained at all,
/// either because the candidate could not be built or because the
/// transport failed. Distinct from every real HTTP status code.
pub const SENTINEL_STATUS: i32 = -1;

/// A single header to attach to a probe. Duplicate keys across (and
/// within) candidates are allowed and meaningful.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Header {
        Header {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// One fully-resolved request variant. Built once by the generator,
/// executed exactly once.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProbeRequest {
    pub verb: String,
    pub url: String,
    pub headers: Vec<Header>,
}

impl ProbeRequest {
    pub fn get<U: Into<String>>(url: U) -> ProbeRequest {
        ProbeRequest {
            verb: "GET".to_string(),
            url: url.into(),
            headers: Vec::new(),
        }
    }

    pub fn with_header<U: Into<String>>(url: U, header: Header) -> ProbeRequest {
        ProbeRequest {
            verb: "GET".to_string(),
            url: url.into(),
            headers: vec![header],
        }
    }

    pub fn verb<V: Into<String>, U: Into<String>>(verb: V, url: U) -> ProbeRequest {
        ProbeRequest {
            verb: verb.into(),
            url: url.into(),
            headers: Vec::new(),
        }
    }
}

/// Outcome of executing one candidate: the originating request plus the
/// resolved status code, or [`SENTINEL_STATUS`].
#[derive(Clone, Debug)]
pub struct ProbeResult {
    pub status: i32,
    pub request: ProbeRequest,
}
