//! Fixed HTTP status catalog for the terminal response
//!
//! Loaded once; codes outside the table get no phrase and the response
//! path falls back to 500 for them.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static REASON_PHRASES: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Informational 1xx
        (100, "Continue"),
        (101, "Switching Protocols"),
        // Successful 2xx
        (200, "OK"),
        (201, "Created"),
        (202, "Accepted"),
        (203, "Non-Authoritative Information"),
        (204, "No Content"),
        (205, "Reset Content"),
        (206, "Partial Content"),
        // Redirection 3xx
        (300, "Multiple Choices"),
        (301, "Moved Permanently"),
        (302, "Found"),
        (303, "See Other"),
        (304, "Not Modified"),
        (305, "Use Proxy"),
        (306, "(Unused)"),
        (307, "Temporary Redirect"),
        // Client Error 4xx
        (400, "Bad Request"),
        (401, "Unauthorized"),
        (402, "Payment Required"),
        (403, "Forbidden"),
        (404, "Not Found"),
        (405, "Method Not Allowed"),
        (406, "Not Acceptable"),
        (407, "Proxy Authentication Required"),
        (408, "Request Timeout"),
        (409, "Conflict"),
        (410, "Gone"),
        (411, "Length Required"),
        (412, "Precondition Failed"),
        (413, "Request Entity Too Large"),
        (414, "Request-URI Too Long"),
        (415, "Unsupported Media Type"),
        (416, "Requested Range Not Satisfiable"),
        (417, "Expectation Failed"),
        (418, "I'm a teapot"),
        (422, "Unprocessable Entity"),
        (423, "Locked"),
        // Server Error 5xx
        (500, "Internal Server Error"),
        (501, "Not Implemented"),
        (502, "Bad Gateway"),
        (503, "Service Unavailable"),
        (504, "Gateway Timeout"),
        (505, "HTTP Version Not Supported"),
    ])
});

pub fn reason_phrase(code: u16) -> Option<&'static str> {
    REASON_PHRASES.get(&code).copied()
}

pub fn is_known(code: u16) -> bool {
    REASON_PHRASES.contains_key(&code)
}
