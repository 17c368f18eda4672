/// Host and port split out of an authority's `hostport` part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPort<'a> {
    /// Hostname; IPv6 literals without their brackets
    pub hostname: &'a str,
    /// Port digits, or empty
    pub port: &'a str,
}

/// Check that a string holds only ASCII digits (empty counts).
pub fn is_ascii_digits(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_digit())
}

/// Match `[literal]` optionally followed by `:digits`.
fn split_bracketed(hostport: &str) -> Option<HostPort<'_>> {
    let rest = hostport.strip_prefix('[')?;
    let close = memchr::memchr(b']', rest.as_bytes())?;
    let literal = &rest[..close];
    let after = &rest[close + 1..];
    if literal.is_empty() {
        return None;
    }
    let port = if after.is_empty() {
        ""
    } else {
        after.strip_prefix(':').filter(|port| is_ascii_digits(port))?
    };
    Some(HostPort {
        hostname: literal,
        port,
    })
}

/// Split `hostport` into hostname and port.
///
/// `[v6]` and `[v6]:port` keep the bracket interior as hostname. Otherwise
/// the split happens at the last `:` when only digits follow it; a bare host
/// has an empty port.
pub fn split_host_port(hostport: &str) -> HostPort<'_> {
    if let Some(host_port) = split_bracketed(hostport) {
        return host_port;
    }

    match memchr::memrchr(b':', hostport.as_bytes()) {
        Some(colon) if is_ascii_digits(&hostport[colon + 1..]) => HostPort {
            hostname: &hostport[..colon],
            port: &hostport[colon + 1..],
        },
        _ => HostPort {
            hostname: hostport,
            port: "",
        },
    }
}

/// Split an authority at its last `@` into (`userinfo`, `hostport`).
pub fn split_userinfo(authority: &str) -> (Option<&str>, &str) {
    memchr::memrchr(b'@', authority.as_bytes()).map_or((None, authority), |at| {
        (Some(&authority[..at]), &authority[at + 1..])
    })
}
