use crate::checkers::{HostPort, split_host_port, split_userinfo};
use crate::compat::{Cow, String};
use crate::percent_encode::percent_decode_lenient;

/// Parts of a `[userinfo@]hostport` authority
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authority<'a> {
    pub username: Cow<'a, str>,
    pub password: Cow<'a, str>,
    pub hostname: &'a str,
    pub port: &'a str,
}

impl Authority<'_> {
    /// `hostname[:port]`. IPv6 literals stay without their brackets, so
    /// `[::1]:8080` comes out as `::1:8080`.
    pub fn host(&self) -> String {
        let mut host = String::with_capacity(self.hostname.len() + self.port.len() + 1);
        host.push_str(self.hostname);
        if !self.port.is_empty() {
            host.push(':');
            host.push_str(self.port);
        }
        host
    }
}

/// Parse an authority. The userinfo ends at the last `@` and splits at its
/// first `:`; credentials are percent-decoded.
pub fn parse_authority(authority: &str) -> Authority<'_> {
    let (userinfo, hostport) = split_userinfo(authority);
    let (username, password) = match userinfo {
        Some(userinfo) => userinfo.split_once(':').unwrap_or((userinfo, "")),
        None => ("", ""),
    };
    let HostPort { hostname, port } = split_host_port(hostport);

    Authority {
        username: percent_decode_lenient(username),
        password: percent_decode_lenient(password),
        hostname,
        port,
    }
}
