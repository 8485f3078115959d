use serde::Serialize;

/// Why a single provider attempt did not produce a payload.
///
/// Every reason is recoverable at the chain level: the chain records it in
/// the fetch diagnostics and moves on to the next provider.
///
/// | Reason | Typical cause |
/// |--------|---------------|
/// | `NetworkError` | connection refused, DNS failure, attempt timeout |
/// | `NonSuccessStatus` | upstream answered with a non-2xx status |
/// | `RateLimited` | governor denial or upstream 429 |
/// | `ParseError` | body did not match the expected shape |
/// | `NotSupported` | provider cannot answer this kind of query |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    NetworkError,
    NonSuccessStatus,
    RateLimited,
    ParseError,
    NotSupported,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkError => "network-error",
            Self::NonSuccessStatus => "non-success-status",
            Self::RateLimited => "rate-limited",
            Self::ParseError => "parse-error",
            Self::NotSupported => "not-supported",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
