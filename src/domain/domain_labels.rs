/// Second-level and top-level labels of a registered domain, split the same
/// way the billing records were keyed when they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainLabels {
    sld: String,
    tld: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainParseError {
    #[error("Invalid domain format.")]
    InvalidFormat,
    #[error("Unable to extract SLD and TLD from the domain.")]
    ExtractionFailed,
}

impl DomainLabels {
    /// Splits a dotted domain name into `(sld, tld)`.
    ///
    /// The suffix is taken to be the last two labels whenever three or more
    /// are present, and the second-level label the third from the end; labels
    /// further left are ignored. This is a heuristic, not a public-suffix
    /// lookup, and it must stay in lockstep with the keys already stored in
    /// `service_domain` — `sub.example.com` splits to sld `sub`,
    /// tld `example.com`, while `example.com` splits to `example` / `com`.
    pub fn parse(domain: &str) -> Result<Self, DomainParseError> {
        let parts: Vec<&str> = domain.split('.').collect();

        let (sld, tld) = match parts.len() {
            n if n >= 3 => (parts[n - 3].to_string(), parts[n - 2..].join(".")),
            2 => (parts[0].to_string(), parts[1].to_string()),
            _ => return Err(DomainParseError::InvalidFormat),
        };

        if sld.is_empty() || tld.is_empty() {
            return Err(DomainParseError::ExtractionFailed);
        }

        Ok(Self { sld, tld })
    }

    pub fn sld(&self) -> &str {
        &self.sld
    }

    pub fn tld(&self) -> &str {
        &self.tld
    }

    /// The form the top-level label takes as a storage key: `.com`, `.co.uk`.
    pub fn tld_key(&self) -> String {
        format!(".{}", self.tld)
    }
}
