//! Remote module search.

pub mod okapi;

pub use okapi::{AuthHeader, OkapiClient};

/// What a remote search query matches against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchBy {
    /// Module id
    #[default]
    Id,
    /// Provided interface
    Provided,
    /// Required interface
    Required,
}

impl SearchBy {
    /// The Okapi query parameter for this kind of search.
    pub fn query_param(self) -> &'static str {
        match self {
            Self::Id => "filter",
            Self::Provided => "provide",
            Self::Required => "require",
        }
    }
}
