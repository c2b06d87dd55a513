use crate::domain::entities::movie::MovieTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    Message(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ProviderError {}

pub trait MovieProvider: Send + Sync {
    fn fetch_all(&self) -> Result<MovieTable, ProviderError>;
}
