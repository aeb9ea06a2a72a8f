use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Api(#[from] lolxd_api::Error),
    #[error("participant enrichment task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl LookupError {
    /// The player or their match does not exist, or the region is unknown.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LookupError::Api(lolxd_api::Error::NotFound(_) | lolxd_api::Error::UnknownRegion(_))
        )
    }
}
