use crate::api::Error as ApiError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rejected locally, nothing was sent to the store
    #[error(transparent)]
    Validation(#[from] ApiError),

    #[error(transparent)]
    Remote(#[from] anyhow::Error),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
