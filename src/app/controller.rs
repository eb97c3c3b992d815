use super::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_root() -> Result<(), ApiError> {
    Ok(())
}

pub async fn fallback() -> ApiError {
    DefaultApiError::NotFound.value()
}
