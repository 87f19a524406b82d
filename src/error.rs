use crate::forecast::error::ForecastError;
use crate::observations::error::ObservationsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmhiError {
    #[error(transparent)]
    Observations(#[from] ObservationsError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),
}
