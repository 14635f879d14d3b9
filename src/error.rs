use thiserror::Error;

pub type RiskChartResult<T> = Result<T, RiskChartError>;

#[derive(Debug, Error)]
pub enum RiskChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
