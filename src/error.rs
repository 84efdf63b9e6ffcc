use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("smooth-scroll engine could not be constructed: {0}")]
    EngineConstruct(String),

    #[error("smooth-scroll engine call `{method}` failed: {message}")]
    EngineCall {
        method: &'static str,
        message: String,
    },

    #[error("engine options could not be encoded: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
