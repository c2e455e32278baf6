/// Failures of a single recommendation round trip.
///
/// None of these reach the end user: the fetch use case swaps any of them
/// for the fallback catalog. They are kept for diagnostics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecommendationError {
    #[error("recommendation.input_invalid")]
    InputInvalid,
    #[error("recommendation.transport_failure")]
    TransportFailure,
    #[error("recommendation.server_error: {0}")]
    ServerError(u16),
    #[error("recommendation.response_shape")]
    ResponseShape,
    #[error("recommendation.decode")]
    Decode,
}
