use thiserror::Error;

use crate::{DataOrder, RoundRating};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    /// There is nothing to average, either because no rounds were given or
    /// because none of them lie within the rating window.
    #[error("no round ratings to compute a rating from")]
    InsufficientData,
    /// The rounds were claimed to be in an order they are not in.
    #[error("round ratings are not {order}: {earlier} is listed before {later}")]
    InconsistentOrder {
        order: DataOrder,
        earlier: RoundRating,
        later: RoundRating,
    },
}
