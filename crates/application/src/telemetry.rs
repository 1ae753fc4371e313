use domain::{DomainError, ValidationHandler};

use crate::ApplicationError;

pub(crate) fn record_mutation(aggregate: &'static str, operation: &'static str) {
    metrics::counter!(
        "catalog_mutations_total",
        "aggregate" => aggregate,
        "operation" => operation
    )
    .increment(1);
}

/// Builds the rejection for a command whose handler collected errors.
pub(crate) fn reject(
    aggregate: &'static str,
    message: String,
    handler: &impl ValidationHandler,
) -> ApplicationError {
    tracing::debug!(
        aggregate,
        errors = handler.errors().len(),
        first = handler.first_error().map(|e| e.message()),
        "{message}"
    );
    metrics::counter!("catalog_validation_rejections_total", "aggregate" => aggregate)
        .increment(1);
    DomainError::validation(message, handler).into()
}
