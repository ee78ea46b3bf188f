use crate::dispatch::{Direction, Strategy};
use crate::Result;

/// Runs one adapter call for `T`, emitting a trace event when it fails.
pub(crate) fn outcome<T: ?Sized, V>(
    strategy: Strategy,
    direction: Direction,
    call: impl FnOnce() -> Result<V>,
) -> Result<V> {
    let result = call();
    if let Err(err) = &result {
        tracing::trace!(
            target: "json_adapter",
            type_name = std::any::type_name::<T>(),
            %strategy,
            %direction,
            error = %err,
            "adapter call failed"
        );
    }
    result
}
