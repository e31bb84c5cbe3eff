pub mod env_args;

use std::fmt::Debug;

/// Build a closure suitable for `map_err`: the error is logged along with the message,
/// then replaced by `value_to_return`.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
