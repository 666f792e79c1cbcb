/// [`assert`]s that the result is an error with the given message.
///
/// The message is the error's full context chain, as formatted by `{:#}`.
#[track_caller]
pub fn assert_error_message<T>(result: anyhow::Result<T>, message: &str) {
    match result {
        Ok(_) => panic!("expected error \"{message}\", got Ok"),
        Err(err) => assert_eq!(format!("{err:#}"), message),
    }
}
