use std::fmt::Debug;

pub trait ErrorStringExt<T> {
    /// Turn any error into a `String`, prefixed with `msg`.
    fn err_to_string(self, msg: &str) -> Result<T, String>;
}

impl<T, E: Debug> ErrorStringExt<T> for Result<T, E> {
    fn err_to_string(self, msg: &str) -> Result<T, String> {
        self.map_err(|err| format!("{msg}: {err:?}"))
    }
}

impl<T> ErrorStringExt<T> for Option<T> {
    fn err_to_string(self, msg: &str) -> Result<T, String> {
        self.ok_or_else(|| msg.to_owned())
    }
}
