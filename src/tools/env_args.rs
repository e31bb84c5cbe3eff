#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;
use std::ops::Deref;

// region ArgName
/// The names an arg can be passed with, e.g. `-s` and `--seed`.
/// Built from a single `&str` or from a `Vec<&str>`.
pub struct ArgName<'a> {
    names: Vec<&'a str>,
}

impl<'a> From<&'a str> for ArgName<'a> {
    fn from(val: &'a str) -> Self {
        ArgName { names: vec![val] }
    }
}

impl<'a> From<Vec<&'a str>> for ArgName<'a> {
    fn from(val: Vec<&'a str>) -> Self {
        ArgName { names: val }
    }
}

impl<'a> Deref for ArgName<'a> {
    type Target = Vec<&'a str>;

    fn deref(&self) -> &Self::Target {
        &self.names
    }
}
// endregion

/// Retrieve the value of the first `name=value` arg matching one of the given names.
///
/// Args are global to the process: in tests, wrap the call with `with_env_args(args, fn)`.
pub fn retrieve_arg_value<'a, A>(arg_names: A) -> Option<String>
where
    A: Into<ArgName<'a>>,
{
    let arg_names = arg_names.into();
    get_env_args().into_iter().find_map(|arg| {
        let (name, value) = arg.split_once('=')?;
        arg_names
            .iter()
            .any(|arg_name| *arg_name == name)
            .then(|| value.to_owned())
    })
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by the app while running a test wrapped with `with_env_args`.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.borrow().clone())
}

#[cfg(test)]
/// Run `function` as if the app had been launched with `args`.
/// Previous args are restored afterward.
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}
