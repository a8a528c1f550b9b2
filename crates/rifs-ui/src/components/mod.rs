pub(crate) mod atoms;
pub(crate) mod login;
pub(crate) mod shell;
pub(crate) mod toast;
