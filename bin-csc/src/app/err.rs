#[derive(Debug, derive_more::Display)]
#[display("{msg}")]
pub struct Error {
    msg: String
}

impl Error {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

impl std::error::Error for Error {}

macro_rules! err {
    ($($arg:tt)*) => {{
        let e = crate::app::err::Error::new(format!($($arg)*));
        Err(e.into())
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond {
            return err!($($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};
