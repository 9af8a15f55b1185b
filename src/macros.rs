#[macro_export]
macro_rules! err {
    ($($arg:tt)+) => {
        $crate::Error::Other(anyhow::anyhow!($($arg)+))
    };
}

/// Returns early with an [`err!`] unless the condition holds.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::err!($($arg)+));
        }
    };
}
