// Logging shims: with `feature = "tracing"` these emit `tracing` events under the
// `fixed_list` target, otherwise they expand to nothing.

macro_rules! vlog {
    ($level:ident, $($tt:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::$level!(target: "fixed_list", $($tt)*);
        }
    };
}

macro_rules! vtrace {
    ($($tt:tt)*) => {
        vlog!(trace, $($tt)*)
    };
}

macro_rules! vdebug {
    ($($tt:tt)*) => {
        vlog!(debug, $($tt)*)
    };
}

macro_rules! vwarn {
    ($($tt:tt)*) => {
        vlog!(warn, $($tt)*)
    };
}
