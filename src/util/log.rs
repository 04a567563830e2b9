/// Emits a trace record under the `set_map` target, or nothing when the `log` feature is off.
macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        {
            ::log::trace!(target: "set_map", $($arg)+);
        }
    }};
}

pub(crate) use trace;
