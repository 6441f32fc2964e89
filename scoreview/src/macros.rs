#[cfg(feature = "tracing")]
macro_rules! sctrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scoreview", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sctrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! scdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scoreview", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! scdebug {
    ($($tt:tt)*) => {};
}
