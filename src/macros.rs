macro_rules! trace {
  ($($arg:tt)+) => {{
    #[cfg(feature = "log")]
    ::log::trace!(target: "rotable_vec", $($arg)+);
  }};
}

macro_rules! debug {
  ($($arg:tt)+) => {{
    #[cfg(feature = "log")]
    ::log::debug!(target: "rotable_vec", $($arg)+);
  }};
}

pub(super) use debug;
pub(super) use trace;
