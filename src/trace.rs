// Game events go to the RTT channel opened by the firmware. Without the `rtt`
// feature the arguments are still type-checked but nothing is emitted.

#[cfg(feature = "rtt")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::rtt_target::rprintln!($($arg)*)
    };
}

#[cfg(not(feature = "rtt"))]
macro_rules! trace {
    ($($arg:tt)*) => {{
        let _ = ::core::format_args!($($arg)*);
    }};
}
