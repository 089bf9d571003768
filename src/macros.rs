// src/macros.rs

/// `String` from anything `String::from` accepts; `s!()` is empty.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate `&str`-likes into a fresh `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Wrap in double quotes, no escaping: `dquote!("a")` → `"a"`.
/// CSV fields go through `csv::format_field`, which doubles inner quotes first.
#[macro_export]
macro_rules! dquote {
    ($expr:expr) => {
        $crate::join!("\"", $expr, "\"")
    };
}
