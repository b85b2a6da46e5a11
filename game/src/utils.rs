#[macro_export]
macro_rules! format {
    ($len:literal, $($arg:tt)*) => {{
        use heapless::String;
        use core::fmt::Write;

        let mut s: String<$len> = String::new();
        let _ = write!(&mut s, $($arg)*);
        s
    }}
}

#[cfg(test)]
mod tests {
    #[test]
    fn format_writes_into_fixed_buffer() {
        let s = crate::format!(20, "Snake length:{}", 12);
        assert_eq!(s.as_str(), "Snake length:12");
    }
}
