use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Gold,
    Gray,
}

impl Color {
    fn ansi(self) -> &'static str {
        match self {
            Color::Green => "\x1b[92m",
            Color::Red => "\x1b[91m",
            Color::Gold => "\x1b[93m",
            Color::Gray => "\x1b[37m",
        }
    }
}

#[macro_export]
macro_rules! notify {
    () => {};

    ($($arg:tt)*) => {{
        let mut logger = $crate::logger();

        logger.append(
            format!(
                $($arg)*
            ),
            $crate::Color::Green,
        );
    }};
}

#[macro_export]
macro_rules! strong {
    () => {};

    ($($arg:tt)*) => {{
        let mut logger = $crate::logger();

        logger.append(
            format!(
                $($arg)*
            ),
            $crate::Color::Red,
        );
    }};
}

#[macro_export]
macro_rules! warn {
    () => {};

    ($($arg:tt)*) => {{
        let mut logger = $crate::logger();

        logger.append(
            format!(
                $($arg)*
            ),
            $crate::Color::Gold,
        );
    }};
}

#[macro_export]
macro_rules! trace {
    () => {};

    ($($arg:tt)*) => {{
        let mut logger = $crate::logger();

        logger.append(
            format!(
                $($arg)*
            ),
            $crate::Color::Gray,
        );
    }};
}

pub static LOGGER: Lazy<Mutex<Logger<300>>> = Lazy::new(|| Mutex::new(Logger::new()));

/// Locks the global logger.
///
/// A thread that panicked while holding the lock can't leave the ring buffer in an invalid
/// state, so poisoning is ignored.
pub fn logger() -> MutexGuard<'static, Logger<300>> {
    LOGGER.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Logger<const N: usize> {
    lines: [(String, Color); N],
    head: usize,
    len: usize,
}

impl<const N: usize> Logger<N> {
    fn new() -> Self {
        Self {
            lines: std::array::from_fn(|_| (String::new(), Color::Gray)),
            head: 0,
            len: 0,
        }
    }

    pub fn append(&mut self, line: String, color: Color) {
        self.lines[self.head] = (line + "\n", color);
        self.head = (self.head + 1) % N;
        self.len += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn lines(&self) -> (&[(String, Color)], &[(String, Color)]) {
        if self.len < N {
            (&self.lines[0..self.len], &[])
        } else {
            // wrapped around, so we need to return two slices
            let (a, b) = self.lines.split_at(self.head);

            (b, a)
        }
    }

    /// Every line in the order it was logged, without any coloring.
    pub fn plain(&self) -> String {
        let lines = self.lines();
        lines.0.iter().chain(lines.1).map(|(line, _)| line.as_str()).collect()
    }

    /// Every line in the order it was logged, colored for a terminal.
    pub fn format(&self) -> String {
        let mut out = String::new();
        let lines = self.lines();

        for (line, color) in lines.0.iter().chain(lines.1) {
            out += color.ansi();
            out += line.trim_end_matches('\n');
            out += "\x1b[0m\n";
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order() {
        let mut logger = Logger::<4>::new();
        assert!(logger.is_empty());
        logger.append("a".to_string(), Color::Green);
        logger.append("b".to_string(), Color::Gray);
        assert!(!logger.is_empty());
        assert_eq!(logger.plain(), "a\nb\n");
    }

    #[test]
    fn wraps_around() {
        let mut logger = Logger::<3>::new();
        for line in ["a", "b", "c", "d", "e"] {
            logger.append(line.to_string(), Color::Gold);
        }
        assert_eq!(logger.plain(), "c\nd\ne\n");
    }

    #[test]
    fn colored() {
        let mut logger = Logger::<2>::new();
        logger.append("oops".to_string(), Color::Red);
        assert_eq!(logger.format(), "\x1b[91moops\x1b[0m\n");
    }

    #[test]
    fn macros() {
        crate::trace!("demangled {} symbols", 3);
        assert!(logger().plain().contains("demangled 3 symbols\n"));
    }
}
