//! Symbol demangler for Itanium C++ names, and the pieces size-reporting tools use to run it
//! over every symbol in an object.

use std::fmt;

use tokenizing::{Color, ColorScheme, Token};

mod colors;
mod helper;
pub mod itanium;

pub use colors::Colors;
pub use itanium::{demangle, Arena, DemangledName, Error, ErrorKind};

/// How a symbol is used by the object defining it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
    Data,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SymbolKind::Function => "function",
            SymbolKind::Data => "data",
        })
    }
}

/// A symbol as found in an object, before its name is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub size: u64,
    pub kind: SymbolKind,
}

/// Anything symbols can be listed from, such as an object file.
pub trait SymbolSource {
    type Error;

    fn symbols(&self) -> Result<Vec<Symbol>, Self::Error>;
}

/// Decodes symbols one after the other, reusing the same scratch memory for each.
pub struct Demangler {
    arena: Arena,
    max_recursion: u32,
}

impl Demangler {
    /// A demangler with the limits from the user's config.
    pub fn new() -> Self {
        let limits = &config::CONFIG.demangler;
        Self::with_limits(limits.arena_capacity, limits.max_recursion)
    }

    pub fn with_limits(arena_capacity: usize, max_recursion: u32) -> Self {
        Self {
            arena: Arena::with_capacity(arena_capacity),
            max_recursion,
        }
    }

    /// Decode `name` and render it.
    pub fn render(&mut self, name: &str) -> Result<TokenStream, Error> {
        self.arena.reset();
        let demangled = itanium::demangle_with(name, &self.arena, self.max_recursion)?;
        Ok(demangled.tokens())
    }

    /// Decode `name` and render it, falling back to the name itself when it can't be decoded.
    pub fn render_or_raw(&mut self, name: &str) -> TokenStream {
        match self.render(name) {
            Ok(stream) => stream,
            Err(err) => {
                log::trace!("[Demangler::render_or_raw] failed to demangle '{name}': {err}.");
                TokenStream::simple(name)
            }
        }
    }
}

impl Default for Demangler {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the names of `symbols` using every core, keeping their order.
pub fn demangle_all(symbols: &[Symbol]) -> Vec<TokenStream> {
    helper::parallel_compute(symbols, Demangler::new, |demangler, symbol| {
        demangler.render_or_raw(&symbol.name)
    })
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token<'static>>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self {
            tokens: Vec::with_capacity(128),
        }
    }

    pub fn simple(s: &str) -> Self {
        let mut this = Self {
            tokens: Vec::with_capacity(1),
        };

        this.tokens.push(Token::from_string(s.to_string(), Colors::item()));
        this
    }

    #[inline]
    pub fn push(&mut self, text: &'static str, color: &'static Color) {
        self.tokens.push(Token::from_str(text, color));
    }

    #[inline]
    pub fn push_string(&mut self, text: String, color: &'static Color) {
        self.tokens.push(Token::from_string(text, color));
    }

    #[inline]
    pub fn tokens(&self) -> &[Token<'static>] {
        self.tokens.as_slice()
    }

    /// Text of every token, with the escape sequences for their colors.
    pub fn ansi(&self) -> String {
        self.tokens.iter().map(Token::ansi).collect()
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(&token.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(name: &str) -> Symbol {
        Symbol {
            name: name.to_string(),
            size: 16,
            kind: SymbolKind::Function,
        }
    }

    #[test]
    fn render() {
        let mut demangler = Demangler::with_limits(4096, 96);
        let stream = demangler.render("_ZN5space3fooEii").unwrap();
        assert_eq!(stream.to_string(), "space::foo(int, int)");
        assert_eq!(stream.tokens()[0].text, "space");
    }

    #[test]
    fn reuse_after_failure() {
        let mut demangler = Demangler::with_limits(4096, 96);
        assert!(demangler.render("_ZN3nms5Event").is_err());
        assert_eq!(
            demangler.render("_Z4testIifEvT_T0_").unwrap().to_string(),
            "void test<int, float>(int, float)"
        );
        assert_eq!(demangler.render("main").unwrap().to_string(), "main()");
    }

    #[test]
    fn raw_fallback() {
        let mut demangler = Demangler::with_limits(4096, 96);
        assert_eq!(demangler.render_or_raw("_ZN3nms5Event").to_string(), "_ZN3nms5Event");
        assert_eq!(demangler.render_or_raw("_Z1fv").to_string(), "f()");
    }

    #[test]
    fn tiny_arena() {
        let mut demangler = Demangler::with_limits(8, 96);
        let err = demangler.render("_ZN3nms5EventC2ERKS0_").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        assert_eq!(demangler.render_or_raw("_Z1fv").to_string(), "_Z1fv");
    }

    #[test]
    fn batch_keeps_order() {
        let names = ["_Z1fv", "main", "_ZN3nms5Event", "_Z1gi"];
        let symbols: Vec<Symbol> = names.iter().cycle().take(203).map(|n| symbol(n)).collect();
        let rendered = demangle_all(&symbols);

        assert_eq!(rendered.len(), symbols.len());
        for (idx, stream) in rendered.iter().enumerate() {
            let expected = match idx % 4 {
                0 => "f()",
                1 => "main()",
                2 => "_ZN3nms5Event",
                _ => "g(int)",
            };
            assert_eq!(stream.to_string(), expected);
        }
    }

    #[test]
    fn ansi() {
        let mut stream = TokenStream::new();
        stream.push("int", &tokenizing::colors::GREEN);
        assert_eq!(stream.ansi(), "\x1b[38;2;2;237;110mint\x1b[0m");
    }
}
