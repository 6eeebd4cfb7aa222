use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use args::{Cli, ARGS};
use object::{BinaryFormat, Object, ObjectSymbol};
use symbols::{demangle_all, Demangler, Symbol, SymbolKind, SymbolSource, TokenStream};

macro_rules! exit {
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
        std::process::exit(1);
    }};
}

#[derive(Debug)]
enum Error {
    Io(io::Error),
    Object(object::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => fmt::Display::fmt(err, f),
            Error::Object(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<object::Error> for Error {
    fn from(err: object::Error) -> Self {
        Error::Object(err)
    }
}

/// An object file read from disk.
struct ObjectFile {
    path: PathBuf,
    data: Vec<u8>,
}

impl ObjectFile {
    fn open(path: &Path) -> Result<Self, Error> {
        Ok(Self {
            path: path.to_path_buf(),
            data: std::fs::read(path)?,
        })
    }
}

impl SymbolSource for ObjectFile {
    type Error = Error;

    /// Every function and data object the file defines.
    fn symbols(&self) -> Result<Vec<Symbol>, Error> {
        let obj = object::File::parse(&*self.data)?;
        let mut symbols = Vec::new();

        for sym in obj.symbols() {
            if !sym.is_definition() {
                continue;
            }

            let kind = match sym.kind() {
                object::SymbolKind::Text => SymbolKind::Function,
                object::SymbolKind::Data => SymbolKind::Data,
                _ => continue,
            };

            let name = match sym.name_bytes() {
                Ok(name) if !name.is_empty() => symbol_name(name, obj.format()),
                Ok(_) => continue,
                Err(err) => {
                    log::warn!("[ObjectFile::symbols] {}: {err}.", self.path.display());
                    continue;
                }
            };

            symbols.push(Symbol {
                name,
                size: sym.size(),
                kind,
            });
        }

        log::notify!(
            "[ObjectFile::symbols] {} defines {} symbols.",
            self.path.display(),
            symbols.len()
        );
        Ok(symbols)
    }
}

/// Name of a symbol as listed, with invalid UTF-8 replaced.
fn symbol_name(raw: &[u8], format: BinaryFormat) -> String {
    // mach-o prefixes every symbol with an extra underscore
    let raw = match format {
        BinaryFormat::MachO => raw.strip_prefix(b"_").unwrap_or(raw),
        _ => raw,
    };

    String::from_utf8_lossy(raw).into_owned()
}

fn display(stream: &TokenStream, cli: &Cli) -> String {
    if cli.color {
        stream.ansi()
    } else {
        stream.to_string()
    }
}

/// List the symbols of every object in `paths`, returning how many couldn't be read.
fn list(paths: &[PathBuf], cli: &Cli, out: &mut impl Write) -> io::Result<usize> {
    let mut failures = 0;

    for path in paths {
        let symbols = match ObjectFile::open(path).and_then(|obj| obj.symbols()) {
            Ok(symbols) => symbols,
            Err(err) => {
                log::strong!("[list] failed to read symbols from {}: {err}.", path.display());
                eprintln!("Failed to read symbols from '{}': {err}.", path.display());
                failures += 1;
                continue;
            }
        };

        let names = if cli.demangle {
            demangle_all(&symbols)
        } else {
            symbols.iter().map(|sym| TokenStream::simple(&sym.name)).collect()
        };

        writeln!(out, "{}:", path.display())?;
        for (symbol, name) in symbols.iter().zip(names.iter()) {
            writeln!(out, "  - name: {}", display(name, cli))?;
            writeln!(out, "    kind: {}", symbol.kind)?;
            writeln!(out, "    size: {}", symbol.size)?;
        }
    }

    Ok(failures)
}

/// Decode one name per line until stdin is closed.
fn filter(cli: &Cli, out: &mut impl Write) -> io::Result<()> {
    let mut demangler = Demangler::new();

    for line in io::stdin().lock().lines() {
        let line = line?;
        let name = line.trim();
        if name.is_empty() {
            continue;
        }

        writeln!(out, "{}", display(&demangler.render_or_raw(name), cli))?;
    }

    Ok(())
}

fn main() {
    let cli = &*ARGS;
    let mut out = io::BufWriter::new(io::stdout().lock());

    let result = if cli.paths.is_empty() {
        filter(cli, &mut out).map(|_| 0)
    } else {
        list(&cli.paths, cli, &mut out)
    };

    let failures = match result.and_then(|failures| out.flush().map(|_| failures)) {
        Ok(failures) => failures,
        Err(err) => exit!("Failed to write output: {err}."),
    };

    if cli.verbose {
        let logger = log::logger();
        if logger.is_empty() {
            eprintln!("Nothing was logged.");
        } else if cli.color {
            eprint!("{}", logger.format());
        } else {
            eprint!("{}", logger.plain());
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_objects_are_skipped() {
        let exe = std::env::current_exe().unwrap();
        let missing = PathBuf::from("/nonexistent/object.o");
        let paths = [missing.clone(), exe.clone(), missing];

        let mut out = Vec::new();
        let failures = list(&paths, &Cli::default(), &mut out).unwrap();
        assert_eq!(failures, 2);

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with(&format!("{}:\n", exe.display())));
    }

    #[test]
    fn names_are_listed_lossily() {
        assert_eq!(symbol_name(b"_Z1fv", BinaryFormat::Elf), "_Z1fv");
        assert_eq!(symbol_name(b"__Z1fv", BinaryFormat::MachO), "_Z1fv");
        assert_eq!(symbol_name(b"bad\xffname", BinaryFormat::Elf), "bad\u{fffd}name");
    }
}
