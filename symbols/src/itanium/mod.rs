//! Decoder for C++ “mangled” linker symbol names.
//!
//! C++ requires the compiler to choose names for linker symbols consistently
//! across compilation units, so that two compilation units that have seen the
//! same declarations can pair up definitions in one unit with references in
//! another. Almost all platforms other than Microsoft Windows follow the
//! [Itanium C++ ABI][itanium]'s rules for this.
//!
//! [itanium]: https://itanium-cxx-abi.github.io/cxx-abi/abi.html#mangling
//!
//! For example, suppose a C++ compilation unit has the definition:
//!
//! ```c++
//! namespace space {
//!   int foo(int x, int y) { return x+y; }
//! }
//! ```
//!
//! The Itanium C++ ABI specifies that the linker symbol for that function must
//! be named `_ZN5space3fooEii`. [`demangle`] parses that name into a
//! [`DemangledName`], which displays as `space::foo(int, int)`.
//!
//! Only the subset of the grammar that shows up in size reports is decoded. Anything else is
//! reported as [`ErrorKind::UnsupportedConstruction`] rather than guessed at.
//!
//! ```
//! use symbols::itanium::{demangle, Arena};
//!
//! let arena = Arena::new();
//! let name = demangle("_ZN5space3fooEii", &arena).unwrap();
//! assert_eq!(name.to_string(), "space::foo(int, int)");
//! ```

mod arena;
pub mod ast;
mod error;
mod index_str;
mod parse;
mod render;
mod subs;

pub use arena::{Arena, DEFAULT_CAPACITY};
pub use ast::DemangledName;
pub use error::{Error, ErrorKind, Result};
pub use parse::DEFAULT_MAX_RECURSION;

use index_str::IndexStr;
use parse::ParseContext;
use subs::SubstitutionTable;

/// Decode `input`, allocating the AST from `arena`.
///
/// Anything that doesn't start with `_Z` isn't an Itanium symbol and is returned as
/// [`DemangledName::Plain`].
pub fn demangle<'a>(input: &'a str, arena: &'a Arena) -> Result<DemangledName<'a>> {
    demangle_with(input, arena, DEFAULT_MAX_RECURSION)
}

/// [`demangle`] with a custom nesting budget.
pub fn demangle_with<'a>(
    input: &'a str,
    arena: &'a Arena,
    max_recursion: u32,
) -> Result<DemangledName<'a>> {
    MangledSymbol::new(input, arena, max_recursion).map(|symbol| symbol.parsed)
}

/// A symbol that has been parsed into an AST, along with the names it may refer back to.
#[derive(Clone, Debug, PartialEq)]
struct MangledSymbol<'a> {
    substitutions: SubstitutionTable<'a>,
    parsed: DemangledName<'a>,
}

impl<'a> MangledSymbol<'a> {
    fn new(raw: &'a str, arena: &'a Arena, max_recursion: u32) -> Result<MangledSymbol<'a>> {
        let mut substitutions = SubstitutionTable::new();

        let parsed = match raw.strip_prefix("_Z") {
            Some(mangled) => {
                let ctx = ParseContext::new(arena, max_recursion);
                let input = IndexStr::from(mangled);
                parse::parse_mangled(&ctx, &mut substitutions, input)?
            }
            None => DemangledName::Plain(raw),
        };

        Ok(MangledSymbol {
            substitutions,
            parsed,
        })
    }
}
