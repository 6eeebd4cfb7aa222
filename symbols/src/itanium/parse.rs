//! Recursive descent parser from mangled input to the AST in [`super::ast`].

use super::arena::Arena;
use super::ast::*;
use super::error::{Error, Result};
use super::index_str::IndexStr;
use super::subs::SubstitutionTable;

use std::cell::Cell;

/// Default nesting depth a symbol may reach before parsing gives up.
pub const DEFAULT_MAX_RECURSION: u32 = 96;

/// Keeps track of recursion levels and early returns with an error if there
/// is too much recursion.
macro_rules! try_begin_parse {
    ($ctx:expr) => {
        let _auto_check_recursion = AutoParseRecursion::new($ctx)?;
    };
}

/// Common context needed when parsing.
pub(crate) struct ParseContext<'a> {
    arena: &'a Arena,
    // Maximum amount of recursive parsing calls we will allow. If this is too
    // large, we can blow the stack.
    max_recursion: u32,
    // The current recursion level. Should always be less than or equal to the
    // maximum.
    recursion_level: Cell<u32>,
}

impl<'a> ParseContext<'a> {
    pub(crate) fn new(arena: &'a Arena, max_recursion: u32) -> ParseContext<'a> {
        ParseContext {
            arena,
            max_recursion,
            recursion_level: Cell::new(0),
        }
    }

    #[inline]
    fn enter_recursion(&self) -> Result<()> {
        let new_recursion_level = self.recursion_level.get() + 1;

        if new_recursion_level >= self.max_recursion {
            Err(Error::TooMuchRecursion)
        } else {
            self.recursion_level.set(new_recursion_level);
            Ok(())
        }
    }

    #[inline]
    fn exit_recursion(&self) {
        let level = self.recursion_level.get();
        debug_assert!(level >= 1);
        self.recursion_level.set(level.saturating_sub(1));
    }
}

/// An RAII type to automatically check the recursion level against the
/// maximum. If the maximum has been crossed, return an error. Otherwise,
/// increment the level upon construction, and decrement it upon destruction.
struct AutoParseRecursion<'ctx, 'a>(&'ctx ParseContext<'a>);

impl<'ctx, 'a> AutoParseRecursion<'ctx, 'a> {
    #[inline]
    fn new(ctx: &'ctx ParseContext<'a>) -> Result<AutoParseRecursion<'ctx, 'a>> {
        ctx.enter_recursion()?;
        Ok(AutoParseRecursion(ctx))
    }
}

impl Drop for AutoParseRecursion<'_, '_> {
    #[inline]
    fn drop(&mut self) {
        self.0.exit_recursion();
    }
}

/// A trait for anything that can be parsed from an `IndexStr` and return a
/// `Result` of the parsed `Self` value and the rest of the `IndexStr` input
/// that has not been consumed in parsing the `Self` value.
pub(crate) trait Parse<'a>: Sized {
    /// Parse the `Self` value from `input` and return it, updating the
    /// substitution table as needed.
    fn parse(
        ctx: &ParseContext<'a>,
        subs: &mut SubstitutionTable<'a>,
        input: IndexStr<'a>,
    ) -> Result<(Self, IndexStr<'a>)>;
}

/// Which rule decides whether a freshly parsed component is remembered for back references.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NameMode {
    /// The name of the encoded entity itself. Only prefixes that more name follows are
    /// remembered.
    Function,
    /// Names in types and template arguments. Every component is remembered.
    Data,
}

/// The qualified name currently being built, before it's moved into the arena.
struct NameBuilder<'a> {
    components: Vec<Component<'a>>,
    cv: CvQualifiers,
    ref_qualifier: RefQualifier,
    template_args: Vec<TemplateArgs<'a>>,
}

impl<'a> NameBuilder<'a> {
    fn new() -> Self {
        Self {
            components: Vec::new(),
            cv: CvQualifiers::empty(),
            ref_qualifier: RefQualifier::None,
            template_args: Vec::new(),
        }
    }

    fn push(&mut self, component: Component<'a>) {
        self.components.push(component);
    }

    /// Append a previously seen name, keeping its argument lists next to its components.
    fn extend(&mut self, name: &QualifiedName<'a>) {
        let offset = self.components.len();
        self.components.extend_from_slice(name.components);
        self.template_args.extend(name.template_args.iter().map(|args| TemplateArgs {
            args: args.args,
            attached_after: args.attached_after + offset,
        }));
    }

    /// Attach a template argument list after the components seen so far.
    fn attach(&mut self, args: &'a [TemplateArg<'a>]) {
        self.template_args.push(TemplateArgs {
            args,
            attached_after: self.components.len(),
        });
    }

    /// Copy of the name as it is now.
    fn snapshot(&self, arena: &'a Arena) -> Result<QualifiedName<'a>> {
        Ok(QualifiedName {
            components: arena.alloc_slice(&self.components)?,
            cv: self.cv,
            ref_qualifier: self.ref_qualifier,
            template_args: arena.alloc_slice(&self.template_args)?,
        })
    }

    fn finish(self, arena: &'a Arena) -> Result<QualifiedName<'a>> {
        if self.components.is_empty() {
            return Err(Error::UnexpectedText);
        }

        self.snapshot(arena)
    }
}

/// ```text
/// <encoding> ::= N <nested-name> E <bare-function-type>
///            ::= St <source-name>* [<template-args>] <bare-function-type>
///            ::= <name> [<template-args>] <bare-function-type>
/// ```
impl<'a> Parse<'a> for Encoding<'a> {
    fn parse(
        ctx: &ParseContext<'a>,
        subs: &mut SubstitutionTable<'a>,
        input: IndexStr<'a>,
    ) -> Result<(Encoding<'a>, IndexStr<'a>)> {
        try_begin_parse!(ctx);

        let (name, tail) = match input.peek() {
            None => return Err(Error::UnexpectedEnd),
            Some(b'N') => parse_nested_name(ctx, subs, input, NameMode::Function)?,
            Some(_) => {
                let mut builder = NameBuilder::new();
                let mut tail = if input.starts_with(b"St") {
                    builder.push(Component::WellKnown(WellKnownComponent::Std));
                    let mut tail = input.advance(2);
                    while tail.peek().is_some_and(|c| c.is_ascii_digit()) {
                        tail = parse_name(ctx, subs, &mut builder, tail, NameMode::Function)?;
                    }
                    tail
                } else {
                    parse_name(ctx, subs, &mut builder, input, NameMode::Function)?
                };

                if tail.peek() == Some(b'I') {
                    let (args, rest) = parse_template_args(ctx, subs, tail)?;
                    builder.attach(args);
                    tail = rest;
                }

                (builder.finish(ctx.arena)?, tail)
            }
        };

        let has_return = name.is_template_function();
        let (signature, tail) = parse_bare_function_type(ctx, subs, tail, has_return)?;

        Ok((Encoding { name, signature }, tail))
    }
}

/// ```text
/// <nested-name> ::= N [<CV-qualifiers>] [<ref-qualifier>] <name>+ E
/// ```
fn parse_nested_name<'a>(
    ctx: &ParseContext<'a>,
    subs: &mut SubstitutionTable<'a>,
    input: IndexStr<'a>,
    mode: NameMode,
) -> Result<(QualifiedName<'a>, IndexStr<'a>)> {
    try_begin_parse!(ctx);

    let tail = consume(b"N", input)?;
    let mut builder = NameBuilder::new();

    let (cv, mut tail) = parse_cv_qualifiers(tail);
    builder.cv = cv;

    match tail.peek() {
        Some(b'R') => builder.ref_qualifier = RefQualifier::LValue,
        Some(b'O') => builder.ref_qualifier = RefQualifier::RValue,
        _ => {}
    }
    if builder.ref_qualifier != RefQualifier::None {
        tail = tail.advance(1);
    }

    loop {
        match tail.peek() {
            None => return Err(Error::UnexpectedEnd),
            Some(b'E') => break,
            Some(_) => tail = parse_name(ctx, subs, &mut builder, tail, mode)?,
        }
    }

    let tail = consume(b"E", tail)?;
    Ok((builder.finish(ctx.arena)?, tail))
}

/// Parse one step of a name into `builder`.
///
/// ```text
/// <name> ::= <substitution>
///        ::= <template-args>
///        ::= <ctor-dtor-name>
///        ::= [L] <source-name>
/// ```
///
/// Only source names are remembered for back references.
fn parse_name<'a>(
    ctx: &ParseContext<'a>,
    subs: &mut SubstitutionTable<'a>,
    builder: &mut NameBuilder<'a>,
    input: IndexStr<'a>,
    mode: NameMode,
) -> Result<IndexStr<'a>> {
    try_begin_parse!(ctx);

    match input.peek() {
        None => return Err(Error::UnexpectedEnd),
        Some(b'S') => return parse_substitution(ctx, subs, builder, input),
        Some(b'I') => {
            let (args, tail) = parse_template_args(ctx, subs, input)?;
            builder.attach(args);
            return Ok(tail);
        }
        Some(b'C') | Some(b'D') => {
            let (name, tail) = CtorDtorName::parse_prefix(input)
                .ok_or(Error::Unsupported("constructor or destructor variant"))?;
            builder.push(Component::CtorDtor(name));
            return Ok(tail);
        }
        Some(_) => {}
    }

    // internal linkage
    let source = if input.peek() == Some(b'L') {
        input.advance(1)
    } else {
        input
    };

    let tail = match source.peek() {
        Some(b'0'..=b'9') => {
            let (ident, tail) = source.read_length_prefixed()?;
            builder.push(Component::Source(ident));
            tail
        }
        Some(b'a'..=b'z') => return Err(Error::Unsupported("operator names")),
        Some(b'Z') => return Err(Error::Unsupported("local names")),
        Some(b'B') => return Err(Error::Unsupported("abi tags")),
        Some(_) => return Err(Error::UnexpectedText),
        None => return Err(Error::UnexpectedEnd),
    };

    let substitutable = match mode {
        NameMode::Data => true,
        NameMode::Function => more_name_follows(tail),
    };

    if subs.qualifier().is_none() {
        subs.set_qualifier(builder.snapshot(ctx.arena)?);
    } else if substitutable {
        subs.insert(builder.snapshot(ctx.arena)?);
    }

    Ok(tail)
}

fn more_name_follows(input: IndexStr<'_>) -> bool {
    matches!(input.peek(), Some(b'0'..=b'9' | b'I')) || CtorDtorName::parse_prefix(input).is_some()
}

/// Resolve a back reference and copy the name it refers to into `builder`.
///
/// ```text
/// <substitution> ::= S_
///                ::= S <seq-id> _
///                ::= St | Sa | Sb | Ss | Si | So | Sd
/// ```
fn parse_substitution<'a>(
    ctx: &ParseContext<'a>,
    subs: &mut SubstitutionTable<'a>,
    builder: &mut NameBuilder<'a>,
    input: IndexStr<'a>,
) -> Result<IndexStr<'a>> {
    try_begin_parse!(ctx);

    if let Some((well_known, tail)) = WellKnownComponent::parse_prefix(input) {
        builder.push(Component::WellKnown(well_known));
        return Ok(tail);
    }

    let tail = consume(b"S", input)?;
    if tail.peek() == Some(b'_') {
        let qualifier = subs.qualifier().ok_or(Error::BadBackReference)?;
        builder.extend(qualifier);
        return Ok(tail.advance(1));
    }

    let (idx, tail) = parse_number(36, tail)?;
    let tail = consume(b"_", tail)?;
    let name = subs.get(idx).ok_or(Error::BadBackReference)?;
    builder.extend(name);
    Ok(tail)
}

/// ```text
/// <template-args> ::= I <template-arg>* E
/// ```
fn parse_template_args<'a>(
    ctx: &ParseContext<'a>,
    subs: &mut SubstitutionTable<'a>,
    input: IndexStr<'a>,
) -> Result<(&'a [TemplateArg<'a>], IndexStr<'a>)> {
    let mut args = Vec::new();
    let tail = parse_template_arg_list(ctx, subs, input, &mut args)?;
    Ok((ctx.arena.alloc_slice(&args)?, tail))
}

/// Parse the arguments between `I`/`J` and `E` into `args`, flattening argument packs.
///
/// ```text
/// <template-arg> ::= N <nested-name> E
///                ::= <source-name> [<template-args>]
///                ::= <substitution> [<template-args>]
///                ::= L <literal> E
///                ::= J <template-arg>* E
///                ::= <type>
/// ```
fn parse_template_arg_list<'a>(
    ctx: &ParseContext<'a>,
    subs: &mut SubstitutionTable<'a>,
    input: IndexStr<'a>,
    args: &mut Vec<TemplateArg<'a>>,
) -> Result<IndexStr<'a>> {
    try_begin_parse!(ctx);

    let mut tail = match input.peek() {
        Some(b'I' | b'J') => input.advance(1),
        Some(_) => return Err(Error::UnexpectedText),
        None => return Err(Error::UnexpectedEnd),
    };

    loop {
        tail = match tail.peek() {
            None => return Err(Error::UnexpectedEnd),
            Some(b'E') => return Ok(tail.advance(1)),
            Some(b'J') => parse_template_arg_list(ctx, subs, tail, args)?,
            Some(b'N') => {
                let (name, tail) = parse_nested_name(ctx, subs, tail, NameMode::Data)?;
                args.push(TemplateArg::Name(name));
                tail
            }
            Some(b'L') => {
                let (literal, tail) = Literal::parse(ctx, subs, tail)?;
                args.push(TemplateArg::Literal(literal));
                tail
            }
            Some(b'0'..=b'9') => {
                let mut builder = NameBuilder::new();
                let tail = parse_name(ctx, subs, &mut builder, tail, NameMode::Data)?;
                let tail = parse_trailing_template_args(ctx, subs, &mut builder, tail)?;
                args.push(TemplateArg::Name(builder.finish(ctx.arena)?));
                tail
            }
            Some(b'S') if tail.peek_at(1) != b't' => {
                let mut builder = NameBuilder::new();
                let tail = parse_substitution(ctx, subs, &mut builder, tail)?;
                let tail = parse_trailing_template_args(ctx, subs, &mut builder, tail)?;
                args.push(TemplateArg::Name(builder.finish(ctx.arena)?));
                tail
            }
            Some(_) => {
                let (ty, tail) = Type::parse(ctx, subs, tail)?;
                args.push(TemplateArg::Type(ty));
                tail
            }
        };
    }
}

fn parse_trailing_template_args<'a>(
    ctx: &ParseContext<'a>,
    subs: &mut SubstitutionTable<'a>,
    builder: &mut NameBuilder<'a>,
    input: IndexStr<'a>,
) -> Result<IndexStr<'a>> {
    if input.peek() != Some(b'I') {
        return Ok(input);
    }

    let (args, tail) = parse_template_args(ctx, subs, input)?;
    builder.attach(args);
    Ok(tail)
}

/// ```text
/// <type> ::= <prefix>* <T_ | T <number> _>
///        ::= <prefix>* <nested-name>
///        ::= <prefix>* <substitution> [<template-args>]
///        ::= <prefix>* <builtin-type>
///        ::= <prefix>* Dp <type>
///        ::= <prefix>* DF <number> _
///        ::= <prefix>* F [Y] <bare-function-type> E
///
/// <prefix> ::= P | R | O | r | V | K
/// ```
impl<'a> Parse<'a> for Type<'a> {
    fn parse(
        ctx: &ParseContext<'a>,
        subs: &mut SubstitutionTable<'a>,
        input: IndexStr<'a>,
    ) -> Result<(Type<'a>, IndexStr<'a>)> {
        try_begin_parse!(ctx);

        let mut indirection = 0u32;
        let mut ref_qualifier = RefQualifier::None;
        let mut cv = CvQualifiers::empty();
        let mut tail = input;

        loop {
            match tail.peek() {
                Some(b'P') => indirection = indirection.checked_add(1).ok_or(Error::Overflow)?,
                Some(b'R') => ref_qualifier = RefQualifier::LValue,
                Some(b'O') => ref_qualifier = RefQualifier::RValue,
                Some(b'r') => cv |= CvQualifiers::RESTRICT,
                Some(b'V') => cv |= CvQualifiers::VOLATILE,
                Some(b'K') => cv |= CvQualifiers::CONST,
                _ => break,
            }
            tail = tail.advance(1);
        }

        let (kind, tail) = match tail.peek() {
            None => return Err(Error::UnexpectedEnd),
            Some(b'T') => {
                let (idx, tail) = parse_template_param(tail)?;
                (TypeKind::TemplateParam(idx), tail)
            }
            Some(b'N') => {
                let (name, tail) = parse_nested_name(ctx, subs, tail, NameMode::Data)?;
                (TypeKind::Qualified(name), tail)
            }
            Some(b'S') => {
                let mut builder = NameBuilder::new();
                let mut rest = parse_substitution(ctx, subs, &mut builder, tail)?;

                // `St` directly followed by a name is `std::<name>`
                let is_std = builder.components == [Component::WellKnown(WellKnownComponent::Std)];
                if is_std && rest.peek().is_some_and(|c| c.is_ascii_digit()) {
                    rest = parse_name(ctx, subs, &mut builder, rest, NameMode::Data)?;
                }

                let rest = parse_trailing_template_args(ctx, subs, &mut builder, rest)?;
                (TypeKind::Qualified(builder.finish(ctx.arena)?), rest)
            }
            Some(b'F') => {
                let mut rest = tail.advance(1);
                if rest.peek() == Some(b'Y') {
                    rest = rest.advance(1);
                }

                let (function, rest) = parse_bare_function_type(ctx, subs, rest, true)?;
                let rest = consume(b"E", rest)?;
                (TypeKind::FunctionPointer(ctx.arena.alloc(function)?), rest)
            }
            Some(b'D') if tail.starts_with(b"Dp") => {
                let (inner, rest) = Type::parse(ctx, subs, tail.advance(2))?;
                (TypeKind::PackExpansion(ctx.arena.alloc(inner)?), rest)
            }
            Some(b'D') if tail.starts_with(b"DF") => {
                let (width, rest) = parse_number(10, tail.advance(2))?;
                let width = u32::try_from(width).map_err(|_| Error::Overflow)?;
                let rest = consume(b"_", rest)?;
                (TypeKind::Builtin(BuiltinType::Float(width)), rest)
            }
            Some(_) => match StandardBuiltinType::parse_prefix(tail) {
                Some((builtin, rest)) => (TypeKind::Builtin(BuiltinType::Standard(builtin)), rest),
                None if tail.peek() == Some(b'D') => {
                    return Err(Error::Unsupported("extended builtin types"));
                }
                None if matches!(tail.peek(), Some(b'A' | b'M' | b'u')) => {
                    return Err(Error::Unsupported("array, member pointer and vendor types"));
                }
                None => return Err(Error::UnexpectedText),
            },
        };

        let ty = Type {
            kind,
            indirection,
            ref_qualifier,
            cv,
        };

        Ok((ty, tail))
    }
}

/// ```text
/// <template-param> ::= T_
///                  ::= T <number> _
/// ```
fn parse_template_param(input: IndexStr<'_>) -> Result<(usize, IndexStr<'_>)> {
    let tail = consume(b"T", input)?;
    if tail.peek() == Some(b'_') {
        return Ok((0, tail.advance(1)));
    }

    let (number, tail) = parse_number(10, tail)?;
    let tail = consume(b"_", tail)?;
    let idx = number.checked_add(1).ok_or(Error::Overflow)?;
    Ok((idx, tail))
}

/// ```text
/// <literal> ::= L _Z <encoding> E
///           ::= L Dn E
///           ::= L <pointer-type> 0 E
///           ::= L b <0 | 1> E
/// ```
///
/// Whatever the payload, the literal ends at the next `E`.
impl<'a> Parse<'a> for Literal<'a> {
    fn parse(
        ctx: &ParseContext<'a>,
        subs: &mut SubstitutionTable<'a>,
        input: IndexStr<'a>,
    ) -> Result<(Literal<'a>, IndexStr<'a>)> {
        try_begin_parse!(ctx);

        let tail = consume(b"L", input)?;

        let (literal, tail) = if tail.starts_with(b"_Z") {
            let (encoding, tail) = Encoding::parse(ctx, subs, tail.advance(2))?;
            (Literal::External(ctx.arena.alloc(encoding)?), tail)
        } else {
            let (ty, tail) = Type::parse(ctx, subs, tail)?;
            let nullptr = BuiltinType::Standard(StandardBuiltinType::Nullptr);
            let boolean = BuiltinType::Standard(StandardBuiltinType::Bool);

            match ty.kind {
                TypeKind::Builtin(builtin) if builtin == nullptr => (Literal::Nullptr, tail),
                _ if ty.indirection > 0 => match tail.peek() {
                    Some(b'0') => (Literal::NullPointer(ty), tail.advance(1)),
                    Some(_) => return Err(Error::UnexpectedText),
                    None => return Err(Error::UnexpectedEnd),
                },
                TypeKind::Builtin(builtin) if builtin == boolean => match tail.peek() {
                    Some(digit @ b'0'..=b'9') => {
                        let value = u64::from(digit - b'0');
                        (Literal::Integer { ty: builtin, value }, tail.advance(1))
                    }
                    Some(_) => return Err(Error::UnexpectedText),
                    None => return Err(Error::UnexpectedEnd),
                },
                TypeKind::Builtin(_) => {
                    return Err(Error::Unsupported("integer and floating point literals"));
                }
                _ => return Err(Error::Unsupported("literals of non-builtin types")),
            }
        };

        let end = tail
            .as_bytes()
            .iter()
            .position(|&c| c == b'E')
            .ok_or(Error::UnexpectedEnd)?;

        Ok((literal, tail.advance(end + 1)))
    }
}

/// Parse types until the enclosing production ends.
///
/// With `has_return` set the first type parsed is the return type.
fn parse_bare_function_type<'a>(
    ctx: &ParseContext<'a>,
    subs: &mut SubstitutionTable<'a>,
    input: IndexStr<'a>,
    has_return: bool,
) -> Result<(BareFunctionType<'a>, IndexStr<'a>)> {
    try_begin_parse!(ctx);

    let mut return_type = None;
    let mut params = Vec::new();
    let mut tail = input;

    while let Some(c) = tail.peek() {
        if c == b'E' || c == b'.' {
            break;
        }

        let (ty, rest) = Type::parse(ctx, subs, tail)?;
        if has_return && return_type.is_none() {
            return_type = Some(ty);
        } else {
            params.push(ty);
        }
        tail = rest;
    }

    let function = BareFunctionType {
        return_type,
        params: ctx.arena.alloc_slice(&params)?,
    };

    Ok((function, tail))
}

fn parse_cv_qualifiers(mut input: IndexStr<'_>) -> (CvQualifiers, IndexStr<'_>) {
    let mut cv = CvQualifiers::empty();
    loop {
        let flag = match input.peek() {
            Some(b'r') => CvQualifiers::RESTRICT,
            Some(b'V') => CvQualifiers::VOLATILE,
            Some(b'K') => CvQualifiers::CONST,
            _ => return (cv, input),
        };
        cv |= flag;
        input = input.advance(1);
    }
}

fn consume<'a>(expected: &[u8], input: IndexStr<'a>) -> Result<IndexStr<'a>> {
    match input.try_split_at(expected.len()) {
        Some((head, tail)) if head == expected => Ok(tail),
        Some(_) => Err(Error::UnexpectedText),
        None => Err(Error::UnexpectedEnd),
    }
}

/// Digits are limited to upper case letters and the decimal digits, like in `<seq-id>`s.
fn parse_number(base: u32, input: IndexStr<'_>) -> Result<(usize, IndexStr<'_>)> {
    if input.is_empty() {
        return Err(Error::UnexpectedEnd);
    }

    let num_numeric = input
        .as_bytes()
        .iter()
        .map(|&c| c as char)
        .take_while(|c| c.is_digit(base) && (c.is_numeric() || c.is_uppercase()))
        .count();
    if num_numeric == 0 {
        return Err(Error::UnexpectedText);
    }

    let (head, tail) = input.split_at(num_numeric);
    let head = head.as_str()?;

    if num_numeric > 1 && head.starts_with('0') {
        // "<number>s appearing in mangled names never have leading zeroes,
        // except for the value zero, represented as '0'."
        return Err(Error::UnexpectedText);
    }

    let number = usize::from_str_radix(head, base).map_err(|_| Error::Overflow)?;
    Ok((number, tail))
}

/// Parse everything after the `_Z` of a mangled name.
pub(crate) fn parse_mangled<'a>(
    ctx: &ParseContext<'a>,
    subs: &mut SubstitutionTable<'a>,
    input: IndexStr<'a>,
) -> Result<DemangledName<'a>> {
    let (encoding, tail) = Encoding::parse(ctx, subs, input)?;

    let vendor_suffix = match tail.peek() {
        None => None,
        Some(b'.') => Some(tail.advance(1).as_str()?),
        Some(_) => {
            log::trace!("[itanium::parse_mangled] trailing text at offset {}.", tail.index());
            return Err(Error::UnexpectedText);
        }
    };

    Ok(DemangledName::Mangled {
        encoding,
        vendor_suffix,
    })
}
