//! Abstract syntax tree types for mangled symbols.
//!
//! Every node lives in an [`Arena`](super::Arena) or borrows from the mangled input, so the
//! whole tree is `Copy` and shares the lifetime of those two.

use super::index_str::IndexStr;

/// Define a "vocabulary" nonterminal, something like `CtorDtorName` or
/// `StandardBuiltinType` that's basically a big list of constant strings.
///
/// This declares:
///
/// - the enum itself
/// - `parse_prefix`, matching a mangled spelling at the start of some input
/// - `printable`, the text it renders as
macro_rules! define_vocabulary {
    ( $(#[$attr:meta])* pub enum $typename:ident {
        $($variant:ident ( $mangled:expr, $printable:expr )),* $(,)?
    } ) => {

        $(#[$attr])*
        pub enum $typename {
            $(
                #[doc=$printable]
                $variant
            ),*
        }

        impl $typename {
            pub(crate) fn parse_prefix(input: IndexStr<'_>) -> Option<($typename, IndexStr<'_>)> {
                $(
                    if input.starts_with($mangled) {
                        return Some(($typename::$variant, input.advance($mangled.len())));
                    }
                )*

                None
            }

            #[inline]
            pub fn printable(&self) -> &'static str {
                match *self {
                    $($typename::$variant => $printable),*
                }
            }
        }
    };
}

define_vocabulary! {
    /// Labels given to the special member functions, after the variant the compiler emitted.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum CtorDtorName {
        CompleteConstructor             (b"C1", "ctor"),
        BaseConstructor                 (b"C2", "boctor"),
        CompleteAllocatingConstructor   (b"C3", "coactor"),
        DeletingDestructor              (b"D0", "dtor"),
        CompleteDestructor              (b"D1", "codtor"),
        BaseDestructor                  (b"D2", "bodtor"),
    }
}

define_vocabulary! {
    /// The `S<letter>` abbreviations for names in the standard library.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum WellKnownComponent {
        Std             (b"St", "std"),
        StdAllocator    (b"Sa", "std::allocator"),
        StdBasicString  (b"Sb", "std::basic_string"),
        StdString       (
            b"Ss",
            "std::basic_string<char, std::char_traits<char>, std::allocator<char>>"
        ),
        StdIstream      (b"Si", "std::basic_istream<char, std::char_traits<char>>"),
        StdOstream      (b"So", "std::basic_ostream<char, std::char_traits<char>>"),
        StdIostream     (b"Sd", "std::basic_iostream<char, std::char_traits<char>>"),
    }
}

define_vocabulary! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub enum StandardBuiltinType {
        Void             (b"v",  "void"),
        Wchar            (b"w",  "wchar_t"),
        Bool             (b"b",  "bool"),
        Char             (b"c",  "char"),
        SignedChar       (b"a",  "signed char"),
        UnsignedChar     (b"h",  "unsigned char"),
        Short            (b"s",  "short"),
        UnsignedShort    (b"t",  "unsigned short"),
        Int              (b"i",  "int"),
        UnsignedInt      (b"j",  "unsigned"),
        Long             (b"l",  "long"),
        UnsignedLong     (b"m",  "unsigned long"),
        LongLong         (b"x",  "long long"),
        UnsignedLongLong (b"y",  "unsigned long long"),
        Int128           (b"n",  "__int128"),
        Uint128          (b"o",  "unsigned __int128"),
        Float            (b"f",  "float"),
        Double           (b"d",  "double"),
        LongDouble       (b"e",  "long double"),
        Float128         (b"g",  "__float128"),
        Ellipsis         (b"z",  "..."),
        DecimalFloat64   (b"Dd", "decimal64"),
        DecimalFloat128  (b"De", "decimal128"),
        DecimalFloat32   (b"Df", "decimal32"),
        DecimalFloat16   (b"Dh", "half"),
        Char32           (b"Di", "char32_t"),
        Char16           (b"Ds", "char16_t"),
        Char8            (b"Du", "char8_t"),
        Auto             (b"Da", "auto"),
        DecltypeAuto     (b"Dc", "decltype(auto)"),
        Nullptr          (b"Dn", "nullptr_t"),
    }
}

bitflags::bitflags! {
    /// `const`, `volatile` and `restrict`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CvQualifiers: u8 {
        const RESTRICT = 1 << 0;
        const VOLATILE = 1 << 1;
        const CONST = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RefQualifier {
    #[default]
    None,
    LValue,
    RValue,
}

/// One `::`-separated piece of a qualified name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component<'a> {
    /// A length-prefixed identifier, borrowed from the mangled input.
    Source(&'a str),
    WellKnown(WellKnownComponent),
    CtorDtor(CtorDtorName),
}

/// A template argument list and where in a qualified name it belongs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateArgs<'a> {
    pub args: &'a [TemplateArg<'a>],
    /// Number of components the argument list follows.
    pub attached_after: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    pub components: &'a [Component<'a>],
    pub cv: CvQualifiers,
    pub ref_qualifier: RefQualifier,
    /// Every argument list of the name, in the order they were encoded.
    pub template_args: &'a [TemplateArgs<'a>],
}

impl<'a> QualifiedName<'a> {
    /// Whether the name's final component is a constructor or destructor label.
    pub fn is_ctor_dtor(&self) -> bool {
        matches!(self.components.last(), Some(Component::CtorDtor(_)))
    }

    /// The arguments following the final component, which `T_` references in the
    /// entity's signature resolve against.
    pub fn trailing_args(&self) -> Option<&'a [TemplateArg<'a>]> {
        self.template_args
            .last()
            .filter(|args| args.attached_after == self.components.len())
            .map(|args| args.args)
    }

    /// Whether this names a function template instance, which makes the compiler encode the
    /// function's return type in front of its parameters.
    pub fn is_template_function(&self) -> bool {
        self.trailing_args().is_some() && !self.is_ctor_dtor()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinType {
    Standard(StandardBuiltinType),
    /// `_Float<N>`.
    Float(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKind<'a> {
    Builtin(BuiltinType),
    Qualified(QualifiedName<'a>),
    /// Index into the enclosing function's template arguments.
    TemplateParam(usize),
    PackExpansion(&'a Type<'a>),
    FunctionPointer(&'a BareFunctionType<'a>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Type<'a> {
    pub kind: TypeKind<'a>,
    /// Number of pointer levels.
    pub indirection: u32,
    pub ref_qualifier: RefQualifier,
    pub cv: CvQualifiers,
}

impl<'a> Type<'a> {
    pub fn new(kind: TypeKind<'a>) -> Self {
        Self {
            kind,
            indirection: 0,
            ref_qualifier: RefQualifier::None,
            cv: CvQualifiers::empty(),
        }
    }

    pub fn is_void(&self) -> bool {
        self.kind == TypeKind::Builtin(BuiltinType::Standard(StandardBuiltinType::Void))
            && self.indirection == 0
            && self.ref_qualifier == RefQualifier::None
            && self.cv.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Literal<'a> {
    Integer { ty: BuiltinType, value: u64 },
    Nullptr,
    /// A null pointer of the given pointer type.
    NullPointer(Type<'a>),
    /// The address of another entity, which is referred to by its own mangled name.
    External(&'a Encoding<'a>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateArg<'a> {
    Name(QualifiedName<'a>),
    Literal(Literal<'a>),
    Type(Type<'a>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BareFunctionType<'a> {
    pub return_type: Option<Type<'a>>,
    pub params: &'a [Type<'a>],
}

impl<'a> BareFunctionType<'a> {
    /// Whether no types were encoded at all, which is the case for data symbols.
    pub fn is_empty(&self) -> bool {
        self.return_type.is_none() && self.params.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encoding<'a> {
    pub name: QualifiedName<'a>,
    pub signature: BareFunctionType<'a>,
}

/// Result of decoding a single symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemangledName<'a> {
    /// Anything that isn't an Itanium mangled name is kept as is.
    Plain(&'a str),
    Mangled {
        encoding: Encoding<'a>,
        /// Text after a `.` following the encoding, e.g. `cold` or `isra.0`.
        vendor_suffix: Option<&'a str>,
    },
}
