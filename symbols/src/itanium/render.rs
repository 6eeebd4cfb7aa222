//! Rendering of the AST into colored tokens.

use super::ast::*;
use crate::colors::Colors;
use crate::TokenStream;

use std::fmt;
use tokenizing::{Color, ColorScheme};

/// Common state that is required when demangling a mangled symbol's parsed AST.
pub(crate) struct DemangleContext<'a> {
    pub(crate) stream: TokenStream,
    /// Template arguments `T_` references resolve against.
    template_args: Option<&'a [TemplateArg<'a>]>,
}

impl<'a> DemangleContext<'a> {
    pub(crate) fn new() -> Self {
        Self {
            stream: TokenStream::new(),
            template_args: None,
        }
    }

    #[inline]
    fn push(&mut self, text: &'static str, color: &'static Color) {
        self.stream.push(text, color);
    }

    #[inline]
    fn push_owned(&mut self, text: String, color: &'static Color) {
        self.stream.push_string(text, color);
    }

    fn push_list<T: Demangle<'a>>(&mut self, items: &[T]) {
        for (idx, item) in items.iter().enumerate() {
            if idx != 0 {
                self.push(", ", Colors::delimiter());
            }
            item.demangle(self);
        }
    }
}

/// Any AST node that can be printed in a demangled form.
pub(crate) trait Demangle<'a> {
    fn demangle(&self, ctx: &mut DemangleContext<'a>);
}

impl<'a> Demangle<'a> for Component<'a> {
    fn demangle(&self, ctx: &mut DemangleContext<'a>) {
        match *self {
            Component::Source(ident) => ctx.push_owned(ident.to_string(), Colors::item()),
            Component::WellKnown(well_known) => ctx.push(well_known.printable(), Colors::known()),
            Component::CtorDtor(name) => ctx.push(name.printable(), Colors::special()),
        }
    }
}

impl<'a> Demangle<'a> for TemplateArgs<'a> {
    fn demangle(&self, ctx: &mut DemangleContext<'a>) {
        ctx.push("<", Colors::brackets());
        ctx.push_list(self.args);
        ctx.push(">", Colors::brackets());
    }
}

fn demangle_cv(ctx: &mut DemangleContext<'_>, cv: CvQualifiers) {
    if cv.contains(CvQualifiers::CONST) {
        ctx.push("const ", Colors::annotation());
    }
    if cv.contains(CvQualifiers::VOLATILE) {
        ctx.push("volatile ", Colors::annotation());
    }
    if cv.contains(CvQualifiers::RESTRICT) {
        ctx.push("restrict ", Colors::annotation());
    }
}

fn demangle_ref(ctx: &mut DemangleContext<'_>, ref_qualifier: RefQualifier) {
    match ref_qualifier {
        RefQualifier::None => {}
        RefQualifier::LValue => ctx.push("&", Colors::special()),
        RefQualifier::RValue => ctx.push("&&", Colors::special()),
    }
}

impl<'a> Demangle<'a> for QualifiedName<'a> {
    fn demangle(&self, ctx: &mut DemangleContext<'a>) {
        demangle_cv(ctx, self.cv);
        demangle_ref(ctx, self.ref_qualifier);

        let last = self.components.len().max(1);

        for (idx, component) in self.components.iter().enumerate() {
            if idx != 0 {
                ctx.push("::", Colors::delimiter());
            }

            component.demangle(ctx);

            // a list in front of every component is printed after the first one
            for args in self.template_args {
                if args.attached_after.clamp(1, last) == idx + 1 {
                    args.demangle(ctx);
                }
            }
        }
    }
}

impl<'a> Demangle<'a> for BuiltinType {
    fn demangle(&self, ctx: &mut DemangleContext<'a>) {
        match *self {
            BuiltinType::Standard(builtin) => ctx.push(builtin.printable(), Colors::known()),
            BuiltinType::Float(width) => ctx.push_owned(format!("_Float{width}"), Colors::known()),
        }
    }
}

impl<'a> Demangle<'a> for Type<'a> {
    fn demangle(&self, ctx: &mut DemangleContext<'a>) {
        demangle_cv(ctx, self.cv);

        match self.kind {
            TypeKind::Builtin(builtin) => builtin.demangle(ctx),
            TypeKind::Qualified(name) => name.demangle(ctx),
            TypeKind::TemplateParam(idx) => {
                match ctx.template_args.and_then(|args| args.get(idx)) {
                    Some(arg) => {
                        // an argument can't refer to the list it's part of
                        let scope = ctx.template_args.take();
                        arg.demangle(ctx);
                        ctx.template_args = scope;
                    }
                    None if idx == 0 => ctx.push("T_", Colors::comment()),
                    None => ctx.push_owned(format!("T{}_", idx - 1), Colors::comment()),
                }
            }
            TypeKind::PackExpansion(inner) => {
                inner.demangle(ctx);
                ctx.push("...", Colors::special());
            }
            TypeKind::FunctionPointer(function) => {
                if let Some(return_type) = function.return_type {
                    return_type.demangle(ctx);
                    ctx.push(" ", Colors::spacing());
                }

                if self.indirection > 0 {
                    ctx.push("(", Colors::brackets());
                    for _ in 0..self.indirection {
                        ctx.push("*", Colors::special());
                    }
                    ctx.push(")", Colors::brackets());
                }

                demangle_params(ctx, function.params);
                demangle_ref(ctx, self.ref_qualifier);
                return;
            }
        }

        for _ in 0..self.indirection {
            ctx.push("*", Colors::special());
        }

        demangle_ref(ctx, self.ref_qualifier);
    }
}

impl<'a> Demangle<'a> for Literal<'a> {
    fn demangle(&self, ctx: &mut DemangleContext<'a>) {
        match *self {
            Literal::Integer { ty, value } => {
                if ty == BuiltinType::Standard(StandardBuiltinType::Bool) {
                    let text = if value == 0 { "false" } else { "true" };
                    ctx.push(text, Colors::expr());
                } else {
                    ctx.push_owned(value.to_string(), Colors::expr());
                }
            }
            Literal::Nullptr => ctx.push("nullptr", Colors::expr()),
            Literal::NullPointer(ty) => {
                ctx.push("(", Colors::brackets());
                ty.demangle(ctx);
                ctx.push(")", Colors::brackets());
                ctx.push("0", Colors::expr());
            }
            Literal::External(encoding) => encoding.name.demangle(ctx),
        }
    }
}

impl<'a> Demangle<'a> for TemplateArg<'a> {
    fn demangle(&self, ctx: &mut DemangleContext<'a>) {
        match self {
            TemplateArg::Name(name) => name.demangle(ctx),
            TemplateArg::Literal(literal) => literal.demangle(ctx),
            TemplateArg::Type(ty) => ty.demangle(ctx),
        }
    }
}

/// Parameter lists consisting of only `void` are printed as `()`.
fn demangle_params<'a>(ctx: &mut DemangleContext<'a>, params: &[Type<'a>]) {
    ctx.push("(", Colors::brackets());
    if !matches!(params, [only] if only.is_void()) {
        ctx.push_list(params);
    }
    ctx.push(")", Colors::brackets());
}

impl<'a> Demangle<'a> for Encoding<'a> {
    fn demangle(&self, ctx: &mut DemangleContext<'a>) {
        let scope = ctx.template_args;
        ctx.template_args = self.name.template_args.last().map(|args| args.args);

        if let Some(return_type) = self.signature.return_type {
            return_type.demangle(ctx);
            ctx.push(" ", Colors::spacing());
        }

        self.name.demangle(ctx);

        if !self.signature.is_empty() {
            demangle_params(ctx, self.signature.params);
        }

        ctx.template_args = scope;
    }
}

impl<'a> Demangle<'a> for DemangledName<'a> {
    fn demangle(&self, ctx: &mut DemangleContext<'a>) {
        match *self {
            DemangledName::Plain(text) => {
                ctx.push_owned(text.to_string(), Colors::item());
                ctx.push("()", Colors::brackets());
            }
            DemangledName::Mangled {
                encoding,
                vendor_suffix,
            } => {
                encoding.demangle(ctx);

                if let Some(suffix) = vendor_suffix {
                    ctx.push(" [clone .", Colors::comment());
                    ctx.push_owned(suffix.to_string(), Colors::comment());
                    ctx.push("]", Colors::comment());
                }
            }
        }
    }
}

impl DemangledName<'_> {
    /// Render the name as colored tokens.
    pub fn tokens(&self) -> TokenStream {
        let mut ctx = DemangleContext::new();
        self.demangle(&mut ctx);
        ctx.stream
    }
}

impl fmt::Display for DemangledName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.tokens(), f)
    }
}
