//! Structured Go source model.
//!
//! Generated files are assembled as explicit declarations — interfaces,
//! structs, functions with statement bodies — and rendered by walking the
//! model. Every identifier that lands in the output is a typed field on one
//! of these nodes, so there is no textual template for a placeholder to go
//! stale in.
//!
//! The model covers exactly the shapes the client generator emits; it is not
//! a general Go AST.

use std::fmt::Write as _;

/// Notice prepended to every rendered file, following the Go convention for
/// machine-generated sources.
pub const GENERATED_HEADER: &str = "// Code generated by trellis-gen. DO NOT EDIT.";

/// A single Go source file.
#[derive(Debug, Clone, Default)]
pub struct GoFile {
    /// Package name.
    pub package: String,
    /// Standard-library imports, rendered as the first import group.
    pub std_imports: Vec<GoImport>,
    /// All other imports, rendered as the second group.
    pub imports: Vec<GoImport>,
    /// Top-level declarations in emission order.
    pub decls: Vec<GoDecl>,
}

/// One import line.
#[derive(Debug, Clone)]
pub struct GoImport {
    /// Optional package alias.
    pub alias: Option<String>,
    /// Import path.
    pub path: String,
}

impl GoImport {
    /// An un-aliased import.
    pub fn plain(path: impl Into<String>) -> Self {
        Self {
            alias: None,
            path: path.into(),
        }
    }

    /// An aliased import (`alias "path"`).
    pub fn aliased(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            path: path.into(),
        }
    }
}

/// A top-level declaration.
#[derive(Debug, Clone)]
pub enum GoDecl {
    /// `type Name interface { ... }`
    Interface(GoInterface),
    /// `type Name struct { ... }`
    Struct(GoStruct),
    /// `func [(recv)] Name(params) results { ... }`
    Func(GoFunc),
}

/// An interface declaration.
#[derive(Debug, Clone)]
pub struct GoInterface {
    /// Doc comment lines (without the `// ` prefix).
    pub doc: Vec<String>,
    /// Interface name.
    pub name: String,
    /// Method signatures.
    pub methods: Vec<GoSignature>,
}

/// A method signature, inside an interface or reused by a function.
#[derive(Debug, Clone)]
pub struct GoSignature {
    /// Optional single-line doc comment.
    pub doc: Option<String>,
    /// Method name.
    pub name: String,
    /// Parameters.
    pub params: Vec<GoParam>,
    /// Result types.
    pub results: Vec<String>,
}

/// A named, typed slot: function parameter, receiver, or struct field.
#[derive(Debug, Clone)]
pub struct GoParam {
    /// Name.
    pub name: String,
    /// Type.
    pub ty: String,
}

impl GoParam {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A struct declaration.
#[derive(Debug, Clone)]
pub struct GoStruct {
    /// Doc comment lines.
    pub doc: Vec<String>,
    /// Struct name.
    pub name: String,
    /// Embedded types, rendered before the fields.
    pub embeds: Vec<String>,
    /// Named fields.
    pub fields: Vec<GoParam>,
}

/// A function or method declaration.
#[derive(Debug, Clone)]
pub struct GoFunc {
    /// Doc comment lines.
    pub doc: Vec<String>,
    /// Receiver, for methods.
    pub receiver: Option<GoParam>,
    /// Function name.
    pub name: String,
    /// Parameters.
    pub params: Vec<GoParam>,
    /// Result types.
    pub results: Vec<String>,
    /// Statement body.
    pub body: Vec<GoStmt>,
}

/// A statement.
#[derive(Debug, Clone)]
pub enum GoStmt {
    /// `name := value`
    Define {
        /// Variable name.
        name: String,
        /// Initializer.
        value: GoExpr,
    },
    /// `return a, b`
    Return(Vec<GoExpr>),
}

/// An expression.
#[derive(Debug, Clone)]
pub enum GoExpr {
    /// A bare identifier or identifier path (`resp`, `ctx`).
    Ident(String),
    /// A quoted string literal.
    Str(String),
    /// A field access (`req.Id`, `c.accounts`).
    Field {
        /// Receiver identifier.
        recv: String,
        /// Field name.
        name: String,
    },
    /// A call through a dotted callee path (`s.client.Get(...)`).
    Call {
        /// Callee path.
        callee: String,
        /// Arguments.
        args: Vec<GoExpr>,
    },
    /// `fmt.Sprintf(format, args...)`
    Sprintf {
        /// Format string (already containing `%s` slots).
        format: String,
        /// Arguments, one per slot.
        args: Vec<GoExpr>,
    },
    /// A composite literal, optionally address-taken.
    Composite(GoComposite),
    /// An expression the model does not otherwise cover
    /// (`30 * time.Second`).
    Raw(String),
}

/// A composite literal.
#[derive(Debug, Clone)]
pub struct GoComposite {
    /// Literal type, e.g. `"AccountsServiceImpl"` or `"http.Client"`.
    pub ty: String,
    /// Render with a leading `&`.
    pub addr: bool,
    /// Render one field per line instead of a single line.
    pub multiline: bool,
    /// Field initializers in order.
    pub fields: Vec<(String, GoExpr)>,
}

impl GoFile {
    /// Renders the file to Go source text.
    ///
    /// Output is deterministic: the renderer only walks the vectors it is
    /// given, in order, with tab indentation throughout.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{GENERATED_HEADER}");
        out.push('\n');
        let _ = writeln!(out, "package {}", self.package);

        if !self.std_imports.is_empty() || !self.imports.is_empty() {
            out.push('\n');
            out.push_str("import (\n");
            for import in &self.std_imports {
                out.push_str(&render_import(import));
            }
            if !self.std_imports.is_empty() && !self.imports.is_empty() {
                out.push('\n');
            }
            for import in &self.imports {
                out.push_str(&render_import(import));
            }
            out.push_str(")\n");
        }

        for decl in &self.decls {
            out.push('\n');
            match decl {
                GoDecl::Interface(iface) => render_interface(&mut out, iface),
                GoDecl::Struct(st) => render_struct(&mut out, st),
                GoDecl::Func(func) => render_func(&mut out, func),
            }
        }

        out
    }
}

fn render_import(import: &GoImport) -> String {
    match &import.alias {
        Some(alias) => format!("\t{} \"{}\"\n", alias, import.path),
        None => format!("\t\"{}\"\n", import.path),
    }
}

fn render_doc(out: &mut String, doc: &[String]) {
    for line in doc {
        if line.is_empty() {
            out.push_str("//\n");
        } else {
            let _ = writeln!(out, "// {line}");
        }
    }
}

fn render_interface(out: &mut String, iface: &GoInterface) {
    render_doc(out, &iface.doc);
    let _ = writeln!(out, "type {} interface {{", iface.name);
    for sig in &iface.methods {
        if let Some(doc) = &sig.doc {
            let _ = writeln!(out, "\t// {doc}");
        }
        let _ = writeln!(
            out,
            "\t{}({}){}",
            sig.name,
            render_params(&sig.params),
            render_results(&sig.results)
        );
    }
    out.push_str("}\n");
}

fn render_struct(out: &mut String, st: &GoStruct) {
    render_doc(out, &st.doc);
    let _ = writeln!(out, "type {} struct {{", st.name);
    for embed in &st.embeds {
        let _ = writeln!(out, "\t{embed}");
    }
    for field in &st.fields {
        let _ = writeln!(out, "\t{} {}", field.name, field.ty);
    }
    out.push_str("}\n");
}

fn render_func(out: &mut String, func: &GoFunc) {
    render_doc(out, &func.doc);
    let receiver = match &func.receiver {
        Some(recv) => format!("({} {}) ", recv.name, recv.ty),
        None => String::new(),
    };
    let _ = writeln!(
        out,
        "func {}{}({}){} {{",
        receiver,
        func.name,
        render_params(&func.params),
        render_results(&func.results)
    );
    for stmt in &func.body {
        render_stmt(out, stmt, 1);
    }
    out.push_str("}\n");
}

fn render_params(params: &[GoParam]) -> String {
    params
        .iter()
        .map(|p| format!("{} {}", p.name, p.ty))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_results(results: &[String]) -> String {
    match results {
        [] => String::new(),
        [single] => format!(" {single}"),
        many => format!(" ({})", many.join(", ")),
    }
}

fn render_stmt(out: &mut String, stmt: &GoStmt, indent: usize) {
    let tabs = "\t".repeat(indent);
    match stmt {
        GoStmt::Define { name, value } => {
            let _ = writeln!(out, "{tabs}{name} := {}", render_expr(value, indent));
        }
        GoStmt::Return(values) => {
            let rendered = values
                .iter()
                .map(|v| render_expr(v, indent))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(out, "{tabs}return {rendered}");
        }
    }
}

fn render_expr(expr: &GoExpr, indent: usize) -> String {
    match expr {
        GoExpr::Ident(name) => name.clone(),
        GoExpr::Str(value) => quote_string(value),
        GoExpr::Field { recv, name } => format!("{recv}.{name}"),
        GoExpr::Call { callee, args } => {
            let rendered = args
                .iter()
                .map(|a| render_expr(a, indent))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{callee}({rendered})")
        }
        GoExpr::Sprintf { format, args } => {
            let mut rendered = vec![quote_string(format)];
            rendered.extend(args.iter().map(|a| render_expr(a, indent)));
            format!("fmt.Sprintf({})", rendered.join(", "))
        }
        GoExpr::Composite(lit) => render_composite(lit, indent),
        GoExpr::Raw(text) => text.clone(),
    }
}

fn render_composite(lit: &GoComposite, indent: usize) -> String {
    let amp = if lit.addr { "&" } else { "" };

    if lit.fields.is_empty() {
        return format!("{amp}{}{{}}", lit.ty);
    }

    if !lit.multiline {
        let fields = lit
            .fields
            .iter()
            .map(|(name, value)| format!("{name}: {}", render_expr(value, indent)))
            .collect::<Vec<_>>()
            .join(", ");
        return format!("{amp}{}{{{fields}}}", lit.ty);
    }

    let inner_tabs = "\t".repeat(indent + 1);
    let close_tabs = "\t".repeat(indent);
    let mut out = format!("{amp}{}{{\n", lit.ty);
    for (name, value) in &lit.fields {
        let _ = writeln!(
            out,
            "{inner_tabs}{name}: {},",
            render_expr(value, indent + 1)
        );
    }
    let _ = write!(out, "{close_tabs}}}");
    out
}

fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
