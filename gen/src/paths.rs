//! Path template parsing and interpolation planning.
//!
//! URL path templates use `{param}` syntax. This module extracts parameter
//! names, converts them to the PascalCase field names the generated Go code
//! reads them from, and compiles a template into an [`InterpolationPlan`] —
//! an ordered literal/slot sequence consumed by the emitter.

/// Extracts parameter names from a path template, left to right.
///
/// Duplicate names are preserved: each occurrence is substituted
/// independently at call time.
///
/// ## Examples
///
/// ```
/// use trellis_gen::paths::extract_path_params;
///
/// assert_eq!(extract_path_params("/v1/accounts"), Vec::<&str>::new());
/// assert_eq!(
///     extract_path_params("/v1/data/links/{link_id}/data/investments/{investment_id}"),
///     vec!["link_id", "investment_id"]
/// );
/// ```
pub fn extract_path_params(path: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut start = None;

    for (idx, c) in path.char_indices() {
        if c == '{' {
            start = Some(idx + 1);
        } else if c == '}' {
            if let Some(from) = start.take() {
                let param = &path[from..idx];
                if !param.is_empty() {
                    params.push(param);
                }
            }
        }
    }

    params
}

/// Converts a snake_case parameter name to the PascalCase identifier the
/// generated request type exposes.
///
/// ## Examples
///
/// ```
/// use trellis_gen::paths::snake_to_pascal;
///
/// assert_eq!(snake_to_pascal("id"), "Id");
/// assert_eq!(snake_to_pascal("investment_id"), "InvestmentId");
/// ```
pub fn snake_to_pascal(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// One piece of a compiled path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPiece {
    /// Verbatim text between placeholders.
    Literal(String),
    /// A substitution slot; slots pair positionally with
    /// [`InterpolationPlan::targets`].
    Slot,
}

/// A compiled path template: literal/slot pieces in template order plus the
/// target identifier that fills each slot.
///
/// A template where the same parameter appears twice produces two slots bound
/// to the same target identifier — each occurrence is substituted on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpolationPlan {
    /// Literal and slot pieces in left-to-right template order.
    pub pieces: Vec<PathPiece>,
    /// PascalCase field names, one per slot, in slot order.
    pub targets: Vec<String>,
}

impl InterpolationPlan {
    /// Renders the `fmt.Sprintf` format string: literals verbatim, each slot
    /// as `%s`.
    pub fn format_string(&self) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                PathPiece::Literal(text) => out.push_str(text),
                PathPiece::Slot => out.push_str("%s"),
            }
        }
        out
    }
}

/// Compiles a path template into an [`InterpolationPlan`].
///
/// Only meaningful for templates with at least one placeholder; the
/// zero-parameter case is emitted as a plain string literal and never reaches
/// this function.
///
/// ## Examples
///
/// ```
/// use trellis_gen::paths::compile_path;
///
/// let plan = compile_path("/v1/links/{link_id}/investments/{investment_id}");
/// assert_eq!(plan.targets, vec!["LinkId", "InvestmentId"]);
/// assert_eq!(plan.format_string(), "/v1/links/%s/investments/%s");
/// ```
pub fn compile_path(template: &str) -> InterpolationPlan {
    let mut pieces = Vec::new();
    let mut targets = Vec::new();
    let mut literal = String::new();
    let mut param: Option<String> = None;

    for c in template.chars() {
        match c {
            '{' => {
                // A second '{' restarts the placeholder, mirroring the
                // extractor; the abandoned prefix stays literal.
                if let Some(pending) = param.take() {
                    literal.push('{');
                    literal.push_str(&pending);
                }
                param = Some(String::new());
            }
            '}' => match param.take() {
                Some(name) if !name.is_empty() => {
                    if !literal.is_empty() {
                        pieces.push(PathPiece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(PathPiece::Slot);
                    targets.push(snake_to_pascal(&name));
                }
                // Empty placeholder: keep it as literal text, matching the
                // extractor's behavior of ignoring it.
                Some(_) => literal.push_str("{}"),
                None => literal.push('}'),
            },
            c => match &mut param {
                Some(name) => name.push(c),
                None => literal.push(c),
            },
        }
    }

    // An unterminated placeholder is treated as literal text.
    if let Some(name) = param {
        literal.push('{');
        literal.push_str(&name);
    }
    if !literal.is_empty() {
        pieces.push(PathPiece::Literal(literal));
    }

    InterpolationPlan { pieces, targets }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_no_params() {
        assert_eq!(extract_path_params("/v1/accounts"), Vec::<&str>::new());
        assert_eq!(extract_path_params("/"), Vec::<&str>::new());
    }

    #[test]
    fn extract_single_param() {
        assert_eq!(extract_path_params("/v1/accounts/{id}"), vec!["id"]);
        assert_eq!(extract_path_params("/{id}"), vec!["id"]);
    }

    #[test]
    fn extract_multiple_params_in_order() {
        assert_eq!(
            extract_path_params("/v1/data/links/{link_id}/data/investments/{investment_id}"),
            vec!["link_id", "investment_id"]
        );
    }

    #[test]
    fn extract_preserves_duplicates() {
        assert_eq!(
            extract_path_params("/v1/{id}/children/{id}"),
            vec!["id", "id"]
        );
    }

    #[test]
    fn extract_ignores_empty_placeholder() {
        assert_eq!(extract_path_params("/v1/{}/x/{id}"), vec!["id"]);
    }

    #[test]
    fn pascal_conversion() {
        assert_eq!(snake_to_pascal("id"), "Id");
        assert_eq!(snake_to_pascal("link_id"), "LinkId");
        assert_eq!(snake_to_pascal("investment_id"), "InvestmentId");
        assert_eq!(snake_to_pascal("a_b_c"), "ABC");
        assert_eq!(snake_to_pascal(""), "");
    }

    #[test]
    fn compile_single_param() {
        let plan = compile_path("/v1/accounts/{id}");
        assert_eq!(
            plan.pieces,
            vec![
                PathPiece::Literal("/v1/accounts/".to_string()),
                PathPiece::Slot,
            ]
        );
        assert_eq!(plan.targets, vec!["Id"]);
        assert_eq!(plan.format_string(), "/v1/accounts/%s");
    }

    #[test]
    fn compile_trailing_literal() {
        let plan = compile_path("/users/{user_id}/profile");
        assert_eq!(plan.targets, vec!["UserId"]);
        assert_eq!(plan.format_string(), "/users/%s/profile");
    }

    #[test]
    fn compile_duplicate_param_gets_two_slots() {
        let plan = compile_path("/v1/{id}/children/{id}");
        let slots = plan
            .pieces
            .iter()
            .filter(|p| matches!(p, PathPiece::Slot))
            .count();
        assert_eq!(slots, 2);
        assert_eq!(plan.targets, vec!["Id", "Id"]);
        assert_eq!(plan.format_string(), "/v1/%s/children/%s");
    }

    #[test]
    fn compile_consecutive_params() {
        let plan = compile_path("/{a}/{b}");
        assert_eq!(plan.targets, vec!["A", "B"]);
        assert_eq!(plan.format_string(), "/%s/%s");
    }

    #[test]
    fn compile_restarts_placeholder_on_second_brace() {
        // Degenerate input: the abandoned "{a" prefix stays literal, and the
        // compiled slots agree with what extract_path_params sees.
        assert_eq!(extract_path_params("/x/{a{b}"), vec!["b"]);
        let plan = compile_path("/x/{a{b}");
        assert_eq!(plan.targets, vec!["B"]);
        assert_eq!(plan.format_string(), "/x/{a%s");
    }

    #[test]
    fn compile_keeps_unterminated_placeholder_as_literal() {
        let plan = compile_path("/v1/{id");
        assert!(plan.targets.is_empty());
        assert_eq!(plan.format_string(), "/v1/{id");
    }
}
