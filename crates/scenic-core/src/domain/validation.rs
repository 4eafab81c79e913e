use crate::domain::error::DomainError;

/// Centralized identifier validation.
///
/// All naming rules live here, not scattered across value objects.
pub struct IdentifierRules;

impl IdentifierRules {
    /// Validate a scene base name.
    ///
    /// Separator and whitespace checks come first so their messages win over
    /// the generic identifier message.
    pub fn check_base_name(raw: &str) -> Result<(), DomainError> {
        if raw.is_empty() {
            return Err(DomainError::invalid_name(raw, "name cannot be empty"));
        }
        if raw.contains(['/', '\\']) {
            return Err(DomainError::invalid_name(
                raw,
                "name cannot contain path separators",
            ));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(DomainError::invalid_name(raw, "name cannot contain whitespace"));
        }

        Self::identifier_violation(raw).map_err(|reason| DomainError::invalid_name(raw, reason))
    }

    /// Returns the reason `candidate` is not a type identifier, if any.
    pub fn identifier_violation(candidate: &str) -> Result<(), String> {
        let mut chars = candidate.chars();

        match chars.next() {
            None => return Err("identifier cannot be empty".into()),
            Some(first) if !is_identifier_start(first) => {
                return Err(format!(
                    "must start with a letter, '_' or '$' (found '{first}')"
                ));
            }
            Some(_) => {}
        }

        if let Some(bad) = chars.find(|c| !is_identifier_part(*c)) {
            return Err(format!("'{bad}' is not allowed in a type name"));
        }

        Ok(())
    }

    /// Like [`IdentifierRules::identifier_violation`], but also rejects
    /// reserved words, which are legal type-name prefixes but not package
    /// segments.
    pub fn package_segment_violation(segment: &str) -> Result<(), String> {
        Self::identifier_violation(segment)?;
        if RESERVED_WORDS.contains(&segment) {
            return Err(format!("'{segment}' is a reserved Java keyword"));
        }
        Ok(())
    }
}

/// Keywords and literals that cannot appear as a package segment.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "null", "package", "private", "protected", "public", "return",
    "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while", "_",
];

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
