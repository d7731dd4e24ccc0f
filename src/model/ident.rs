use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

static UUID_RE: OnceLock<Regex> = OnceLock::new();

/// Identifier in canonical UUID form, as issued by the darts service.
///
/// Player and match ids arrive as query parameters; anything that does not
/// look like a UUID is rejected before it reaches the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident(String);

impl Ident {
    #[must_use]
    pub fn new(input: &str) -> Option<Self> {
        let re = UUID_RE.get_or_init(|| {
            Regex::new(
                r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
            )
            .unwrap()
        });
        if re.is_match(input) {
            Some(Ident(input.to_string()))
        } else {
            None
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if `input` is not a canonical UUID string.
    pub fn parse(input: &str) -> Result<Self, String> {
        Self::new(input).ok_or_else(|| format!("invalid id: {input}"))
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Ident {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
