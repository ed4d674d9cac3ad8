//! Rule-based person extraction.
//!
//! A [`ProfileExtractor`] runs an ordered table of [`PatternRule`]s over
//! normalized article text. Each rule is a regex plus a description of which
//! named groups it captures and what to fill in for the ones it does not.
//! Every rule sees the whole text, so one mention usually yields several
//! candidates; [`deduplicate`](crate::deduplicate) collapses them.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::normalize::normalize_text;
use crate::profile::{AFFILIATED_ROLE, DEFAULT_COMPANY, DEFAULT_ROLE, NO_QUOTE, Profile};
use crate::{NewsnexError, Result};

/// Two or more capitalized words.
const NAME: &str = r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+";

/// One or more capitalized tokens, allowing `&`, apostrophes, hyphens and digits.
const COMPANY: &str = r"[A-Z][\w&'-]*(?:\s+[A-Z][\w&'-]*)*";

/// First word of a titled-affiliation role: any word except "who", which
/// introduces the who-at shape instead.
const ROLE_HEAD: &str = r"(?:[A-VX-Za-vx-z][\w&/'-]*|[Ww](?:[A-Za-gi-z0-9_&/'-][\w&/'-]*|[Hh](?:[A-Za-np-z0-9_&/'-][\w&/'-]*|[Oo][\w&/'-]+)?)?)";

/// Words that make a post-name phrase read as a job title.
const TITLE_KEYWORDS: &[&str] = &[
    "ceo",
    "cto",
    "cfo",
    "coo",
    "cmo",
    "founder",
    "co-founder",
    "director",
    "manager",
    "head",
    "lead",
    "president",
    "vice president",
    "vp",
    "chair",
    "chairman",
    "chairwoman",
    "chief",
    "officer",
    "executive",
    "partner",
    "analyst",
    "economist",
    "professor",
    "researcher",
    "scientist",
    "engineer",
    "spokesperson",
    "spokesman",
    "spokeswoman",
    "editor",
    "secretary",
    "minister",
    "senator",
    "governor",
    "mayor",
    "adviser",
    "advisor",
    "consultant",
    "strategist",
    "owner",
    "principal",
    "specialist",
    "expert",
];

/// Brand and product terms that look like names to the capitalization heuristic.
pub const BRAND_TERMS: &[&str] = &[
    "galaxy",
    "iphone",
    "ipad",
    "pixel",
    "samsung",
    "huawei",
    "xiaomi",
    "oneplus",
    "motorola",
    "nokia",
    "xperia",
    "ultra",
    "pro max",
    "macbook",
    "airpods",
    "android",
    "playstation",
    "xbox",
    "surface pro",
    "redmi",
    "realme",
];

static DEFAULT_EXTRACTOR: LazyLock<ProfileExtractor> = LazyLock::new(|| {
    ProfileExtractor::new(ExtractorConfig::default()).expect("built-in rule table is valid")
});

/// The shape of mention a rule recognizes, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleKind {
    /// "Jane Doe, CEO of Acme Corp"
    TitledAffiliation,
    /// "Jane Doe, who leads research at Acme Corp"
    WhoAt,
    /// "Jane Doe, chief economist"
    Titled,
    /// "Jane Doe of Acme Corp"
    Affiliated,
    /// "according to Jane Doe", "Jane Doe said", `"...," said Jane Doe`
    Attributed,
    /// Any run of capitalized words
    BareName,
}

impl RuleKind {
    /// Lower is more structured. Breaks ties between candidates at the same position.
    pub fn priority(&self) -> u8 {
        match self {
            Self::TitledAffiliation => 1,
            Self::WhoAt => 2,
            Self::Titled => 3,
            Self::Affiliated => 4,
            Self::Attributed => 5,
            Self::BareName => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TitledAffiliation => "titled-affiliation",
            Self::WhoAt => "who-at",
            Self::Titled => "titled",
            Self::Affiliated => "affiliated",
            Self::Attributed => "attributed",
            Self::BareName => "bare-name",
        }
    }
}

/// A profile field a rule can capture through a named regex group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Role,
    Company,
    Quote,
}

impl Field {
    /// Name of the regex group that captures this field.
    pub fn group_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Role => "role",
            Self::Company => "company",
            Self::Quote => "quote",
        }
    }
}

/// One entry of the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRule {
    pub kind: RuleKind,
    /// Regex with a named group per declared field
    pub pattern: String,
    /// Fields the pattern captures; must include [`Field::Name`]
    pub fields: Vec<Field>,
    /// Confidence assigned to every candidate this rule produces (0-100)
    pub confidence: u8,
    /// Role used when [`Field::Role`] is not declared
    pub default_role: String,
    /// Company used when [`Field::Company`] is not declared
    pub default_company: String,
}

impl PatternRule {
    pub fn new(kind: RuleKind, pattern: impl Into<String>, fields: &[Field], confidence: u8) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
            fields: fields.to_vec(),
            confidence,
            default_role: DEFAULT_ROLE.to_string(),
            default_company: DEFAULT_COMPANY.to_string(),
        }
    }

    pub fn with_default_role(mut self, role: impl Into<String>) -> Self {
        self.default_role = role.into();
        self
    }

    pub fn with_default_company(mut self, company: impl Into<String>) -> Self {
        self.default_company = company.into();
        self
    }
}

/// The built-in rule table, most structured first.
pub fn default_rules() -> Vec<PatternRule> {
    use Field::*;

    let titles = TITLE_KEYWORDS.iter().map(|t| regex::escape(t)).collect::<Vec<_>>().join("|");

    vec![
        PatternRule::new(
            RuleKind::TitledAffiliation,
            format!(
                r"(?P<name>{NAME}),\s+(?:the\s+)?(?P<role>{ROLE_HEAD}(?:\s+[\w&/'-]+){{0,5}}?)\s+(?:of|at)\s+(?P<company>{COMPANY})"
            ),
            &[Name, Role, Company],
            95,
        ),
        PatternRule::new(
            RuleKind::WhoAt,
            format!(r"(?P<name>{NAME}),\s+who\s+(?P<role>[^,.!?]+?)\s+at\s+(?P<company>{COMPANY})"),
            &[Name, Role, Company],
            95,
        ),
        PatternRule::new(
            RuleKind::Titled,
            format!(r"(?P<name>{NAME}),\s+(?:the\s+|an?\s+)?(?P<role>[^,.!?]*?\b(?i:{titles})\b[^,.!?]*)"),
            &[Name, Role],
            90,
        ),
        PatternRule::new(
            RuleKind::Affiliated,
            format!(r"(?P<name>{NAME})\s+of\s+(?P<company>{COMPANY})"),
            &[Name, Company],
            90,
        )
        .with_default_role(AFFILIATED_ROLE),
        PatternRule::new(RuleKind::Attributed, format!(r"(?i:according\s+to)\s+(?P<name>{NAME})"), &[Name], 85),
        PatternRule::new(
            RuleKind::Attributed,
            format!(r"(?P<name>{NAME})\s+(?:said|says|told|added|explained|noted|stated)\b"),
            &[Name],
            85,
        ),
        PatternRule::new(
            RuleKind::Attributed,
            format!(r#"["“](?P<quote>[^"”]+)["”]\s*,?\s*(?:said|says|told|added)\s+(?P<name>{NAME})"#),
            &[Name, Quote],
            85,
        ),
        PatternRule::new(RuleKind::Attributed, format!(r#"["“](?P<name>{NAME})["”]"#), &[Name], 85),
        PatternRule::new(RuleKind::BareName, format!(r"(?P<name>{NAME})"), &[Name], 85),
    ]
}

/// Configuration for profile extraction
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Rules applied in order
    pub rules: Vec<PatternRule>,
    /// Case-insensitive substrings that disqualify a name
    pub brand_terms: Vec<String>,
    /// Quote used when no sentence can be attributed
    pub quote_placeholder: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            brand_terms: BRAND_TERMS.iter().map(|t| t.to_string()).collect(),
            quote_placeholder: NO_QUOTE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    rule: PatternRule,
    regex: Regex,
}

impl CompiledRule {
    fn compile(rule: PatternRule) -> Result<Self> {
        let invalid = |reason: String| NewsnexError::InvalidRule { rule: rule.kind.label().to_string(), reason };

        if !rule.fields.contains(&Field::Name) {
            return Err(invalid("rule does not capture a name".to_string()));
        }

        let regex = Regex::new(&rule.pattern)?;
        let groups: HashSet<&str> = regex.capture_names().flatten().collect();
        if let Some(missing) = rule.fields.iter().find(|f| !groups.contains(f.group_name())) {
            return Err(invalid(format!("pattern has no `{}` group", missing.group_name())));
        }

        Ok(Self { rule, regex })
    }

    fn declares(&self, field: Field) -> bool {
        self.rule.fields.contains(&field)
    }
}

/// A profile plus where it was found, used for ordering.
#[derive(Debug)]
struct Candidate {
    position: usize,
    priority: u8,
    profile: Profile,
}

/// A compiled [`ExtractorConfig`].
///
/// # Example
///
/// ```rust
/// use newsnex_core::ProfileExtractor;
///
/// let extractor = ProfileExtractor::default();
/// let candidates = extractor.extract("Jane Doe, CEO of Acme Corp, said the deal was final.");
///
/// assert_eq!(candidates[0].name, "Jane Doe");
/// assert_eq!(candidates[0].role, "CEO");
/// assert_eq!(candidates[0].company, "Acme Corp");
/// assert_eq!(candidates[0].confidence, 95);
/// ```
#[derive(Debug, Clone)]
pub struct ProfileExtractor {
    rules: Vec<CompiledRule>,
    brand_terms: Vec<String>,
    quote_placeholder: String,
}

impl ProfileExtractor {
    /// Compiles and validates a rule table.
    ///
    /// # Errors
    ///
    /// [`NewsnexError::InvalidPattern`] for a regex that does not compile and
    /// [`NewsnexError::InvalidRule`] for a rule that does not declare a name or
    /// lacks a named group for a declared field.
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let rules = config.rules.into_iter().map(CompiledRule::compile).collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            brand_terms: config.brand_terms.iter().map(|t| t.to_lowercase()).collect(),
            quote_placeholder: config.quote_placeholder,
        })
    }

    /// Extracts candidate profiles in order of appearance.
    ///
    /// Candidates for the same position are ordered most structured rule
    /// first. Duplicates are expected; see [`deduplicate`](crate::deduplicate).
    pub fn extract(&self, text: &str) -> Vec<Profile> {
        let text = normalize_text(text);
        if text.is_empty() {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        for rule in &self.rules {
            for caps in rule.regex.captures_iter(&text) {
                match self.candidate(rule, &caps, &text) {
                    Ok(candidate) if self.is_brand(&candidate.profile.name) => {
                        trace!(name = candidate.profile.name.as_str(), "rejecting product name");
                    }
                    Ok(candidate) => {
                        trace!(
                            rule = rule.rule.kind.label(),
                            name = candidate.profile.name.as_str(),
                            position = candidate.position,
                            "candidate"
                        );
                        candidates.push(candidate);
                    }
                    Err(field) => {
                        debug!(rule = rule.rule.kind.label(), group = field.group_name(), "skipping incomplete match");
                    }
                }
            }
        }

        candidates.sort_by_key(|c| (c.position, c.priority));
        debug!(candidates = candidates.len(), "extracted candidates");

        candidates.into_iter().map(|c| c.profile).collect()
    }

    /// Builds a candidate from one match, or names the first declared field
    /// that is missing or blank.
    fn candidate(&self, rule: &CompiledRule, caps: &Captures<'_>, text: &str) -> std::result::Result<Candidate, Field> {
        let capture = |field: Field| {
            caps.name(field.group_name()).filter(|m| !m.as_str().trim().is_empty()).ok_or(field)
        };

        let name = capture(Field::Name)?;

        let role = if rule.declares(Field::Role) {
            capture(Field::Role)?.as_str().trim().to_string()
        } else {
            rule.rule.default_role.clone()
        };

        let company = if rule.declares(Field::Company) {
            capture(Field::Company)?.as_str().trim().to_string()
        } else {
            rule.rule.default_company.clone()
        };

        let quote = if rule.declares(Field::Quote) {
            let quote = capture(Field::Quote)?.as_str();
            quote.trim().trim_end_matches(|c: char| c == ',' || c.is_whitespace()).to_string()
        } else {
            self.sentence_from(text, name.start(), name.end())
        };

        Ok(Candidate {
            position: name.start(),
            priority: rule.rule.kind.priority(),
            profile: Profile {
                name: name.as_str().trim().to_string(),
                role,
                company,
                quote,
                confidence: rule.rule.confidence,
            },
        })
    }

    /// Text from the name to the next sentence terminator, inclusive.
    fn sentence_from(&self, text: &str, start: usize, end: usize) -> String {
        match text[end..].find(['.', '!', '?']) {
            Some(offset) => text[start..=end + offset].to_string(),
            None => self.quote_placeholder.clone(),
        }
    }

    fn is_brand(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.brand_terms.iter().any(|term| name.contains(term.as_str()))
    }
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        DEFAULT_EXTRACTOR.clone()
    }
}

/// Extracts candidate profiles with the built-in rule table.
pub fn extract_profiles(text: &str) -> Vec<Profile> {
    DEFAULT_EXTRACTOR.extract(text)
}
