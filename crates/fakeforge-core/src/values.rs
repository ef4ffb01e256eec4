//! The value-resolution engine.
//!
//! [`FakeValues`] ties the pieces together:
//!
//! ```text
//!   LocaleData ──▶ fetch ────────▶ random list element
//!        │
//!        └──────▶ resolve ──────▶ template with #{...} spans expanded
//!                    │                 │
//!                    │                 └─ dispatches through Registry,
//!                    │                    operations may re-enter resolve
//!                    └──────▶ composite ▶ ordered ops joined by a separator
//! ```
//!
//! Resolution is one level deep per call: the scan never re-examines text an
//! operation produced. Nesting works because invoked operations call
//! `resolve` or `composite` again for their own data, and a shared depth
//! counter caps how far that re-entry can go.

use crate::dataset::LocaleData;
use crate::error::ForgeError;
use crate::pattern;
use crate::random::RandomService;
use crate::registry::{to_camel_case, Registry};

/// Resolution depth at which a dataset is declared cyclic.
const MAX_RESOLVE_DEPTH: usize = 64;

/// Resolution engine: locale data plus a random source.
///
/// Every generating call takes `&mut self` (the random source advances), so
/// an instance is confined to one thread. The registry stays outside the
/// engine and is passed in per call, which lets operations dispatch to each
/// other while the engine is mutably borrowed.
#[derive(Debug)]
pub struct FakeValues {
    data: LocaleData,
    random: RandomService,
    depth: usize,
}

impl FakeValues {
    /// Create an engine over a loaded locale dataset.
    pub fn new(data: LocaleData, random: RandomService) -> Self {
        Self {
            data,
            random,
            depth: 0,
        }
    }

    /// The locale dataset this engine draws from.
    pub fn data(&self) -> &LocaleData {
        &self.data
    }

    /// The engine's random source.
    pub fn random(&mut self) -> &mut RandomService {
        &mut self.random
    }

    /// Replace the random source, e.g. to reseed for reproducible output.
    pub fn set_random(&mut self, random: RandomService) {
        self.random = random;
    }

    /// The locale code of the underlying dataset.
    pub fn locale(&self) -> &str {
        self.data.locale()
    }

    /// Draw a uniformly random element from the string list at `key`.
    pub fn fetch(&mut self, key: &str) -> Result<String, ForgeError> {
        let list = self.data.get_list(key)?;
        if list.is_empty() {
            return Err(ForgeError::WrongValueShape {
                key: key.to_string(),
                expected: "a non-empty list",
                found: "an empty list",
            });
        }
        let element = &list[self.random.next_usize(list.len())];
        element
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ForgeError::WrongValueShape {
                key: key.to_string(),
                expected: "a list of strings",
                found: "a list with non-string entries",
            })
    }

    /// Replace each `#` in `input` with a random digit.
    pub fn numerify(&mut self, input: &str) -> String {
        pattern::numerify(&mut self.random, input)
    }

    /// Replace each `?` in `input` with a random lowercase letter.
    pub fn letterify(&mut self, input: &str) -> String {
        pattern::letterify(&mut self.random, input)
    }

    /// Replace `#` wildcards with digits, then `?` wildcards with letters.
    pub fn bothify(&mut self, input: &str) -> String {
        pattern::bothify(&mut self.random, input)
    }

    /// Fetch the template string at `key` and expand its `#{...}` spans.
    ///
    /// Each span names an operation, either explicitly (`#{Name.first_name}`)
    /// or on the current category (`#{street_suffix}`), and is replaced by
    /// that operation's output. Spans found in the original template are
    /// expanded exactly once; text produced by an operation is spliced in
    /// literally and never re-scanned here. A failing operation surfaces as
    /// [`ForgeError::Invocation`] with the cause attached.
    pub fn resolve(
        &mut self,
        key: &str,
        current_category: &str,
        registry: &Registry,
    ) -> Result<String, ForgeError> {
        self.with_depth_guard(key, |values| {
            values.resolve_spans(key, current_category, registry)
        })
    }

    /// Run `body` one resolution level deeper, failing with
    /// [`ForgeError::RecursionLimitExceeded`] once the cap is reached.
    ///
    /// Both [`resolve`](Self::resolve) and [`composite`](Self::composite)
    /// enter through here, so a dataset cycle is cut off whether it runs
    /// through templates or format lists. The counter unwinds whether `body`
    /// succeeds or fails.
    fn with_depth_guard<F>(&mut self, key: &str, body: F) -> Result<String, ForgeError>
    where
        F: FnOnce(&mut Self) -> Result<String, ForgeError>,
    {
        if self.depth >= MAX_RESOLVE_DEPTH {
            return Err(ForgeError::RecursionLimitExceeded {
                key: key.to_string(),
                limit: MAX_RESOLVE_DEPTH,
            });
        }
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }

    fn resolve_spans(
        &mut self,
        key: &str,
        current_category: &str,
        registry: &Registry,
    ) -> Result<String, ForgeError> {
        let template = self.data.get_str(key)?.to_string();
        let spans = scan_placeholders(&template);
        if spans.is_empty() {
            return Ok(template);
        }
        tracing::trace!(
            "Resolving '{}' with {} placeholder(s) for category '{}'",
            key,
            spans.len(),
            current_category
        );

        let mut result = String::with_capacity(template.len());
        let mut cursor = 0;
        for span in spans {
            result.push_str(&template[cursor..span.start]);

            let token = span.token.trim();
            let (category, operation) = reference_target(token, current_category);
            let operation = to_camel_case(operation);
            let op = registry.get(category, &operation)?;
            let value = op(self, registry).map_err(|source| ForgeError::Invocation {
                category: category.to_lowercase(),
                operation: operation.clone(),
                source: Box::new(source),
            })?;

            result.push_str(&value);
            cursor = span.end;
        }
        result.push_str(&template[cursor..]);
        Ok(result)
    }

    /// Invoke the operations named by the format list at `format_key`, in
    /// list order, and join their outputs with `joiner`.
    ///
    /// Every entry must carry a leading `:` marker (`:first_name`). Joining
    /// is verbatim: no trimming, no empty-part filtering. The list is read
    /// fresh on every call. Entry is depth-guarded the same way as
    /// [`resolve`](Self::resolve), so a format list that dispatches back into
    /// its own operation fails with [`ForgeError::RecursionLimitExceeded`].
    pub fn composite(
        &mut self,
        format_key: &str,
        joiner: &str,
        target_category: &str,
        registry: &Registry,
    ) -> Result<String, ForgeError> {
        self.with_depth_guard(format_key, |values| {
            values.composite_entries(format_key, joiner, target_category, registry)
        })
    }

    fn composite_entries(
        &mut self,
        format_key: &str,
        joiner: &str,
        target_category: &str,
        registry: &Registry,
    ) -> Result<String, ForgeError> {
        let entries: Vec<String> = self
            .data
            .get_list(format_key)?
            .iter()
            .map(|entry| {
                entry
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ForgeError::WrongValueShape {
                        key: format_key.to_string(),
                        expected: "a list of strings",
                        found: "a list with non-string entries",
                    })
            })
            .collect::<Result<_, _>>()?;

        let mut parts = Vec::with_capacity(entries.len());
        for entry in &entries {
            let operation = entry
                .strip_prefix(':')
                .ok_or_else(|| ForgeError::MalformedFormatEntry {
                    key: format_key.to_string(),
                    entry: entry.clone(),
                })?;
            let op = registry.get(target_category, &to_camel_case(operation))?;
            parts.push(op(self, registry)?);
        }
        Ok(parts.join(joiner))
    }
}

/// One `#{...}` match: byte offsets of the whole span and its inner token.
struct PlaceholderSpan<'a> {
    start: usize,
    end: usize,
    token: &'a str,
}

/// Find every `#{...}` span whose body is one or more letters, underscores,
/// or dots, in text order, non-overlapping.
///
/// A `#{` that is not followed by a valid body and closing brace is not a
/// placeholder and stays literal.
fn scan_placeholders(template: &str) -> Vec<PlaceholderSpan<'_>> {
    let bytes = template.as_bytes();
    let mut spans = Vec::new();
    let mut search_from = 0;

    while let Some(offset) = template[search_from..].find("#{") {
        let start = search_from + offset;
        let body_start = start + 2;
        let mut body_end = body_start;
        while body_end < bytes.len()
            && (bytes[body_end].is_ascii_alphabetic()
                || bytes[body_end] == b'_'
                || bytes[body_end] == b'.')
        {
            body_end += 1;
        }
        if body_end > body_start && bytes.get(body_end) == Some(&b'}') {
            spans.push(PlaceholderSpan {
                start,
                end: body_end + 1,
                token: &template[body_start..body_end],
            });
            search_from = body_end + 1;
        } else {
            search_from = body_start;
        }
    }
    spans
}

/// Split a placeholder token into its target category and operation.
///
/// A dotted token starting with an uppercase letter addresses another
/// category explicitly (`Name.first_name`). Everything else, including
/// PascalCase shorthand like `FirstName`, is an operation on the current
/// category.
fn reference_target<'a>(token: &'a str, current_category: &'a str) -> (&'a str, &'a str) {
    let explicit = token.chars().next().is_some_and(char::is_uppercase);
    match (explicit, token.split_once('.')) {
        (true, Some((category, operation))) => (category, operation),
        _ => (current_category, token),
    }
}
