//! Filler text generation.

use fakeforge_core::{FakeValues, ForgeError, Registry};

pub(crate) const CATEGORY: &str = "lorem";

pub(crate) fn register(registry: &mut Registry) {
    registry.register(CATEGORY, "word", word);
    registry.register(CATEGORY, "sentence", sentence);
    registry.register(CATEGORY, "paragraph", paragraph);
}

pub(crate) fn word(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("lorem.words")
}

/// A capitalized sentence of 4 to 10 words ending in a period.
pub(crate) fn sentence(values: &mut FakeValues, registry: &Registry) -> Result<String, ForgeError> {
    let count = 4 + values.random().next_usize(7);
    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
        words.push(word(values, registry)?);
    }
    let body = words.join(" ");
    let mut chars = body.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => body,
    };
    Ok(format!("{capitalized}."))
}

/// A paragraph of 3 to 5 sentences.
pub(crate) fn paragraph(
    values: &mut FakeValues,
    registry: &Registry,
) -> Result<String, ForgeError> {
    let count = 3 + values.random().next_usize(3);
    let mut sentences = Vec::with_capacity(count);
    for _ in 0..count {
        sentences.push(sentence(values, registry)?);
    }
    Ok(sentences.join(" "))
}

/// Filler text operations.
pub struct Lorem<'a> {
    values: &'a mut FakeValues,
    registry: &'a Registry,
}

impl<'a> Lorem<'a> {
    pub(crate) fn new(values: &'a mut FakeValues, registry: &'a Registry) -> Self {
        Self { values, registry }
    }

    /// A single filler word.
    pub fn word(&mut self) -> Result<String, ForgeError> {
        word(self.values, self.registry)
    }

    /// `count` filler words.
    pub fn words(&mut self, count: usize) -> Result<Vec<String>, ForgeError> {
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            words.push(word(self.values, self.registry)?);
        }
        Ok(words)
    }

    /// A capitalized sentence of 4 to 10 words.
    pub fn sentence(&mut self) -> Result<String, ForgeError> {
        sentence(self.values, self.registry)
    }

    /// A paragraph of 3 to 5 sentences.
    pub fn paragraph(&mut self) -> Result<String, ForgeError> {
        paragraph(self.values, self.registry)
    }

    /// `count` random lowercase alphanumeric characters.
    pub fn characters(&mut self, count: usize) -> String {
        let mut out = String::with_capacity(count);
        for _ in 0..count {
            out.push(self.values.random().next_alphanumeric());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::Faker;

    #[test]
    fn test_sentence_shape() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        for _ in 0..10 {
            let sentence = faker.lorem().sentence().unwrap();
            assert!(sentence.ends_with('.'));
            assert!(sentence.chars().next().unwrap().is_uppercase());
            let words = sentence.trim_end_matches('.').split(' ').count();
            assert!((4..=10).contains(&words));
        }
    }

    #[test]
    fn test_paragraph_has_three_to_five_sentences() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        let paragraph = faker.lorem().paragraph().unwrap();
        let sentences = paragraph.matches(". ").count() + 1;
        assert!((3..=5).contains(&sentences));
    }

    #[test]
    fn test_words_returns_exactly_count() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        let words = faker.lorem().words(7).unwrap();
        assert_eq!(words.len(), 7);
        assert!(words.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_characters_are_lowercase_alphanumeric() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        let chars = faker.lorem().characters(32);
        assert_eq!(chars.len(), 32);
        assert!(chars
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
