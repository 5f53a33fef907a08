//! Rule-based Spanish lemmatizer.
//!
//! Reduces plural nouns and adjectives to their singular form using a small
//! exception table plus conservative suffix rules. Anything the rules do not
//! recognize passes through unchanged, so the lemmatizer is total and never
//! invents forms for unknown words.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::text::Lemmatizer;

/// Irregular plurals and accent-shifting forms the suffix rules would mangle.
static EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("veces", "vez"),
        ("jóvenes", "joven"),
        ("exámenes", "examen"),
        ("imágenes", "imagen"),
        ("orígenes", "origen"),
        ("márgenes", "margen"),
        ("caracteres", "carácter"),
        ("regímenes", "régimen"),
        ("países", "país"),
        ("lápices", "lápiz"),
        ("peces", "pez"),
        ("raíces", "raíz"),
    ]
    .into_iter()
    .collect()
});

/// Consonants after which a trailing `es` marks a plural (papeles → papel,
/// ciudades → ciudad). Vowel-final stems take a bare `s` instead.
const ES_PLURAL_STEM_ENDINGS: &[char] = &['n', 'l', 'r', 'd', 'j'];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'á', 'é', 'í', 'ó', 'ú'];

/// The default Spanish lemmatizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishLemmatizer;

impl Lemmatizer for SpanishLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        lemmatize(token)
    }
}

/// Shared instance used by the default tokenization pipeline.
pub static SPANISH_LEMMATIZER: LazyLock<SpanishLemmatizer> = LazyLock::new(|| SpanishLemmatizer);

/// Reduce a single token to its lemma.
pub fn lemmatize(token: &str) -> String {
    if let Some(lemma) = EXCEPTIONS.get(token) {
        return (*lemma).to_string();
    }

    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();

    // Short words and Greek-derived -is words (crisis, análisis, tesis) are
    // invariant in number.
    if len <= 3 || token.ends_with("is") {
        return token.to_string();
    }

    // luces → luz
    if let Some(stem) = token.strip_suffix("ces") {
        return format!("{stem}z");
    }

    // papeles → papel, ciudades → ciudad
    if len > 4
        && token.ends_with("es")
        && ES_PLURAL_STEM_ENDINGS.contains(&chars[len - 3])
    {
        return chars[..len - 2].iter().collect();
    }

    // gatos → gato, casas → casa. The length guard leaves short
    // monosyllables (dos, tres) alone.
    if len > 4 && chars[len - 1] == 's' && VOWELS.contains(&chars[len - 2]) {
        return chars[..len - 1].iter().collect();
    }

    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_plurals() {
        assert_eq!(lemmatize("gatos"), "gato");
        assert_eq!(lemmatize("casas"), "casa");
        assert_eq!(lemmatize("estudios"), "estudio");
    }

    #[test]
    fn consonant_es_plurals() {
        assert_eq!(lemmatize("papeles"), "papel");
        assert_eq!(lemmatize("ciudades"), "ciudad");
        assert_eq!(lemmatize("relojes"), "reloj");
    }

    #[test]
    fn ces_plurals() {
        assert_eq!(lemmatize("luces"), "luz");
        assert_eq!(lemmatize("veces"), "vez");
    }

    #[test]
    fn exceptions_table() {
        assert_eq!(lemmatize("imágenes"), "imagen");
        assert_eq!(lemmatize("países"), "país");
    }

    #[test]
    fn invariant_words_pass_through() {
        assert_eq!(lemmatize("análisis"), "análisis");
        assert_eq!(lemmatize("crisis"), "crisis");
        assert_eq!(lemmatize("tres"), "tres");
        assert_eq!(lemmatize("gato"), "gato");
        assert_eq!(lemmatize("corre"), "corre");
    }

    #[test]
    fn unknown_words_unchanged() {
        assert_eq!(lemmatize("blockchain"), "blockchain");
        assert_eq!(lemmatize("xyz"), "xyz");
    }
}
