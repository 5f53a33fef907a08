//! Fixed Spanish stopword list.
//!
//! Mirrors the common Spanish function-word corpus (articles, prepositions,
//! pronouns, and high-frequency conjugations of ser/estar/haber/tener).
//! Tokens are matched after lower-casing and punctuation stripping.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::text::StopwordSet;

/// Spanish stopwords.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Articles, prepositions, conjunctions
        "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
        "con", "no", "una", "su", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "o",
        "este", "sí", "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "también",
        "me", "hasta", "hay", "donde", "quien", "desde", "todo", "nos", "durante", "todos",
        "uno", "les", "ni", "contra", "otros", "ese", "eso", "ante", "ellos", "e", "esto",
        "mí", "antes", "algunos", "qué", "unos", "yo", "otro", "otras", "otra", "él", "tanto",
        "esa", "estos", "mucho", "quienes", "nada", "muchos", "cual", "poco", "ella", "estar",
        "estas", "algunas", "algo", "nosotros",
        // Possessives and object pronouns
        "mi", "mis", "tú", "te", "ti", "tu", "tus", "ellas", "nosotras", "vosotros", "vosotras",
        "os", "mío", "mía", "míos", "mías", "tuyo", "tuya", "tuyos", "tuyas", "suyo", "suya",
        "suyos", "suyas", "nuestro", "nuestra", "nuestros", "nuestras", "vuestro", "vuestra",
        "vuestros", "vuestras", "esos", "esas",
        // estar
        "estoy", "estás", "está", "estamos", "estáis", "están", "esté", "estés", "estemos",
        "estéis", "estén", "estaré", "estarás", "estará", "estaremos", "estaréis", "estarán",
        "estaría", "estarías", "estaríamos", "estaríais", "estarían", "estaba", "estabas",
        "estábamos", "estabais", "estaban", "estuve", "estuviste", "estuvo", "estuvimos",
        "estuvisteis", "estuvieron", "estado", "estada", "estados", "estadas", "estad",
        // ser
        "soy", "eres", "es", "somos", "sois", "son", "sea", "seas", "seamos", "seáis", "sean",
        "seré", "serás", "será", "seremos", "seréis", "serán", "sería", "serías", "seríamos",
        "seríais", "serían", "era", "eras", "éramos", "erais", "eran", "fui", "fuiste", "fue",
        "fuimos", "fuisteis", "fueron", "sido", "ser",
        // haber
        "he", "has", "ha", "hemos", "habéis", "han", "haya", "hayas", "hayamos", "hayáis",
        "hayan", "habré", "habrás", "habrá", "habremos", "habréis", "habrán", "habría",
        "habrías", "habríamos", "habríais", "habrían", "había", "habías", "habíamos",
        "habíais", "habían", "hube", "hubiste", "hubo", "hubimos", "hubisteis", "hubieron",
        "habido", "habida", "habidos", "habidas",
        // tener
        "tengo", "tienes", "tiene", "tenemos", "tenéis", "tienen", "tenga", "tengas",
        "tengamos", "tengáis", "tengan", "tendré", "tendrás", "tendrá", "tendremos",
        "tendréis", "tendrán", "tenía", "tenías", "teníamos", "teníais", "tenían", "tuve",
        "tuviste", "tuvo", "tuvimos", "tuvisteis", "tuvieron", "tenido", "tenida", "tenidos",
        "tenidas", "tened",
    ]
    .into_iter()
    .collect()
});

/// The default Spanish stopword set.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishStopwords;

impl StopwordSet for SpanishStopwords {
    fn contains(&self, token: &str) -> bool {
        STOPWORDS.contains(token)
    }
}

/// Shared instance used by the default tokenization pipeline.
pub static SPANISH_STOPWORDS: LazyLock<SpanishStopwords> = LazyLock::new(|| SpanishStopwords);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_function_words_are_stopwords() {
        for w in ["el", "la", "de", "que", "y", "es", "está"] {
            assert!(STOPWORDS.contains(w), "expected stopword: {w}");
        }
    }

    #[test]
    fn content_words_are_not_stopwords() {
        for w in ["gato", "corre", "investigación", "análisis"] {
            assert!(!STOPWORDS.contains(w), "unexpected stopword: {w}");
        }
    }
}
