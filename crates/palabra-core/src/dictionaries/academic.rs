//! Academic vocabulary markers.
//!
//! Words that signal formal or academic register in Spanish prose. The rule
//! engine passes the academic-language rule when the token vocabulary
//! intersects this set.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Academic marker words. Compared against lemmatized tokens, so only the
/// singular forms are listed.
pub static ACADEMIC_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "investigación",
        "estudio",
        "análisis",
        "metodología",
        "conclusión",
        "hipótesis",
        "resultado",
        "evidencia",
        "demostración",
        "teoría",
        "concepto",
        "definición",
        "modelo",
        "framework",
        "enfoque",
        "perspectiva",
    ]
    .into_iter()
    .collect()
});
