//! Readability scoring using a Flesch-Kincaid approximation.
//!
//! Formula: `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59`,
//! clamped to `[0, 100]`. Syllables are estimated as vowel-group starts,
//! with the accented Spanish vowels in the vowel set.

/// Vowels for syllable estimation, accented forms included.
const VOWELS: &str = "aeiouáéíóú";

/// Score readability for a tokenized text.
///
/// Returns 0.0 when either the token or sentence list is empty, so the
/// score is defined for every input. The clamp keeps pathological inputs
/// (one extremely long word, thousands of one-word sentences) in range.
#[tracing::instrument(skip_all, fields(words = tokens.len(), sentences = sentences.len()))]
pub fn flesch_kincaid(tokens: &[String], sentences: &[String]) -> f64 {
    if tokens.is_empty() || sentences.is_empty() {
        return 0.0;
    }

    let syllables: usize = tokens.iter().map(|t| count_syllables(t)).sum();
    let words_per_sentence = tokens.len() as f64 / sentences.len() as f64;
    let syllables_per_word = syllables as f64 / tokens.len() as f64;

    let score = 0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59;
    score.clamp(0.0, 100.0)
}

/// Count syllables as vowel-group starts: a run of consecutive vowels
/// counts once. Every word counts at least one syllable.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut syllables = 0;
    let mut previous_was_vowel = false;

    for ch in word.chars() {
        let is_vowel = VOWELS.contains(ch);
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    syllables.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn syllable_counts() {
        assert_eq!(count_syllables("gato"), 2);
        assert_eq!(count_syllables("corre"), 2);
        assert_eq!(count_syllables("investigación"), 5);
        // Adjacent vowels form one group.
        assert_eq!(count_syllables("ciudad"), 2);
        // No vowels still counts one.
        assert_eq!(count_syllables("pst"), 1);
        assert_eq!(count_syllables("á"), 1);
    }

    #[test]
    fn empty_inputs_score_zero() {
        assert_eq!(flesch_kincaid(&[], &["Hola".to_string()]), 0.0);
        assert_eq!(flesch_kincaid(&toks(&["gato"]), &[]), 0.0);
        assert_eq!(flesch_kincaid(&[], &[]), 0.0);
    }

    #[test]
    fn score_is_clamped() {
        // One very long many-syllable "word" pushes the raw formula far
        // above 100; the clamp caps it.
        let long_word = vec!["ba".repeat(500)];
        let score = flesch_kincaid(&long_word, &["s".to_string()]);
        assert_eq!(score, 100.0);

        // Many one-syllable words over many sentences drives the raw score
        // negative; the clamp floors it at zero.
        let words = toks(&["sol"; 3]);
        let sentences: Vec<String> = (0..3).map(|i| format!("s{i}")).collect();
        assert_eq!(flesch_kincaid(&words, &sentences), 0.0);
    }

    #[test]
    fn plausible_mid_range_score() {
        let words = toks(&["gato", "corre", "rápido", "perro", "duerme", "tranquilo"]);
        let sentences = vec!["uno".to_string(), "dos".to_string()];
        let score = flesch_kincaid(&words, &sentences);
        // 14 syllables: 0.39*3 + 11.8*(14/6) - 15.59 ≈ 13.11
        assert!((score - 13.113).abs() < 0.01);
    }
}
