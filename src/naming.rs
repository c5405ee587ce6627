use std::collections::HashMap;

/// Derive a filesystem-safe name from a phrase: anything other than ASCII letters, digits,
/// underscores, hyphens and whitespace is dropped, the ends are trimmed, and the remaining
/// spaces become underscores.
pub fn sanitize_filename(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-') || ch.is_whitespace())
        .collect();
    kept.trim().replace(' ', "_")
}

/// Hands out output names for a run, so that two rows never write over each other's files
#[derive(Debug, Default)]
pub struct OutputNames {
    seen: HashMap<String, usize>,
}

impl OutputNames {
    /// The name for the row at `index` with the given source text. Text that sanitizes to
    /// nothing is named after the row; repeats get a numeric suffix.
    pub fn next(&mut self, index: usize, source: &str) -> String {
        let mut base = sanitize_filename(source);
        if base.is_empty() {
            base = format!("label-{index}");
        }

        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{base}-{count}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_safe_characters() {
        assert_eq!(sanitize_filename("La casa"), "La_casa");
        assert_eq!(sanitize_filename("  ¿Qué tal?  "), "Qu_tal");
        assert_eq!(sanitize_filename("a/b\\c:d"), "abcd");
        assert_eq!(sanitize_filename("well-known_name 2"), "well-known_name_2");
        assert_eq!(sanitize_filename("ありがとう"), "");
    }

    #[test]
    fn names_are_unique_within_a_run() {
        let mut names = OutputNames::default();
        assert_eq!(names.next(0, "Hola"), "Hola");
        assert_eq!(names.next(1, "Hola!"), "Hola-2");
        assert_eq!(names.next(2, "ありがとう"), "label-2");
        assert_eq!(names.next(3, "Adiós"), "Adis");
        assert_eq!(names.next(4, "Hola"), "Hola-3");
    }
}
