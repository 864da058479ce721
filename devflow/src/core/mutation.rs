//! Word-level emphasis mutations for a single rule line.

use std::sync::LazyLock;

use regex::Regex;

/// Appended when no synonym applies.
pub const REFINED_MARKER: &str = "  <!-- refined -->";

/// One entry of the ordered synonym table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Synonym {
    pub word: &'static str,
    pub replacement: &'static str,
}

/// Checked in order; the first word that matches wins.
pub const SYNONYMS: [Synonym; 3] = [
    Synonym {
        word: "must",
        replacement: "MUST",
    },
    Synonym {
        word: "should",
        replacement: "MUST",
    },
    Synonym {
        word: "ensure",
        replacement: "ALWAYS ensure",
    },
];

static SYNONYM_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SYNONYMS
        .iter()
        .map(|syn| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(syn.word))).unwrap())
        .collect()
});

/// Which rule produced a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    Synonym(Synonym),
    Marker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub text: String,
    pub kind: MutationKind,
}

/// Mutate one line: replace the first occurrence of the first matching synonym,
/// or append `marker` when nothing matches.
///
/// An occurrence already spelled exactly like its replacement is skipped, so the
/// returned text always differs from the input.
pub fn mutate_line(line: &str, marker: &str) -> Mutation {
    for (syn, re) in SYNONYMS.iter().zip(SYNONYM_RES.iter()) {
        let hit = re
            .find_iter(line)
            .find(|found| found.as_str() != syn.replacement);
        if let Some(found) = hit {
            let mut text = String::with_capacity(line.len() + syn.replacement.len());
            text.push_str(&line[..found.start()]);
            text.push_str(syn.replacement);
            text.push_str(&line[found.end()..]);
            return Mutation {
                text,
                kind: MutationKind::Synonym(*syn),
            };
        }
    }

    Mutation {
        text: format!("{line}{marker}"),
        kind: MutationKind::Marker,
    }
}
