use std::fmt;

use crate::{matcher, EnEntry, RuEntry};

/// One Russian entry together with its English match, if any. Carries
/// a plain matched-or-not shape and leaves formatting to the caller.
#[derive(Debug)]
pub struct Pairing<'a> {
    pub ru: &'a RuEntry,
    pub matched: Option<&'a EnEntry>,
}

/// Look up every Russian entry's match in the sorted English list,
/// using the Russian index as the search target. Both inputs must
/// already be sorted.
pub fn pair_entries<'a>(ru: &'a [RuEntry], en: &'a [EnEntry]) -> Vec<Pairing<'a>> {
    ru.iter()
        .map(|entry| Pairing {
            ru: entry,
            matched: matcher::find_combined(en, entry.index).map(|i| &en[i]),
        })
        .collect()
}

impl fmt::Display for Pairing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--> {} ({})", self.ru.text, self.ru.index)?;
        match self.matched {
            Some(en) => write!(
                f,
                "--> {} ({}) {} ({})",
                en.text, en.index, en.comment, en.comment_index
            ),
            None => write!(f, "no matching entry"),
        }
    }
}
