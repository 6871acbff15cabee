use serde::{Deserialize, Serialize};

const SURROGATE_LO: u32 = 0xD800;
const SURROGATE_HI: u32 = 0xDFFF;

/// Inclusive span of Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct CodeSpan {
    start: u32,
    end: u32,
}

impl CodeSpan {
    fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }
}

/// Immutable set of characters the string generator samples from.
///
/// Characters are stored as inclusive code-point spans, so supplementary-plane
/// characters are first-class: one entry in the set is always one `char`, no
/// matter how many code units it needs in any particular encoding. Spans are
/// normalized (sorted, merged, deduplicated) at construction, which keeps
/// sampling uniform over the distinct characters of the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharSet {
    spans: Vec<CodeSpan>,
}

impl CharSet {
    /// Builds a set from the characters of a literal. Duplicates collapse.
    pub fn from_chars(chars: &str) -> Self {
        chars.chars().collect()
    }

    /// Builds a set covering the inclusive range `lo..=hi`. An inverted range
    /// yields the empty set. Surrogate code points inside the numeric span
    /// are skipped.
    pub fn range(lo: char, hi: char) -> Self {
        let mut spans = Vec::with_capacity(2);
        push_scalar_span(&mut spans, lo as u32, hi as u32);
        Self::normalized(spans)
    }

    /// Union of two sets, as a new set.
    pub fn union(&self, other: &CharSet) -> CharSet {
        let mut spans = self.spans.clone();
        spans.extend_from_slice(&other.spans);
        Self::normalized(spans)
    }

    /// Number of distinct characters in the set.
    pub fn len(&self) -> usize {
        self.spans.iter().map(CodeSpan::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Character at `index` into the flattened, ascending set.
    pub fn char_at(&self, index: usize) -> Option<char> {
        let mut remaining = index;
        for span in &self.spans {
            if remaining < span.len() {
                return char::from_u32(span.start + remaining as u32);
            }
            remaining -= span.len();
        }
        None
    }

    pub fn contains(&self, ch: char) -> bool {
        let code = ch as u32;
        self.spans
            .iter()
            .any(|span| span.start <= code && code <= span.end)
    }

    /// Iterates the distinct characters in ascending order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.spans
            .iter()
            .flat_map(|span| (span.start..=span.end).filter_map(char::from_u32))
    }

    fn normalized(mut spans: Vec<CodeSpan>) -> Self {
        spans.sort_by_key(|span| span.start);
        let mut merged: Vec<CodeSpan> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                Some(last) if span.start <= last.end.saturating_add(1) => {
                    last.end = last.end.max(span.end);
                }
                _ => merged.push(span),
            }
        }
        Self { spans: merged }
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let spans = iter
            .into_iter()
            .map(|ch| CodeSpan {
                start: ch as u32,
                end: ch as u32,
            })
            .collect();
        Self::normalized(spans)
    }
}

fn push_scalar_span(spans: &mut Vec<CodeSpan>, start: u32, end: u32) {
    if start > end {
        return;
    }
    if end < SURROGATE_LO || start > SURROGATE_HI {
        spans.push(CodeSpan { start, end });
        return;
    }
    if start < SURROGATE_LO {
        spans.push(CodeSpan {
            start,
            end: SURROGATE_LO - 1,
        });
    }
    if end > SURROGATE_HI {
        spans.push(CodeSpan {
            start: SURROGATE_HI + 1,
            end,
        });
    }
}
