//! Class string merging.

use vernis_carton::FxHashSet;

/// Join class inputs into one string.
///
/// Empty inputs are dropped and identical tokens are kept once, at their first
/// position.
///
/// ```
/// use vernis_tint::merge_classes;
///
/// assert_eq!(merge_classes(["px-4 py-2", "", "py-2 font-bold"]), "px-4 py-2 font-bold");
/// ```
pub fn merge_classes<I, S>(inputs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut list = ClassList::new();
    for input in inputs {
        list.push(input.as_ref());
    }
    list.finish()
}

/// Incremental class builder with token de-duplication.
#[derive(Debug, Default)]
pub struct ClassList {
    out: String,
    seen: FxHashSet<String>,
}

impl ClassList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every whitespace-separated token not seen yet.
    pub fn push(&mut self, classes: &str) -> &mut Self {
        for token in classes.split_ascii_whitespace() {
            if self.seen.contains(token) {
                continue;
            }
            self.seen.insert(token.to_string());
            if !self.out.is_empty() {
                self.out.push(' ');
            }
            self.out.push_str(token);
        }
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    #[inline]
    pub fn finish(self) -> String {
        self.out
    }
}
