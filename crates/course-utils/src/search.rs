use crate::course::Course;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

impl Course {
    /// Case-insensitive, multi-term search over a section's display code,
    /// section label, name, and instructors.
    ///
    /// The query is lowercased and split on runs of whitespace; the search
    /// matches when every term is a substring of at least one haystack.
    /// An empty query matches every course.
    ///
    /// Two historical quirks are kept on purpose: only the first
    /// whitespace run is stripped from the code haystack (so `"cs 004a"`
    /// becomes `"cs004a"` but a multi-space code would keep its later
    /// gaps), and faculty entries are compared as stored rather than
    /// re-lowercased — the catalog keeps them lowercase.
    pub fn matches(&self, search: &str) -> bool {
        let search = search.to_lowercase();

        let code = self.code().to_lowercase();
        let code = WHITESPACE.replacen(&code, 1, "");
        let section = self.section_label().to_lowercase();
        let name = self.course_name.to_lowercase();

        WHITESPACE.split(&search).all(|term| {
            code.contains(term)
                || section.contains(term)
                || name.contains(term)
                || self.faculty.iter().any(|instructor| instructor.contains(term))
        })
    }
}
