/// Static facts a host dispatcher uses to pick this lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub tag: &'static str,
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
}

pub const DAX: LexerInfo = LexerInfo {
    title: "DAX",
    description: "Data Analysis Expressions (DAX)",
    tag: "dax",
    filenames: &["*.dax"],
    mimetypes: &["text/x-dax"],
};

impl LexerInfo {
    /// Whether `name` matches one of the `*.ext` filename patterns.
    /// Extensions compare case-insensitively.
    #[must_use]
    pub fn matches_filename(&self, name: &str) -> bool {
        let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
        self.filenames.iter().any(|pattern| {
            pattern.strip_prefix('*').is_some_and(|suffix| {
                base.len() > suffix.len()
                    && base
                        .get(base.len() - suffix.len()..)
                        .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
            })
        })
    }

    #[must_use]
    pub fn matches_mimetype(&self, mimetype: &str) -> bool {
        self.mimetypes.iter().any(|m| m.eq_ignore_ascii_case(mimetype))
    }
}
