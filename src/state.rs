use std::fmt;

/// Lexical context selecting which rule table is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexState {
    /// Top-level formula text. Always at the bottom of the stack.
    Root,
    /// Inside `/* ... */`.
    MultilineComment,
    /// After `VAR`, before the `=` of the declaration.
    Assignment,
    /// Inside `'...'`.
    SingleQuotedString,
    /// Inside `[...]`.
    BracketedAttribute,
    /// Inside `"..."`.
    DoubleQuotedString,
}

impl fmt::Display for LexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Root => "formula",
            Self::MultilineComment => "block comment",
            Self::Assignment => "variable declaration",
            Self::SingleQuotedString => "quoted table name",
            Self::BracketedAttribute => "bracketed column name",
            Self::DoubleQuotedString => "string",
        };
        f.write_str(name)
    }
}

/// State stack mutation applied after a rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Push(LexState),
    Pop,
    Replace(LexState),
}

/// Stack of active lexical states with `Root` pinned at the bottom.
#[derive(Debug, Clone)]
pub struct StateStack {
    states: Vec<LexState>,
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: vec![LexState::Root],
        }
    }

    /// The active state.
    #[must_use]
    pub fn top(&self) -> LexState {
        self.states.last().copied().unwrap_or(LexState::Root)
    }

    /// Number of states above `Root`.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.states.len() - 1
    }

    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::Push(state) => {
                log::trace!("push {state:?} over {:?}", self.top());
                self.states.push(state);
            }
            Transition::Pop => {
                // Root is never popped.
                if self.states.len() > 1 {
                    let popped = self.states.pop();
                    log::trace!("pop {popped:?}, back in {:?}", self.top());
                }
            }
            Transition::Replace(state) => {
                if self.states.len() > 1 {
                    self.states.pop();
                }
                self.states.push(state);
                log::trace!("replace top with {state:?}");
            }
        }
    }
}
