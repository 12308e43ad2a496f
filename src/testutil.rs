use std::cell::RefCell;
use std::collections::VecDeque;

use crate::prompt::{InputError, Prompter};
use crate::select::{AccountSelector, SubprocessError};

#[macro_export]
macro_rules! assert_text_eq {
    ($want:expr, $got:expr) => {
        let want_str: &str = &$want;
        let got_str: &str = &$got;
        if want_str != got_str {
            text_diff::assert_diff(want_str, got_str, "\n", 0);
        }
    };
}

/// Answers prompts from a script, where an empty answer takes the default.
/// Running out of answers behaves like the user interrupting the prompt.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|s| s.to_string()).collect()),
            asked: Default::default(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, label: &str, default: Option<&str>) -> Result<String, InputError> {
        self.asked.borrow_mut().push(label.to_string());
        match self.answers.borrow_mut().pop_front() {
            Some(answer) if answer.is_empty() => Ok(default.unwrap_or_default().to_string()),
            Some(answer) => Ok(answer),
            None => Err(InputError::Interrupted),
        }
    }
}

/// Picks accounts from a script, recording the candidates it was offered.
#[derive(Default)]
pub struct ScriptedSelector {
    picks: RefCell<VecDeque<String>>,
    pub offered: RefCell<Vec<Vec<String>>>,
}

impl ScriptedSelector {
    pub fn new(picks: &[&str]) -> Self {
        Self {
            picks: RefCell::new(picks.iter().map(|s| s.to_string()).collect()),
            offered: Default::default(),
        }
    }
}

impl AccountSelector for ScriptedSelector {
    fn select(&self, _label: &str, candidates: &[String]) -> Result<String, SubprocessError> {
        self.offered.borrow_mut().push(candidates.to_vec());
        self.picks
            .borrow_mut()
            .pop_front()
            .ok_or(SubprocessError::NoSelection)
    }
}
