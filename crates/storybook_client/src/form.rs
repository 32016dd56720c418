//! The weekly journal form.

use storybook_core::{EntryList, JournalText};
use storybook_error::{PresentationError, PresentationErrorKind, PresentationResult};

/// One text area per week, starting with a single empty week.
///
/// # Examples
///
/// ```
/// use storybook_client::JournalForm;
///
/// let mut form = JournalForm::new();
/// form.set_week(0, "Went sledding\n\n  Made cocoa  ").unwrap();
/// let second = form.add_week();
/// form.set_week(second, "Lost a tooth").unwrap();
///
/// assert_eq!(form.week_label(1), "Week 2 Journal Entry");
/// assert_eq!(form.entries(), vec!["Went sledding", "Made cocoa", "Lost a tooth"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalForm {
    weeks: Vec<JournalText>,
}

impl Default for JournalForm {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalForm {
    /// A form with one empty week.
    pub fn new() -> Self {
        Self {
            weeks: vec![JournalText::default()],
        }
    }

    /// Every week in order.
    pub fn weeks(&self) -> &[JournalText] {
        &self.weeks
    }

    /// Append an empty week and return its index.
    pub fn add_week(&mut self) -> usize {
        self.weeks.push(JournalText::default());
        self.weeks.len() - 1
    }

    /// Replace the text of one week.
    ///
    /// # Errors
    ///
    /// `UnknownWeek` if `index` is past the last week.
    pub fn set_week(&mut self, index: usize, text: impl Into<String>) -> PresentationResult<()> {
        let week = self
            .weeks
            .get_mut(index)
            .ok_or_else(|| PresentationError::new(PresentationErrorKind::UnknownWeek(index)))?;
        week.replace(text);
        Ok(())
    }

    /// Label shown above a week's text area.
    pub fn week_label(&self, index: usize) -> String {
        format!("Week {} Journal Entry", index + 1)
    }

    /// Whether every week is blank.
    pub fn is_blank(&self) -> bool {
        self.weeks.iter().all(JournalText::is_blank)
    }

    /// Normalized entries of all weeks, in week order.
    pub fn entries(&self) -> EntryList {
        self.weeks.iter().flat_map(JournalText::entries).collect()
    }
}
