use serde::{Deserialize, Serialize};

use crate::budget::round_half_up;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Expense,
    Income,
}

/// Class names a server-rendered record card or row is built from.
pub struct RecordMarkup {
    pub container: &'static str,
    pub delete_button: &'static str,
    pub edit_button: &'static str,
    pub details: &'static str,
    pub title: &'static str,
    pub amount: &'static str,
    pub title_input_class: &'static str,
    pub amount_input_class: &'static str,
}

static EXPENSE_MARKUP: RecordMarkup = RecordMarkup {
    container: ".transaction-card",
    delete_button: ".btn-delete",
    edit_button: ".btn-edit",
    details: ".transaction-details",
    title: ".transaction-title",
    amount: ".transaction-amount",
    title_input_class: "edit-input-title",
    amount_input_class: "edit-input-amount",
};

static INCOME_MARKUP: RecordMarkup = RecordMarkup {
    container: ".income-row",
    delete_button: ".btn-delete-income",
    edit_button: ".btn-edit-income",
    details: ".income-details-wrapper",
    title: ".income-title",
    amount: ".income-amount",
    title_input_class: "edit-income-title",
    amount_input_class: "edit-income-amount",
};

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Expense, RecordKind::Income];

    pub fn markup(self) -> &'static RecordMarkup {
        match self {
            RecordKind::Expense => &EXPENSE_MARKUP,
            RecordKind::Income => &INCOME_MARKUP,
        }
    }

    fn slug(self) -> &'static str {
        match self {
            RecordKind::Expense => "expense",
            RecordKind::Income => "income",
        }
    }

    pub fn delete_path(self, id: &str) -> String {
        format!("/delete-{}/{}", self.slug(), id)
    }

    pub fn update_path(self, id: &str) -> String {
        format!("/update-{}/{}", self.slug(), id)
    }

    pub fn delete_prompt(self) -> &'static str {
        match self {
            RecordKind::Expense => "Are you sure you want to delete this expense?",
            RecordKind::Income => "Are you sure you want to delete this income source?",
        }
    }

    pub fn delete_failed(self) -> &'static str {
        match self {
            RecordKind::Expense => "Error deleting expense",
            RecordKind::Income => "Error deleting income",
        }
    }

    pub fn update_failed(self) -> &'static str {
        match self {
            RecordKind::Expense => "Error updating expense",
            RecordKind::Income => "Error updating income",
        }
    }
}

/// Values sent to `/update-<kind>/{id}`. Amount stays a string; the server
/// owns parsing and validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub description: String,
    pub amount: String,
}

impl RecordDraft {
    /// Seeds the edit inputs from what the record currently shows.
    pub fn from_display(description: &str, amount: &str, currency_symbol: &str) -> Self {
        RecordDraft {
            description: description.trim().to_string(),
            amount: strip_currency(amount, currency_symbol),
        }
    }

    pub fn display_amount(&self, currency_symbol: &str) -> String {
        format_amount(&self.amount, currency_symbol)
    }
}

pub fn strip_currency(text: &str, currency_symbol: &str) -> String {
    let without_symbol = if currency_symbol.is_empty() {
        text.to_string()
    } else {
        text.replace(currency_symbol, "")
    };
    without_symbol
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect()
}

/// `<symbol><amount to 2dp>`; text that is not a number is shown as typed.
pub fn format_amount(raw: &str, currency_symbol: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => {
            format!("{}{:.2}", currency_symbol, round_half_up(value, 2))
        }
        _ => format!("{}{}", currency_symbol, raw.trim()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
    Display,
    Editing,
    Saving,
}

/// What a click on the edit button should do in the current mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditClick {
    Open,
    Save,
    Busy,
}

/// Per-record edit/save toggle. Lives for one page load.
#[derive(Clone, Debug)]
pub struct EditToggle {
    mode: EditMode,
}

impl Default for EditToggle {
    fn default() -> Self {
        EditToggle { mode: EditMode::Display }
    }
}

impl EditToggle {
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn click(&self) -> EditClick {
        match self.mode {
            EditMode::Display => EditClick::Open,
            EditMode::Editing => EditClick::Save,
            EditMode::Saving => EditClick::Busy,
        }
    }

    pub fn opened(&mut self) {
        if self.mode == EditMode::Display {
            self.mode = EditMode::Editing;
        }
    }

    pub fn save_started(&mut self) -> bool {
        if self.mode == EditMode::Editing {
            self.mode = EditMode::Saving;
            true
        } else {
            false
        }
    }

    pub fn save_finished(&mut self, succeeded: bool) {
        if self.mode == EditMode::Saving {
            self.mode = if succeeded {
                EditMode::Display
            } else {
                EditMode::Editing
            };
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self.mode {
            EditMode::Display => "Edit",
            EditMode::Editing | EditMode::Saving => "Save",
        }
    }
}

/// Path to call for a delete click, if the user went through with it.
pub fn plan_delete(kind: RecordKind, id: &str, confirmed: bool) -> Option<String> {
    confirmed.then(|| kind.delete_path(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_prefills_without_currency_formatting() {
        let draft = RecordDraft::from_display(" Coffee \n", "$4.50", "$");
        assert_eq!(draft.description, "Coffee");
        assert_eq!(draft.amount, "4.50");
    }

    #[test]
    fn grouping_commas_are_stripped_too() {
        assert_eq!(strip_currency("$ 1,250.00", "$"), "1250.00");
        assert_eq!(strip_currency("€12", "€"), "12");
    }

    #[test]
    fn saved_amount_is_shown_with_two_decimals() {
        assert_eq!(format_amount("4.5", "$"), "$4.50");
        assert_eq!(format_amount("12", "$"), "$12.00");
        assert_eq!(format_amount("abc", "$"), "$abc");
    }

    #[test]
    fn half_cents_round_up_when_redisplayed() {
        assert_eq!(format_amount("4.125", "$"), "$4.13");
        assert_eq!(format_amount("0.5", "$"), "$0.50");
        assert_eq!(format_amount("2.675", "$"), "$2.67");
    }

    #[test]
    fn toggle_walks_edit_save_cycle() {
        let mut toggle = EditToggle::default();
        assert_eq!(toggle.click(), EditClick::Open);
        assert_eq!(toggle.button_label(), "Edit");

        toggle.opened();
        assert_eq!(toggle.click(), EditClick::Save);
        assert_eq!(toggle.button_label(), "Save");

        assert!(toggle.save_started());
        assert_eq!(toggle.click(), EditClick::Busy);
        assert!(!toggle.save_started());

        toggle.save_finished(true);
        assert_eq!(toggle.mode(), EditMode::Display);
        assert_eq!(toggle.button_label(), "Edit");
    }

    #[test]
    fn failed_save_keeps_inputs_open() {
        let mut toggle = EditToggle::default();
        toggle.opened();
        toggle.save_started();
        toggle.save_finished(false);
        assert_eq!(toggle.mode(), EditMode::Editing);
        assert_eq!(toggle.click(), EditClick::Save);
    }

    #[test]
    fn stray_transitions_are_ignored() {
        let mut toggle = EditToggle::default();
        toggle.save_finished(true);
        assert_eq!(toggle.mode(), EditMode::Display);
        assert!(!toggle.save_started());
    }

    #[test]
    fn declined_delete_plans_no_request() {
        assert_eq!(plan_delete(RecordKind::Expense, "7", false), None);
        assert_eq!(
            plan_delete(RecordKind::Income, "7", true).as_deref(),
            Some("/delete-income/7")
        );
    }

    #[test]
    fn endpoints_per_kind() {
        assert_eq!(RecordKind::Expense.delete_path("3"), "/delete-expense/3");
        assert_eq!(RecordKind::Expense.update_path("3"), "/update-expense/3");
        assert_eq!(RecordKind::Income.update_path("12"), "/update-income/12");
    }

    #[test]
    fn draft_serializes_as_update_body() {
        let draft = RecordDraft {
            description: "Coffee".to_string(),
            amount: "4.75".to_string(),
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body, serde_json::json!({ "description": "Coffee", "amount": "4.75" }));
    }
}
