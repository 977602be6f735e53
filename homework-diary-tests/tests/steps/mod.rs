mod diary_sheet_steps;
mod formatting_steps;
mod language_steps;
