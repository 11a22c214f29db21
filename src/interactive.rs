use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::error::{Error, Result};
use crate::project_variables::{fill_project_variables, template_slots, TemplateSlots, VarInfo};
use crate::template_variables::get_default_author;
use crate::user_parsed_input::UserParsedInput;

/// Run the whole question sequence on the terminal.
pub fn collect_answers() -> Result<UserParsedInput> {
    let slots = template_slots(get_default_author());
    let values = fill_project_variables(&slots, prompt_variable)?;
    Ok(UserParsedInput::from_values(values))
}

pub fn prompt_variable(variable: &TemplateSlots) -> Result<String> {
    match &variable.var_info {
        VarInfo::Text { default, .. } => user_question(&variable.prompt, default),
        VarInfo::Select { choices, default } => {
            let chosen = select(choices, &variable.prompt, *default)?;
            Ok(choices[chosen].to_string())
        }
    }
}

pub fn user_question(prompt: &str, default: &Option<String>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut i = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(s) = default {
        i = i.default(s.to_owned());
    }
    Ok(i.interact_text()?)
}

/// Esc or `q` on the list counts as cancelling the run.
pub fn select(choices: &[&str], prompt: &str, default: usize) -> Result<usize> {
    if default >= choices.len() {
        return Err(Error::Prompt(dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "default index out of bounds",
        ))));
    }
    Select::with_theme(&ColorfulTheme::default())
        .items(choices)
        .with_prompt(prompt)
        .default(default)
        .interact_opt()?
        .ok_or(Error::Cancelled)
}
