//! The prompt module turns the form into the instruction text sent to the
//! model.

use crate::constants::PROMPT_TEMPLATE;
use crate::form::FormData;

/// Builds the analysis prompt from the form fields.
///
/// Pure and deterministic: the fixed template embeds the five field values
/// verbatim, with no escaping. The template fixes the contract with the
/// model (five-section Markdown report, character counts, pixel width
/// estimates, three variants each for title and description).
pub fn build_prompt(form: &FormData) -> String {
    PROMPT_TEMPLATE
        .replace("{url}", &form.url)
        .replace("{current_title}", &form.current_title)
        .replace("{current_description}", &form.current_description)
        .replace("{keywords}", &form.keywords)
        .replace("{industry}", &form.industry)
}
