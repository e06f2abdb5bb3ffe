//! Help text rendering.

use super::metadata::OptionDescriptor;

/// Header printed before the option list, as one log entry.
pub fn render_usage(base_command: &str) -> String {
    format!(
        "Use:\n{}[<option1> <option1-value>, <option2> <option2-value>, ...], \npossible options are:\n",
        base_command
    )
}

/// One help line for an option.
///
/// `-l( --left )  mandatory Left operand  sample: any int`
pub fn render_option_line(descriptor: &OptionDescriptor) -> String {
    let presence = if descriptor.required { "mandatory" } else { "optional" };
    let sample = if descriptor.possible_values.is_empty() {
        String::new()
    } else {
        format!(" sample: {}", descriptor.possible_values)
    };

    format!(
        "{}( {} )  {} {} {}",
        descriptor.short_name, descriptor.long_name, presence, descriptor.description, sample
    )
}

/// Usage header followed by one line per option, in order.
pub fn render_help<'a>(
    base_command: &str,
    descriptors: impl IntoIterator<Item = &'a OptionDescriptor>,
) -> Vec<String> {
    std::iter::once(render_usage(base_command))
        .chain(descriptors.into_iter().map(render_option_line))
        .collect()
}
