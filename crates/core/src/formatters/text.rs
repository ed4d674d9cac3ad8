use crate::profile::Profile;

/// Configuration for plain text output
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Include the quote line
    pub include_quote: bool,

    /// Wrap quote lines at specified width (0 = no wrapping)
    pub line_width: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { include_quote: true, line_width: 0 }
    }
}

/// Plain text formatter for profile lists
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, profiles: &[Profile]) -> String {
        convert_to_text(profiles, &self.config)
    }
}

/// Convert profiles to readable blocks separated by blank lines
pub fn convert_to_text(profiles: &[Profile], config: &TextConfig) -> String {
    profiles.iter().map(|profile| format_block(profile, config)).collect::<Vec<_>>().join("\n\n")
}

fn format_block(profile: &Profile, config: &TextConfig) -> String {
    let mut block = format!(
        "{}\n  {} at {}\n  Confidence: {} ({})",
        profile.name,
        profile.role,
        profile.company,
        profile.confidence,
        profile.tier()
    );

    if config.include_quote {
        let quote = format!("Quote: {}", profile.quote);
        let quote = if config.line_width > 0 { wrap_words(&quote, config.line_width) } else { quote };
        for line in quote.lines() {
            block.push_str("\n  ");
            block.push_str(line);
        }
    }

    block
}

/// Wrap text to specified width, never splitting words
fn wrap_words(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut current_line = Vec::new();
    let mut current_length = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_length += 1 + word_len;
            current_line.push(word);
        } else {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines.join("\n")
}
