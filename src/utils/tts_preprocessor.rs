use crate::config_manager::TTSPreprocessorConfig;

/// Prepare model output for speech synthesis using the configured filters
pub fn prepare_for_speech(text: &str, config: &TTSPreprocessorConfig) -> String {
    tts_filter(text, config.strip_markdown, config.ignore_angle_brackets)
}

/// Filter text for TTS processing.
///
/// Markdown markers are removed but the words they wrap are kept. Angle
/// bracket spans are dropped entirely. Blank lines are removed and runs of
/// spaces collapse to one.
pub fn tts_filter(text: &str, strip_markdown: bool, ignore_angle_brackets: bool) -> String {
    let mut result = text.to_string();

    if ignore_angle_brackets {
        result = filter_pattern(&result, '<', '>');
    }

    if strip_markdown {
        result = result
            .lines()
            .map(strip_markdown_line)
            .collect::<Vec<_>>()
            .join("\n");
    }

    result
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_markdown_line(line: &str) -> String {
    let trimmed = line.trim_start();
    let trimmed = trimmed.trim_start_matches('#');
    let trimmed = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("+ "))
        .unwrap_or(trimmed);
    let trimmed = trimmed.trim_start_matches('>');

    trimmed
        .chars()
        .filter(|c| !matches!(c, '*' | '`' | '#'))
        .collect()
}

fn filter_pattern(text: &str, start: char, end: char) -> String {
    let mut result = String::new();
    let mut depth = 0usize;

    for ch in text.chars() {
        if ch == start {
            depth += 1;
        } else if ch == end && depth > 0 {
            depth -= 1;
        } else if depth == 0 {
            result.push(ch);
        }
    }

    result
}
