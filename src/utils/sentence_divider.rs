//! Splits text into request-sized chunks for Google Translate TTS.

/// Longest text Google Translate TTS accepts in one request
pub const GOOGLE_TTS_MAX_CHARS: usize = 100;

/// Characters after which a chunk may end
const BREAK_CHARS: &[char] = &[
    '.', '!', '?', ',', ';', ':', '\n', '…',
    '。', '！', '？', '，', '；', '：',
    '።', '፣', '፤', '፥', '፦', '፧', '፨',
];

/// Split text after every break character, keeping the punctuation
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split_inclusive(BREAK_CHARS)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into chunks of at most `max_chars` characters.
///
/// Chunks end at punctuation where possible, then at the last space before
/// the limit, and are hard-cut only when a run has no space. Adjacent short
/// pieces are merged back together while they fit. Pieces made only of
/// punctuation are dropped.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);

    let pieces: Vec<String> = split_sentences(text)
        .iter()
        .flat_map(|sentence| minimize(sentence, max_chars))
        .filter(|piece| !is_punctuation_only(piece))
        .collect();

    let mut chunks: Vec<String> = Vec::new();
    for piece in pieces {
        match chunks.last_mut() {
            Some(last) if char_len(last) + 1 + char_len(&piece) <= max_chars => {
                last.push(' ');
                last.push_str(&piece);
            }
            _ => chunks.push(piece),
        }
    }
    chunks
}

/// Cut `text` into pieces no longer than `max_chars`, preferring spaces.
fn minimize(text: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = text.trim();

    while char_len(rest) > max_chars {
        // Byte offset just past the `max_chars`-th character.
        let limit = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let cut = match rest[..limit].rfind(char::is_whitespace) {
            Some(i) if i > 0 => i,
            _ => limit,
        };
        let (head, tail) = rest.split_at(cut);
        let head = head.trim();
        if !head.is_empty() {
            pieces.push(head.to_string());
        }
        rest = tail.trim_start();
    }

    if !rest.is_empty() {
        pieces.push(rest.to_string());
    }
    pieces
}

fn is_punctuation_only(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || BREAK_CHARS.contains(&c) || c.is_ascii_punctuation())
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        assert_eq!(
            split_into_chunks("ከፊትዎ በር አለ። ወደ ግራ ይሂዱ።", 100),
            vec!["ከፊትዎ በር አለ። ወደ ግራ ይሂዱ።".to_string()]
        );
    }

    #[test]
    fn chunks_respect_the_limit_and_keep_every_word() {
        let text = "ከፊትዎ በሁለት ሜትር ርቀት ላይ ወንበር አለ፣ በቀኝ በኩል ግድግዳ አለ። \
                    መንገዱ ጠባብ ነው፤ ቀስ ብለው ወደ ግራ ይሂዱ። ብዙ ሰዎች በአካባቢው አሉ። \
                    አንድ ሰው በጣም ቅርብ ነው፣ ይጠንቀቁ። ከፊትዎ ደረጃዎች አሉ።";
        let chunks = split_into_chunks(text, 40);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 40, "chunk too long: {chunk}");
        }
        assert_eq!(words(&chunks.join(" ")), words(text));
    }

    #[test]
    fn long_runs_without_spaces_are_hard_cut() {
        let text = "a".repeat(250);
        let chunks = split_into_chunks(&text, 100);
        assert_eq!(
            chunks.iter().map(|c| c.len()).collect::<Vec<_>>(),
            vec![100, 100, 50]
        );
    }

    #[test]
    fn punctuation_only_pieces_are_dropped() {
        assert!(split_into_chunks("... ። ,", 100).is_empty());
        assert!(split_into_chunks("   ", 100).is_empty());
    }

    #[test]
    fn sentences_keep_their_punctuation() {
        assert_eq!(
            split_sentences("ሰላም። እንዴት ነዎት?"),
            vec!["ሰላም።".to_string(), "እንዴት ነዎት?".to_string()]
        );
    }
}
